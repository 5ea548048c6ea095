//! File validation against size and type policy.

use crate::accept::AcceptSpec;
use crate::types::{FileSource, UploadError};

/// Check `file` against `accept` and `max_size`.
///
/// Size is checked first, so an oversized file of the wrong type
/// reports [`UploadError::SizeExceeded`].
///
/// # Errors
///
/// Returns [`UploadError::SizeExceeded`] when the file is larger than
/// `max_size`, or [`UploadError::TypeNotAccepted`] when no pattern in
/// `accept` matches it.
pub fn validate(
    file: &FileSource,
    accept: &AcceptSpec,
    max_size: Option<u64>,
) -> Result<(), UploadError> {
    if let Some(max_size) = max_size
        && file.size() > max_size
    {
        return Err(UploadError::SizeExceeded {
            name: file.name().to_owned(),
            max_size,
        });
    }

    if !accept.accepts(file.name(), file.mime()) {
        return Err(UploadError::TypeNotAccepted {
            name: file.name().to_owned(),
        });
    }

    Ok(())
}
