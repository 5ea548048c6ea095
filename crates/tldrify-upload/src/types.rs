//! Shared types for the upload state machine.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::accept::AcceptSpec;
use crate::format::format_bytes;
use crate::preview::PreviewHandle;

/// A file picked or dropped in this session, with its bytes in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    /// File name as reported by the browser.
    pub name: String,
    /// Size in bytes as reported by the browser.
    pub size: u64,
    /// Mime type; empty when the browser could not determine one.
    pub mime: String,
    /// File contents. Shared so that cloning a [`TrackedFile`] for
    /// rendering does not copy the payload.
    pub contents: Rc<[u8]>,
}

impl LocalFile {
    /// Create a local file whose size is the length of `contents`.
    #[must_use]
    pub fn new(name: impl Into<String>, mime: impl Into<String>, contents: Vec<u8>) -> Self {
        let contents: Rc<[u8]> = contents.into();
        Self {
            name: name.into(),
            size: contents.len() as u64,
            mime: mime.into(),
            contents,
        }
    }
}

/// Metadata for a previously submitted attachment.
///
/// Stored alongside summary records; carries no binary payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFileReference {
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Mime type.
    #[serde(rename = "type")]
    pub mime: String,
    /// Display URL; empty for attachments that were never uploaded anywhere.
    pub url: String,
    /// Id of the [`TrackedFile`] this reference was taken from.
    pub id: String,
}

/// Where a tracked file's data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// In-memory file from this session.
    Local(LocalFile),
    /// Metadata-only reference restored from storage.
    Remote(RemoteFileReference),
}

impl FileSource {
    /// File name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Local(file) => &file.name,
            Self::Remote(file) => &file.name,
        }
    }

    /// Size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        match self {
            Self::Local(file) => file.size,
            Self::Remote(file) => file.size,
        }
    }

    /// Mime type.
    #[must_use]
    pub fn mime(&self) -> &str {
        match self {
            Self::Local(file) => &file.mime,
            Self::Remote(file) => &file.mime,
        }
    }

    /// The in-memory file, if this source has a payload.
    #[must_use]
    pub const fn as_local(&self) -> Option<&LocalFile> {
        match self {
            Self::Local(file) => Some(file),
            Self::Remote(_) => None,
        }
    }
}

/// One file entry managed by the upload state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    pub(crate) id: String,
    pub(crate) source: FileSource,
    pub(crate) preview: Option<PreviewHandle>,
}

impl TrackedFile {
    /// Session-unique id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// File data or metadata.
    #[must_use]
    pub const fn source(&self) -> &FileSource {
        &self.source
    }

    /// Display name of the file.
    #[must_use]
    pub fn name(&self) -> &str {
        self.source.name()
    }

    /// URL to display a preview, if any.
    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_ref().map(PreviewHandle::url)
    }

    /// Metadata suitable for persisting with a summary record.
    ///
    /// Local files are recorded with an empty URL since their preview
    /// handle does not outlive the session.
    #[must_use]
    pub fn to_reference(&self) -> RemoteFileReference {
        match &self.source {
            FileSource::Local(file) => RemoteFileReference {
                name: file.name.clone(),
                size: file.size,
                mime: file.mime.clone(),
                url: String::new(),
                id: self.id.clone(),
            },
            FileSource::Remote(reference) => reference.clone(),
        }
    }
}

/// Aggregate upload state.
///
/// Only [`FileUploadController`](crate::FileUploadController) mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub(crate) files: Vec<TrackedFile>,
    pub(crate) is_dragging: bool,
    pub(crate) errors: Vec<UploadError>,
}

impl UploadState {
    /// Tracked files in insertion order.
    #[must_use]
    pub fn files(&self) -> &[TrackedFile] {
        &self.files
    }

    /// Whether a drag gesture is currently over the drop zone.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Rejections from the most recent mutating operation, newest first.
    #[must_use]
    pub fn errors(&self) -> &[UploadError] {
        &self.errors
    }
}

/// Upload policy, fixed when the controller is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadOptions {
    /// Maximum number of tracked files. `None` is unbounded.
    pub max_files: Option<usize>,
    /// Maximum file size in bytes. `None` is unbounded.
    pub max_size: Option<u64>,
    /// Accepted file types.
    pub accept: AcceptSpec,
    /// Whether several files may be tracked at once. When `false`, every
    /// add replaces the current file.
    pub multiple: bool,
    /// Restored attachments used to seed the state.
    pub initial_files: Vec<RemoteFileReference>,
}

impl UploadOptions {
    /// Single-file options with the given size limit and accept spec.
    #[must_use]
    pub fn single(max_size: u64, accept: &str) -> Self {
        Self {
            max_size: Some(max_size),
            accept: AcceptSpec::from(accept),
            ..Self::default()
        }
    }
}

/// A rejected-input condition.
///
/// All variants are user-facing and non-fatal; the display text is shown
/// inline under the drop zone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The file is larger than [`UploadOptions::max_size`].
    #[error("File \"{name}\" exceeds the maximum size of {}.", format_bytes(*.max_size, 2))]
    SizeExceeded {
        /// Offending file name.
        name: String,
        /// Configured maximum size in bytes.
        max_size: u64,
    },

    /// The file matches none of the accepted patterns.
    #[error("File \"{name}\" is not an accepted file type.")]
    TypeNotAccepted {
        /// Offending file name.
        name: String,
    },

    /// Adding the files would exceed [`UploadOptions::max_files`].
    #[error("You can only upload a maximum of {max_files} files.")]
    CapacityExceeded {
        /// Configured maximum file count.
        max_files: usize,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn local_file_size_comes_from_contents() {
        let file = LocalFile::new("a.txt", "text/plain", vec![1, 2, 3]);
        assert_eq!(file.size, 3);
        assert_eq!(&*file.contents, &[1, 2, 3]);
    }

    #[test]
    fn remote_reference_serializes_mime_as_type() {
        let reference = RemoteFileReference {
            name: "doc.pdf".into(),
            size: 10,
            mime: "application/pdf".into(),
            url: String::new(),
            id: "doc.pdf-10-abc1234".into(),
        };
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["type"], "application/pdf");
        assert!(json.get("mime").is_none());

        let back: RemoteFileReference = serde_json::from_value(json).unwrap();
        assert_eq!(back, reference);
    }

    #[test]
    fn error_messages_name_the_file() {
        let size = UploadError::SizeExceeded {
            name: "big.bin".into(),
            max_size: 5 * 1024 * 1024,
        };
        assert_eq!(
            size.to_string(),
            "File \"big.bin\" exceeds the maximum size of 5.00 MB."
        );

        let kind = UploadError::TypeNotAccepted {
            name: "a.exe".into(),
        };
        assert_eq!(kind.to_string(), "File \"a.exe\" is not an accepted file type.");

        let capacity = UploadError::CapacityExceeded { max_files: 2 };
        assert_eq!(
            capacity.to_string(),
            "You can only upload a maximum of 2 files."
        );
    }

    #[test]
    fn local_reference_drops_payload_and_url() {
        let tracked = TrackedFile {
            id: "a.png-3-xyz".into(),
            source: FileSource::Local(LocalFile::new("a.png", "image/png", vec![0; 3])),
            preview: Some(PreviewHandle::Owned("blob:1".into())),
        };
        let reference = tracked.to_reference();
        assert_eq!(reference.id, "a.png-3-xyz");
        assert_eq!(reference.size, 3);
        assert!(reference.url.is_empty());
    }
}
