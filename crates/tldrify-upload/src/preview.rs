//! Preview handle lifecycle.
//!
//! Image files picked in this session get a revocable preview URL (a
//! `blob:` URL in the browser). Restored attachments reuse their stored
//! URL, which this crate did not create and must never revoke. The
//! distinction is carried by [`PreviewHandle`] itself.

use crate::types::{FileSource, LocalFile};

/// A URL used to display a tracked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewHandle {
    /// Allocated by a [`PreviewBackend`]; must be revoked exactly once.
    Owned(String),
    /// Stored URL of a restored attachment; never revoked.
    Borrowed(String),
}

impl PreviewHandle {
    /// The URL to display.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Owned(url) | Self::Borrowed(url) => url,
        }
    }
}

/// Allocates and revokes preview URLs for in-memory files.
pub trait PreviewBackend {
    /// Allocate a preview URL for `file`.
    ///
    /// Returns `None` when allocation fails; a missing preview is never
    /// fatal.
    fn allocate(&mut self, file: &LocalFile) -> Option<String>;

    /// Revoke a URL previously returned by [`allocate`](Self::allocate).
    fn revoke(&mut self, url: &str);
}

/// A backend that never allocates. Useful outside the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreviews;

impl PreviewBackend for NoPreviews {
    fn allocate(&mut self, _file: &LocalFile) -> Option<String> {
        None
    }

    fn revoke(&mut self, _url: &str) {}
}

/// Create the preview handle for a file source.
///
/// Only local `image/*` files allocate. Remote references borrow their
/// stored URL (none when it is empty); other local files get nothing.
pub fn create(backend: &mut impl PreviewBackend, source: &FileSource) -> Option<PreviewHandle> {
    match source {
        FileSource::Local(file) if file.mime.starts_with("image/") => {
            let handle = backend.allocate(file).map(PreviewHandle::Owned);
            if handle.is_none() {
                tracing::warn!(name = %file.name, "preview allocation failed");
            }
            handle
        }
        FileSource::Local(_) => None,
        FileSource::Remote(reference) if reference.url.is_empty() => None,
        FileSource::Remote(reference) => Some(PreviewHandle::Borrowed(reference.url.clone())),
    }
}

/// Release the handle in `slot`, leaving `None` behind.
///
/// Taking the handle out of its slot means a second call is a no-op and
/// the URL cannot be read after it was revoked.
pub fn release(backend: &mut impl PreviewBackend, slot: &mut Option<PreviewHandle>) {
    if let Some(PreviewHandle::Owned(url)) = slot.take() {
        backend.revoke(&url);
    }
}
