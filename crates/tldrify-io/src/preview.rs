//! Blob URL previews for attached images.
//!
//! Wraps `URL.createObjectURL` / `URL.revokeObjectURL` behind the
//! upload core's [`PreviewBackend`] so the controller decides when a
//! URL is created and released.

use dioxus::logger::tracing;
use tldrify_upload::{LocalFile, PreviewBackend};
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur while building a `Blob` or its URL.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for PreviewError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Copy `bytes` into a `Blob` of type `mime`.
///
/// # Errors
///
/// Returns [`PreviewError::JsError`] if `Blob` creation fails.
pub fn bytes_to_blob(bytes: &[u8], mime: &str) -> Result<web_sys::Blob, PreviewError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    Ok(web_sys::Blob::new_with_u8_array_sequence_and_options(
        &parts, &opts,
    )?)
}

/// Create an object URL for a local file's contents.
///
/// The returned URL must be revoked with [`revoke_object_url`].
///
/// # Errors
///
/// Returns [`PreviewError::JsError`] if Blob or URL creation fails.
pub fn file_to_object_url(file: &LocalFile) -> Result<String, PreviewError> {
    let blob = bytes_to_blob(&file.contents, &file.mime)?;
    Ok(web_sys::Url::create_object_url_with_blob(&blob)?)
}

/// Revoke an object URL created by [`file_to_object_url`].
///
/// Best-effort: a URL that is already gone is not an error worth
/// surfacing.
pub fn revoke_object_url(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        tracing::debug!(url, error = ?e, "revokeObjectURL failed");
    }
}

/// [`PreviewBackend`] backed by object URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectUrlPreviews;

impl PreviewBackend for ObjectUrlPreviews {
    fn allocate(&mut self, file: &LocalFile) -> Option<String> {
        file_to_object_url(file)
            .inspect_err(|e| tracing::warn!(name = %file.name, "preview URL failed: {e}"))
            .ok()
    }

    fn revoke(&mut self, url: &str) {
        revoke_object_url(url);
    }
}
