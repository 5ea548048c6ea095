//! Exporting an answer as a Markdown file.
//!
//! The browser saves whatever an `<a download>` link points at, so the
//! answer is wrapped in a `Blob`, linked through an object URL, and the
//! link is clicked once while attached to the body.

use chrono::Utc;
use tldrify_summary::{EXPORT_MIME, export_filename};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement};

use crate::preview::revoke_object_url;

/// Errors from exporting an answer.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// There is no window or document to attach the link to.
    #[error("no document to download from")]
    NoDocument,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Save `answer` as `summary (YYYY-MM-DD HH-MM).md`, timestamped in UTC.
///
/// # Errors
///
/// Returns a [`DownloadError`] if the blob or the link cannot be made.
pub fn export_answer(answer: &str) -> Result<(), DownloadError> {
    let blob = text_blob(answer, EXPORT_MIME)?;
    save_blob(&blob, &export_filename(Utc::now()))
}

fn text_blob(text: &str, mime: &str) -> Result<Blob, DownloadError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    Ok(Blob::new_with_str_sequence_and_options(&parts, &options)?)
}

/// Click a temporary download link for `blob`.
///
/// # Errors
///
/// Returns a [`DownloadError`] if the object URL or the link cannot be
/// created or attached.
pub fn save_blob(blob: &Blob, filename: &str) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DownloadError::NoDocument)?;
    let url = web_sys::Url::create_object_url_with_blob(blob)?;
    let clicked = click_link(&document, &url, filename);
    revoke_object_url(&url);
    clicked
}

fn click_link(document: &Document, href: &str, filename: &str) -> Result<(), DownloadError> {
    let body = document.body().ok_or(DownloadError::NoDocument)?;
    let link: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    link.set_href(href);
    link.set_download(filename);
    link.style().set_property("display", "none")?;

    body.append_child(&link)?;
    link.click();
    link.remove();
    Ok(())
}
