//! HTTP client for the summarization service.

use dioxus::logger::tracing;
use gloo_net::http::Request;
use tldrify_summary::api::{FIELD_FILE, FIELD_MESSAGE, FIELD_SETTINGS, FIELD_TURNSTILE_TOKEN};
use tldrify_summary::{Settings, SummarizeResponse, error_message, summarize_url};
use tldrify_upload::LocalFile;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::config;
use crate::preview::{PreviewError, bytes_to_blob};

/// Errors from a summarization request.
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    /// The service answered with a non-2xx status.
    #[error("{0}")]
    Rejected(String),

    /// The request could not be sent or the response not read.
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// The settings could not be encoded.
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for SummarizeError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<PreviewError> for SummarizeError {
    fn from(err: PreviewError) -> Self {
        match err {
            PreviewError::JsError(msg) => Self::JsError(msg),
        }
    }
}

/// One summarization request.
#[derive(Debug, Clone)]
pub struct SummarizeRequest<'a> {
    /// Free text typed by the user.
    pub message: &'a str,
    /// Sent as a JSON string in the `settings` field.
    pub settings: Settings,
    /// Token from the solved verification widget.
    pub turnstile_token: &'a str,
    /// Sent as the `file` field when present.
    pub file: Option<&'a LocalFile>,
}

/// POST the request to `{API_URL}/summarize` as a multipart form.
///
/// # Errors
///
/// Returns [`SummarizeError::Rejected`] with the service's detail
/// message for a non-2xx response, or another variant if the request
/// could not be built, sent, or decoded.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn summarize(req: &SummarizeRequest<'_>) -> Result<SummarizeResponse, SummarizeError> {
    let form = FormData::new()?;
    form.append_with_str(FIELD_MESSAGE, req.message)?;
    form.append_with_str(FIELD_SETTINGS, &req.settings.to_json()?)?;
    form.append_with_str(FIELD_TURNSTILE_TOKEN, req.turnstile_token)?;
    if let Some(file) = req.file {
        let blob = bytes_to_blob(&file.contents, &file.mime)?;
        form.append_with_blob_and_filename(FIELD_FILE, &blob, &file.name)?;
    }

    let url = summarize_url(config::API_URL);
    tracing::info!(%url, has_file = req.file.is_some(), "summarize request");
    let response = Request::post(&url).body(form)?.send().await?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        tracing::warn!(status, %message, "summarize rejected");
        return Err(SummarizeError::Rejected(message));
    }

    Ok(response.json::<SummarizeResponse>().await?)
}
