//! Wire types of the summarization service.
//!
//! The request is a multipart form (see the `FIELD_*` names); the
//! response is JSON.

use serde::Deserialize;
use serde_json::Value;

/// Path appended to the configured API base URL.
pub const SUMMARIZE_PATH: &str = "/summarize";

/// Free text to summarize, possibly a URL.
pub const FIELD_MESSAGE: &str = "message";
/// [`Settings`](crate::Settings) as JSON text.
pub const FIELD_SETTINGS: &str = "settings";
/// Bot-verification token.
pub const FIELD_TURNSTILE_TOKEN: &str = "turnstileToken";
/// Optional attachment.
pub const FIELD_FILE: &str = "file";

/// Answer shown and stored when a request fails for any reason.
pub const FAILURE_ANSWER: &str = "Something went wrong. Please try again later.";

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummarizeResponse {
    pub title: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Join `base` and [`SUMMARIZE_PATH`] without doubling the slash.
#[must_use]
pub fn summarize_url(base: &str) -> String {
    format!("{}{SUMMARIZE_PATH}", base.trim_end_matches('/'))
}

/// Message for a non-2xx response with body `body`.
///
/// `detail` is used when it is a non-empty string, or a validation list
/// whose entries carry a `msg` (joined with `"; "`). Anything else,
/// including a body that is not JSON, yields `Request failed with {status}`.
#[must_use]
pub fn error_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|detail| describe_detail(&detail));
    detail.unwrap_or_else(|| format!("Request failed with {status}"))
}

fn describe_detail(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn string_detail() {
        assert_eq!(
            error_message(413, r#"{"detail":"File exceeds 5 MiB limit."}"#),
            "File exceeds 5 MiB limit."
        );
    }

    #[test]
    fn validation_list_detail() {
        let body = r#"{"detail":[
            {"loc":["maxWords"],"msg":"Input should be less than or equal to 500","type":"less_than_equal"},
            {"loc":["model"],"msg":"Input should be 'gemini-2.5-flash'","type":"literal_error"}
        ]}"#;
        assert_eq!(
            error_message(400, body),
            "Input should be less than or equal to 500; Input should be 'gemini-2.5-flash'"
        );
    }

    #[test]
    fn fallback_to_status() {
        for body in ["", "<html>Bad gateway</html>", "{}", r#"{"detail":""}"#, r#"{"detail":42}"#, r#"{"detail":[]}"#] {
            assert_eq!(error_message(502, body), "Request failed with 502", "{body:?}");
        }
    }

    #[test]
    fn response_body() {
        let response: SummarizeResponse =
            serde_json::from_str(r#"{"title":"T","answer":"A b c"}"#).unwrap();
        assert_eq!(response.title, "T");
        assert_eq!(response.answer, "A b c");
    }

    #[test]
    fn url_joining() {
        assert_eq!(summarize_url("http://localhost:8000"), "http://localhost:8000/summarize");
        assert_eq!(summarize_url("https://api.example/"), "https://api.example/summarize");
    }
}
