//! Application configuration.
//!
//! Deployment values are read from the build environment
//! (`TLDRIFY_API_URL`, `TLDRIFY_TURNSTILE_SITE_KEY`) and fall back to
//! local development defaults.

use tldrify_upload::UploadOptions;

/// Base URL of the summarization service.
pub const API_URL: &str = match option_env!("TLDRIFY_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Cloudflare Turnstile site key.
///
/// The default is Cloudflare's always-pass test key.
pub const TURNSTILE_SITE_KEY: &str = match option_env!("TLDRIFY_TURNSTILE_SITE_KEY") {
    Some(key) => key,
    None => "1x00000000000000000000AA",
};

/// Maximum attachment size: 5 MiB.
pub const MAX_UPLOAD_SIZE: u64 = 5 * 1024 * 1024;

/// Attachment types the service can summarize.
pub const UPLOAD_ACCEPT: &str =
    "image/*,.doc,.docx,.ppt,.pptx,.xls,.xlsx,.csv,.pdf,.epub,.txt,.md,.html,.xml,.json";

/// Upload policy of the composer: one file, size and type limited.
#[must_use]
pub fn upload_options() -> UploadOptions {
    UploadOptions::single(MAX_UPLOAD_SIZE, UPLOAD_ACCEPT)
}
