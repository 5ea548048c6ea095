//! Native browser dialogs.

use dioxus::logger::tracing;

/// Ask for a line of text with `window.prompt`.
///
/// Returns `None` when the dialog is cancelled or left empty.
#[must_use]
pub fn prompt(message: &str, default: &str) -> Option<String> {
    let window = web_sys::window()?;
    window
        .prompt_with_message_and_default(message, default)
        .inspect_err(|e| tracing::warn!(error = ?e, "prompt failed"))
        .ok()
        .flatten()
        .filter(|text| !text.is_empty())
}

/// Ask a yes/no question with `window.confirm`. Failures count as "no".
#[must_use]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
