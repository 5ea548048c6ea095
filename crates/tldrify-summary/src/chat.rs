//! Chat pane state: the message being composed and the answer shown.

use chrono::{DateTime, Utc};

use crate::record::SummaryRecord;

/// Delay between revealed words of an answer.
pub const REVEAL_DELAY_MS: u32 = 30;

/// Mime type of exported summaries.
pub const EXPORT_MIME: &str = "text/markdown;charset=utf-8";

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRefused {
    #[error("a summary is already being generated")]
    Loading,
    #[error("the attached file was rejected")]
    UploadErrors,
    #[error("bot verification has not completed")]
    MissingToken,
}

/// State of the chat pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    /// Text in the composer, or the submitted message once answered.
    pub message: String,
    /// `None` until a request has been made or a record is opened.
    pub answer: Option<String>,
    /// A request is in flight.
    pub is_loading: bool,
}

impl ChatState {
    /// State for viewing a stored record.
    #[must_use]
    pub fn from_record(record: &SummaryRecord) -> Self {
        Self {
            message: record.message.clone(),
            answer: Some(record.answer.clone()),
            is_loading: false,
        }
    }

    /// Whether the Summarize button is enabled.
    #[must_use]
    pub fn can_submit(&self, has_files: bool) -> bool {
        !self.is_loading && (has_files || !self.message.trim().is_empty())
    }

    /// Guard run when a submission is attempted.
    ///
    /// # Errors
    ///
    /// Returns the first reason the submission cannot proceed.
    pub fn check_submit(
        &self,
        has_upload_errors: bool,
        token: Option<&str>,
    ) -> Result<(), SubmitRefused> {
        if self.is_loading {
            return Err(SubmitRefused::Loading);
        }
        if has_upload_errors {
            return Err(SubmitRefused::UploadErrors);
        }
        if token.is_none_or(str::is_empty) {
            return Err(SubmitRefused::MissingToken);
        }
        Ok(())
    }

    /// Enter the loading state with no answer.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.answer = None;
    }

    /// Whether the conversation view replaces the composer.
    ///
    /// An empty answer (request just started, or a record that failed
    /// before any text arrived) keeps the composer visible.
    #[must_use]
    pub fn shows_conversation(&self) -> bool {
        self.answer.as_ref().is_some_and(|a| !a.is_empty())
    }

    /// Whether Export, Rename and Delete are enabled.
    #[must_use]
    pub const fn toolbar_enabled(&self) -> bool {
        !self.is_loading && self.answer.is_some()
    }

    /// Whether the settings panel is read-only.
    #[must_use]
    pub const fn settings_locked(&self) -> bool {
        self.is_loading || self.answer.is_some()
    }

    /// Whether a keydown in the composer should submit (Ctrl/Cmd+Enter).
    #[must_use]
    pub fn is_submit_shortcut(&self, key: &str, ctrl: bool, meta: bool, composing: bool) -> bool {
        !self.is_loading && !composing && key == "Enter" && (ctrl || meta)
    }
}

/// Successive prefixes of an answer, one more space-separated word each.
///
/// Words are split on single spaces so the final item reproduces the
/// answer's spacing exactly.
#[derive(Debug, Clone)]
pub struct WordReveal<'a> {
    words: std::str::Split<'a, char>,
    shown: String,
}

impl<'a> WordReveal<'a> {
    /// Reveal `answer` starting from an empty answer.
    #[must_use]
    pub fn new(answer: &'a str) -> Self {
        Self {
            words: answer.split(' '),
            shown: String::new(),
        }
    }
}

impl Iterator for WordReveal<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let word = self.words.next()?;
        if !self.shown.is_empty() {
            self.shown.push(' ');
        }
        self.shown.push_str(word);
        Some(self.shown.clone())
    }
}

/// File name for an exported answer: `summary (YYYY-MM-DD HH-MM).md` in UTC.
#[must_use]
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("summary ({}).md", now.format("%Y-%m-%d %H-%M"))
}
