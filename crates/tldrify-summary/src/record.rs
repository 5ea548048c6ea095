//! Stored summaries.

use chrono::Utc;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tldrify_upload::RemoteFileReference;

use crate::settings::Settings;

/// Title of a record whose request has not completed yet.
pub const UNTITLED: &str = "Untitled";

/// One summarization request and its result.
///
/// Serialized in camelCase with millisecond timestamps; this is the
/// shape kept in the browser store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub id: String,
    pub title: String,
    pub message: String,
    pub answer: String,
    pub settings: Settings,
    pub files: Vec<RemoteFileReference>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl SummaryRecord {
    /// A record for a request that was just submitted.
    #[must_use]
    pub fn pending(
        id: String,
        message: String,
        settings: Settings,
        files: Vec<RemoteFileReference>,
        now: i64,
    ) -> Self {
        Self {
            id,
            title: UNTITLED.to_owned(),
            message,
            answer: String::new(),
            settings,
            files,
            created_at: now,
            updated_at: now,
        }
    }

    /// Store the service's response.
    pub fn complete(&mut self, title: String, answer: String) {
        self.title = title;
        self.answer = answer;
    }

    /// Record a failed request with the placeholder answer.
    pub fn fail(&mut self) {
        crate::api::FAILURE_ANSWER.clone_into(&mut self.answer);
    }

    /// Change the title and bump `updated_at`.
    pub fn rename(&mut self, title: String, now: i64) {
        self.title = title;
        self.touch(now);
    }

    /// Bump `updated_at`.
    pub const fn touch(&mut self, now: i64) {
        self.updated_at = now;
    }
}

/// The part of a record shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryListing {
    pub id: String,
    pub title: String,
}

impl From<&SummaryRecord> for SummaryListing {
    fn from(record: &SummaryRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
        }
    }
}

/// Sort most recently updated first. Ties keep their relative order.
pub fn order_by_recency(records: &mut [SummaryRecord]) {
    records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

/// Current time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// A fresh random (version 4) UUID for a new record.
#[must_use]
pub fn new_record_id() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}
