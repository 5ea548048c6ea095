//! Application state shared by the root component and the async flows
//! that open routes, submit requests and edit stored summaries.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tldrify_io::api::{SummarizeRequest, summarize};
use tldrify_io::{Uploads, dialog, download, router, store};
use tldrify_summary::{
    ChatState, REVEAL_DELAY_MS, Route, Settings, SummaryListing, SummaryRecord, WordReveal,
    new_record_id, now_millis,
};
use tldrify_upload::{LocalFile, TrackedFile};

/// Navigate, logging instead of failing.
pub fn go(route: &Route) {
    if let Err(e) = router::navigate(route) {
        tracing::error!("navigation to {route} failed: {e}");
    }
}

/// Every signal the app reads or writes. All fields are `Copy` handles.
#[derive(Clone, Copy)]
pub struct Session {
    pub chat: Signal<ChatState>,
    pub settings: Signal<Settings>,
    pub uploads: Signal<Uploads>,
    pub summaries: Signal<Vec<SummaryListing>>,
    pub active: Signal<Option<String>>,
    /// Bumped on every route change so a slow load for an earlier route
    /// does not overwrite a later one.
    pub generation: Signal<u64>,
}

impl Session {
    /// Reload the sidebar listing from the store.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn refresh(mut self) {
        match store::list_summaries().await {
            Ok(records) => self
                .summaries
                .set(records.iter().map(SummaryListing::from).collect()),
            Err(e) => tracing::error!("failed to list summaries: {e}"),
        }
    }

    /// Load the state a route shows.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn open(mut self, route: Route) {
        self.generation += 1;
        let my_generation = *self.generation.peek();
        self.active.set(route.summary_id().map(str::to_owned));

        match route {
            Route::New => {
                self.chat.set(ChatState::default());
                self.uploads.write().clear_files();
                self.settings.set(Settings::default());
            }
            Route::Summary(id) => {
                let loaded = store::get_summary(&id).await;
                if *self.generation.peek() != my_generation {
                    return;
                }
                match loaded {
                    Ok(Some(record)) => {
                        self.chat.set(ChatState::from_record(&record));
                        self.uploads.write().restore_initial_files(&record.files);
                        self.settings.set(record.settings);
                    }
                    Ok(None) => go(&Route::NotFound),
                    Err(e) => {
                        tracing::error!("failed to load summary {id}: {e}");
                        go(&Route::NotFound);
                    }
                }
            }
            Route::NotFound => {}
        }
    }

    /// Start a request if the chat, the attachments and the token allow it.
    pub fn submit(mut self, token: Option<String>) {
        let (has_errors, files) = {
            let uploads = self.uploads.read();
            let state = uploads.state();
            (!state.errors().is_empty(), state.files().to_vec())
        };
        if let Err(refused) = self.chat.read().check_submit(has_errors, token.as_deref()) {
            tracing::warn!("summary not submitted: {refused}");
            return;
        }
        let token = token.unwrap_or_default();

        self.chat.write().begin();
        let record = SummaryRecord::pending(
            new_record_id(),
            self.chat.peek().message.clone(),
            *self.settings.peek(),
            files.iter().map(TrackedFile::to_reference).collect(),
            now_millis(),
        );
        let attachment = files
            .first()
            .and_then(|file| file.source().as_local())
            .cloned();

        spawn(async move {
            self.run(record, token, attachment).await;
        });
    }

    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    async fn run(mut self, mut record: SummaryRecord, token: String, attachment: Option<LocalFile>) {
        let outcome = match store::put_summary(&record).await {
            Ok(()) => {
                self.refresh().await;
                self.chat.write().answer = Some(String::new());
                self.active.set(Some(record.id.clone()));

                let request = SummarizeRequest {
                    message: &record.message,
                    settings: record.settings,
                    turnstile_token: &token,
                    file: attachment.as_ref(),
                };
                summarize(&request).await.map_err(|e| e.to_string())
            }
            Err(e) => Err(e.to_string()),
        };

        match outcome {
            Ok(response) => {
                for shown in WordReveal::new(&response.answer) {
                    TimeoutFuture::new(REVEAL_DELAY_MS).await;
                    self.chat.write().answer = Some(shown);
                }
                record.complete(response.title, response.answer);
            }
            Err(e) => {
                tracing::error!("summarize failed: {e}");
                record.fail();
                self.chat.write().answer = Some(record.answer.clone());
            }
        }

        record.touch(now_millis());
        if let Err(e) = store::put_summary(&record).await {
            tracing::error!("failed to save summary {}: {e}", record.id);
        }
        self.refresh().await;
        go(&Route::Summary(record.id));
        self.chat.write().is_loading = false;
    }

    /// Download the current answer as Markdown.
    pub fn export(self) {
        let chat = self.chat.peek();
        if !chat.toolbar_enabled() {
            return;
        }
        if let Err(e) = download::export_answer(chat.answer.as_deref().unwrap_or_default()) {
            tracing::error!("export failed: {e}");
        }
    }

    /// Prompt for a new title for the active summary.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn rename(self) {
        let Some(id) = self.active_for_toolbar() else {
            return;
        };
        let mut record = match store::get_summary(&id).await {
            Ok(Some(record)) => record,
            Ok(None) => return,
            Err(e) => {
                tracing::error!("failed to load summary {id}: {e}");
                return;
            }
        };
        let Some(title) = dialog::prompt("Rename summary", &record.title) else {
            return;
        };
        record.rename(title, now_millis());
        if let Err(e) = store::put_summary(&record).await {
            tracing::error!("failed to rename summary {id}: {e}");
        }
        self.refresh().await;
    }

    /// Confirm, then delete the active summary and start a new one.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn delete(self) {
        let Some(id) = self.active_for_toolbar() else {
            return;
        };
        if !dialog::confirm("Delete this summary?") {
            return;
        }
        if let Err(e) = store::delete_summary(&id).await {
            tracing::error!("failed to delete summary {id}: {e}");
        }
        self.refresh().await;
        go(&Route::New);
    }

    fn active_for_toolbar(&self) -> Option<String> {
        if !self.chat.peek().toolbar_enabled() {
            return None;
        }
        self.active.peek().clone()
    }
}
