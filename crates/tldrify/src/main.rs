mod session;

use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;
use tldrify_io::{ChatPane, NotFound, SettingsPanel, Sidebar, router, turnstile};
use tldrify_summary::{ChatState, Route, Settings, SummaryListing};

use session::{Session, go};

fn main() {
    // Another logger may already be installed; launching works either way.
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        tracing::debug!("logger already initialized: {e}");
    }
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the session signals, follows the location hash, and lays out the
/// sidebar, the chat pane (or the not-found page) and the settings panel.
fn app() -> Element {
    // --- Application state ---
    let session = Session {
        chat: use_signal(ChatState::default),
        settings: use_signal(Settings::default),
        uploads: use_signal(tldrify_io::new_uploads),
        summaries: use_signal(Vec::<SummaryListing>::new),
        active: use_signal(|| Option::<String>::None),
        generation: use_signal(|| 0u64),
    };
    let mut route = use_signal(|| Route::New);
    let mut chat = session.chat;
    let mut settings = session.settings;

    // --- Hash listener ---
    // An empty hash at startup is replaced by the new-summary route; the
    // resulting hashchange is picked up on the next iteration.
    use_future(move || async move {
        loop {
            match router::current_hash() {
                Ok(hash) if hash.is_empty() => go(&Route::New),
                Ok(hash) => route.set(Route::parse_hash(&hash)),
                Err(e) => tracing::error!("cannot read location hash: {e}"),
            }
            if let Err(e) = router::next_hash_change().await {
                tracing::error!("cannot listen for hash changes: {e}");
                break;
            }
        }
    });

    // --- Sidebar listing ---
    use_future(move || async move { session.refresh().await });

    // --- Route loading effect ---
    // Re-runs on every hashchange, including navigation to the current
    // route, so "New summary" always resets the chat.
    use_effect(move || {
        let current = route();
        spawn(async move { session.open(current).await });
    });

    let chat_state = chat();
    let locked = chat_state.settings_locked();
    let is_loading = chat_state.is_loading;

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/app.css") }
        script { src: turnstile::SCRIPT_URL, r#async: true, defer: true }

        div { class: "app",
            Sidebar {
                summaries: session.summaries.read().clone(),
                active: session.active.read().clone(),
                disabled: is_loading,
                on_new: move |()| go(&Route::New),
                on_select: move |id: String| go(&Route::Summary(id)),
            }

            if route() == Route::NotFound {
                NotFound { on_home: move |()| go(&Route::New) }
            } else {
                ChatPane {
                    chat: chat_state,
                    uploads: session.uploads,
                    on_message: move |message: String| chat.write().message = message,
                    on_submit: move |token: Option<String>| session.submit(token),
                    on_export: move |()| session.export(),
                    on_rename: move |()| {
                        spawn(async move { session.rename().await });
                    },
                    on_delete: move |()| {
                        spawn(async move { session.delete().await });
                    },
                }
                SettingsPanel {
                    settings: settings(),
                    disabled: locked,
                    on_change: move |next: Settings| settings.set(next),
                }
            }
        }
    }
}
