//! The chat pane: toolbar header, then either the composer or the
//! submitted message with its answer.

use dioxus::prelude::*;
use tldrify_summary::ChatState;

use super::{ChatMessage, Composer, FileList, Toolbar};
use crate::Uploads;

/// Props for the [`ChatPane`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ChatPaneProps {
    chat: ChatState,
    uploads: Signal<Uploads>,
    on_message: EventHandler<String>,
    on_submit: EventHandler<Option<String>>,
    on_export: EventHandler<()>,
    on_rename: EventHandler<()>,
    on_delete: EventHandler<()>,
}

#[component]
pub fn ChatPane(props: ChatPaneProps) -> Element {
    let chat = props.chat;
    let files = props.uploads.read().state().files().to_vec();

    rsx! {
        main { class: "chat-pane",
            header { class: "chat-header",
                Toolbar {
                    enabled: chat.toolbar_enabled(),
                    on_export: props.on_export,
                    on_rename: props.on_rename,
                    on_delete: props.on_delete,
                }
            }

            if chat.shows_conversation() {
                div { class: "conversation",
                    if !files.is_empty() {
                        div { class: "conversation-files",
                            FileList { files }
                        }
                    }
                    ChatMessage { is_user: true, text: "{chat.message}" }
                    ChatMessage { text: "{chat.answer.as_deref().unwrap_or_default()}" }
                }
            } else {
                div { class: "composer-intro",
                    h2 { "Ready to summarize?" }
                }
                Composer {
                    chat: chat.clone(),
                    uploads: props.uploads,
                    on_message: props.on_message,
                    on_submit: props.on_submit,
                }
            }
        }
    }
}
