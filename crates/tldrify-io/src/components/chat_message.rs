//! A single chat bubble.

use dioxus::prelude::*;

/// Props for the [`ChatMessage`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ChatMessageProps {
    /// Whether the message was written by the user (right-aligned).
    #[props(default)]
    is_user: bool,
    /// Message text. Line breaks are preserved.
    text: String,
}

/// User messages render as a bubble; answers render as plain text.
#[component]
pub fn ChatMessage(props: ChatMessageProps) -> Element {
    let class = if props.is_user {
        "chat-message chat-message-user"
    } else {
        "chat-message chat-message-answer"
    };

    rsx! {
        article { class,
            if !props.is_user {
                span { class: "sr-only", "tldrify:" }
            }
            div { class: "chat-message-text", "{props.text}" }
        }
    }
}
