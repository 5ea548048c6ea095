//! Page shown for unknown routes and missing summaries.

use dioxus::prelude::*;

/// Props for the [`NotFound`] component.
#[derive(Props, Clone, PartialEq)]
pub struct NotFoundProps {
    /// Start a new summary instead.
    on_home: EventHandler<()>,
}

#[component]
pub fn NotFound(props: NotFoundProps) -> Element {
    rsx! {
        main { class: "not-found",
            p { class: "not-found-code", "404" }
            h2 { "Summary not found" }
            p { class: "not-found-text",
                "This summary does not exist or was deleted from this browser."
            }
            button {
                class: "primary-button",
                onclick: move |_| props.on_home.call(()),
                "Start a new summary"
            }
        }
    }
}
