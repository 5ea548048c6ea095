//! Chat header actions.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdShare, LdTrash2};

/// Props for the [`Toolbar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ToolbarProps {
    /// Whether the actions can be used (an answer exists, nothing loading).
    enabled: bool,
    /// Download the answer as Markdown.
    on_export: EventHandler<()>,
    /// Rename the open summary.
    on_rename: EventHandler<()>,
    /// Delete the open summary.
    on_delete: EventHandler<()>,
}

/// Export, Rename and Delete buttons.
#[component]
pub fn Toolbar(props: ToolbarProps) -> Element {
    let disabled = !props.enabled;

    rsx! {
        div { class: "toolbar",
            button {
                class: "toolbar-button",
                disabled,
                onclick: move |_| props.on_export.call(()),
                Icon { width: 20, height: 20, icon: LdShare }
                span { class: "toolbar-label", "Export" }
            }
            button {
                class: "toolbar-button",
                disabled,
                onclick: move |_| props.on_rename.call(()),
                Icon { width: 20, height: 20, icon: LdPencil }
                span { class: "toolbar-label", "Rename" }
            }
            button {
                class: "toolbar-button toolbar-button-destructive",
                disabled,
                onclick: move |_| props.on_delete.call(()),
                Icon { width: 20, height: 20, icon: LdTrash2 }
                span { class: "toolbar-label", "Delete" }
            }
        }
    }
}
