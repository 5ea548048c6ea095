//! Summary history sidebar.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdMessageSquareText, LdPlus};
use tldrify_summary::SummaryListing;

/// Props for the [`Sidebar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Stored summaries, most recent first.
    summaries: Vec<SummaryListing>,
    /// Id of the summary being shown, if any.
    active: Option<String>,
    /// Navigation is blocked while a request is loading.
    disabled: bool,
    on_new: EventHandler<()>,
    on_select: EventHandler<String>,
}

/// Brand, "New summary" button and the list of stored summaries.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    rsx! {
        nav { class: "sidebar",
            div { class: "sidebar-header",
                h1 { class: "brand", "tldrify" }
            }
            button {
                class: "sidebar-new",
                disabled: props.disabled,
                onclick: move |_| props.on_new.call(()),
                Icon { width: 16, height: 16, icon: LdPlus }
                "New summary"
            }
            if !props.summaries.is_empty() {
                h2 { class: "sidebar-section-title", "Summaries" }
            }
            ul { class: "sidebar-list",
                for summary in props.summaries {
                    li { key: "{summary.id}",
                        button {
                            class: if props.active.as_deref() == Some(summary.id.as_str()) { "sidebar-item sidebar-item-active" } else { "sidebar-item" },
                            disabled: props.disabled,
                            title: "{summary.title}",
                            onclick: {
                                let id = summary.id.clone();
                                move |_| props.on_select.call(id.clone())
                            },
                            Icon { width: 16, height: 16, icon: LdMessageSquareText }
                            span { class: "sidebar-item-title", "{summary.title}" }
                        }
                    }
                }
            }
        }
    }
}
