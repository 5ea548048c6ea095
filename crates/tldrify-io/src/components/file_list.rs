//! Attachment chips.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdX;
use tldrify_upload::{TrackedFile, format_bytes};

use super::FileIcon;

/// Props for the [`FileList`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileListProps {
    /// Files to show, in order.
    files: Vec<TrackedFile>,
    /// Called with a file id when its remove button is pressed. Without
    /// it the list is read-only.
    on_remove: Option<EventHandler<String>>,
}

/// One row per attachment: preview or icon, name, size, remove button.
#[component]
pub fn FileList(props: FileListProps) -> Element {
    rsx! {
        ul { class: "file-list",
            for file in props.files {
                li { key: "{file.id()}", class: "file-chip",
                    if let Some(url) = file.preview_url() {
                        img { class: "file-thumb", src: "{url}", alt: "" }
                    } else {
                        FileIcon { mime: "{file.source().mime()}" }
                    }
                    div { class: "file-meta",
                        p { class: "file-name", title: "{file.name()}", "{file.name()}" }
                        if file.source().size() > 0 {
                            p { class: "file-size", "{format_bytes(file.source().size(), 2)}" }
                        }
                    }
                    if let Some(on_remove) = props.on_remove {
                        button {
                            class: "icon-button",
                            aria_label: "Remove file",
                            onclick: {
                                let id = file.id().to_owned();
                                move |_| on_remove.call(id.clone())
                            },
                            Icon { width: 16, height: 16, icon: LdX }
                        }
                    }
                }
            }
        }
    }
}
