//! Message composer with drag-and-drop attachment and bot verification.

use dioxus::html::{HasFileData, InteractionLocation};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdInfo, LdLoader, LdPaperclip, LdSparkles};
use tldrify_summary::ChatState;
use tldrify_upload::{InputOverrides, InputProps};

use super::FileList;
use crate::files::{point_within, read_local_files};
use crate::{Uploads, config, turnstile};

/// Id of the hidden file `<input>`.
pub const FILE_INPUT_ID: &str = "composer-file-input";

/// Id of the drop zone wrapping the text area.
pub const DROP_ZONE_ID: &str = "composer-drop-zone";

/// Id of the element the verification widget renders into.
const TURNSTILE_CONTAINER_ID: &str = "turnstile";

/// Props for the [`Composer`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ComposerProps {
    /// Message text and loading state.
    chat: ChatState,
    /// The upload controller for the attachment.
    uploads: Signal<Uploads>,
    /// Called with the new text on every edit.
    on_message: EventHandler<String>,
    /// Called with the verification token (if solved) on submit.
    on_submit: EventHandler<Option<String>>,
}

/// Text area, attach button, drop zone, attachment list, first upload
/// error, and the verification widget.
#[component]
pub fn Composer(props: ComposerProps) -> Element {
    let mut uploads = props.uploads;
    let mut widget = use_signal(|| Option::<String>::None);

    use_future(move || async move {
        let id = turnstile::render_when_ready(
            &format!("#{TURNSTILE_CONTAINER_ID}"),
            config::TURNSTILE_SITE_KEY,
        )
        .await;
        widget.set(id);
    });

    use_drop(move || {
        if let Ok(id) = widget.try_peek()
            && let Some(id) = id.as_deref()
        {
            turnstile::remove(id);
        }
    });

    let on_submit = props.on_submit;
    let submit = move || {
        let token = widget.peek().as_deref().and_then(turnstile::response);
        on_submit.call(token);
    };

    let (files, first_error, is_dragging, input_props) = {
        let uploads = uploads.read();
        let state = uploads.state();
        (
            state.files().to_vec(),
            state.errors().first().map(ToString::to_string),
            state.is_dragging(),
            uploads.input_props(&InputOverrides::default()),
        )
    };

    let chat = props.chat;
    let has_files = !files.is_empty();
    let can_submit = chat.can_submit(has_files);
    let attach_disabled = chat.is_loading || has_files;
    let is_loading = chat.is_loading;
    let zone_class = if is_dragging {
        "composer-zone composer-zone-dragging"
    } else {
        "composer-zone"
    };

    let on_keydown = {
        let chat = chat.clone();
        move |evt: KeyboardEvent| {
            let modifiers = evt.modifiers();
            if chat.is_submit_shortcut(
                &evt.key().to_string(),
                modifiers.ctrl(),
                modifiers.meta(),
                evt.is_composing(),
            ) {
                evt.prevent_default();
                submit();
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        let picked = read_local_files(evt.files()).await;
        uploads.write().file_change(picked);
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        let target = uploads.write().drop_target();
        let mut dropped = evt.files();
        dropped.truncate(target.take(dropped.len()));
        if dropped.is_empty() {
            return;
        }
        let local = read_local_files(dropped).await;
        uploads.write().add_files(local);
    };

    rsx! {
        div { class: "composer",
            div {
                id: DROP_ZONE_ID,
                class: zone_class,
                ondragenter: move |evt: DragEvent| {
                    evt.prevent_default();
                    uploads.write().drag_enter();
                },
                ondragover: move |evt: DragEvent| {
                    evt.prevent_default();
                    if !uploads.peek().state().is_dragging() {
                        uploads.write().drag_over();
                    }
                },
                ondragleave: move |evt: DragEvent| {
                    evt.prevent_default();
                    let point = evt.client_coordinates();
                    let still_inside = point_within(DROP_ZONE_ID, point.x, point.y);
                    uploads.write().drag_leave(still_inside);
                },
                ondrop: handle_drop,

                textarea {
                    class: "composer-text",
                    value: "{chat.message}",
                    placeholder: "Just drag a file, paste content, or share a link.",
                    aria_label: "Enter your text",
                    disabled: is_loading,
                    oninput: move |evt: FormEvent| props.on_message.call(evt.value()),
                    onkeydown: on_keydown,
                }
                input {
                    id: FILE_INPUT_ID,
                    class: "sr-only",
                    r#type: InputProps::INPUT_TYPE,
                    accept: "{input_props.accept}",
                    multiple: input_props.multiple,
                    disabled: attach_disabled,
                    aria_label: "Upload file",
                    onchange: handle_files,
                }

                div { class: "composer-actions",
                    button {
                        class: "attach-button",
                        disabled: attach_disabled,
                        aria_label: "Attach file",
                        onclick: move |_| uploads.read().open_file_dialog(),
                        Icon { width: 20, height: 20, icon: LdPaperclip }
                    }
                    button {
                        class: "primary-button",
                        disabled: !can_submit,
                        onclick: move |_| submit(),
                        if is_loading {
                            Icon { class: "spin", width: 16, height: 16, icon: LdLoader }
                            "Summarizing…"
                        } else {
                            "Summarize"
                            Icon { width: 16, height: 16, icon: LdSparkles }
                        }
                    }
                }
            }

            if let Some(err) = first_error {
                div { class: "upload-error", role: "alert",
                    Icon { width: 12, height: 12, icon: LdInfo }
                    span { "{err}" }
                }
            }

            if has_files {
                FileList {
                    files,
                    on_remove: move |id: String| uploads.write().remove_file(&id),
                }
            }

            div { id: TURNSTILE_CONTAINER_ID, class: "turnstile" }
        }
    }
}
