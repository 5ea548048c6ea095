//! Icon for an attachment, chosen from its mime type.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdFile, LdFileCode, LdFileImage, LdFileSpreadsheet, LdFileText, LdFileType,
    LdPresentation,
};
use tldrify_upload::FileKind;

const ICON_SIZE: u32 = 20;

/// Props for the [`FileIcon`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileIconProps {
    /// Mime type of the file.
    mime: String,
}

/// A decorative icon for one attachment.
///
/// The file kind is also exposed as a screen-reader label.
#[component]
pub fn FileIcon(props: FileIconProps) -> Element {
    let kind = FileKind::from_mime(&props.mime);
    let icon = match kind {
        FileKind::Image => rsx! {
            Icon { class: "file-icon", width: ICON_SIZE, height: ICON_SIZE, icon: LdFileImage }
        },
        FileKind::Pdf => rsx! {
            Icon { class: "file-icon", width: ICON_SIZE, height: ICON_SIZE, icon: LdBookOpen }
        },
        FileKind::Spreadsheet => rsx! {
            Icon { class: "file-icon", width: ICON_SIZE, height: ICON_SIZE, icon: LdFileSpreadsheet }
        },
        FileKind::Presentation => rsx! {
            Icon { class: "file-icon", width: ICON_SIZE, height: ICON_SIZE, icon: LdPresentation }
        },
        FileKind::Document => rsx! {
            Icon { class: "file-icon", width: ICON_SIZE, height: ICON_SIZE, icon: LdFileText }
        },
        FileKind::Code => rsx! {
            Icon { class: "file-icon", width: ICON_SIZE, height: ICON_SIZE, icon: LdFileCode }
        },
        FileKind::Text => rsx! {
            Icon { class: "file-icon", width: ICON_SIZE, height: ICON_SIZE, icon: LdFileType }
        },
        FileKind::Other => rsx! {
            Icon { class: "file-icon", width: ICON_SIZE, height: ICON_SIZE, icon: LdFile }
        },
    };
    rsx! {
        span { class: "file-icon-wrap", aria_label: kind.label(), role: "img", {icon} }
    }
}
