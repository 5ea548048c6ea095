//! Bridging browser files and the file-picking `<input>` into the upload core.

use dioxus::html::FileData;
use dioxus::logger::tracing;
use tldrify_upload::{FileInput, LocalFile};
use wasm_bindgen::JsCast;

/// Read dropped or picked files into memory, preserving their order.
///
/// Files that cannot be read are skipped and logged.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn read_local_files(files: Vec<FileData>) -> Vec<LocalFile> {
    let mut local = Vec::with_capacity(files.len());
    for file in files {
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                let mime = file.content_type().unwrap_or_default();
                local.push(LocalFile::new(name, mime, bytes.to_vec()));
            }
            Err(e) => tracing::warn!(%name, "failed to read file: {e}"),
        }
    }
    local
}

/// The file-picking input, located by element id on each call.
///
/// Looking the element up lazily keeps this handle valid across
/// re-renders; calls are no-ops while the element is not mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputElement {
    id: &'static str,
}

impl InputElement {
    /// Bind to the `<input id="{id}">` element.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self { id }
    }

    fn element(self) -> Option<web_sys::HtmlInputElement> {
        input_by_id(self.id)
    }
}

fn input_by_id(id: &str) -> Option<web_sys::HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()
}

/// Overwrite the text of `<input id="{id}">`.
///
/// Needed when an edit is refused: the rendered value is unchanged, so
/// the renderer never patches the element and the typed text would stay.
pub fn set_input_value(id: &str, value: &str) {
    if let Some(input) = input_by_id(id) {
        input.set_value(value);
    }
}

impl FileInput for InputElement {
    fn reset(&self) {
        if let Some(input) = self.element() {
            input.set_value("");
        }
    }

    fn is_disabled(&self) -> bool {
        self.element().is_some_and(|input| input.disabled())
    }

    fn open(&self) {
        if let Some(input) = self.element() {
            input.click();
        }
    }
}

/// Whether the viewport point `(x, y)` lies over element `id` or one of
/// its descendants.
///
/// A `dragleave` fires when the pointer moves onto a nested child as
/// well as when it leaves the zone; hit-testing the pointer position
/// tells the two apart.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn point_within(id: &str, x: f64, y: f64) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let (Some(zone), Some(hit)) = (
        document.get_element_by_id(id),
        document.element_from_point(x as f32, y as f32),
    ) else {
        return false;
    };
    zone.contains(Some(hit.as_ref()))
}
