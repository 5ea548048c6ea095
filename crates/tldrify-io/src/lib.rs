//! tldrify-io: Browser I/O and Dioxus component library.
//!
//! Handles object-URL previews, the IndexedDB summary store, the
//! summarization HTTP client, hash navigation, Markdown downloads and
//! bot verification, and provides the UI components of the tldrify web
//! application.

pub mod api;
pub mod components;
pub mod config;
pub mod dialog;
pub mod download;
pub mod files;
pub mod preview;
pub mod router;
pub mod store;
pub mod turnstile;

pub use components::{
    ChatPane, Composer, FileIcon, FileList, NotFound, SettingsPanel, Sidebar, SliderControl,
    Toolbar,
};
pub use preview::ObjectUrlPreviews;

/// Upload controller used by the composer.
pub type Uploads = tldrify_upload::FileUploadController<ObjectUrlPreviews>;

/// A controller configured with the app's upload policy and bound to
/// the composer's file input.
#[must_use]
pub fn new_uploads() -> Uploads {
    let mut uploads = Uploads::new(config::upload_options(), ObjectUrlPreviews);
    uploads.bind_input(files::InputElement::new(components::FILE_INPUT_ID));
    uploads
}
