//! tldrify-upload: File upload state machine (sans-IO).
//!
//! Tracks the files attached to a summarization request:
//! validate -> assign id -> allocate preview -> track -> release.
//!
//! This crate has **no browser dependencies** -- preview allocation and
//! the file-picking input are reached through the [`PreviewBackend`] and
//! [`FileInput`] traits. All browser interaction lives in `tldrify-io`.

pub mod accept;
pub mod controller;
pub mod format;
pub mod id;
pub mod kind;
pub mod preview;
pub mod types;
pub mod validate;

pub use accept::{AcceptPattern, AcceptSpec};
pub use controller::{DropTarget, FileInput, FileUploadController, InputOverrides, InputProps};
pub use format::format_bytes;
pub use id::{IdSource, RandomIds};
pub use kind::FileKind;
pub use preview::{NoPreviews, PreviewBackend, PreviewHandle};
pub use types::{
    FileSource, LocalFile, RemoteFileReference, TrackedFile, UploadError, UploadOptions,
    UploadState,
};
pub use validate::validate;
