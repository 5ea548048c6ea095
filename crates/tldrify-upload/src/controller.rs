//! The upload state machine.
//!
//! [`FileUploadController`] owns the [`UploadState`] for one UI session
//! and is the only thing that mutates it. Every operation is a complete,
//! synchronous transition behind `&mut self`; callers on the UI thread
//! observe either the state before an operation or the state after it.
//!
//! Preview handles are released on every path that drops a tracked file:
//! removal, replacement, clearing, restoring, and dropping the controller.

use crate::id::{IdSource, RandomIds, local_file_id};
use crate::preview::{self, PreviewBackend};
use crate::types::{
    FileSource, LocalFile, RemoteFileReference, TrackedFile, UploadError, UploadOptions,
    UploadState,
};
use crate::validate::validate;

/// The file-picking `<input type="file">` bound to a controller.
pub trait FileInput {
    /// Clear the input's value so the same file can be picked again.
    fn reset(&self);

    /// Whether the input is currently disabled.
    fn is_disabled(&self) -> bool;

    /// Open the native file picker.
    fn open(&self);
}

/// Caller overrides for [`FileUploadController::input_props`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOverrides {
    /// Replaces the configured accept spec when non-empty.
    pub accept: Option<String>,
    /// Replaces the configured `multiple` flag.
    pub multiple: Option<bool>,
}

/// Attributes for the bound file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    /// The `accept` attribute.
    pub accept: String,
    /// The `multiple` attribute.
    pub multiple: bool,
}

impl InputProps {
    /// The `type` attribute; always a file picker.
    pub const INPUT_TYPE: &'static str = "file";
}

/// How a drop gesture will be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The input is disabled; dropped items are ignored.
    Rejected,
    /// Single-file mode; only the first dropped item is added.
    First,
    /// Every dropped item is added.
    All,
}

impl DropTarget {
    /// How many of `available` dropped items to read.
    #[must_use]
    pub fn take(self, available: usize) -> usize {
        match self {
            Self::Rejected => 0,
            Self::First => available.min(1),
            Self::All => available,
        }
    }
}

/// Owns and mutates the upload state for one session.
pub struct FileUploadController<P: PreviewBackend, I: IdSource = RandomIds> {
    options: UploadOptions,
    state: UploadState,
    previews: P,
    ids: I,
    input: Option<Box<dyn FileInput>>,
}

impl<P: PreviewBackend> FileUploadController<P> {
    /// Create a controller seeded with `options.initial_files`.
    #[must_use]
    pub fn new(options: UploadOptions, previews: P) -> Self {
        Self::with_ids(options, previews, RandomIds)
    }
}

impl<P: PreviewBackend, I: IdSource> FileUploadController<P, I> {
    /// Create a controller with a custom id suffix source.
    #[must_use]
    pub fn with_ids(options: UploadOptions, previews: P, ids: I) -> Self {
        let mut controller = Self {
            options,
            state: UploadState::default(),
            previews,
            ids,
            input: None,
        };
        let initial = controller.options.initial_files.clone();
        controller.state.files = controller.track_references(&initial);
        controller
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &UploadState {
        &self.state
    }

    /// Policy this controller enforces.
    #[must_use]
    pub const fn options(&self) -> &UploadOptions {
        &self.options
    }

    /// The preview backend.
    #[must_use]
    pub const fn previews(&self) -> &P {
        &self.previews
    }

    /// Attach the file-picking input.
    pub fn bind_input(&mut self, input: impl FileInput + 'static) {
        self.input = Some(Box::new(input));
    }

    /// Detach the file-picking input (e.g. when it unmounts).
    pub fn unbind_input(&mut self) {
        self.input = None;
    }

    /// Attributes for the bound input, with caller overrides applied.
    #[must_use]
    pub fn input_props(&self, overrides: &InputOverrides) -> InputProps {
        let accept = overrides
            .accept
            .clone()
            .filter(|accept| !accept.is_empty())
            .unwrap_or_else(|| self.options.accept.to_string());
        InputProps {
            accept,
            multiple: overrides.multiple.unwrap_or(self.options.multiple),
        }
    }

    /// Validate and track `candidates`.
    ///
    /// In single-file mode the current files are cleared first. If the
    /// result would exceed `max_files` nothing is added and the errors
    /// become a single capacity message. Otherwise rejected candidates
    /// produce one error each (placed ahead of existing errors) and the
    /// rest are appended.
    pub fn add_files(&mut self, candidates: Vec<LocalFile>) {
        if candidates.is_empty() {
            return;
        }

        if !self.options.multiple {
            self.clear_files();
        }

        if let Some(max_files) = self.options.max_files
            && self.state.files.len() + candidates.len() > max_files
        {
            tracing::debug!(
                current = self.state.files.len(),
                added = candidates.len(),
                max_files,
                "add rejected: capacity"
            );
            self.state.errors = vec![UploadError::CapacityExceeded { max_files }];
            return;
        }

        let mut errors = Vec::new();
        for file in candidates {
            let source = FileSource::Local(file);
            if let Err(err) = validate(&source, &self.options.accept, self.options.max_size) {
                tracing::debug!(%err, "file rejected");
                errors.push(err);
                continue;
            }

            let id = local_file_id(source.name(), source.size(), &self.ids.suffix());
            let preview = preview::create(&mut self.previews, &source);
            self.state.files.push(TrackedFile {
                id,
                source,
                preview,
            });
        }

        errors.append(&mut self.state.errors);
        self.state.errors = errors;

        self.reset_input();
    }

    /// The input's change handler.
    pub fn file_change(&mut self, candidates: Vec<LocalFile>) {
        if !candidates.is_empty() {
            self.add_files(candidates);
        }
    }

    /// Remove the file with `id`.
    ///
    /// In single-file mode this clears everything regardless of `id`.
    /// Removing an unknown id is a no-op.
    pub fn remove_file(&mut self, id: &str) {
        if !self.options.multiple {
            self.clear_files();
            return;
        }

        let Some(index) = self.state.files.iter().position(|f| f.id == id) else {
            return;
        };
        let mut removed = self.state.files.remove(index);
        preview::release(&mut self.previews, &mut removed.preview);

        self.state.errors = match self.options.max_files {
            Some(max_files) if self.state.files.len() > max_files => {
                vec![UploadError::CapacityExceeded { max_files }]
            }
            _ => self
                .state
                .files
                .iter()
                .filter_map(|f| {
                    validate(&f.source, &self.options.accept, self.options.max_size).err()
                })
                .collect(),
        };
    }

    /// Release every preview, drop all files and errors, reset the input.
    pub fn clear_files(&mut self) {
        self.release_all();
        self.state.files.clear();
        self.state.errors.clear();
        self.reset_input();
    }

    /// Drop all errors, keeping the files.
    pub fn clear_errors(&mut self) {
        self.state.errors.clear();
    }

    /// A drag entered the drop zone.
    ///
    /// The caller must also suppress the browser's default handling so
    /// the dropped file is not opened as a page.
    pub const fn drag_enter(&mut self) {
        self.state.is_dragging = true;
    }

    /// A drag moved over the drop zone. See [`drag_enter`](Self::drag_enter).
    pub const fn drag_over(&mut self) {
        self.state.is_dragging = true;
    }

    /// A drag left an element inside the drop zone.
    ///
    /// `still_inside` is whether the element the pointer moved to is
    /// within the drop zone's subtree; moving onto a nested child keeps
    /// the dragging state.
    pub const fn drag_leave(&mut self, still_inside: bool) {
        if !still_inside {
            self.state.is_dragging = false;
        }
    }

    /// End a drag with a drop and report which dropped items to add.
    ///
    /// Callers that must read dropped files asynchronously call this
    /// first, then [`add_files`](Self::add_files) with the items it
    /// allows.
    pub fn drop_target(&mut self) -> DropTarget {
        self.state.is_dragging = false;
        if self.input.as_ref().is_some_and(|input| input.is_disabled()) {
            DropTarget::Rejected
        } else if self.options.multiple {
            DropTarget::All
        } else {
            DropTarget::First
        }
    }

    /// Handle a drop of `candidates` in one step.
    pub fn drop_files(&mut self, mut candidates: Vec<LocalFile>) {
        let target = self.drop_target();
        candidates.truncate(target.take(candidates.len()));
        self.add_files(candidates);
    }

    /// Open the bound input's file picker.
    pub fn open_file_dialog(&self) {
        if let Some(input) = &self.input {
            input.open();
        }
    }

    /// Replace all files with restored references and clear errors.
    pub fn restore_initial_files(&mut self, refs: &[RemoteFileReference]) {
        self.release_all();
        self.state.files = self.track_references(refs);
        self.state.errors.clear();
    }

    fn track_references(&mut self, refs: &[RemoteFileReference]) -> Vec<TrackedFile> {
        refs.iter()
            .map(|reference| {
                let source = FileSource::Remote(reference.clone());
                let preview = preview::create(&mut self.previews, &source);
                TrackedFile {
                    id: reference.id.clone(),
                    source,
                    preview,
                }
            })
            .collect()
    }

    fn release_all(&mut self) {
        for file in &mut self.state.files {
            preview::release(&mut self.previews, &mut file.preview);
        }
    }

    fn reset_input(&self) {
        if let Some(input) = &self.input {
            input.reset();
        }
    }
}

impl<P: PreviewBackend, I: IdSource> Drop for FileUploadController<P, I> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<P: PreviewBackend, I: IdSource> std::fmt::Debug for FileUploadController<P, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUploadController")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("input_bound", &self.input.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::accept::AcceptSpec;
    use crate::preview::NoPreviews;

    struct Sequential(u32);

    impl IdSource for Sequential {
        fn suffix(&mut self) -> String {
            self.0 += 1;
            format!("s{}", self.0)
        }
    }

    #[derive(Clone, Default)]
    struct FakeInput {
        resets: Rc<Cell<u32>>,
        disabled: Rc<Cell<bool>>,
    }

    impl FileInput for FakeInput {
        fn reset(&self) {
            self.resets.set(self.resets.get() + 1);
        }

        fn is_disabled(&self) -> bool {
            self.disabled.get()
        }

        fn open(&self) {}
    }

    fn controller(options: UploadOptions) -> FileUploadController<NoPreviews, Sequential> {
        FileUploadController::with_ids(options, NoPreviews, Sequential(0))
    }

    fn text(name: &str) -> LocalFile {
        LocalFile::new(name, "text/plain", b"hi".to_vec())
    }

    #[test]
    fn ids_are_name_size_suffix() {
        let mut c = controller(UploadOptions::default());
        c.add_files(vec![text("a.txt")]);
        assert_eq!(c.state().files()[0].id(), "a.txt-2-s1");
    }

    #[test]
    fn empty_add_is_a_no_op() {
        let input = FakeInput::default();
        let mut c = controller(UploadOptions::default());
        c.bind_input(input.clone());
        c.add_files(Vec::new());
        assert!(c.state().files().is_empty());
        assert_eq!(input.resets.get(), 0);
    }

    #[test]
    fn add_resets_bound_input() {
        let input = FakeInput::default();
        let mut c = controller(UploadOptions {
            multiple: true,
            ..UploadOptions::default()
        });
        c.bind_input(input.clone());
        c.add_files(vec![text("a.txt")]);
        assert_eq!(input.resets.get(), 1);
    }

    #[test]
    fn file_change_ignores_empty_selection() {
        let mut c = controller(UploadOptions::default());
        c.file_change(Vec::new());
        assert!(c.state().files().is_empty());
        c.file_change(vec![text("a.txt")]);
        assert_eq!(c.state().files().len(), 1);
    }

    #[test]
    fn input_props_default_to_configuration() {
        let c = controller(UploadOptions {
            accept: AcceptSpec::from("image/*,.pdf"),
            multiple: true,
            ..UploadOptions::default()
        });
        let props = c.input_props(&InputOverrides::default());
        assert_eq!(
            props,
            InputProps {
                accept: "image/*,.pdf".into(),
                multiple: true,
            }
        );
        assert_eq!(InputProps::INPUT_TYPE, "file");
    }

    #[test]
    fn input_props_honor_overrides_but_not_empty_accept() {
        let c = controller(UploadOptions::default());
        let props = c.input_props(&InputOverrides {
            accept: Some(".md".into()),
            multiple: Some(true),
        });
        assert_eq!(props.accept, ".md");
        assert!(props.multiple);

        let props = c.input_props(&InputOverrides {
            accept: Some(String::new()),
            multiple: None,
        });
        assert_eq!(props.accept, "*");
        assert!(!props.multiple);
    }

    #[test]
    fn drop_target_follows_mode_and_input() {
        let input = FakeInput::default();
        let mut single = controller(UploadOptions::default());
        single.bind_input(input.clone());
        assert_eq!(single.drop_target(), DropTarget::First);

        input.disabled.set(true);
        assert_eq!(single.drop_target(), DropTarget::Rejected);

        let mut multi = controller(UploadOptions {
            multiple: true,
            ..UploadOptions::default()
        });
        assert_eq!(multi.drop_target(), DropTarget::All);
    }

    #[test]
    fn drop_target_take_counts() {
        assert_eq!(DropTarget::Rejected.take(3), 0);
        assert_eq!(DropTarget::First.take(3), 1);
        assert_eq!(DropTarget::First.take(0), 0);
        assert_eq!(DropTarget::All.take(3), 3);
    }

    #[test]
    fn single_options_helper() {
        let options = UploadOptions::single(10, "image/*");
        assert_eq!(options.max_size, Some(10));
        assert!(!options.multiple);
        assert_eq!(options.max_files, None);
    }
}
