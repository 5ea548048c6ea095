//! Integration tests: drive the upload controller through user-facing sequences.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::rc::Rc;

use tldrify_upload::{
    AcceptSpec, FileInput, FileSource, FileUploadController, IdSource, LocalFile, PreviewBackend,
    RemoteFileReference, UploadError, UploadOptions,
};

/// Preview backend that records allocations and revocations in a shared log.
#[derive(Clone, Default)]
struct Recorder {
    log: Rc<RefCell<Log>>,
}

#[derive(Default)]
struct Log {
    next: u32,
    live: Vec<String>,
    revoked: Vec<String>,
}

impl PreviewBackend for Recorder {
    fn allocate(&mut self, _file: &LocalFile) -> Option<String> {
        let mut log = self.log.borrow_mut();
        log.next += 1;
        let url = format!("blob:{}", log.next);
        log.live.push(url.clone());
        Some(url)
    }

    fn revoke(&mut self, url: &str) {
        let mut log = self.log.borrow_mut();
        assert!(
            log.live.iter().any(|u| u == url),
            "revoked {url} which is not live"
        );
        log.live.retain(|u| u != url);
        log.revoked.push(url.to_owned());
    }
}

struct Counter(u32);

impl IdSource for Counter {
    fn suffix(&mut self) -> String {
        self.0 += 1;
        format!("{:07}", self.0)
    }
}

#[derive(Clone, Default)]
struct Input {
    disabled: Rc<RefCell<bool>>,
    resets: Rc<RefCell<u32>>,
    opened: Rc<RefCell<u32>>,
}

impl FileInput for Input {
    fn reset(&self) {
        *self.resets.borrow_mut() += 1;
    }

    fn is_disabled(&self) -> bool {
        *self.disabled.borrow()
    }

    fn open(&self) {
        *self.opened.borrow_mut() += 1;
    }
}

type Controller = FileUploadController<Recorder, Counter>;

fn controller(options: UploadOptions) -> (Controller, Recorder) {
    let recorder = Recorder::default();
    let controller = FileUploadController::with_ids(options, recorder.clone(), Counter(0));
    (controller, recorder)
}

fn multiple() -> UploadOptions {
    UploadOptions {
        multiple: true,
        ..UploadOptions::default()
    }
}

fn png(name: &str) -> LocalFile {
    LocalFile::new(name, "image/png", vec![0x89, b'P', b'N', b'G'])
}

fn txt(name: &str) -> LocalFile {
    LocalFile::new(name, "text/plain", b"hello".to_vec())
}

fn sized(name: &str, size: u64) -> LocalFile {
    let mut file = LocalFile::new(name, "application/pdf", Vec::new());
    file.size = size;
    file
}

fn reference(id: &str, name: &str, url: &str) -> RemoteFileReference {
    RemoteFileReference {
        name: name.into(),
        size: 42,
        mime: "image/png".into(),
        url: url.into(),
        id: id.into(),
    }
}

fn names(controller: &Controller) -> Vec<&str> {
    controller.state().files().iter().map(|f| f.name()).collect()
}

// --- validation ---

#[test]
fn oversized_file_is_not_added_and_is_named() {
    let (mut c, _) = controller(UploadOptions {
        max_size: Some(1024),
        ..multiple()
    });
    c.add_files(vec![sized("huge.pdf", 1025)]);

    assert!(c.state().files().is_empty());
    assert_eq!(
        c.state().errors(),
        &[UploadError::SizeExceeded {
            name: "huge.pdf".into(),
            max_size: 1024,
        }]
    );
    assert!(c.state().errors()[0].to_string().contains("\"huge.pdf\""));
}

#[test]
fn image_prefix_accepts_png_rejects_text() {
    let (mut c, _) = controller(UploadOptions {
        accept: AcceptSpec::from("image/*"),
        ..multiple()
    });
    c.add_files(vec![png("a.png"), txt("b.txt")]);

    assert_eq!(names(&c), ["a.png"]);
    assert_eq!(
        c.state().errors(),
        &[UploadError::TypeNotAccepted {
            name: "b.txt".into()
        }]
    );
}

#[test]
fn rejections_keep_candidate_order() {
    let (mut c, _) = controller(UploadOptions {
        accept: AcceptSpec::from(".pdf"),
        ..multiple()
    });
    c.add_files(vec![txt("one.txt"), sized("ok.pdf", 1), txt("two.txt")]);

    assert_eq!(names(&c), ["ok.pdf"]);
    let rejected: Vec<String> = c.state().errors().iter().map(ToString::to_string).collect();
    assert_eq!(
        rejected,
        [
            "File \"one.txt\" is not an accepted file type.",
            "File \"two.txt\" is not an accepted file type.",
        ]
    );
}

#[test]
fn new_errors_are_placed_ahead_of_existing_ones() {
    let (mut c, _) = controller(UploadOptions {
        accept: AcceptSpec::from(".pdf"),
        ..multiple()
    });
    c.add_files(vec![txt("first.txt")]);
    c.add_files(vec![txt("second.txt"), sized("ok.pdf", 1)]);

    let rejected: Vec<&str> = c
        .state()
        .errors()
        .iter()
        .map(|e| match e {
            UploadError::TypeNotAccepted { name } => name.as_str(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(rejected, ["second.txt", "first.txt"]);
    assert_eq!(names(&c), ["ok.pdf"]);
}

#[test]
fn rejected_files_never_allocate_previews() {
    let (mut c, recorder) = controller(UploadOptions {
        max_size: Some(1),
        ..multiple()
    });
    c.add_files(vec![png("big.png")]);
    assert!(c.state().files().is_empty());
    assert_eq!(recorder.log.borrow().next, 0);
}

// --- single-file mode ---

#[test]
fn single_mode_replaces_and_releases_previous_preview() {
    let (mut c, recorder) = controller(UploadOptions::default());
    c.add_files(vec![png("first.png")]);
    let first_url = c.state().files()[0].preview_url().unwrap().to_owned();

    c.add_files(vec![png("second.png")]);

    assert_eq!(names(&c), ["second.png"]);
    let log = recorder.log.borrow();
    assert_eq!(log.revoked, [first_url]);
    assert_eq!(log.live.len(), 1);
}

#[test]
fn single_mode_remove_clears_regardless_of_id() {
    let (mut c, recorder) = controller(UploadOptions::default());
    c.add_files(vec![png("a.png")]);
    c.remove_file("not-an-id");

    assert!(c.state().files().is_empty());
    assert!(recorder.log.borrow().live.is_empty());
}

#[test]
fn single_mode_drop_takes_first_item_only() {
    let (mut c, _) = controller(UploadOptions::default());
    c.drag_enter();
    c.drop_files(vec![png("a.png"), png("b.png")]);

    assert!(!c.state().is_dragging());
    assert_eq!(names(&c), ["a.png"]);
}

// --- capacity ---

#[test]
fn capacity_overflow_adds_nothing() {
    let (mut c, recorder) = controller(UploadOptions {
        max_files: Some(2),
        ..multiple()
    });
    c.add_files(vec![png("a.png"), png("b.png"), png("c.png")]);

    assert!(c.state().files().is_empty());
    assert_eq!(
        c.state().errors(),
        &[UploadError::CapacityExceeded { max_files: 2 }]
    );
    assert_eq!(recorder.log.borrow().next, 0);
}

#[test]
fn capacity_counts_existing_files() {
    let (mut c, _) = controller(UploadOptions {
        max_files: Some(2),
        ..multiple()
    });
    c.add_files(vec![png("a.png")]);
    c.add_files(vec![png("b.png"), png("c.png")]);

    assert_eq!(names(&c), ["a.png"]);
    assert_eq!(c.state().errors().len(), 1);
}

#[test]
fn capacity_error_replaces_previous_errors() {
    let (mut c, _) = controller(UploadOptions {
        max_files: Some(1),
        accept: AcceptSpec::from("image/*"),
        ..multiple()
    });
    c.add_files(vec![txt("a.txt")]);
    c.add_files(vec![png("a.png"), png("b.png")]);

    assert_eq!(
        c.state().errors(),
        &[UploadError::CapacityExceeded { max_files: 1 }]
    );
}

// --- removal ---

#[test]
fn remove_releases_exactly_that_preview() {
    let (mut c, recorder) = controller(multiple());
    c.add_files(vec![png("a.png"), png("b.png")]);
    let a = c.state().files()[0].clone();

    c.remove_file(a.id());

    assert_eq!(names(&c), ["b.png"]);
    assert_eq!(recorder.log.borrow().revoked, [a.preview_url().unwrap()]);
}

#[test]
fn removing_twice_is_a_no_op() {
    let (mut c, recorder) = controller(multiple());
    c.add_files(vec![png("a.png"), png("b.png")]);
    let id = c.state().files()[0].id().to_owned();

    c.remove_file(&id);
    let after_first = c.state().clone();
    c.remove_file(&id);

    assert_eq!(c.state(), &after_first);
    assert_eq!(recorder.log.borrow().revoked.len(), 1);
}

#[test]
fn remove_recomputes_errors_from_remaining_files() {
    let (mut c, _) = controller(UploadOptions {
        accept: AcceptSpec::from(".pdf"),
        ..multiple()
    });
    c.add_files(vec![txt("bad.txt"), sized("a.pdf", 1), sized("b.pdf", 1)]);
    assert_eq!(c.state().errors().len(), 1);

    let id = c.state().files()[0].id().to_owned();
    c.remove_file(&id);

    // Every remaining file is valid, so the stale rejection disappears.
    assert!(c.state().errors().is_empty());
    assert_eq!(names(&c), ["b.pdf"]);
}

// --- clearing ---

#[test]
fn clear_files_releases_everything_and_resets_input() {
    let input = Input::default();
    let (mut c, recorder) = controller(UploadOptions {
        accept: AcceptSpec::from("image/*"),
        ..multiple()
    });
    c.bind_input(input.clone());
    c.add_files(vec![png("a.png"), png("b.png"), txt("c.txt")]);
    let resets_before = *input.resets.borrow();

    c.clear_files();

    assert!(c.state().files().is_empty());
    assert!(c.state().errors().is_empty());
    assert!(recorder.log.borrow().live.is_empty());
    assert_eq!(*input.resets.borrow(), resets_before + 1);
}

#[test]
fn clear_errors_keeps_files() {
    let (mut c, _) = controller(UploadOptions {
        accept: AcceptSpec::from("image/*"),
        ..multiple()
    });
    c.add_files(vec![png("a.png"), txt("b.txt")]);
    c.clear_errors();

    assert!(c.state().errors().is_empty());
    assert_eq!(names(&c), ["a.png"]);
}

// --- drag and drop ---

#[test]
fn drag_leave_into_child_keeps_dragging() {
    let (mut c, _) = controller(multiple());
    c.drag_enter();
    assert!(c.state().is_dragging());

    c.drag_leave(true);
    assert!(c.state().is_dragging());

    c.drag_over();
    c.drag_leave(false);
    assert!(!c.state().is_dragging());
}

#[test]
fn drop_on_disabled_input_only_ends_drag() {
    let input = Input::default();
    *input.disabled.borrow_mut() = true;
    let (mut c, _) = controller(multiple());
    c.bind_input(input);

    c.drag_enter();
    c.drop_files(vec![png("a.png")]);

    assert!(!c.state().is_dragging());
    assert!(c.state().files().is_empty());
}

#[test]
fn drop_in_multiple_mode_adds_everything() {
    let (mut c, _) = controller(multiple());
    c.drop_files(vec![png("a.png"), png("b.png")]);
    assert_eq!(names(&c), ["a.png", "b.png"]);
}

#[test]
fn open_file_dialog_reaches_bound_input() {
    let input = Input::default();
    let (mut c, _) = controller(UploadOptions::default());
    c.open_file_dialog(); // nothing bound yet
    c.bind_input(input.clone());
    c.open_file_dialog();
    assert_eq!(*input.opened.borrow(), 1);

    c.unbind_input();
    c.open_file_dialog();
    assert_eq!(*input.opened.borrow(), 1);
}

// --- restoring ---

#[test]
fn restore_round_trips_ids_and_names_without_payload() {
    let refs = vec![
        reference("doc-1", "report.pdf", ""),
        reference("img-2", "photo.png", "https://cdn/photo.png"),
    ];
    let (mut c, recorder) = controller(multiple());
    c.add_files(vec![png("local.png")]);

    c.restore_initial_files(&refs);

    let files = c.state().files();
    assert_eq!(files.len(), 2);
    for (tracked, reference) in files.iter().zip(&refs) {
        assert_eq!(tracked.id(), reference.id);
        assert_eq!(tracked.name(), reference.name);
        assert!(matches!(tracked.source(), FileSource::Remote(_)));
        assert!(tracked.source().as_local().is_none());
        assert_eq!(&tracked.to_reference(), reference);
    }
    assert_eq!(files[1].preview_url(), Some("https://cdn/photo.png"));
    // The local preview was released; restored URLs were never allocated.
    let log = recorder.log.borrow();
    assert!(log.live.is_empty());
    assert_eq!(log.next, 1);
}

#[test]
fn restore_clears_errors() {
    let (mut c, _) = controller(UploadOptions {
        accept: AcceptSpec::from("image/*"),
        ..multiple()
    });
    c.add_files(vec![txt("a.txt")]);
    c.restore_initial_files(&[]);
    assert!(c.state().errors().is_empty());
}

#[test]
fn initial_files_seed_state_and_are_never_revoked() {
    let recorder = Recorder::default();
    {
        let c = FileUploadController::with_ids(
            UploadOptions {
                initial_files: vec![reference("r1", "a.png", "https://cdn/a.png")],
                ..UploadOptions::default()
            },
            recorder.clone(),
            Counter(0),
        );
        assert_eq!(c.state().files()[0].id(), "r1");
    }
    assert!(recorder.log.borrow().revoked.is_empty());
}

// --- teardown ---

#[test]
fn dropping_the_controller_releases_live_previews() {
    let (mut c, recorder) = controller(multiple());
    c.add_files(vec![png("a.png"), png("b.png")]);
    let a = c.state().files()[0].id().to_owned();
    c.remove_file(&a);

    drop(c);

    let log = recorder.log.borrow();
    assert!(log.live.is_empty());
    assert_eq!(log.revoked.len(), 2);
}
