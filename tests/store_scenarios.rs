use std::fs;

use docklayout::error::AppError;
use docklayout::host::{LayoutHost, apply_default_on_startup};
use docklayout::store::ProfileStore;
use tempfile::TempDir;

#[derive(Debug, Default)]
struct MemoryHost {
    current: Vec<u8>,
    accept: bool,
    applied: Vec<Vec<u8>>,
}

impl MemoryHost {
    fn showing(state: &[u8]) -> Self {
        Self {
            current: state.to_vec(),
            accept: true,
            applied: Vec::new(),
        }
    }
}

impl LayoutHost for MemoryHost {
    fn capture_state(&mut self) -> Vec<u8> {
        self.current.clone()
    }

    fn apply_state(&mut self, state: &[u8]) -> bool {
        if !self.accept {
            return false;
        }
        self.applied.push(state.to_vec());
        self.current = state.to_vec();
        true
    }
}

fn open_temp() -> (TempDir, ProfileStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ProfileStore::open(dir.path().join("layouts.json")).expect("open store");
    (dir, store)
}

#[test]
fn create_rejects_blank_and_duplicate_names() {
    let (_dir, mut store) = open_temp();

    assert!(matches!(store.create(""), Err(AppError::InvalidName(_))));
    assert!(matches!(store.create("  "), Err(AppError::InvalidName(_))));

    store.create("A").expect("first create");
    assert!(matches!(
        store.create("A"),
        Err(AppError::DuplicateName(name)) if name == "A"
    ));
    assert!(matches!(store.create(" A "), Err(AppError::DuplicateName(_))));
    store.create("a").expect("names are case-sensitive");
}

#[test]
fn save_of_missing_layout_is_not_found() {
    let (_dir, mut store) = open_temp();

    assert!(matches!(
        store.save("missing", b"state".to_vec()),
        Err(AppError::NotFound(name)) if name == "missing"
    ));
}

#[test]
fn set_default_of_missing_layout_keeps_pointer() {
    let (_dir, mut store) = open_temp();
    store.create("A").expect("create");
    store.set_default("A").expect("set default");

    assert!(matches!(store.set_default("X"), Err(AppError::NotFound(_))));
    assert_eq!(store.get_default(), Some("A"));
}

#[test]
fn rename_carries_default_and_state() {
    let (_dir, mut store) = open_temp();
    store.create("A").expect("create");
    store.save("A", b"state1".to_vec()).expect("save");
    store.set_default("A").expect("set default");

    assert_eq!(store.rename("A", "B").expect("rename"), "B");

    assert_eq!(store.get_default(), Some("B"));
    assert_eq!(store.restore("B").expect("restore"), b"state1");
    assert!(matches!(store.restore("A"), Err(AppError::NotFound(_))));

    let reopened = ProfileStore::open(store.path()).expect("reopen");
    assert_eq!(reopened.get_default(), Some("B"));
    assert_eq!(reopened.restore("B").expect("restore"), b"state1");
}

#[test]
fn delete_clears_default() {
    let (_dir, mut store) = open_temp();
    store.create("A").expect("create");
    store.save("A", b"s".to_vec()).expect("save");
    store.set_default("A").expect("set default");

    store.delete("A").expect("delete");

    assert_eq!(store.get_default(), None);
    assert!(matches!(store.delete("A"), Err(AppError::NotFound(_))));
    let reopened = ProfileStore::open(store.path()).expect("reopen");
    assert_eq!(reopened.get_default(), None);
    assert!(reopened.is_empty());
}

#[test]
fn rename_onto_existing_layout_changes_nothing() {
    let (_dir, mut store) = open_temp();
    store.create_with_state("A", b"a".to_vec()).expect("create A");
    store.create_with_state("B", b"b".to_vec()).expect("create B");
    store.set_default("A").expect("set default");
    let before = fs::read(store.path()).expect("read store");

    assert!(matches!(
        store.rename("A", "B"),
        Err(AppError::DuplicateName(name)) if name == "B"
    ));

    assert_eq!(store.restore("A").expect("restore A"), b"a");
    assert_eq!(store.restore("B").expect("restore B"), b"b");
    assert_eq!(store.get_default(), Some("A"));
    assert_eq!(fs::read(store.path()).expect("read store"), before);
}

#[test]
fn reload_round_trips_binary_blobs() {
    let (_dir, mut store) = open_temp();
    let blob: Vec<u8> = (0..=255).collect();
    store.create_with_state("Binary", blob.clone()).expect("create");
    store.create("Unsaved").expect("create");
    store.set_default("Binary").expect("set default");

    let mut reopened = ProfileStore::open(store.path()).expect("reopen");
    assert_eq!(reopened.list(), store.list());
    assert_eq!(reopened.restore("Binary").expect("restore"), blob.as_slice());

    reopened.reload().expect("reload");
    assert_eq!(reopened.get_default(), Some("Binary"));
}

#[test]
fn compound_set_default_captures_host_state() {
    let (_dir, mut store) = open_temp();
    store.create("A").expect("create");
    let mut host = MemoryHost::showing(b"docked");

    store
        .set_default_with_capture("A", &mut host)
        .expect("set default with capture");

    assert_eq!(store.get_default(), Some("A"));
    assert_eq!(store.restore("A").expect("restore"), b"docked");
}

#[test]
fn failed_capture_leaves_default_and_state_untouched() {
    let (_dir, mut store) = open_temp();
    store.create_with_state("A", b"old".to_vec()).expect("create A");
    store.create("B").expect("create B");
    store.set_default("B").expect("set default");
    let mut host = MemoryHost::showing(b"");

    assert!(matches!(
        store.set_default_with_capture("A", &mut host),
        Err(AppError::EmptyState(_))
    ));
    assert_eq!(store.get_default(), Some("B"));
    assert_eq!(store.restore("A").expect("restore"), b"old");

    assert!(matches!(
        store.set_default_with_capture("missing", &mut host),
        Err(AppError::NotFound(_))
    ));
    assert_eq!(store.get_default(), Some("B"));
}

#[test]
fn apply_reports_host_rejection() {
    let (_dir, mut store) = open_temp();
    store.create_with_state("A", b"blob".to_vec()).expect("create");
    let mut host = MemoryHost {
        accept: false,
        ..MemoryHost::default()
    };

    assert!(matches!(
        store.apply("A", &mut host),
        Err(AppError::Apply(name)) if name == "A"
    ));

    host.accept = true;
    store.apply(" A ", &mut host).expect("apply");
    assert_eq!(host.applied, [b"blob".to_vec()]);
}

#[test]
fn startup_applies_default_layout() {
    let (_dir, mut store) = open_temp();
    let mut host = MemoryHost::showing(b"initial");
    assert_eq!(apply_default_on_startup(&store, &mut host), None);

    store.create_with_state("Streaming", b"stream".to_vec()).expect("create");
    store.set_default("Streaming").expect("set default");

    assert_eq!(
        apply_default_on_startup(&store, &mut host).as_deref(),
        Some("Streaming")
    );
    assert_eq!(host.current, b"stream");
}

#[test]
fn startup_swallows_failures() {
    let (_dir, mut store) = open_temp();
    store.create("Unsaved").expect("create");
    store.set_default("Unsaved").expect("set default");
    let mut host = MemoryHost::showing(b"initial");

    assert_eq!(apply_default_on_startup(&store, &mut host), None);
    assert!(host.applied.is_empty());
}

fn block_store_writes(dir: &TempDir) {
    fs::create_dir(dir.path().join("layouts.json.tmp")).expect("block temp file");
}

#[test]
fn failed_rename_write_keeps_default_pointer() {
    let (dir, mut store) = open_temp();
    store.create_with_state("A", b"a".to_vec()).expect("create A");
    store.create_with_state("B", b"b".to_vec()).expect("create B");
    store.set_default("A").expect("set default");
    block_store_writes(&dir);

    let err = store.rename("A", "C").expect_err("write must fail");

    assert!(err.is_persist_failure());
    assert_eq!(store.get_default(), Some("A"));
    assert_eq!(store.restore("A").expect("restore A"), b"a");
    assert!(!store.contains("C"));

    store.reload().expect("reload");
    assert_eq!(store.get_default(), Some("A"));
    let names: Vec<_> = store.list().into_iter().map(|entry| entry.name).collect();
    assert_eq!(names, ["A", "B"]);
}

#[test]
fn failed_compound_set_default_write_changes_nothing() {
    let (dir, mut store) = open_temp();
    store.create_with_state("A", b"a".to_vec()).expect("create A");
    store.create_with_state("B", b"b".to_vec()).expect("create B");
    store.set_default("A").expect("set default");
    block_store_writes(&dir);
    let mut host = MemoryHost::showing(b"captured");

    let err = store
        .set_default_with_capture("B", &mut host)
        .expect_err("write must fail");

    assert!(err.is_persist_failure());
    assert_eq!(store.get_default(), Some("A"));
    assert_eq!(store.restore("B").expect("restore B"), b"b");

    store.reload().expect("reload");
    assert_eq!(store.get_default(), Some("A"));
    assert_eq!(store.restore("A").expect("restore A"), b"a");
    assert_eq!(store.restore("B").expect("restore B"), b"b");
}
