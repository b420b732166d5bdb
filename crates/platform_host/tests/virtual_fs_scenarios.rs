use std::rc::Rc;

use futures::executor::block_on;
use platform_host::{
    EntryKind, FileSystemService, FixedClock, MemoryVirtualStore, NoopVirtualStore, StoreError,
    VirtualStore, DESKTOP_PATH, ROOT_PATH,
};
use pretty_assertions::assert_eq;

fn service() -> (FileSystemService, MemoryVirtualStore) {
    let store = MemoryVirtualStore::default();
    let service = FileSystemService::with_clock(Rc::new(store.clone()), Rc::new(FixedClock(42)));
    (service, store)
}

#[test]
fn first_boot_seeds_once() {
    let (fs, store) = service();
    assert!(block_on(fs.initialize()).expect("seed"));

    let root = block_on(fs.list_directory(ROOT_PATH, false)).expect("root");
    let names: Vec<_> = root.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Desktop", "Documents", "Recycle Bin"]);
    assert_eq!(root[2].kind, EntryKind::System);

    let desktop = block_on(fs.list_directory(DESKTOP_PATH, false)).expect("desktop");
    assert_eq!(desktop.len(), 2);

    assert!(!block_on(fs.initialize()).expect("second boot"));
    assert_eq!(block_on(store.count()).expect("count"), 5);
}

#[test]
fn trash_round_trip_keeps_the_record_in_place() {
    let (fs, _) = service();
    block_on(fs.initialize()).expect("seed");
    let file = block_on(fs.list_directory(DESKTOP_PATH, false)).expect("desktop")[0].clone();

    assert!(block_on(fs.soft_delete(file.id)).expect("delete"));
    assert!(block_on(fs.list_directory(DESKTOP_PATH, false))
        .expect("desktop")
        .iter()
        .all(|e| e.id != file.id));
    let trash = block_on(fs.list_trash()).expect("trash");
    assert_eq!(trash.len(), 1);
    assert_eq!(trash[0].deleted_at, Some(42));
    assert_eq!(trash[0].path, file.path);

    assert!(block_on(fs.restore(file.id)).expect("restore"));
    let restored = block_on(fs.get(file.id)).expect("get").expect("present");
    assert_eq!(restored, file);
}

#[test]
fn purge_removes_for_good_and_ignores_missing_ids() {
    let (fs, _) = service();
    block_on(fs.initialize()).expect("seed");
    let file = block_on(fs.list_directory(DESKTOP_PATH, false)).expect("desktop")[1].clone();

    block_on(fs.purge(file.id)).expect("purge");
    assert_eq!(block_on(fs.get(file.id)).expect("get"), None);
    block_on(fs.purge(file.id)).expect("purge again");
    assert!(!block_on(fs.rename(file.id, "ghost")).expect("rename"));
}

#[test]
fn created_entries_join_the_listing_and_can_be_emptied_from_trash() {
    let (fs, _) = service();
    block_on(fs.initialize()).expect("seed");
    let folder = block_on(fs.create_folder("/Documents/", "Work")).expect("folder");
    let note = block_on(fs.create_file("/Documents/Work", "todo.txt", "ship it")).expect("file");

    let docs = block_on(fs.list_directory("/Documents", false)).expect("docs");
    assert_eq!(docs.iter().map(|e| e.id).collect::<Vec<_>>(), vec![folder.id]);
    let work = block_on(fs.list_directory("/Documents/Work", false)).expect("work");
    assert_eq!(work[0].content.as_deref(), Some("ship it"));

    block_on(fs.soft_delete(note.id)).expect("delete");
    block_on(fs.soft_delete(folder.id)).expect("delete");
    assert_eq!(block_on(fs.empty_trash()).expect("empty"), 2);
    assert!(block_on(fs.list_trash()).expect("trash").is_empty());
}

#[test]
fn unavailable_storage_rejects_operations() {
    let fs = FileSystemService::new(Rc::new(NoopVirtualStore));
    assert!(matches!(
        block_on(fs.initialize()),
        Err(StoreError::Unavailable(_))
    ));
    assert!(matches!(
        block_on(fs.list_directory(ROOT_PATH, false)),
        Err(StoreError::Unavailable(_))
    ));
}
