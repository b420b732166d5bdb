//! Document-store contract for the virtual filesystem and its in-process adapters.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    future::Future,
    pin::Pin,
    rc::Rc,
};

use futures::stream::{self, LocalBoxStream, StreamExt};
use thiserror::Error;

use super::types::{EntryId, FileSystemEntry, NewEntry};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced by [`VirtualStore`] implementations.
pub enum StoreError {
    /// The persistence engine could not be opened or has gone away.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// A record could not be converted to or from its persisted shape.
    #[error("malformed record: {0}")]
    Codec(String),
}

/// Object-safe boxed future used by [`VirtualStore`] async methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a>>;

/// Entry cursor produced by index queries.
///
/// Each query call starts a fresh cursor; a cursor cannot be rewound once polled.
pub type EntryStream<'a> = LocalBoxStream<'a, Result<FileSystemEntry, StoreError>>;

/// Async single-collection document store keyed by [`EntryId`] with `path` and `isDeleted`
/// secondary indexes.
///
/// Writes resolve only after they are durable in the backing engine. Two operations issued
/// without awaiting the first are not ordered relative to each other.
pub trait VirtualStore {
    /// Opens (or creates) the backing collection. Safe to call repeatedly.
    fn open(&self) -> StoreFuture<'_, ()>;

    /// Returns the number of records in the collection.
    fn count(&self) -> StoreFuture<'_, u64>;

    /// Inserts a record and returns its newly assigned id.
    fn insert(&self, entry: NewEntry) -> StoreFuture<'_, EntryId>;

    /// Inserts several records in one write transaction, returning ids in input order.
    fn insert_all(&self, entries: Vec<NewEntry>) -> StoreFuture<'_, Vec<EntryId>>;

    /// Loads one record by id.
    fn get(&self, id: EntryId) -> StoreFuture<'_, Option<FileSystemEntry>>;

    /// Overwrites the record with `entry.id`.
    fn put<'a>(&'a self, entry: &'a FileSystemEntry) -> StoreFuture<'a, ()>;

    /// Removes a record by id; absent ids are not an error.
    fn delete(&self, id: EntryId) -> StoreFuture<'_, ()>;

    /// Streams every record whose `path` equals `path`, in store order.
    fn query_by_path<'a>(&'a self, path: &'a str) -> EntryStream<'a>;

    /// Streams every record whose `isDeleted` flag equals `deleted`, in store order.
    fn query_by_deleted_flag(&self, deleted: bool) -> EntryStream<'_>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store adapter for targets without a persistence engine. Every operation fails with
/// [`StoreError::Unavailable`].
pub struct NoopVirtualStore;

impl NoopVirtualStore {
    fn unavailable(op: &str) -> StoreError {
        StoreError::Unavailable(format!("virtual store unavailable: {op}"))
    }
}

impl VirtualStore for NoopVirtualStore {
    fn open(&self) -> StoreFuture<'_, ()> {
        Box::pin(async { Err(Self::unavailable("open")) })
    }

    fn count(&self) -> StoreFuture<'_, u64> {
        Box::pin(async { Err(Self::unavailable("count")) })
    }

    fn insert(&self, _entry: NewEntry) -> StoreFuture<'_, EntryId> {
        Box::pin(async { Err(Self::unavailable("insert")) })
    }

    fn insert_all(&self, _entries: Vec<NewEntry>) -> StoreFuture<'_, Vec<EntryId>> {
        Box::pin(async { Err(Self::unavailable("insert_all")) })
    }

    fn get(&self, _id: EntryId) -> StoreFuture<'_, Option<FileSystemEntry>> {
        Box::pin(async { Err(Self::unavailable("get")) })
    }

    fn put<'a>(&'a self, _entry: &'a FileSystemEntry) -> StoreFuture<'a, ()> {
        Box::pin(async { Err(Self::unavailable("put")) })
    }

    fn delete(&self, _id: EntryId) -> StoreFuture<'_, ()> {
        Box::pin(async { Err(Self::unavailable("delete")) })
    }

    fn query_by_path<'a>(&'a self, _path: &'a str) -> EntryStream<'a> {
        stream::once(async { Err(Self::unavailable("query_by_path")) }).boxed_local()
    }

    fn query_by_deleted_flag(&self, _deleted: bool) -> EntryStream<'_> {
        stream::once(async { Err(Self::unavailable("query_by_deleted_flag")) }).boxed_local()
    }
}

#[derive(Debug, Default)]
struct MemoryCollection {
    records: BTreeMap<EntryId, FileSystemEntry>,
    last_id: u64,
}

impl MemoryCollection {
    fn allocate(&mut self, entry: NewEntry) -> EntryId {
        self.last_id += 1;
        let id = EntryId(self.last_id);
        self.records.insert(id, entry.into_entry(id));
        id
    }

    fn matching(&self, predicate: impl Fn(&FileSystemEntry) -> bool) -> Vec<FileSystemEntry> {
        self.records
            .values()
            .filter(|entry| predicate(entry))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
/// Non-persistent store used by tests and as the degraded fallback when the browser store is
/// unavailable. Clones share the same collection.
pub struct MemoryVirtualStore {
    inner: Rc<RefCell<MemoryCollection>>,
    opened: Rc<Cell<bool>>,
}

impl MemoryVirtualStore {
    /// Returns `true` once [`VirtualStore::open`] has completed at least once.
    pub fn is_open(&self) -> bool {
        self.opened.get()
    }
}

impl VirtualStore for MemoryVirtualStore {
    fn open(&self) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            self.opened.set(true);
            Ok(())
        })
    }

    fn count(&self) -> StoreFuture<'_, u64> {
        Box::pin(async move { Ok(self.inner.borrow().records.len() as u64) })
    }

    fn insert(&self, entry: NewEntry) -> StoreFuture<'_, EntryId> {
        Box::pin(async move { Ok(self.inner.borrow_mut().allocate(entry)) })
    }

    fn insert_all(&self, entries: Vec<NewEntry>) -> StoreFuture<'_, Vec<EntryId>> {
        Box::pin(async move {
            let mut collection = self.inner.borrow_mut();
            Ok(entries
                .into_iter()
                .map(|entry| collection.allocate(entry))
                .collect())
        })
    }

    fn get(&self, id: EntryId) -> StoreFuture<'_, Option<FileSystemEntry>> {
        Box::pin(async move { Ok(self.inner.borrow().records.get(&id).cloned()) })
    }

    fn put<'a>(&'a self, entry: &'a FileSystemEntry) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let mut collection = self.inner.borrow_mut();
            // Explicit keys advance the generator so later inserts never collide.
            collection.last_id = collection.last_id.max(entry.id.0);
            collection.records.insert(entry.id, entry.clone());
            Ok(())
        })
    }

    fn delete(&self, id: EntryId) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            self.inner.borrow_mut().records.remove(&id);
            Ok(())
        })
    }

    fn query_by_path<'a>(&'a self, path: &'a str) -> EntryStream<'a> {
        let snapshot = self.inner.borrow().matching(|entry| entry.path == path);
        stream::iter(snapshot.into_iter().map(Ok)).boxed_local()
    }

    fn query_by_deleted_flag(&self, deleted: bool) -> EntryStream<'_> {
        let snapshot = self
            .inner
            .borrow()
            .matching(|entry| entry.is_deleted == deleted);
        stream::iter(snapshot.into_iter().map(Ok)).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use futures::{executor::block_on, TryStreamExt};
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(entries: Vec<FileSystemEntry>) -> Vec<String> {
        entries.into_iter().map(|entry| entry.name).collect()
    }

    #[test]
    fn memory_store_assigns_ascending_ids_and_never_reuses_them() {
        let store = MemoryVirtualStore::default();
        let store_obj: &dyn VirtualStore = &store;

        let first = block_on(store_obj.insert(NewEntry::folder("/", "a", "i"))).expect("insert");
        let second = block_on(store_obj.insert(NewEntry::folder("/", "b", "i"))).expect("insert");
        assert!(second > first);

        block_on(store_obj.delete(second)).expect("delete");
        let third = block_on(store_obj.insert(NewEntry::folder("/", "c", "i"))).expect("insert");
        assert!(third > second);
        assert_eq!(block_on(store_obj.count()).expect("count"), 2);
    }

    #[test]
    fn path_query_yields_matches_in_store_order() {
        let store = MemoryVirtualStore::default();
        block_on(store.insert_all(vec![
            NewEntry::folder("/", "Desktop", "i"),
            NewEntry::file("/Desktop", "x.txt", "i", "x"),
            NewEntry::folder("/", "Documents", "i"),
        ]))
        .expect("insert all");

        let root: Vec<_> = block_on(store.query_by_path("/").try_collect()).expect("query");
        assert_eq!(names(root), vec!["Desktop", "Documents"]);

        let again: Vec<_> = block_on(store.query_by_path("/").try_collect()).expect("requery");
        assert_eq!(again.len(), 2);
    }

    #[test]
    fn deleted_flag_query_filters_on_the_flag() {
        let store = MemoryVirtualStore::default();
        let ids = block_on(store.insert_all(vec![
            NewEntry::folder("/", "keep", "i"),
            NewEntry::folder("/", "trash", "i"),
        ]))
        .expect("insert all");

        let mut entry = block_on(store.get(ids[1])).expect("get").expect("present");
        entry.mark_deleted(5);
        block_on(store.put(&entry)).expect("put");

        let trashed: Vec<_> =
            block_on(store.query_by_deleted_flag(true).try_collect()).expect("query");
        assert_eq!(names(trashed), vec!["trash"]);
        let live: Vec<_> =
            block_on(store.query_by_deleted_flag(false).try_collect()).expect("query");
        assert_eq!(names(live), vec!["keep"]);
    }

    #[test]
    fn put_with_explicit_id_advances_the_key_generator() {
        let store = MemoryVirtualStore::default();
        let entry = NewEntry::folder("/", "imported", "i").into_entry(EntryId(40));
        block_on(store.put(&entry)).expect("put");

        let next = block_on(store.insert(NewEntry::folder("/", "new", "i"))).expect("insert");
        assert_eq!(next, EntryId(41));
    }

    #[test]
    fn open_is_idempotent() {
        let store = MemoryVirtualStore::default();
        assert!(!store.is_open());
        block_on(store.open()).expect("open");
        block_on(store.open()).expect("reopen");
        assert!(store.is_open());
    }

    #[test]
    fn noop_store_reports_unavailable_everywhere() {
        let store = NoopVirtualStore;
        let store_obj: &dyn VirtualStore = &store;

        assert!(matches!(
            block_on(store_obj.open()),
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            block_on(store_obj.get(EntryId(1))),
            Err(StoreError::Unavailable(_))
        ));
        let listed: Result<Vec<_>, _> = block_on(store_obj.query_by_path("/").try_collect());
        assert!(matches!(listed, Err(StoreError::Unavailable(_))));
    }
}
