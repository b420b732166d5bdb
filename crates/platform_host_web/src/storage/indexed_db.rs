//! IndexedDB-backed virtual filesystem store.

use futures::stream::{self, StreamExt, TryStreamExt};
use platform_host::{
    EntryId, EntryStream, FileSystemEntry, NewEntry, StoreError, StoreFuture, VirtualStore,
};

#[derive(Debug, Clone, Copy, Default)]
/// Browser virtual filesystem store persisted in the `Win11FS` IndexedDB database.
///
/// All instances share the page-wide database handle, which is opened on first use.
pub struct WebVirtualStore;

impl WebVirtualStore {
    fn cursor<'a>(
        batch: impl std::future::Future<Output = Result<Vec<FileSystemEntry>, StoreError>> + 'a,
    ) -> EntryStream<'a> {
        stream::once(batch)
            .map_ok(|entries| stream::iter(entries.into_iter().map(Ok)))
            .try_flatten()
            .boxed_local()
    }
}

impl VirtualStore for WebVirtualStore {
    fn open(&self) -> StoreFuture<'_, ()> {
        Box::pin(crate::bridge::open_store())
    }

    fn count(&self) -> StoreFuture<'_, u64> {
        Box::pin(crate::bridge::count_entries())
    }

    fn insert(&self, entry: NewEntry) -> StoreFuture<'_, EntryId> {
        Box::pin(async move {
            let ids = crate::bridge::insert_entries(std::slice::from_ref(&entry)).await?;
            ids.into_iter()
                .next()
                .ok_or_else(|| StoreError::Codec("insert returned no key".to_string()))
        })
    }

    fn insert_all(&self, entries: Vec<NewEntry>) -> StoreFuture<'_, Vec<EntryId>> {
        Box::pin(async move { crate::bridge::insert_entries(&entries).await })
    }

    fn get(&self, id: EntryId) -> StoreFuture<'_, Option<FileSystemEntry>> {
        Box::pin(crate::bridge::get_entry(id))
    }

    fn put<'a>(&'a self, entry: &'a FileSystemEntry) -> StoreFuture<'a, ()> {
        Box::pin(crate::bridge::put_entry(entry))
    }

    fn delete(&self, id: EntryId) -> StoreFuture<'_, ()> {
        Box::pin(crate::bridge::delete_entry(id))
    }

    fn query_by_path<'a>(&'a self, path: &'a str) -> EntryStream<'a> {
        Self::cursor(crate::bridge::entries_by_path(path))
    }

    fn query_by_deleted_flag(&self, deleted: bool) -> EntryStream<'_> {
        Self::cursor(crate::bridge::entries_by_deleted_flag(deleted))
    }
}
