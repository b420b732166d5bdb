//! Transport bridge between [`crate::WebVirtualStore`] and the browser's IndexedDB.
//!
//! On `wasm32` the calls go through the `js/virtual_store.js` shim; every other target reports
//! [`StoreError::Unavailable`] so callers can degrade to an in-memory store.

mod interop;

use platform_host::{
    EntryId, FileSystemEntry, NewEntry, StoreError, VIRTUAL_FS_DB_NAME, VIRTUAL_FS_SCHEMA_VERSION,
    VIRTUAL_FS_STORE_NAME,
};

pub async fn open_store() -> Result<(), StoreError> {
    interop::open_store(
        VIRTUAL_FS_DB_NAME,
        VIRTUAL_FS_STORE_NAME,
        VIRTUAL_FS_SCHEMA_VERSION,
    )
    .await
}

pub async fn count_entries() -> Result<u64, StoreError> {
    interop::count_entries().await
}

pub async fn insert_entries(entries: &[NewEntry]) -> Result<Vec<EntryId>, StoreError> {
    interop::insert_entries(entries).await
}

pub async fn get_entry(id: EntryId) -> Result<Option<FileSystemEntry>, StoreError> {
    interop::get_entry(id).await
}

pub async fn put_entry(entry: &FileSystemEntry) -> Result<(), StoreError> {
    interop::put_entry(entry).await
}

pub async fn delete_entry(id: EntryId) -> Result<(), StoreError> {
    interop::delete_entry(id).await
}

pub async fn entries_by_path(path: &str) -> Result<Vec<FileSystemEntry>, StoreError> {
    interop::entries_by_path(path).await
}

pub async fn entries_by_deleted_flag(deleted: bool) -> Result<Vec<FileSystemEntry>, StoreError> {
    interop::entries_by_deleted_flag(deleted).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn virtual_store_bridge_non_wasm_parity() {
        let expected = StoreError::Unavailable(
            "Browser storage APIs are only available when compiled for wasm32".to_string(),
        );
        let entry = NewEntry::folder("/", "Desktop", "fas fa-desktop");

        assert_eq!(block_on(open_store()), Err(expected.clone()));
        assert_eq!(block_on(count_entries()), Err(expected.clone()));
        assert_eq!(
            block_on(insert_entries(std::slice::from_ref(&entry))),
            Err(expected.clone())
        );
        assert_eq!(block_on(get_entry(EntryId(1))), Err(expected.clone()));
        assert_eq!(
            block_on(put_entry(&entry.into_entry(EntryId(1)))),
            Err(expected.clone())
        );
        assert_eq!(block_on(delete_entry(EntryId(1))), Err(expected.clone()));
        assert_eq!(block_on(entries_by_path("/")), Err(expected.clone()));
        assert_eq!(block_on(entries_by_deleted_flag(true)), Err(expected));
    }
}
