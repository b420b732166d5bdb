//! Target-specific transport selection for the virtual store bridge.

use platform_host::{EntryId, FileSystemEntry, NewEntry, StoreError};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn open_store(db_name: &str, store_name: &str, version: u32) -> Result<(), StoreError> {
    imp::open_store(db_name, store_name, version).await
}

pub async fn count_entries() -> Result<u64, StoreError> {
    imp::count_entries().await
}

pub async fn insert_entries(entries: &[NewEntry]) -> Result<Vec<EntryId>, StoreError> {
    imp::insert_entries(entries).await
}

pub async fn get_entry(id: EntryId) -> Result<Option<FileSystemEntry>, StoreError> {
    imp::get_entry(id).await
}

pub async fn put_entry(entry: &FileSystemEntry) -> Result<(), StoreError> {
    imp::put_entry(entry).await
}

pub async fn delete_entry(id: EntryId) -> Result<(), StoreError> {
    imp::delete_entry(id).await
}

pub async fn entries_by_path(path: &str) -> Result<Vec<FileSystemEntry>, StoreError> {
    imp::entries_by_path(path).await
}

pub async fn entries_by_deleted_flag(deleted: bool) -> Result<Vec<FileSystemEntry>, StoreError> {
    imp::entries_by_deleted_flag(deleted).await
}
