use super::*;

fn unsupported() -> StoreError {
    StoreError::Unavailable(
        "Browser storage APIs are only available when compiled for wasm32".to_string(),
    )
}

pub async fn open_store(
    _db_name: &str,
    _store_name: &str,
    _version: u32,
) -> Result<(), StoreError> {
    Err(unsupported())
}

pub async fn count_entries() -> Result<u64, StoreError> {
    Err(unsupported())
}

pub async fn insert_entries(_entries: &[NewEntry]) -> Result<Vec<EntryId>, StoreError> {
    Err(unsupported())
}

pub async fn get_entry(_id: EntryId) -> Result<Option<FileSystemEntry>, StoreError> {
    Err(unsupported())
}

pub async fn put_entry(_entry: &FileSystemEntry) -> Result<(), StoreError> {
    Err(unsupported())
}

pub async fn delete_entry(_id: EntryId) -> Result<(), StoreError> {
    Err(unsupported())
}

pub async fn entries_by_path(_path: &str) -> Result<Vec<FileSystemEntry>, StoreError> {
    Err(unsupported())
}

pub async fn entries_by_deleted_flag(_deleted: bool) -> Result<Vec<FileSystemEntry>, StoreError> {
    Err(unsupported())
}
