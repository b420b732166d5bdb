use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::{prelude::*, JsCast};

use super::*;

#[wasm_bindgen(module = "/js/virtual_store.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = openStore)]
    async fn js_open_store(db_name: &str, store_name: &str, version: u32)
        -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = countEntries)]
    async fn js_count_entries() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = insertEntries)]
    async fn js_insert_entries(entries: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = getEntry)]
    async fn js_get_entry(id: f64) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = putEntry)]
    async fn js_put_entry(entry: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = deleteEntry)]
    async fn js_delete_entry(id: f64) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = entriesByPath)]
    async fn js_entries_by_path(path: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = entriesByDeletedFlag)]
    async fn js_entries_by_deleted_flag(deleted: bool) -> Result<JsValue, JsValue>;
}

fn unavailable(err: JsValue) -> StoreError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    StoreError::Unavailable(message)
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, StoreError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| StoreError::Codec(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: JsValue) -> Result<T, StoreError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| StoreError::Codec(e.to_string()))
}

pub async fn open_store(db_name: &str, store_name: &str, version: u32) -> Result<(), StoreError> {
    js_open_store(db_name, store_name, version)
        .await
        .map(|_| ())
        .map_err(unavailable)
}

pub async fn count_entries() -> Result<u64, StoreError> {
    let raw = js_count_entries().await.map_err(unavailable)?;
    raw.as_f64()
        .map(|count| count as u64)
        .ok_or_else(|| StoreError::Codec("count is not a number".to_string()))
}

pub async fn insert_entries(entries: &[NewEntry]) -> Result<Vec<EntryId>, StoreError> {
    let raw = js_insert_entries(encode(entries)?)
        .await
        .map_err(unavailable)?;
    decode(raw)
}

pub async fn get_entry(id: EntryId) -> Result<Option<FileSystemEntry>, StoreError> {
    let raw = js_get_entry(id.0 as f64).await.map_err(unavailable)?;
    if raw.is_null() || raw.is_undefined() {
        return Ok(None);
    }
    decode(raw).map(Some)
}

pub async fn put_entry(entry: &FileSystemEntry) -> Result<(), StoreError> {
    js_put_entry(encode(entry)?)
        .await
        .map(|_| ())
        .map_err(unavailable)
}

pub async fn delete_entry(id: EntryId) -> Result<(), StoreError> {
    js_delete_entry(id.0 as f64)
        .await
        .map(|_| ())
        .map_err(unavailable)
}

pub async fn entries_by_path(path: &str) -> Result<Vec<FileSystemEntry>, StoreError> {
    let raw = js_entries_by_path(path).await.map_err(unavailable)?;
    decode(raw)
}

pub async fn entries_by_deleted_flag(deleted: bool) -> Result<Vec<FileSystemEntry>, StoreError> {
    let raw = js_entries_by_deleted_flag(deleted)
        .await
        .map_err(unavailable)?;
    decode(raw)
}
