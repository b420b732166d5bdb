use leptos::logging;
use platform_host::{
    EntryId, EntryStream, FileSystemEntry, MemoryVirtualStore, NewEntry, StoreError, StoreFuture,
    VirtualStore,
};

use crate::WebVirtualStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected persistence strategy for the virtual filesystem.
pub enum HostStrategy {
    /// IndexedDB through the browser bridge.
    Browser,
    /// Process-local memory; nothing survives a reload.
    InMemory,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::InMemory
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::InMemory => "in-memory",
    }
}

/// Adapter enum that erases the concrete store behind [`VirtualStore`].
#[derive(Debug, Clone)]
pub enum VirtualStoreAdapter {
    /// Browser-backed IndexedDB persistence.
    Browser(WebVirtualStore),
    /// Non-persistent fallback.
    Memory(MemoryVirtualStore),
}

impl VirtualStoreAdapter {
    /// Returns `true` when records survive a page reload.
    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Browser(_))
    }
}

impl VirtualStore for VirtualStoreAdapter {
    fn open(&self) -> StoreFuture<'_, ()> {
        match self {
            Self::Browser(store) => store.open(),
            Self::Memory(store) => store.open(),
        }
    }

    fn count(&self) -> StoreFuture<'_, u64> {
        match self {
            Self::Browser(store) => store.count(),
            Self::Memory(store) => store.count(),
        }
    }

    fn insert(&self, entry: NewEntry) -> StoreFuture<'_, EntryId> {
        match self {
            Self::Browser(store) => store.insert(entry),
            Self::Memory(store) => store.insert(entry),
        }
    }

    fn insert_all(&self, entries: Vec<NewEntry>) -> StoreFuture<'_, Vec<EntryId>> {
        match self {
            Self::Browser(store) => store.insert_all(entries),
            Self::Memory(store) => store.insert_all(entries),
        }
    }

    fn get(&self, id: EntryId) -> StoreFuture<'_, Option<FileSystemEntry>> {
        match self {
            Self::Browser(store) => store.get(id),
            Self::Memory(store) => store.get(id),
        }
    }

    fn put<'a>(&'a self, entry: &'a FileSystemEntry) -> StoreFuture<'a, ()> {
        match self {
            Self::Browser(store) => store.put(entry),
            Self::Memory(store) => store.put(entry),
        }
    }

    fn delete(&self, id: EntryId) -> StoreFuture<'_, ()> {
        match self {
            Self::Browser(store) => store.delete(id),
            Self::Memory(store) => store.delete(id),
        }
    }

    fn query_by_path<'a>(&'a self, path: &'a str) -> EntryStream<'a> {
        match self {
            Self::Browser(store) => store.query_by_path(path),
            Self::Memory(store) => store.query_by_path(path),
        }
    }

    fn query_by_deleted_flag(&self, deleted: bool) -> EntryStream<'_> {
        match self {
            Self::Browser(store) => store.query_by_deleted_flag(deleted),
            Self::Memory(store) => store.query_by_deleted_flag(deleted),
        }
    }
}

/// Builds the virtual filesystem store for the selected host strategy without opening it.
pub fn virtual_store() -> VirtualStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => VirtualStoreAdapter::Browser(WebVirtualStore),
        HostStrategy::InMemory => VirtualStoreAdapter::Memory(MemoryVirtualStore::default()),
    }
}

/// Opens the strategy's store, degrading to a fresh in-memory store when the persistence
/// engine is unavailable.
///
/// # Errors
///
/// Returns the original error when opening fails for any reason other than
/// [`StoreError::Unavailable`].
pub async fn open_virtual_store() -> Result<VirtualStoreAdapter, StoreError> {
    open_or_fallback(virtual_store()).await
}

async fn open_or_fallback(store: VirtualStoreAdapter) -> Result<VirtualStoreAdapter, StoreError> {
    match store.open().await {
        Ok(()) => Ok(store),
        Err(StoreError::Unavailable(reason)) => {
            logging::warn!("virtual filesystem falls back to memory: {reason}");
            let fallback = MemoryVirtualStore::default();
            fallback.open().await?;
            Ok(VirtualStoreAdapter::Memory(fallback))
        }
        Err(err) => Err(err),
    }
}
