//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate owns the virtual filesystem model, the [`VirtualStore`] document-store contract
//! with its in-process adapters, and the [`FileSystemService`] domain operations. Concrete
//! browser persistence lives in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod fs;
pub mod time;

pub use fs::path::normalize_virtual_path;
pub use fs::seed::{
    seed_entries, DESKTOP_DIR_NAME, DESKTOP_PATH, DOCUMENTS_DIR_NAME, TRASH_NAME,
};
pub use fs::service::FileSystemService;
pub use fs::store::{
    EntryStream, MemoryVirtualStore, NoopVirtualStore, StoreError, StoreFuture, VirtualStore,
};
pub use fs::types::{
    EntryId, EntryKind, FileSystemEntry, NewEntry, DELETED_INDEX, PATH_INDEX, ROOT_PATH,
    VIRTUAL_FS_DB_NAME, VIRTUAL_FS_SCHEMA_VERSION, VIRTUAL_FS_STORE_NAME,
};
pub use time::{unix_time_ms_now, Clock, FixedClock, SystemClock};
