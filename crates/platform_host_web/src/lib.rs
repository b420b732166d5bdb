//! Browser (`wasm32`) implementations of [`platform_host`] store contracts.
//!
//! The virtual filesystem persists in IndexedDB through a small JS shim (`js/virtual_store.js`)
//! reached via `wasm-bindgen`. Non-wasm targets get the same API but every browser call reports
//! [`platform_host::StoreError::Unavailable`], and [`open_virtual_store`] degrades to memory.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the store adapter used by runtime wiring.
pub mod adapters;
mod bridge;
pub mod storage;

pub use adapters::{
    host_strategy_name, open_virtual_store, selected_host_strategy, virtual_store, HostStrategy,
    VirtualStoreAdapter,
};
pub use storage::indexed_db::WebVirtualStore;
