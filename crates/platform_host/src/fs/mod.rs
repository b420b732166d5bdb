//! Virtual filesystem: record types, the document-store contract, and domain operations.

pub mod path;
pub mod seed;
pub mod service;
pub mod store;
pub mod types;
