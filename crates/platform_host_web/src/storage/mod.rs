//! Browser persistence adapters.

pub mod indexed_db;
