//! Persistence for the record list.
//!
//! A `RecordStore` holds serialized payloads under named slots. The `EntryStoreBridge`
//! sits between the form engine and a store: it (de)serializes the record list, tolerates
//! missing or corrupt slots on load, and reports save failures as degraded health instead
//! of errors.

pub mod bridge;
pub mod storage_file;
pub mod storage_memory;
pub mod types;

// Re-export main types for convenience
pub use bridge::EntryStoreBridge;
pub use storage_file::FileRecordStore;
pub use storage_memory::InMemoryRecordStore;
pub use types::*;
