//! Storage types shared by the backends and the bridge

use crate::error::EntryFormResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot name used by the original form for its saved entries
pub const DEFAULT_SLOT: &str = "savedEntries";

/// Backend-agnostic key/value storage for serialized record lists
///
/// Implementations store whole payloads per slot; there are no partial writes.
pub trait RecordStore: Send + Sync {
    /// Read the payload stored under `slot`, `None` if nothing was ever written
    fn load_slot(&self, slot: &str) -> EntryFormResult<Option<String>>;

    /// Replace the payload stored under `slot`
    fn save_slot(&self, slot: &str, payload: &str) -> EntryFormResult<()>;

    /// Short description for logs and `config show`
    fn describe(&self) -> String;
}

/// Whether the last write reached the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum StorageHealth {
    #[default]
    Healthy,
    /// Writes are failing; the in-memory list is ahead of the stored one
    Degraded { reason: String },
}

impl StorageHealth {
    pub fn is_degraded(&self) -> bool {
        matches!(self, StorageHealth::Degraded { .. })
    }
}

impl fmt::Display for StorageHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageHealth::Healthy => write!(f, "healthy"),
            StorageHealth::Degraded { reason } => write!(f, "degraded ({})", reason),
        }
    }
}
