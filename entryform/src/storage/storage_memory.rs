//! In-memory record storage implementation
//!
//! Simple in-memory storage for testing and ephemeral sessions.

use super::types::RecordStore;
use crate::error::{EntryFormError, EntryFormResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// In-memory record storage for testing
pub struct InMemoryRecordStore {
    slots: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Start with a raw payload already in `slot`
    pub fn with_payload(slot: &str, payload: &str) -> Self {
        let store = Self::new();
        if let Ok(mut slots) = store.slots.write() {
            slots.insert(slot.to_string(), payload.to_string());
        }
        store
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn raw(&self, slot: &str) -> Option<String> {
        self.slots.read().ok()?.get(slot).cloned()
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load_slot(&self, slot: &str) -> EntryFormResult<Option<String>> {
        let slots = self.slots.read().map_err(|_| {
            EntryFormError::StorageUnavailable("memory store lock poisoned".to_string())
        })?;
        Ok(slots.get(slot).cloned())
    }

    fn save_slot(&self, slot: &str, payload: &str) -> EntryFormResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(EntryFormError::StorageUnavailable(
                "memory store rejects writes".to_string(),
            ));
        }
        let mut slots = self.slots.write().map_err(|_| {
            EntryFormError::StorageUnavailable("memory store lock poisoned".to_string())
        })?;
        slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
