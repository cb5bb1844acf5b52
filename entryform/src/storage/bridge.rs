//! Entry Store Bridge
//!
//! Loads the record list once at startup and writes it back wholesale after every
//! committed change. Load never fails: missing or unreadable payloads yield an empty list.

use super::types::{RecordStore, StorageHealth, DEFAULT_SLOT};
use crate::form::types::{Draft, Record, RecordList};
use crate::form::validation::validate;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct EntryStoreBridge<S: RecordStore + ?Sized> {
    storage: Arc<S>,
    slot: String,
    pretty: bool,
}

impl<S: RecordStore + ?Sized> Clone for EntryStoreBridge<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            slot: self.slot.clone(),
            pretty: self.pretty,
        }
    }
}

impl<S: RecordStore + ?Sized> EntryStoreBridge<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            slot: DEFAULT_SLOT.to_string(),
            pretty: false,
        }
    }

    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    /// Read the persisted list, treating any failure as empty state
    pub fn load(&self) -> RecordList {
        let payload = match self.storage.load_slot(&self.slot) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!(slot = %self.slot, "nothing stored yet");
                return RecordList::new();
            }
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "failed to read stored entries, starting empty");
                return RecordList::new();
            }
        };

        let records = parse_records(&payload);
        info!(slot = %self.slot, count = records.len(), "loaded stored entries");
        records
    }

    /// Write the whole list back. Failures are logged and reported as degraded health.
    pub fn save(&self, records: &[Record]) -> StorageHealth {
        let serialized = if self.pretty {
            serde_json::to_string_pretty(records)
        } else {
            serde_json::to_string(records)
        };
        let payload = match serialized {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "failed to serialize entries");
                return StorageHealth::Degraded {
                    reason: e.to_string(),
                };
            }
        };

        match self.storage.save_slot(&self.slot, &payload) {
            Ok(()) => {
                debug!(slot = %self.slot, count = records.len(), "saved entries");
                StorageHealth::Healthy
            }
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "failed to save entries");
                StorageHealth::Degraded {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Parse a stored payload. Anything but a JSON array yields an empty list; array entries
/// that are not well-formed records or no longer pass validation are skipped.
pub fn parse_records(payload: &str) -> RecordList {
    if payload.trim().is_empty() {
        return RecordList::new();
    }
    let items: Vec<serde_json::Value> = match serde_json::from_str(payload) {
        Ok(serde_json::Value::Array(items)) => items,
        Ok(serde_json::Value::Null) => return RecordList::new(),
        Ok(other) => {
            warn!(kind = %json_kind(&other), "stored entries are not a list, ignoring");
            return RecordList::new();
        }
        Err(e) => {
            warn!(error = %e, "stored entries are not valid JSON, ignoring");
            return RecordList::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| {
            let record: Record = match serde_json::from_value(item) {
                Ok(record) => record,
                Err(e) => {
                    warn!(position, error = %e, "skipping malformed stored entry");
                    return None;
                }
            };
            let errors = validate(&Draft::from(&record));
            if !errors.is_empty() {
                warn!(position, invalid_fields = errors.len(), "skipping stored entry that fails validation");
                return None;
            }
            Some(record)
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::types::City;
    use crate::storage::storage_memory::InMemoryRecordStore;
    use pretty_assertions::assert_eq;

    fn sample(name: &str) -> Record {
        Record {
            full_name: name.to_string(),
            email: "someone@site.org".to_string(),
            password: "pw".to_string(),
            address: "22 Hill Road".to_string(),
            city: City::Rajkot,
            rating: 2,
            feedback: "ok".to_string(),
        }
    }

    #[test]
    fn test_load_empty_store() {
        let bridge = EntryStoreBridge::new(Arc::new(InMemoryRecordStore::new()));
        assert!(bridge.load().is_empty());
    }

    #[test]
    fn test_corrupt_payloads_load_as_empty() {
        for payload in ["", "not json", "null", "{\"a\":1}", "42"] {
            let store = InMemoryRecordStore::with_payload(DEFAULT_SLOT, payload);
            let bridge = EntryStoreBridge::new(Arc::new(store));
            assert!(bridge.load().is_empty(), "payload {:?}", payload);
        }
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let bridge = EntryStoreBridge::new(Arc::new(InMemoryRecordStore::new()));
        let records = vec![sample("first"), sample("second"), sample("third")];
        assert_eq!(bridge.save(&records), StorageHealth::Healthy);
        assert_eq!(bridge.load(), records);
    }

    #[test]
    fn test_save_of_loaded_list_is_semantic_noop() {
        let payload = serde_json::to_string_pretty(&vec![sample("a"), sample("b")]).unwrap();
        let store = Arc::new(InMemoryRecordStore::with_payload(DEFAULT_SLOT, &payload));
        let bridge = EntryStoreBridge::new(Arc::clone(&store));

        let loaded = bridge.load();
        bridge.save(&loaded);
        let reparsed = parse_records(&store.raw(DEFAULT_SLOT).unwrap());
        assert_eq!(reparsed, loaded);
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let payload = r#"[
            {"fullName":"kept","userEmail":"k@x.io","userPassword":"p","userAddress":"a",
             "userCity":"Mumbai","userRating":5,"userFeedback":""},
            {"fullName":"bad email","userEmail":"nope","userPassword":"p","userAddress":"a",
             "userCity":"Mumbai","userRating":5},
            {"fullName":"bad city","userEmail":"k@x.io","userPassword":"p","userAddress":"a",
             "userCity":"Paris","userRating":5},
            {"fullName":"unrated","userEmail":"k@x.io","userPassword":"p","userAddress":"a",
             "userCity":"Mumbai","userRating":0}
        ]"#;
        let records = parse_records(payload);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name, "kept");
    }

    #[test]
    fn test_failed_save_reports_degraded() {
        let store = Arc::new(InMemoryRecordStore::new());
        store.set_fail_writes(true);
        let bridge = EntryStoreBridge::new(Arc::clone(&store)).with_slot("custom");

        let health = bridge.save(&[sample("x")]);
        assert!(health.is_degraded());
        assert_eq!(store.raw("custom"), None);
    }
}
