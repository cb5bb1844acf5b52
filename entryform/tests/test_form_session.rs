use entryform::config::FormConfig;
use entryform::form::{City, EditTarget, FormField, FormSession, Intent, Outcome, Record};
use entryform::storage::{EntryStoreBridge, FileRecordStore, RecordStore, StorageHealth};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tempfile::tempdir;

fn fill(name: &str, city: &str, rating: u8) -> Vec<Intent> {
    vec![
        Intent::field_changed(FormField::FullName, name),
        Intent::field_changed(FormField::Email, format!("{}@feedback.in", name.to_lowercase())),
        Intent::field_changed(FormField::Password, format!("{}-secret", name)),
        Intent::field_changed(FormField::Address, "221 MG Road"),
        Intent::field_changed(FormField::City, city),
        Intent::RatingClicked { position: rating },
    ]
}

fn open(dir: &std::path::Path) -> FormSession<FileRecordStore> {
    let store = FileRecordStore::new(dir.to_path_buf()).unwrap();
    FormSession::open(EntryStoreBridge::new(Arc::new(store)))
}

#[test]
fn test_add_edit_delete_workflow() {
    let dir = tempdir().unwrap();
    let mut session = open(dir.path());
    assert!(session.state().records.is_empty());

    // Add three entries
    for (name, city) in [("Anil", "surat"), ("Bina", "Rajkot"), ("Chetan", "Rampur")] {
        session.dispatch_all(fill(name, city, 3));
        assert!(matches!(session.dispatch(Intent::Submit), Outcome::Appended { .. }));
    }
    assert_eq!(session.state().records.len(), 3);

    // Edit the first one
    session.dispatch(Intent::EditRequested { index: 0 });
    assert!(session.view().editing);
    assert_eq!(session.view().submit_label, "Update");
    session.dispatch(Intent::field_changed(FormField::City, "Mumbai"));
    assert_eq!(
        session.dispatch(Intent::Submit),
        Outcome::Replaced { index: 0 }
    );
    assert_eq!(session.state().edit_target, EditTarget::None);

    // Delete the middle one
    session.dispatch(Intent::DeleteRequested { index: 1 });

    let reopened = open(dir.path());
    let names: Vec<&str> = reopened
        .state()
        .records
        .iter()
        .map(|r| r.full_name.as_str())
        .collect();
    assert_eq!(names, vec!["Anil", "Chetan"]);
    assert_eq!(reopened.state().records[0].city, City::Mumbai);
    assert_eq!(reopened.state().records[0].password, "Anil-secret");
}

#[test]
fn test_rejected_submit_writes_nothing() {
    let dir = tempdir().unwrap();
    let mut session = open(dir.path());

    let mut intents = fill("Dev", "surat", 2);
    intents.push(Intent::field_changed(FormField::Email, "dev@nowhere"));
    session.dispatch_all(intents);

    match session.dispatch(Intent::Submit) {
        Outcome::Rejected { errors } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(FormField::Email), Some("Invalid email address"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    assert_eq!(session.state().draft.full_name, "Dev");
    assert!(!dir.path().join("savedEntries.json").exists());
}

#[test]
fn test_stored_payload_uses_original_keys() {
    let dir = tempdir().unwrap();
    let mut session = open(dir.path());
    session.dispatch_all(fill("Esha", "Rajkot", 5));
    session.dispatch(Intent::Submit);

    let raw = std::fs::read_to_string(dir.path().join("savedEntries.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &json.as_array().unwrap()[0];
    assert_eq!(entry["fullName"], "Esha");
    assert_eq!(entry["userCity"], "Rajkot");
    assert_eq!(entry["userRating"], 5);
    assert_eq!(entry["userFeedback"], "");
}

#[test]
fn test_corrupt_slot_starts_empty_and_is_replaced() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("savedEntries.json"), "{ not json").unwrap();

    let mut session = open(dir.path());
    assert!(session.state().records.is_empty());
    assert_eq!(session.health(), &StorageHealth::Healthy);

    session.dispatch_all(fill("Farah", "Mumbai", 1));
    session.dispatch(Intent::Submit);
    assert_eq!(open(dir.path()).state().records.len(), 1);
}

#[test]
fn test_reload_then_save_keeps_payload_content() {
    let dir = tempdir().unwrap();
    let records = vec![
        Record {
            full_name: "Gita".to_string(),
            email: "gita@x.co".to_string(),
            password: "pw1".to_string(),
            address: "Block A".to_string(),
            city: City::Surat,
            rating: 1,
            feedback: "slow".to_string(),
        },
        Record {
            full_name: "Hari".to_string(),
            email: "hari@x.co".to_string(),
            password: "pw2".to_string(),
            address: "Block B".to_string(),
            city: City::Rampur,
            rating: 4,
            feedback: String::new(),
        },
    ];
    let store = Arc::new(FileRecordStore::new(dir.path().to_path_buf()).unwrap());
    let bridge = EntryStoreBridge::new(Arc::clone(&store));
    bridge.save(&records);

    let loaded = bridge.load();
    assert_eq!(loaded, records);
    bridge.save(&loaded);
    assert_eq!(bridge.load(), records);
    assert!(store.load_slot("savedEntries").unwrap().is_some());
}

#[test]
fn test_config_bridge_uses_slot_and_dir() {
    let dir = tempdir().unwrap();
    let config = FormConfig {
        data_dir: dir.path().join("data"),
        slot: "feedback".to_string(),
        pretty: true,
    };
    let mut session = FormSession::open(config.file_bridge().unwrap());
    session.dispatch_all(fill("Ira", "surat", 2));
    session.dispatch(Intent::Submit);

    let raw = std::fs::read_to_string(dir.path().join("data").join("feedback.json")).unwrap();
    assert!(raw.contains('\n'), "pretty output expected");
}
