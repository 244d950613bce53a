//! Session storage backend and persistence adapter tests.

use data_playground::data::StorageError;
use data_playground::session::{FileStorage, MemoryStorage, SessionPersistence, SessionStorage};
use data_playground::types::{SchemaField, SessionSnapshot};
use std::sync::Arc;

fn snapshot() -> SessionSnapshot {
    SessionSnapshot {
        schema: vec![SchemaField::text("Name")],
        ..Default::default()
    }
}

#[test]
fn test_memory_quota_rejects_large_values() {
    let storage = MemoryStorage::with_quota(16);
    storage.set_item("k", "small").unwrap();
    let err = storage.set_item("k", &"x".repeat(64)).unwrap_err();
    assert!(matches!(err, StorageError::QuotaExceeded { .. }));
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("small"));
}

#[test]
fn test_file_storage_round_trip_and_destroy() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("session"));

    assert_eq!(storage.get_item("dataPlayground").unwrap(), None);
    storage.set_item("dataPlayground", "{}").unwrap();
    assert_eq!(storage.get_item("dataPlayground").unwrap().as_deref(), Some("{}"));

    storage.remove_item("dataPlayground").unwrap();
    storage.remove_item("dataPlayground").unwrap();
    assert_eq!(storage.get_item("dataPlayground").unwrap(), None);

    storage.destroy().unwrap();
    assert!(!storage.dir().exists());
}

#[test]
fn test_persistence_uses_fixed_key() {
    let storage = Arc::new(MemoryStorage::new());
    let persistence = SessionPersistence::new(storage.clone());
    assert_eq!(persistence.key(), "dataPlayground");

    assert!(persistence.save(&snapshot()));
    assert!(storage.get_item("dataPlayground").unwrap().is_some());
    assert_eq!(persistence.load(), Some(snapshot()));

    persistence.clear();
    assert!(storage.is_empty());
    assert_eq!(persistence.load(), None);
}

#[test]
fn test_corrupt_document_loads_as_none() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set_item("dataPlayground", "{ nope").unwrap();
    assert_eq!(SessionPersistence::new(storage).load(), None);
}

#[test]
fn test_partial_document_fills_defaults() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .set_item("dataPlayground", r#"{"schema": [{"name": "Name", "type": "text"}]}"#)
        .unwrap();
    let loaded = SessionPersistence::new(storage).load().unwrap();
    assert_eq!(loaded, snapshot());
}

#[test]
fn test_failed_save_reports_false() {
    let persistence = SessionPersistence::new(Arc::new(MemoryStorage::with_quota(4)));
    assert!(!persistence.save(&snapshot()));
}
