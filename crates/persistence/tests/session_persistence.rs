//! End-to-end persistence contract: corrupted record → seed fallback →
//! recovered save → clean reload in a later session.

use std::fs;
use std::path::PathBuf;

use stockpile_core::VocabularyKind;
use stockpile_engine::{Operation, Store};
use stockpile_persistence::{FileBackend, SnapshotBackend, SnapshotStore};

fn scratch_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("stockpile-session-{}", uuid::Uuid::now_v7()))
        .join("inventory.json")
}

#[test]
fn corrupted_record_falls_back_to_seed_and_recovers_on_save() {
    stockpile_observability::init();

    let path = scratch_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, b"\x00\x01 definitely not a snapshot").unwrap();

    // First session: the garbage record is swallowed, seed data takes over.
    let mut store =
        Store::with_persistence(Box::new(SnapshotStore::new(FileBackend::new(&path))));
    assert_eq!(store.current().products.len(), 5);

    // The first accepted operation persists a readable record again.
    store.apply(Operation::AddVocabularyItem {
        kind: VocabularyKind::Category,
        value: "Tools".to_string(),
    });

    let reloaded = SnapshotStore::new(FileBackend::new(&path)).load().unwrap();
    assert!(reloaded.categories.contains(&"Tools".to_string()));
    assert_eq!(reloaded.products.len(), 5);

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn a_second_session_resumes_from_the_persisted_snapshot() {
    let path = scratch_path();

    let mut first =
        Store::with_persistence(Box::new(SnapshotStore::new(FileBackend::new(&path))));
    first.apply(Operation::AddVocabularyItem {
        kind: VocabularyKind::Location,
        value: "Warehouse D".to_string(),
    });
    let expected = first.current().clone();
    drop(first);

    let second =
        Store::with_persistence(Box::new(SnapshotStore::new(FileBackend::new(&path))));
    assert_eq!(second.current(), &expected);

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn raw_backend_bytes_are_the_snapshot_wire_shape() {
    let path = scratch_path();

    let mut store =
        Store::with_persistence(Box::new(SnapshotStore::new(FileBackend::new(&path))));
    store.apply(Operation::DeleteVocabularyItem {
        kind: VocabularyKind::Category,
        value: "Hardware".to_string(),
    });

    let bytes = FileBackend::new(&path).load().unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(value.get("products").is_some());
    assert!(value["products"][0].get("reorderLevel").is_some());
    assert!(
        !value["categories"]
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c == "Hardware")
    );

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}
