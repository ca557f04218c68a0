//! Record store tests: lookup/removal semantics and whole-file persistence

use std::fs;

use student_records::codec::Format;
use student_records::record::StudentRecord;
use student_records::store::{LoadOutcome, RecordStore};
use student_records::Error;

// =============================================================================
// In-memory operations
// =============================================================================

#[test]
fn test_duplicate_id_scenario() {
    let mut store = RecordStore::new();
    store.insert(StudentRecord::new("Alice", 1, "A"));
    store.insert(StudentRecord::new("Bob", 2, "B"));
    store.insert(StudentRecord::new("Carl", 1, "C"));

    // First match wins on lookup
    assert_eq!(store.find_by_id(1), Some(&StudentRecord::new("Alice", 1, "A")));

    // Removal takes every match
    assert!(store.remove_by_id(1));
    assert_eq!(store.list_all(), &[StudentRecord::new("Bob", 2, "B")]);
    assert!(store.find_by_id(1).is_none());
}

#[test]
fn test_insert_then_find() {
    let mut store = RecordStore::new();
    let record = StudentRecord::validated("Dana", 17, "B-").unwrap();
    store.insert(record.clone());

    assert_eq!(store.find_by_id(17), Some(&record));
}

#[test]
fn test_list_all_empty() {
    let store = RecordStore::new();
    assert!(store.list_all().is_empty());
}

#[test]
fn test_rejected_record_never_reaches_store() {
    let store = RecordStore::new();
    assert!(StudentRecord::validated("Eve", 0, "A").is_err());
    assert_eq!(store.len(), 0);
}

// =============================================================================
// Persistence
// =============================================================================

fn sample_store(format: Format) -> RecordStore {
    let mut store = RecordStore::with_format(format);
    store.insert(StudentRecord::new("Alice", 1, "A"));
    store.insert(StudentRecord::new("Bob", 2, "B"));
    store.insert(StudentRecord::new("Carl", 1, "C"));
    store
}

#[test]
fn test_save_load_roundtrip_both_formats() {
    let dir = tempfile::tempdir().unwrap();

    for format in [Format::Binary, Format::Json] {
        let path = dir.path().join(format!("students.{format}"));
        let original = sample_store(format);
        original.save(&path).unwrap();

        let mut restored = RecordStore::new();
        assert_eq!(restored.load(&path).unwrap(), LoadOutcome::Loaded(3));
        assert_eq!(restored.list_all(), original.list_all(), "format {format}");
    }
}

#[test]
fn test_empty_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.dat");

    RecordStore::new().save(&path).unwrap();

    let mut restored = sample_store(Format::Binary);
    assert_eq!(restored.load(&path).unwrap(), LoadOutcome::Loaded(0));
    assert!(restored.is_empty());
}

#[test]
fn test_load_replaces_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.dat");

    let mut saved = RecordStore::new();
    saved.insert(StudentRecord::new("Zed", 26, "Z"));
    saved.save(&path).unwrap();

    let mut store = sample_store(Format::Binary);
    store.load(&path).unwrap();
    assert_eq!(store.list_all(), &[StudentRecord::new("Zed", 26, "Z")]);
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.dat");
    fs::write(&path, vec![0xAB; 4096]).unwrap();

    let store = sample_store(Format::Binary);
    store.save(&path).unwrap();

    let mut restored = RecordStore::new();
    restored.load(&path).unwrap();
    assert_eq!(restored.list_all(), store.list_all());
}

#[test]
fn test_load_missing_file_keeps_collection() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = sample_store(Format::Binary);

    let outcome = store.load(dir.path().join("does-not-exist.dat")).unwrap();

    assert_eq!(outcome, LoadOutcome::Missing);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_load_corrupt_file_keeps_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.dat");
    fs::write(&path, b"this is not a student file").unwrap();

    let mut store = sample_store(Format::Binary);
    let err = store.load(&path).unwrap_err();

    assert!(matches!(err, Error::Corrupt(_)));
    assert_eq!(store.len(), 3);
}

#[test]
fn test_load_damaged_binary_file_keeps_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.dat");
    sample_store(Format::Binary).save(&path).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    fs::write(&path, bytes).unwrap();

    let mut store = RecordStore::new();
    store.insert(StudentRecord::new("Keep", 9, "K"));
    assert!(matches!(store.load(&path), Err(Error::Corrupt(_))));
    assert_eq!(store.list_all(), &[StudentRecord::new("Keep", 9, "K")]);
}

#[test]
fn test_load_directory_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecordStore::new();

    let err = store.load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(store.is_empty());
}

#[test]
fn test_save_to_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("students.dat");

    let err = sample_store(Format::Binary).save(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_load_accepts_format_other_than_configured() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.json");
    sample_store(Format::Json).save(&path).unwrap();

    let mut store = RecordStore::with_format(Format::Binary);
    assert_eq!(store.load(&path).unwrap(), LoadOutcome::Loaded(3));
    assert_eq!(store.format(), Format::Binary);
}
