//! Property-based tests for student-records
//!
//! - Round-trip fidelity of both data file encodings
//! - Lookup and removal invariants of the record store
//! - Run with ProptestConfig::with_cases(100)

use proptest::prelude::*;
use student_records::codec::{self, Format};
use student_records::record::StudentRecord;
use student_records::store::{LoadOutcome, RecordStore};

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Generate a record with non-empty fields and a small id range so that
/// duplicate ids show up often.
fn arb_record() -> impl Strategy<Value = StudentRecord> {
    ("\\PC{1,24}", 1u32..20, "\\PC{1,8}")
        .prop_map(|(name, id, grade)| StudentRecord::new(name, id, grade))
}

/// Generate a collection of 0..40 records
fn arb_records() -> impl Strategy<Value = Vec<StudentRecord>> {
    proptest::collection::vec(arb_record(), 0..40)
}

fn arb_format() -> impl Strategy<Value = Format> {
    prop_oneof![Just(Format::Binary), Just(Format::Json)]
}

fn store_from(records: &[StudentRecord]) -> RecordStore {
    let mut store = RecordStore::new();
    for record in records {
        store.insert(record.clone());
    }
    store
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: decode(encode(x)) == x for every format
    #[test]
    fn prop_codec_roundtrip(records in arb_records(), format in arb_format()) {
        let bytes = codec::encode(&records, format).unwrap();
        let decoded = codec::decode(&bytes).unwrap();
        prop_assert_eq!(decoded, records);
    }

    /// Property: save then load reproduces the collection in content and order
    #[test]
    fn prop_save_load_roundtrip(records in arb_records(), format in arb_format()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.dat");

        let mut store = RecordStore::with_format(format);
        store.replace_all(records.clone());
        store.save(&path).unwrap();

        let mut restored = RecordStore::new();
        prop_assert_eq!(restored.load(&path).unwrap(), LoadOutcome::Loaded(records.len()));
        prop_assert_eq!(restored.list_all(), records.as_slice());
    }

    /// Property: find_by_id returns the first record with that id
    #[test]
    fn prop_find_returns_first_match(records in arb_records(), id in 1u32..20) {
        let store = store_from(&records);
        let expected = records.iter().find(|r| r.id() == id);
        prop_assert_eq!(store.find_by_id(id), expected);
    }

    /// Property: an inserted record is found unless an earlier one shares its id
    #[test]
    fn prop_insert_then_find(records in arb_records(), record in arb_record()) {
        let mut store = store_from(&records);
        store.insert(record.clone());

        let found = store.find_by_id(record.id()).unwrap();
        if records.iter().all(|r| r.id() != record.id()) {
            prop_assert_eq!(found, &record);
        }
    }

    /// Property: remove_by_id removes every match and keeps the rest in order
    #[test]
    fn prop_remove_takes_all_matches(records in arb_records(), id in 1u32..20) {
        let mut store = store_from(&records);
        let expected: Vec<StudentRecord> =
            records.iter().filter(|r| r.id() != id).cloned().collect();

        let removed = store.remove_by_id(id);

        prop_assert_eq!(removed, expected.len() != records.len());
        prop_assert!(store.find_by_id(id).is_none());
        prop_assert_eq!(store.list_all(), expected.as_slice());
    }

    /// Property: validation accepts exactly the non-empty, positive-id inputs
    #[test]
    fn prop_validation_boundary(name in "\\PC{0,4}", id in -5i64..5, grade in "\\PC{0,4}") {
        let result = StudentRecord::validated(name.clone(), id, grade.clone());
        let valid = !name.is_empty() && !grade.is_empty() && id > 0;
        prop_assert_eq!(result.is_ok(), valid);
    }
}
