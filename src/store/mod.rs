//! Record Store - in-memory student records with whole-file persistence
//!
//! The collection is an ordered sequence. Lookups and removals are linear
//! scans in sequence order; nothing enforces id uniqueness.
//!
//! Persistence is all-or-nothing: [`RecordStore::save`] writes the entire
//! collection, [`RecordStore::load`] replaces it entirely or not at all.

use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::codec::{self, Format};
use crate::record::StudentRecord;
use crate::Result;

/// Result of a [`RecordStore::load`] that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was decoded and replaced the collection (record count).
    Loaded(usize),
    /// No file exists at the path; the collection is unchanged.
    Missing,
}

/// In-memory store for student records.
///
/// ## Duplicate ids
///
/// Records sharing an id coexist. [`find_by_id`](Self::find_by_id) returns
/// the first one in sequence order, while
/// [`remove_by_id`](Self::remove_by_id) removes all of them.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
    format: Format,
}

impl RecordStore {
    /// Create a new empty store that saves in the default format.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty store that saves in the given format.
    #[must_use]
    pub const fn with_format(format: Format) -> Self {
        Self {
            records: Vec::new(),
            format,
        }
    }

    /// Get the format used by [`save`](Self::save).
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Get the number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record. Fields are not validated and ids are not checked
    /// for uniqueness.
    pub fn insert(&mut self, record: StudentRecord) {
        self.records.push(record);
    }

    /// Remove every record with the given id.
    ///
    /// Returns `true` if at least one record was removed. Surviving records
    /// keep their relative order.
    pub fn remove_by_id(&mut self, id: u32) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }

    /// Get the first record with the given id, in sequence order.
    #[must_use]
    pub fn find_by_id(&self, id: u32) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Get all records in sequence order.
    #[must_use]
    pub fn list_all(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Replace the whole collection.
    pub fn replace_all(&mut self, records: Vec<StudentRecord>) {
        self.records = records;
    }

    /// Write the entire collection to `path`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be created
    /// or written, or an encoding error from [`codec::encode`].
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = codec::encode(&self.records, self.format)?;

        let mut file = File::create(path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;

        info!(
            path = %path.display(),
            records = self.records.len(),
            bytes = bytes.len(),
            format = %self.format,
            "saved student records"
        );
        Ok(())
    }

    /// Replace the collection with the contents of `path`.
    ///
    /// A missing file is not an error: it yields [`LoadOutcome::Missing`]
    /// and leaves the collection untouched. On any error the collection is
    /// also left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file exists but cannot
    /// be read, and [`Error::Corrupt`](crate::Error::Corrupt) or
    /// [`Error::UnsupportedVersion`](crate::Error::UnsupportedVersion) if its
    /// content does not decode.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadOutcome> {
        let path = path.as_ref();

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no data file");
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => return Err(e.into()),
        };

        let records = codec::decode(&bytes)?;
        let count = records.len();
        self.replace_all(records);

        info!(path = %path.display(), records = count, "loaded student records");
        Ok(LoadOutcome::Loaded(count))
    }
}
