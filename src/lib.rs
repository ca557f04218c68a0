//! # student-records: Interactive Student Record Manager
//!
//! **Version**: 0.1.0
//!
//! A single-user record manager for a small collection of students (name,
//! id, grade). Records live in memory for the session; the whole collection
//! is restored from a data file at startup and written back on exit.
//!
//! ## Modules
//!
//! - [`record`]: the `StudentRecord` data model and its validation boundary
//! - [`store`]: the ordered in-memory collection and whole-file persistence
//! - [`codec`]: versioned binary and JSON data file encodings
//! - [`shell`]: the text menu loop
//! - [`config`]: data file path and format from the environment
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use student_records::record::StudentRecord;
//! use student_records::store::{LoadOutcome, RecordStore};
//!
//! let mut store = RecordStore::new();
//! if store.load("students.dat")? == LoadOutcome::Missing {
//!     println!("starting fresh");
//! }
//!
//! store.insert(StudentRecord::validated("Alice", 1, "A")?);
//! assert_eq!(store.find_by_id(1).map(StudentRecord::name), Some("Alice"));
//!
//! store.save("students.dat")?;
//! # Ok::<(), student_records::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod codec;
pub mod config;
pub mod error;
pub mod record;
pub mod shell;
pub mod store;

pub use error::{Error, Result};
