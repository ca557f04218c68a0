//! Student record data model
//!
//! ## Usage
//!
//! ```rust
//! use student_records::record::StudentRecord;
//!
//! // Unchecked construction, e.g. when the fields are already trusted
//! let alice = StudentRecord::new("Alice", 1, "A");
//!
//! // Checked construction from user input
//! assert!(StudentRecord::validated("Bob", 0, "B").is_err());
//! assert_eq!(alice.id(), 1);
//! ```

mod student_record;

pub use student_record::StudentRecord;
