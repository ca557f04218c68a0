//! Data file encodings
//!
//! A data file always holds the entire record collection as a single blob.
//! Two encodings are supported:
//!
//! - [`Format::Binary`] (default): versioned, length-prefixed records with a
//!   CRC-32 footer. See [`binary`] for the layout.
//! - [`Format::Json`]: a versioned, pretty-printed JSON document.
//!
//! [`decode`] detects the encoding from the content, so a file written in
//! either format can always be loaded.
//!
//! # Example
//!
//! ```rust
//! use student_records::codec::{self, Format};
//! use student_records::record::StudentRecord;
//!
//! let records = vec![StudentRecord::new("Alice", 1, "A")];
//! let bytes = codec::encode(&records, Format::Binary)?;
//! assert_eq!(codec::decode(&bytes)?, records);
//! # Ok::<(), student_records::Error>(())
//! ```

pub mod binary;
pub mod json;

use std::fmt;
use std::str::FromStr;

use crate::record::StudentRecord;
use crate::{Error, Result};

/// Format revision written by this build (shared by both encodings)
pub const FORMAT_VERSION: u16 = 1;

/// On-disk encoding of the record collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Length-prefixed binary records with a checksum (default)
    #[default]
    Binary,
    /// Pretty-printed JSON document
    Json,
}

impl Format {
    /// Get format name as string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" => Ok(Self::Binary),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!(
                "unknown data file format {other:?} (expected \"binary\" or \"json\")"
            ))),
        }
    }
}

/// Encode the whole collection in the given format.
///
/// # Errors
///
/// Returns [`Error::Json`] if JSON serialization fails, or
/// [`Error::Validation`] if a field is too large for the binary length
/// prefix.
pub fn encode(records: &[StudentRecord], format: Format) -> Result<Vec<u8>> {
    match format {
        Format::Binary => binary::encode(records),
        Format::Json => json::encode(records),
    }
}

/// Decode a whole collection, detecting the encoding from the content.
///
/// # Errors
///
/// Returns [`Error::Corrupt`] if the bytes are neither a valid binary nor a
/// valid JSON collection, or [`Error::UnsupportedVersion`] if the file was
/// written by a different format revision.
pub fn decode(bytes: &[u8]) -> Result<Vec<StudentRecord>> {
    if bytes.starts_with(&binary::MAGIC) {
        binary::decode(bytes)
    } else {
        json::decode(bytes)
    }
}
