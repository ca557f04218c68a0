//! JSON data file encoding
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "Alice", "id": 1, "grade": "A" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::FORMAT_VERSION;
use crate::record::StudentRecord;
use crate::{Error, Result};

#[derive(Serialize)]
struct DocumentRef<'a> {
    version: u16,
    records: &'a [StudentRecord],
}

#[derive(Deserialize)]
struct Document {
    version: u16,
    records: Vec<StudentRecord>,
}

/// Encode the collection as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization fails.
pub fn encode(records: &[StudentRecord]) -> Result<Vec<u8>> {
    let doc = DocumentRef {
        version: FORMAT_VERSION,
        records,
    };
    let mut bytes = serde_json::to_vec_pretty(&doc)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decode a JSON document.
///
/// # Errors
///
/// Returns [`Error::Corrupt`] if the bytes are not a valid document, or
/// [`Error::UnsupportedVersion`] for a version other than [`FORMAT_VERSION`].
pub fn decode(bytes: &[u8]) -> Result<Vec<StudentRecord>> {
    let doc: Document = serde_json::from_slice(bytes)
        .map_err(|e| Error::Corrupt(format!("not a valid JSON collection: {e}")))?;

    if doc.version != FORMAT_VERSION {
        return Err(Error::UnsupportedVersion {
            found: doc.version,
            expected: FORMAT_VERSION,
        });
    }

    Ok(doc.records)
}
