//! Binary data file encoding
//!
//! ```text
//! offset 0   magic     b"SREC"
//! offset 4   version   u16 LE
//! offset 6   flags     u16 LE (reserved, must be 0)
//! offset 8   count     u32 LE
//! offset 12  records   count x { id u32 LE, name_len u32 LE, name,
//!                                grade_len u32 LE, grade }
//! end - 4    crc32     u32 LE over every preceding byte
//! ```
//!
//! Strings are UTF-8. The checksum covers the header, so a damaged count or
//! version is caught before any record is parsed.

use super::FORMAT_VERSION;
use crate::record::StudentRecord;
use crate::{Error, Result};

/// File magic for the binary encoding
pub const MAGIC: [u8; 4] = *b"SREC";

/// Size of the file header in bytes (magic + version + flags + count).
pub const HEADER_SIZE: usize = 12;

/// Size of the CRC-32 footer in bytes.
pub const CHECKSUM_SIZE: usize = 4;

/// Smallest possible encoded record (id + two empty length-prefixed strings).
const MIN_RECORD_SIZE: usize = 12;

/// Encode the collection as a binary data file.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the collection or one of its fields is
/// too large for a `u32` length prefix.
pub fn encode(records: &[StudentRecord]) -> Result<Vec<u8>> {
    let count = u32::try_from(records.len())
        .map_err(|_| Error::Validation(format!("too many records: {}", records.len())))?;

    let payload: usize = records
        .iter()
        .map(|r| MIN_RECORD_SIZE + r.name().len() + r.grade().len())
        .sum();
    let mut buf = Vec::with_capacity(HEADER_SIZE + payload + CHECKSUM_SIZE);

    buf.extend_from_slice(&MAGIC);
    buf.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    buf.extend_from_slice(&0u16.to_le_bytes());
    buf.extend_from_slice(&count.to_le_bytes());

    for record in records {
        buf.extend_from_slice(&record.id().to_le_bytes());
        put_str(&mut buf, record.name(), "name")?;
        put_str(&mut buf, record.grade(), "grade")?;
    }

    let crc = crc32fast::hash(&buf);
    buf.extend_from_slice(&crc.to_le_bytes());
    Ok(buf)
}

/// Decode a binary data file.
///
/// # Errors
///
/// Returns [`Error::UnsupportedVersion`] for a version other than
/// [`FORMAT_VERSION`], and [`Error::Corrupt`] for a bad magic, checksum
/// mismatch, truncated record, invalid UTF-8 or trailing bytes.
pub fn decode(bytes: &[u8]) -> Result<Vec<StudentRecord>> {
    if bytes.len() < HEADER_SIZE + CHECKSUM_SIZE {
        return Err(Error::Corrupt(format!(
            "file too short for header: {} bytes",
            bytes.len()
        )));
    }
    if bytes[..4] != MAGIC {
        return Err(Error::Corrupt("bad magic".to_string()));
    }

    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != FORMAT_VERSION {
        return Err(Error::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }

    let (body, footer) = bytes.split_at(bytes.len() - CHECKSUM_SIZE);
    let stored = u32::from_le_bytes([footer[0], footer[1], footer[2], footer[3]]);
    let computed = crc32fast::hash(body);
    if stored != computed {
        return Err(Error::Corrupt(format!(
            "checksum mismatch: stored {stored:#010x}, computed {computed:#010x}"
        )));
    }

    let flags = u16::from_le_bytes([bytes[6], bytes[7]]);
    if flags != 0 {
        return Err(Error::Corrupt(format!("unknown header flags {flags:#06x}")));
    }

    let mut reader = Reader::new(body, 8);
    let count = reader.u32("record count")?;

    // Bound the allocation by what the body could actually hold.
    let capacity = usize::try_from(count).map_or(0, |c| c.min(body.len() / MIN_RECORD_SIZE));
    let mut records = Vec::with_capacity(capacity);

    for _ in 0..count {
        let id = reader.u32("id")?;
        let name = reader.string("name")?;
        let grade = reader.string("grade")?;
        records.push(StudentRecord::new(name, id, grade));
    }

    if reader.remaining() > 0 {
        return Err(Error::Corrupt(format!(
            "{} trailing bytes after {count} records",
            reader.remaining()
        )));
    }

    Ok(records)
}

fn put_str(buf: &mut Vec<u8>, value: &str, what: &str) -> Result<()> {
    let len = u32::try_from(value.len())
        .map_err(|_| Error::Validation(format!("{what} too long to encode: {} bytes", value.len())))?;
    buf.extend_from_slice(&len.to_le_bytes());
    buf.extend_from_slice(value.as_bytes());
    Ok(())
}

/// Bounds-checked cursor over the checksummed body.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    const fn new(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| Error::Corrupt(format!("truncated {what} at offset {}", self.pos)))?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u32(&mut self, what: &str) -> Result<u32> {
        let b = self.take(4, what)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn string(&mut self, what: &str) -> Result<String> {
        let len = self.u32(what)?;
        let len = usize::try_from(len)
            .map_err(|_| Error::Corrupt(format!("{what} length {len} out of range")))?;
        let bytes = self.take(len, what)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::Corrupt(format!("{what} is not valid UTF-8: {e}")))
    }
}
