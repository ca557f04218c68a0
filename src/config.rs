//! Deployment configuration
//!
//! Environment variables:
//! - `STUDENT_RECORDS_FILE`: data file path (default: `students.dat`)
//! - `STUDENT_RECORDS_FORMAT`: `binary` (default) or `json`
//!
//! Empty values count as unset.

use std::path::PathBuf;

use crate::codec::Format;
use crate::Result;

/// Data file used when `STUDENT_RECORDS_FILE` is not set
pub const DEFAULT_DATA_FILE: &str = "students.dat";

/// Environment variable naming the data file
pub const DATA_FILE_VAR: &str = "STUDENT_RECORDS_FILE";

/// Environment variable naming the save format
pub const FORMAT_VAR: &str = "STUDENT_RECORDS_FORMAT";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Data file loaded at startup and written on exit
    pub data_file: PathBuf,
    /// Encoding used when saving
    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            format: Format::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if
    /// `STUDENT_RECORDS_FORMAT` names an unknown format.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the format
    /// variable names an unknown format.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_file =
            get(DATA_FILE_VAR).map_or_else(|| PathBuf::from(DEFAULT_DATA_FILE), PathBuf::from);
        let format = get(FORMAT_VAR)
            .map(|v| v.parse::<Format>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self { data_file, format })
    }
}
