//! Student Record - one student's name, id and grade

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Student Record holds the stored data for a single student.
///
/// The id is the lookup key within a session but is not required to be
/// unique; see [`RecordStore`](crate::store::RecordStore) for how
/// duplicates are resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentRecord {
    name: String,
    id: u32,
    grade: String,
}

impl StudentRecord {
    /// Create a student record without validating the fields.
    ///
    /// # Arguments
    ///
    /// * `name` - Student name
    /// * `id` - Identifying number
    /// * `grade` - Free-form grade
    #[must_use]
    pub fn new(name: impl Into<String>, id: u32, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
            grade: grade.into(),
        }
    }

    /// Create a student record from raw user input.
    ///
    /// `id` is taken as a signed integer so that zero and negative input can
    /// be rejected with a validation error instead of a parse failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `name` or `grade` is empty, or if
    /// `id` is not in `1..=u32::MAX`.
    pub fn validated(name: impl Into<String>, id: i64, grade: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let grade = grade.into();

        if name.is_empty() {
            return Err(Error::Validation("name must not be empty".to_string()));
        }
        if grade.is_empty() {
            return Err(Error::Validation("grade must not be empty".to_string()));
        }
        let id = u32::try_from(id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| Error::Validation(format!("id must be a positive integer, got {id}")))?;

        Ok(Self { name, id, grade })
    }

    /// Get the student name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the identifying number.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Get the grade.
    #[must_use]
    pub fn grade(&self) -> &str {
        &self.grade
    }

    /// Replace the student name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the grade.
    pub fn set_grade(&mut self, grade: impl Into<String>) {
        self.grade = grade.into();
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student{{name='{}', id={}, grade='{}'}}",
            self.name, self.id, self.grade
        )
    }
}
