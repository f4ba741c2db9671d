//! Course model

use serde::{Deserialize, Serialize};

/// A course code in the form `DEPARTMENT NUMBER[LETTER]` (e.g., "CS 106A")
///
/// Codes are compared by exact string equality.
pub type CourseCode = String;

/// One catalog entry as read from the input stream
///
/// Fields other than `code` and `description` are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course code (e.g., "PHYSICS 120")
    pub code: CourseCode,

    /// Free-text catalog description
    pub description: String,
}

impl CourseRecord {
    /// Create a new course record
    #[must_use]
    pub const fn new(code: CourseCode, description: String) -> Self {
        Self { code, description }
    }
}

/// Department part of a course code: everything before the first space
///
/// A code without a space is returned whole.
#[must_use]
pub fn department_of(code: &str) -> &str {
    code.split_once(' ').map_or(code, |(department, _)| department)
}
