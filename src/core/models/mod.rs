//! Data models for `coursereqs`

pub mod course;
pub mod marker;
pub mod requirements;

pub use course::{department_of, CourseCode, CourseRecord};
pub use marker::Marker;
pub use requirements::{RequirementField, RequirementSet};
