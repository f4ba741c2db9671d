//! Requirement set model

use super::CourseCode;
use serde::{Deserialize, Serialize};

/// Which list of a [`RequirementSet`] a marker fills
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RequirementField {
    /// Courses that must be taken before
    Prereq,
    /// Courses taken before or alongside
    Coreq,
    /// Recommended courses
    Recommend,
}

/// Requirements extracted for one course
///
/// Every list keeps extraction order and may contain duplicates.
/// `postreq` is derived later by the cross-referencer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Code of the described course, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<CourseCode>,

    /// Prerequisites
    #[serde(default)]
    pub prereq: Vec<CourseCode>,

    /// Corequisites, including pre-or-corequisites
    #[serde(default)]
    pub coreq: Vec<CourseCode>,

    /// Recommended courses
    #[serde(default)]
    pub recommend: Vec<CourseCode>,

    /// Courses that list this one as a prerequisite
    #[serde(default)]
    pub postreq: Vec<CourseCode>,
}

impl RequirementSet {
    /// Create an empty requirement set for a course
    #[must_use]
    pub const fn new(code: Option<CourseCode>) -> Self {
        Self {
            code,
            prereq: Vec::new(),
            coreq: Vec::new(),
            recommend: Vec::new(),
            postreq: Vec::new(),
        }
    }

    /// Mutable access to the list backing `field`
    pub fn field_mut(&mut self, field: RequirementField) -> &mut Vec<CourseCode> {
        match field {
            RequirementField::Prereq => &mut self.prereq,
            RequirementField::Coreq => &mut self.coreq,
            RequirementField::Recommend => &mut self.recommend,
        }
    }

    /// True when no requirement of any kind was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prereq.is_empty()
            && self.coreq.is_empty()
            && self.recommend.is_empty()
            && self.postreq.is_empty()
    }
}
