//! Batch parsing and postrequisite cross-referencing

use crate::config::ExtractConfig;
use crate::core::models::{CourseCode, CourseRecord, RequirementSet};
use crate::core::parser::parse_course;
use crate::debug;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Switches for [`parse_all`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Drop references to courses that are not in the input batch
    pub filter_codes: bool,
    /// Fill `postreq` by inverting the prerequisite lists
    pub add_postreq: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            filter_codes: true,
            add_postreq: true,
        }
    }
}

impl From<&ExtractConfig> for ParseOptions {
    fn from(config: &ExtractConfig) -> Self {
        Self {
            filter_codes: config.filter_codes,
            add_postreq: config.add_postreq,
        }
    }
}

/// Parse every course in a batch
///
/// Courses are parsed in parallel; the output keeps input order. When
/// `filter_codes` is set, the codes of the batch form the allow-list. When
/// `add_postreq` is set, [`cross_reference`] runs once all courses are parsed.
#[must_use]
pub fn parse_all(courses: &[CourseRecord], options: &ParseOptions) -> Vec<RequirementSet> {
    let valid_codes: Option<HashSet<CourseCode>> = options
        .filter_codes
        .then(|| courses.iter().map(|course| course.code.clone()).collect());

    let mut results: Vec<RequirementSet> = courses
        .par_iter()
        .map(|course| {
            parse_course(
                &course.description,
                Some(course.code.as_str()),
                valid_codes.as_ref(),
            )
        })
        .collect();

    if options.add_postreq {
        cross_reference(&mut results);
    }

    for reqs in &results {
        debug!(
            "{}: {} prereq, {} coreq, {} recommend, {} postreq",
            reqs.code.as_deref().unwrap_or("<unknown>"),
            reqs.prereq.len(),
            reqs.coreq.len(),
            reqs.recommend.len(),
            reqs.postreq.len()
        );
    }

    results
}

/// Fill every `postreq` list by inverting the `prereq` lists
///
/// Existing `postreq` contents are replaced. A course is appended to the
/// `postreq` of each known prerequisite, in batch order. Prerequisites that
/// are not in the batch are ignored, as are sets without a code. When a code
/// occurs twice in the batch, its last occurrence receives the postreqs.
pub fn cross_reference(results: &mut [RequirementSet]) {
    let mut index: HashMap<CourseCode, usize> = HashMap::new();
    for (position, reqs) in results.iter_mut().enumerate() {
        reqs.postreq.clear();
        if let Some(code) = &reqs.code {
            index.insert(code.clone(), position);
        }
    }

    let mut links: Vec<(usize, CourseCode)> = Vec::new();
    for reqs in results.iter() {
        let Some(code) = &reqs.code else {
            continue;
        };
        for prereq in &reqs.prereq {
            if let Some(&target) = index.get(prereq) {
                links.push((target, code.clone()));
            }
        }
    }

    for (target, code) in links {
        results[target].postreq.push(code);
    }
}
