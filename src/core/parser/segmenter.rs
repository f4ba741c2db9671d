//! Field segmenter
//!
//! Finds each requirement marker in a description, cuts out the text it
//! governs and scans that text for course codes.

use super::scanner::CourseScanner;
use crate::core::models::{department_of, CourseCode, Marker, RequirementSet};
use crate::debug;
use std::collections::HashSet;

/// Sentence terminator that ends a marker's span
const SENTENCE_END: &str = ". ";

/// Replace line breaks so they never act as field boundaries
#[must_use]
pub fn normalize_description(description: &str) -> String {
    description.replace('\n', " ").replace('\r', "")
}

/// Span governed by the first occurrence of `marker` in `text`
///
/// The span starts at the marker phrase and always takes at least one
/// character past it. It ends just before the first later position where
/// another marker's phrase begins, a `". "` begins, or the text ends.
#[must_use]
pub fn marker_span(text: &str, marker: Marker) -> Option<&str> {
    let (start, phrase_end) = marker.find(text)?;
    let end = text[phrase_end..]
        .char_indices()
        .skip(1)
        .map(|(offset, _)| phrase_end + offset)
        .find(|&pos| is_span_boundary(text, pos, marker))
        .unwrap_or(text.len());
    Some(&text[start..end])
}

fn is_span_boundary(text: &str, pos: usize, marker: Marker) -> bool {
    text[pos..].starts_with(SENTENCE_END)
        || Marker::ALL
            .iter()
            .any(|&other| other != marker && other.starts_at(text, pos))
}

/// All marker spans of a description, in marker order
///
/// Markers that do not occur are omitted.
#[must_use]
pub fn marker_spans(text: &str) -> Vec<(Marker, &str)> {
    Marker::ALL
        .iter()
        .filter_map(|&marker| marker_span(text, marker).map(|span| (marker, span)))
        .collect()
}

/// Parse a course description into its requirement lists
///
/// # Arguments
/// * `description` - Free-text catalog description
/// * `code` - Code of the described course; its department is the default for
///   bare numbers and the code itself is never listed. With `None` the default
///   department is empty.
/// * `valid_codes` - When given, only codes in this set are kept
///
/// # Returns
/// A `RequirementSet` with `prereq`, `coreq` and `recommend` filled in and an
/// empty `postreq`
#[must_use]
pub fn parse_course(
    description: &str,
    code: Option<&str>,
    valid_codes: Option<&HashSet<CourseCode>>,
) -> RequirementSet {
    let text = normalize_description(description);
    let department = code.map_or("", department_of);
    let mut requirements = RequirementSet::new(code.map(str::to_string));

    for (marker, span) in marker_spans(&text) {
        debug!("{}: {marker} span {span:?}", code.unwrap_or("<unknown>"));
        let courses = CourseScanner::new(span, department)
            .filter(|course| Some(course.as_str()) != code)
            .filter(|course| valid_codes.is_none_or(|valid| valid.contains(course)));
        requirements.field_mut(marker.field()).extend(courses);
    }

    requirements
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHYSICS_120: &str = "
Vector analysis. Electrostatic fields, including boundary-value problems and multipole expansion.
Dielectrics, static and variable magnetic fields, magnetic materials. Maxwell's equations.
Prerequisites: PHYSICS 43 or PHYS 63; MATH 52 and MATH 53.
Pre- or corequisite: MATH 131P or MATH 173. Recommended corequisite: PHYS 112.
";

    #[test]
    fn test_normalize_description() {
        assert_eq!(normalize_description("a\r\nb\nc"), "a b c");
    }

    #[test]
    fn test_spans_stop_at_sentence_end() {
        let text = normalize_description(PHYSICS_120);
        let spans = marker_spans(&text);
        assert_eq!(
            spans,
            vec![
                (
                    Marker::Prerequisite,
                    "Prerequisites: PHYSICS 43 or PHYS 63; MATH 52 and MATH 53"
                ),
                (
                    Marker::PreCorequisite,
                    "Pre- or corequisite: MATH 131P or MATH 173"
                ),
                (Marker::Recommended, "Recommended corequisite: PHYS 112"),
            ]
        );
    }

    #[test]
    fn test_span_stops_at_next_marker() {
        let text = "Prerequisite: CS 107 Corequisite: CS 110";
        assert_eq!(
            marker_span(text, Marker::Prerequisite),
            Some("Prerequisite: CS 107 ")
        );
        assert_eq!(
            marker_span(text, Marker::Corequisite),
            Some("Corequisite: CS 110")
        );
    }

    #[test]
    fn test_span_runs_to_end_of_text() {
        assert_eq!(
            marker_span("Recommended: 161", Marker::Recommended),
            Some("Recommended: 161")
        );
    }

    #[test]
    fn test_period_without_space_does_not_end_span() {
        assert_eq!(
            marker_span("Prerequisite: Math 51.5 or CS 103", Marker::Prerequisite),
            Some("Prerequisite: Math 51.5 or CS 103")
        );
    }

    #[test]
    fn test_sentence_end_right_after_marker_does_not_end_span() {
        assert_eq!(
            marker_span("Prerequisite. CS 107 and 108", Marker::Prerequisite),
            Some("Prerequisite. CS 107 and 108")
        );
        let reqs = parse_course("Prerequisite. CS 107 and 108", Some("CS 1"), None);
        assert_eq!(reqs.prereq, vec!["CS 107", "CS 108"]);
    }

    #[test]
    fn test_pre_corequisite_phrase_spans_sentences() {
        let reqs = parse_course(
            "Pre-med students. See corequisite list: CS 107.",
            Some("CS 1"),
            None,
        );
        assert_eq!(reqs.coreq, vec!["CS 107"]);
    }

    #[test]
    fn test_pre_corequisite_phrase_spans_other_markers() {
        let text = "Pre-registration required. Recommended corequisite: PHYS 112.";
        assert_eq!(marker_span(text, Marker::PreCorequisite), Some(text));

        let reqs = parse_course(text, Some("PHYSICS 120"), None);
        assert_eq!(reqs.coreq, vec!["PHYS 112"]);
        assert_eq!(reqs.recommend, vec!["PHYS 112"]);
    }

    #[test]
    fn test_parse_physics_120() {
        let reqs = parse_course(PHYSICS_120, Some("PHYSICS 120"), None);
        assert_eq!(reqs.code.as_deref(), Some("PHYSICS 120"));
        assert_eq!(reqs.prereq, vec!["PHYSICS 43", "PHYS 63", "MATH 52", "MATH 53"]);
        assert_eq!(reqs.coreq, vec!["MATH 131P", "MATH 173"]);
        assert_eq!(reqs.recommend, vec!["PHYS 112"]);
        assert!(reqs.postreq.is_empty());
    }

    #[test]
    fn test_coreq_keeps_marker_order() {
        let reqs = parse_course(
            "Corequisite: 110. Pre- or corequisite: 103.",
            Some("CS 161"),
            None,
        );
        assert_eq!(reqs.coreq, vec!["CS 103", "CS 110"]);
    }

    #[test]
    fn test_self_reference_removed() {
        let reqs = parse_course("Prerequisite: 106B or 107.", Some("CS 107"), None);
        assert_eq!(reqs.prereq, vec!["CS 106B"]);
    }

    #[test]
    fn test_allow_list_filters() {
        let valid: HashSet<CourseCode> = ["CS 106B".to_string(), "CS 110".to_string()]
            .into_iter()
            .collect();
        let reqs = parse_course(
            "Prerequisite: 106B or X, or 110.",
            Some("CS 161"),
            Some(&valid),
        );
        assert_eq!(reqs.prereq, vec!["CS 106B", "CS 110"]);
    }

    #[test]
    fn test_no_code_gives_empty_department() {
        let reqs = parse_course("Prerequisite: 107.", None, None);
        assert_eq!(reqs.code, None);
        assert_eq!(reqs.prereq, vec![" 107"]);
    }

    #[test]
    fn test_no_markers() {
        let reqs = parse_course("An introduction to CS 106A topics.", Some("CS 1"), None);
        assert!(reqs.is_empty());
    }
}
