//! Requirement markers: the phrases that introduce a requirement field

use super::RequirementField;
use std::fmt;

/// A requirement category introduced by a phrase in a description
///
/// Variants are listed in processing order; `ALL` preserves it, which keeps
/// pre-or-corequisites ahead of plain corequisites in the shared `coreq` list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// "Prerequisite", "Prerequisites"
    Prerequisite,
    /// "Pre-" then any text without a colon then "corequisite" (e.g. "Pre- or corequisite")
    PreCorequisite,
    /// "Corequisite", "Corequisites"
    Corequisite,
    /// "Recommended"
    Recommended,
}

const PREREQUISITE: &str = "Prerequisite";
const PRE_PREFIX: &str = "Pre-";
const PRE_SUFFIX: &str = "corequisite";
const COREQUISITE: &str = "Corequisite";
const RECOMMENDED: &str = "Recommended";

impl Marker {
    /// All markers in processing order
    pub const ALL: [Self; 4] = [
        Self::Prerequisite,
        Self::PreCorequisite,
        Self::Corequisite,
        Self::Recommended,
    ];

    /// The requirement list this marker fills
    #[must_use]
    pub const fn field(self) -> RequirementField {
        match self {
            Self::Prerequisite => RequirementField::Prereq,
            Self::PreCorequisite | Self::Corequisite => RequirementField::Coreq,
            Self::Recommended => RequirementField::Recommend,
        }
    }

    /// Whether this marker's phrase starts at byte offset `pos` of `text`
    #[must_use]
    pub fn starts_at(self, text: &str, pos: usize) -> bool {
        let Some(rest) = text.get(pos..) else {
            return false;
        };
        match self {
            Self::Prerequisite => rest.starts_with(PREREQUISITE),
            Self::Corequisite => rest.starts_with(COREQUISITE),
            Self::Recommended => rest.starts_with(RECOMMENDED),
            Self::PreCorequisite => rest
                .strip_prefix(PRE_PREFIX)
                .is_some_and(pre_corequisite_tail),
        }
    }

    /// First occurrence of this marker's phrase, as `(start, phrase_end)`
    ///
    /// A phrase only counts when at least one character follows it. For
    /// [`Marker::PreCorequisite`] the phrase runs through the last
    /// "corequisite" before the next colon.
    #[must_use]
    pub fn find(self, text: &str) -> Option<(usize, usize)> {
        let literal = match self {
            Self::Prerequisite => PREREQUISITE,
            Self::Corequisite => COREQUISITE,
            Self::Recommended => RECOMMENDED,
            Self::PreCorequisite => {
                return text.match_indices(PRE_PREFIX).find_map(|(start, _)| {
                    let tail_start = start + PRE_PREFIX.len();
                    pre_corequisite_ends(&text[tail_start..])
                        .map(|end| tail_start + end)
                        .find(|&end| end < text.len())
                        .map(|end| (start, end))
                });
            }
        };
        text.match_indices(literal)
            .map(|(start, _)| (start, start + literal.len()))
            .find(|&(_, end)| end < text.len())
    }
}

/// Text after "Pre-" up to the next colon, or all of it
fn before_colon(tail: &str) -> &str {
    tail.find(':').map_or(tail, |colon| &tail[..colon])
}

/// "corequisite" occurs before the next colon (or the end when there is none)
fn pre_corequisite_tail(tail: &str) -> bool {
    before_colon(tail).contains(PRE_SUFFIX)
}

/// Offsets just past each "corequisite" before the next colon, last first
fn pre_corequisite_ends(tail: &str) -> impl Iterator<Item = usize> + '_ {
    before_colon(tail)
        .rmatch_indices(PRE_SUFFIX)
        .map(|(pos, _)| pos + PRE_SUFFIX.len())
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Prerequisite => "prerequisite",
            Self::PreCorequisite => "pre-corequisite",
            Self::Corequisite => "corequisite",
            Self::Recommended => "recommended",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields() {
        assert_eq!(Marker::Prerequisite.field(), RequirementField::Prereq);
        assert_eq!(Marker::PreCorequisite.field(), RequirementField::Coreq);
        assert_eq!(Marker::Corequisite.field(), RequirementField::Coreq);
        assert_eq!(Marker::Recommended.field(), RequirementField::Recommend);
    }

    #[test]
    fn test_literal_markers_are_case_sensitive() {
        assert_eq!(Marker::Corequisite.find("Corequisite: CS 1."), Some((0, 11)));
        assert_eq!(Marker::Corequisite.find("Recommended corequisite: CS 1."), None);
        assert_eq!(Marker::Recommended.find("Not recommended."), None);
        assert_eq!(
            Marker::Prerequisite.find("See Prerequisites: 1"),
            Some((4, 16))
        );
    }

    #[test]
    fn test_phrase_at_end_of_text_is_skipped() {
        assert_eq!(Marker::Prerequisite.find("Prerequisite"), None);
        assert_eq!(
            Marker::Recommended.find("Recommended. Recommended"),
            Some((0, 11))
        );
    }

    #[test]
    fn test_pre_corequisite_phrase() {
        let text = "Topics. Pre- or corequisite: MATH 131P.";
        assert_eq!(Marker::PreCorequisite.find(text), Some((8, 27)));
        assert!(Marker::PreCorequisite.starts_at(text, 8));
        assert!(!Marker::PreCorequisite.starts_at(text, 9));
    }

    #[test]
    fn test_pre_corequisite_runs_to_last_corequisite() {
        assert_eq!(
            Marker::PreCorequisite.find("Pre- or corequisite, or corequisite: CS 1"),
            Some((0, 35))
        );
        // the last "corequisite" ends the text, so the earlier one is used
        assert_eq!(
            Marker::PreCorequisite.find("Pre- corequisite corequisite"),
            Some((0, 16))
        );
    }

    #[test]
    fn test_pre_corequisite_stops_at_colon() {
        // the colon comes before "corequisite", so this is not the marker
        assert_eq!(Marker::PreCorequisite.find("Pre-med: corequisite"), None);
        assert_eq!(
            Marker::PreCorequisite.find("Pre-med: x. Pre-/corequisite: y"),
            Some((12, 28))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Marker::PreCorequisite.to_string(), "pre-corequisite");
        assert_eq!(Marker::Recommended.to_string(), "recommended");
    }

    #[test]
    fn test_starts_at_out_of_range() {
        assert!(!Marker::Prerequisite.starts_at("Prerequisite", 40));
    }
}
