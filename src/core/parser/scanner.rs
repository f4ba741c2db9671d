//! Course reference scanner
//!
//! Walks a span of description text once, left to right, and yields the
//! course codes it names. Department context carries across references, so
//! "MATH 52 and 53" yields both "MATH 52" and "MATH 53", and a bare number
//! with no department in front of it falls back to the describing course's
//! department.

use crate::core::models::CourseCode;
use regex::Regex;
use std::collections::VecDeque;
use std::sync::LazyLock;

/// Uppercase run followed, possibly through whitespace, by a digit.
/// Group 2 ends where the digit begins.
static DEPARTMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)(\s*)[0-9]").expect("department pattern"));

/// One to three digits with an optional uppercase suffix letter.
static COURSE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,3})([A-Z])?").expect("course number pattern"));

/// "/B" or " or B" directly after a course number.
/// The letter must also be followed by whitespace, a comma or the end of text.
static FOLLOW_ON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:/|\s+or\s+)([A-Z])").expect("follow-on pattern"));

/// Optional comma, optional "or"/"and", with whitespace around. May be empty.
static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^,?\s*(?:or|and)?\s*").expect("separator pattern"));

/// Lazily scans a span for course codes
///
/// The scanner is finite and cannot be restarted; build a new one to rescan.
#[derive(Debug, Clone)]
pub struct CourseScanner<'a> {
    text: &'a str,
    default_department: &'a str,
    current_department: &'a str,
    cursor: usize,
    pending: VecDeque<CourseCode>,
    finished: bool,
}

impl<'a> CourseScanner<'a> {
    /// Create a scanner over `text`
    ///
    /// # Arguments
    /// * `text` - Span to scan
    /// * `default_department` - Department for numbers with no department before them
    #[must_use]
    pub fn new(text: &'a str, default_department: &'a str) -> Self {
        Self {
            text,
            default_department,
            current_department: default_department,
            cursor: 0,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Consume the next course-number token and queue the codes it names.
    /// Returns `false` once no course number remains.
    fn advance(&mut self) -> bool {
        let department = DEPARTMENT.captures_at(self.text, self.cursor).and_then(|caps| {
            Some((caps.get(1)?.as_str(), caps.get(2)?.end()))
        });

        let Some(number_caps) = COURSE_NUMBER.captures_at(self.text, self.cursor) else {
            return false;
        };
        let (Some(token), Some(number)) = (number_caps.get(0), number_caps.get(1)) else {
            return false;
        };

        // A number right after the previous reference keeps its department.
        if token.start() != self.cursor {
            match department {
                Some((next, dept_end)) if token.start() == dept_end => {
                    self.current_department = next;
                }
                // The department token belongs to a later number.
                Some((_, dept_end)) if token.start() < dept_end => {}
                _ => self.current_department = self.default_department,
            }
        }

        self.cursor = token.end();

        let mut letters = vec![number_caps.get(2).map_or("", |m| m.as_str())];
        if let Some((letter, consumed)) = self.follow_on_letter() {
            letters.push(letter);
            self.cursor += consumed;
        }

        for letter in letters {
            self.pending.push_back(format!(
                "{} {}{letter}",
                self.current_department,
                number.as_str()
            ));
        }

        if let Some(separator) = LIST_SEPARATOR.find(&self.text[self.cursor..]) {
            self.cursor += separator.end();
        }

        true
    }

    /// Letter extending the number just read, with the byte length consumed
    fn follow_on_letter(&self) -> Option<(&'a str, usize)> {
        let text = self.text;
        let rest = &text[self.cursor..];
        let caps = FOLLOW_ON_LETTER.captures(rest)?;
        let letter = caps.get(1)?;
        let terminated = rest[letter.end()..]
            .chars()
            .next()
            .is_none_or(|c| c.is_whitespace() || c == ',');
        terminated.then(|| (letter.as_str(), letter.end()))
    }
}

impl Iterator for CourseScanner<'_> {
    type Item = CourseCode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(code) = self.pending.pop_front() {
                return Some(code);
            }
            if self.finished {
                return None;
            }
            if !self.advance() {
                self.finished = true;
            }
        }
    }
}

/// Extract every candidate course code in `text`, in order of appearance
///
/// # Arguments
/// * `text` - Span of description text
/// * `department` - Department assumed for bare course numbers
///
/// # Examples
/// ```
/// use coursereqs::core::parser::extract_courses;
///
/// let courses = extract_courses("106B or X, or consent of instructor.", "CS");
/// assert_eq!(courses, vec!["CS 106B", "CS 106X"]);
/// ```
#[must_use]
pub fn extract_courses(text: &str, department: &str) -> Vec<CourseCode> {
    CourseScanner::new(text, department).collect()
}
