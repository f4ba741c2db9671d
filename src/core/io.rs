//! JSON-lines input and output
//!
//! Input is one course document per line; output is one requirement document
//! per line. A path of `-` (or no path) means stdin/stdout.

use crate::core::models::{CourseRecord, RequirementSet};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Failure while reading course records
#[derive(Debug)]
pub enum InputError {
    /// The stream could not be read
    Io(io::Error),
    /// A line is not a JSON course document with `code` and `description`
    Malformed {
        /// 1-based line number
        line: usize,
        /// Decoder error
        source: serde_json::Error,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "read error: {e}"),
            Self::Malformed { line, source } => {
                write!(f, "malformed course record on line {line}: {source}")
            }
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Whether `path` names the standard stream
#[must_use]
pub fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

/// Open the input stream: a file, or stdin for `None` / `-`
///
/// # Errors
/// Returns an error if the file cannot be opened
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    match path {
        Some(path) if !is_stdio(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Open the output stream: a file (created or truncated), or stdout for `None` / `-`
///
/// # Errors
/// Returns an error if the file cannot be created
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) if !is_stdio(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        _ => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Decode one course record per line
///
/// Any line that fails to decode aborts the whole read, blank lines included:
/// silently dropping a course would corrupt the postreq cross-reference.
///
/// # Errors
/// Returns `InputError::Io` on read failure and `InputError::Malformed` for
/// the first undecodable line
pub fn read_courses<R: BufRead>(reader: R) -> Result<Vec<CourseRecord>, InputError> {
    let mut courses = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let course = serde_json::from_str(&line).map_err(|source| InputError::Malformed {
            line: idx + 1,
            source,
        })?;
        courses.push(course);
    }
    Ok(courses)
}

/// Encode one requirement record per line and flush
///
/// # Errors
/// Returns an error if encoding or writing fails
pub fn write_requirements<W: Write>(mut writer: W, sets: &[RequirementSet]) -> io::Result<()> {
    for set in sets {
        serde_json::to_writer(&mut writer, set)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_courses() {
        let input = concat!(
            r#"{"code": "CS 106A", "description": "Intro."}"#,
            "\n",
            r#"{"code": "CS 106B", "description": "Prerequisite: 106A.", "units": 5}"#,
            "\n"
        );
        let courses = read_courses(Cursor::new(input)).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1].code, "CS 106B");
        assert_eq!(courses[1].description, "Prerequisite: 106A.");
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let input = concat!(
            r#"{"code": "CS 106A", "description": "Intro."}"#,
            "\n",
            r#"{"code": "CS 106B"}"#,
            "\n"
        );
        match read_courses(Cursor::new(input)) {
            Err(InputError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected malformed record error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_is_fatal() {
        let input = "\n";
        assert!(matches!(
            read_courses(Cursor::new(input)),
            Err(InputError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(read_courses(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_write_requirements() {
        let mut set = RequirementSet::new(Some("CS 107".to_string()));
        set.prereq.push("CS 106B".to_string());
        let mut out = Vec::new();
        write_requirements(&mut out, &[set, RequirementSet::new(Some("CS 1".to_string()))])
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"code":"CS 107","prereq":["CS 106B"],"coreq":[],"recommend":[],"postreq":[]}"#
        );
    }

    #[test]
    fn test_is_stdio() {
        assert!(is_stdio(Path::new("-")));
        assert!(!is_stdio(Path::new("courses.jsonl")));
    }

    #[test]
    fn test_error_display() {
        let source = serde_json::from_str::<CourseRecord>("{").unwrap_err();
        let err = InputError::Malformed { line: 3, source };
        assert!(err.to_string().starts_with("malformed course record on line 3"));
    }
}
