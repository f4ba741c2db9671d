//! Description parsing: marker segmentation and course reference scanning

pub mod scanner;
pub mod segmenter;

pub use scanner::{extract_courses, CourseScanner};
pub use segmenter::{marker_span, marker_spans, normalize_description, parse_course};
