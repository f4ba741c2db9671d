//! Extract command handler

use coursereqs::config::Config;
use coursereqs::core::crossref::{parse_all, ParseOptions};
use coursereqs::core::io::{is_stdio, open_input, open_output, read_courses, write_requirements};
use coursereqs::core::models::RequirementSet;
use coursereqs::{error, info, verbose};
use std::path::Path;

/// Read course records, extract their requirements and write one record per course.
///
/// # Arguments
/// * `input` - Input path; `None` or `-` reads stdin
/// * `output` - Output path; `None` or `-` writes stdout
/// * `config` - Effective configuration (extraction switches)
///
/// # Errors
/// Returns a printable message when the input cannot be read or decoded, or the
/// output cannot be written. Nothing is written when the input is malformed.
pub fn run(input: Option<&Path>, output: Option<&Path>, config: &Config) -> Result<(), String> {
    let input_label = stream_label(input, "stdin");
    let output_label = stream_label(output, "stdout");

    let reader = open_input(input).map_err(|e| {
        error!("Failed to open {input_label}: {e}");
        format!("✗ Failed to open {input_label}: {e}")
    })?;
    let courses = read_courses(reader).map_err(|e| {
        error!("Failed to read course records from {input_label}: {e}");
        format!("✗ Failed to read {input_label}: {e}")
    })?;
    info!("Loaded {} course records from {input_label}", courses.len());
    verbose!("✓ Loaded {} courses from {input_label}", courses.len());

    let options = ParseOptions::from(&config.extract);
    let results = parse_all(&courses, &options);

    let writer = open_output(output).map_err(|e| {
        error!("Failed to create {output_label}: {e}");
        format!("✗ Failed to create {output_label}: {e}")
    })?;
    write_requirements(writer, &results).map_err(|e| {
        error!("Failed to write requirement records to {output_label}: {e}");
        format!("✗ Failed to write {output_label}: {e}")
    })?;
    info!("Wrote {} requirement records to {output_label}", results.len());

    let summary = Summary::of(&results);
    verbose!(
        "✓ {} of {} courses list requirements ({} prereq, {} coreq, {} recommend references)",
        summary.with_requirements,
        results.len(),
        summary.prereq,
        summary.coreq,
        summary.recommend
    );

    Ok(())
}

fn stream_label(path: Option<&Path>, stdio: &str) -> String {
    match path {
        Some(path) if !is_stdio(path) => path.display().to_string(),
        _ => stdio.to_string(),
    }
}

/// Reference counts for the verbose summary
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    with_requirements: usize,
    prereq: usize,
    coreq: usize,
    recommend: usize,
}

impl Summary {
    fn of(results: &[RequirementSet]) -> Self {
        results.iter().fold(Self::default(), |mut acc, reqs| {
            if !(reqs.prereq.is_empty() && reqs.coreq.is_empty() && reqs.recommend.is_empty()) {
                acc.with_requirements += 1;
            }
            acc.prereq += reqs.prereq.len();
            acc.coreq += reqs.coreq.len();
            acc.recommend += reqs.recommend.len();
            acc
        })
    }
}
