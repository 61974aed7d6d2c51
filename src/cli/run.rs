use std::fs;

use anyhow::{Context, Result};

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::analysis::analyze;
use crate::report::print_report;

/// Read the file, run the analysis, print the report.
///
/// File I/O failures are not findings; they bubble up as errors and the
/// caller maps them to [`ExitStatus::Error`].
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let Some(file) = args.with_file_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let source = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let report = analyze(&source);
    print_report(&report, &file.display().to_string(), &source);

    if report.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Findings)
    }
}
