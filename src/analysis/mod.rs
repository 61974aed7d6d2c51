//! Core analysis engine.
//!
//! One entry point, [`analyze`], drives the pipeline: parse the source,
//! then run the variable and import trackers as two independent
//! traversals of the same tree and merge their findings into a
//! [`Report`]. All state is constructed fresh per call, so concurrent
//! analyses of different buffers share nothing.

pub mod imports;
pub mod parser;
pub mod variables;
pub mod visit;

use crate::issues::Report;
use crate::utils::LineIndex;

use imports::ImportTracker;
use parser::parse_program;
use variables::VariableTracker;

/// Analyze one Python source buffer.
///
/// A parse failure produces a report holding only the syntax error; the
/// usage trackers never run on a broken tree, and partial results are
/// never mixed with a syntax-error report.
pub fn analyze(source: &str) -> Report {
    let line_index = LineIndex::new(source);
    let mut report = Report::default();

    let suite = match parse_program(source, &line_index) {
        Ok(suite) => suite,
        Err(error) => {
            report.syntax_errors.push(error);
            return report;
        }
    };

    report.unused_vars = VariableTracker::new(&line_index).find_unused(&suite);

    let import_findings = ImportTracker::new(&line_index).find_unused(&suite);
    report.unused_imports = import_findings.unused_imports;
    report.star_imports = import_findings.star_imports;

    report
}
