//! Wrapper around the Python parser.
//!
//! Parsing is the only fallible step of an analysis. A failure is not an
//! `Err` at the library boundary: it folds into the single syntax-error
//! shape the report carries, and the caller skips all further analysis.

use rustpython_parser::{Parse, ast};

use crate::issues::SyntaxErrorIssue;
use crate::utils::LineIndex;

/// Parse a Python module into its top-level statement list.
///
/// The error's byte offset is resolved to a 1-based line through
/// `line_index`; the message is the parser's own description.
pub fn parse_program(
    source: &str,
    line_index: &LineIndex,
) -> Result<ast::Suite, SyntaxErrorIssue> {
    ast::Suite::parse(source, "<input>").map_err(|err| SyntaxErrorIssue {
        line: line_index.line_of(u32::from(err.offset) as usize),
        message: err.error.to_string(),
    })
}
