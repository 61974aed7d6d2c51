//! Report formatting and printing utilities.
//!
//! This module renders a [`Report`] in cargo-style format. It is separate
//! from the core analysis so pysweep can be used as a library without
//! printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use crate::issues::{
    Report, Rule, Severity, StarImportIssue, SyntaxErrorIssue, UnusedImportIssue, UnusedVarIssue,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a report to stdout.
///
/// `file_path` labels locations; `source` supplies the quoted context
/// lines.
pub fn print_report(report: &Report, file_path: &str, source: &str) {
    report_to(report, file_path, source, &mut io::stdout().lock());
}

/// Print a report to a custom writer. Useful for testing or redirecting
/// output.
pub fn report_to<W: Write>(report: &Report, file_path: &str, source: &str, writer: &mut W) {
    if report.is_empty() {
        print_success_to(file_path, writer);
        return;
    }

    let source_lines: Vec<&str> = source.lines().collect();
    let max_line_width = calculate_max_line_width(report);

    for issue in &report.syntax_errors {
        print_finding(
            writer,
            SyntaxErrorIssue::severity(),
            &issue.message,
            SyntaxErrorIssue::rule(),
            file_path,
            issue.line,
            &source_lines,
            max_line_width,
        );
    }
    for issue in &report.unused_vars {
        print_finding(
            writer,
            UnusedVarIssue::severity(),
            &issue.name,
            UnusedVarIssue::rule(),
            file_path,
            issue.line,
            &source_lines,
            max_line_width,
        );
    }
    for issue in &report.unused_imports {
        print_finding(
            writer,
            UnusedImportIssue::severity(),
            &issue.name,
            UnusedImportIssue::rule(),
            file_path,
            issue.line,
            &source_lines,
            max_line_width,
        );
    }
    for issue in &report.star_imports {
        print_finding(
            writer,
            StarImportIssue::severity(),
            &issue.module,
            StarImportIssue::rule(),
            file_path,
            issue.line,
            &source_lines,
            max_line_width,
        );
    }

    print_summary(report, writer);
}

/// Print the all-clear message when a file has no findings.
pub fn print_success(file_path: &str) {
    print_success_to(file_path, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(file_path: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Checked {} - no issues found", file_path).green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

#[allow(clippy::too_many_arguments)]
fn print_finding<W: Write>(
    writer: &mut W,
    severity: Severity,
    message: &str,
    rule: Rule,
    file_path: &str,
    line: usize,
    source_lines: &[&str],
    max_line_width: usize,
) {
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        message,
        rule.to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line
    let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), file_path, line);

    // Quote the offending line when the report points inside the buffer;
    // star imports carry line 0 and get no context.
    if line >= 1 && line <= source_lines.len() {
        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_lines[line - 1],
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between findings
}

fn print_summary<W: Write>(report: &Report, writer: &mut W) {
    let total_errors = report.error_count();
    let total_warnings = report.warning_count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(report: &Report) -> usize {
    let max_line = report
        .syntax_errors
        .iter()
        .map(|issue| issue.line)
        .chain(report.unused_vars.iter().map(|issue| issue.line))
        .chain(report.unused_imports.iter().map(|issue| issue.line))
        .chain(report.star_imports.iter().map(|issue| issue.line))
        .max()
        .unwrap_or(0);
    max_line.to_string().len().max(1)
}

// ============================================================
// Tests
// ============================================================
