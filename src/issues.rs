//! Issue and report types for Python source analysis.
//!
//! This module defines the findings the analyzer can produce. Each issue
//! is self-contained with all information needed by:
//! - Reporter: to display the issue to users
//! - Library consumers: to serialize the report (e.g. as JSON)

use serde::{Deserialize, Serialize};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnusedVariable,
    UnusedImport,
    StarImport,
    SyntaxError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnusedVariable => write!(f, "unused-variable"),
            Rule::UnusedImport => write!(f, "unused-import"),
            Rule::StarImport => write!(f, "star-import"),
            Rule::SyntaxError => write!(f, "syntax-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Variable assigned somewhere in the file but never read anywhere in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnusedVarIssue {
    pub name: String,
    /// Line of the most recent assignment in the defining scope.
    pub line: usize,
}

impl UnusedVarIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedVariable
    }
}

/// Import whose root segment never appears in a read position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnusedImportIssue {
    /// Qualified name: `module` for plain imports, `module.member` for
    /// from-imports.
    pub name: String,
    pub line: usize,
}

impl UnusedImportIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedImport
    }
}

/// Parse failure. When present it is the only finding in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxErrorIssue {
    /// 1-based line, or 0 when the parser gave no usable position.
    pub line: usize,
    pub message: String,
}

impl SyntaxErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::SyntaxError
    }
}

/// `from module import *`. Usage of a wildcard import is statically
/// unverifiable, so it is surfaced as its own finding instead of being
/// matched against reads. The line is always reported as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarImportIssue {
    pub module: String,
    pub line: usize,
}

impl StarImportIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::StarImport
    }
}

// ============================================================
// Report
// ============================================================

/// Aggregate result of analyzing one source buffer.
///
/// A syntax error is exclusive: when `syntax_errors` is non-empty the
/// other three lists are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub unused_vars: Vec<UnusedVarIssue>,
    pub unused_imports: Vec<UnusedImportIssue>,
    pub syntax_errors: Vec<SyntaxErrorIssue>,
    pub star_imports: Vec<StarImportIssue>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.unused_vars.is_empty()
            && self.unused_imports.is_empty()
            && self.syntax_errors.is_empty()
            && self.star_imports.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.syntax_errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.unused_vars.len() + self.unused_imports.len() + self.star_imports.len()
    }
}
