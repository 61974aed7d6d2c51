//! Unused-import and wildcard-import detection.
//!
//! Import declarations build a table of `(qualified name, line)` records;
//! reads feed a name set from bare identifiers and the base identifier of
//! attribute chains. A record counts as used when the root segment of its
//! qualified name appears in the read set: `import os.path` is marked
//! used by any read of `os`, even an unrelated one. That matching rule is
//! part of the contract; keep it when touching this module.

use std::collections::HashSet;

use rustpython_parser::ast;

use crate::analysis::visit::{Visit, walk_expr, walk_stmt};
use crate::issues::{StarImportIssue, UnusedImportIssue};
use crate::utils::LineIndex;

/// Import findings for one module: unused records plus wildcard imports.
#[derive(Debug)]
pub struct ImportFindings {
    pub unused_imports: Vec<UnusedImportIssue>,
    pub star_imports: Vec<StarImportIssue>,
}

pub struct ImportTracker<'a> {
    line_index: &'a LineIndex,
    /// `(qualified name, declaration line)`. Re-imports at different
    /// lines stay distinct records and are reported independently.
    imports: HashSet<(String, usize)>,
    /// Modules imported via `from module import *`. Never matched
    /// against reads.
    star_imports: HashSet<String>,
    /// Bare identifier reads plus attribute-chain base identifiers.
    read_names: HashSet<String>,
}

impl<'a> ImportTracker<'a> {
    pub fn new(line_index: &'a LineIndex) -> Self {
        Self {
            line_index,
            imports: HashSet::new(),
            star_imports: HashSet::new(),
            read_names: HashSet::new(),
        }
    }

    /// Walk the module and split the import table into findings, sorted
    /// for deterministic output.
    pub fn find_unused(mut self, suite: &[ast::Stmt]) -> ImportFindings {
        self.visit_suite(suite);

        let Self {
            imports,
            star_imports,
            read_names,
            ..
        } = self;

        let mut unused_imports: Vec<UnusedImportIssue> = imports
            .into_iter()
            .filter(|(name, _)| !read_names.contains(root_segment(name)))
            .map(|(name, line)| UnusedImportIssue { name, line })
            .collect();
        unused_imports.sort_by(|a, b| a.line.cmp(&b.line).then_with(|| a.name.cmp(&b.name)));

        // Wildcard usage is unverifiable, so the records surface as their
        // own category with no usable line.
        let mut star_imports: Vec<StarImportIssue> = star_imports
            .into_iter()
            .map(|module| StarImportIssue { module, line: 0 })
            .collect();
        star_imports.sort_by(|a, b| a.module.cmp(&b.module));

        ImportFindings {
            unused_imports,
            star_imports,
        }
    }
}

/// First dot-segment of a qualified import name.
fn root_segment(qualified: &str) -> &str {
    qualified.split('.').next().unwrap_or(qualified)
}

impl Visit for ImportTracker<'_> {
    fn visit_stmt(&mut self, stmt: &ast::Stmt) {
        match stmt {
            ast::Stmt::Import(import_stmt) => {
                let line = self
                    .line_index
                    .line_of(u32::from(import_stmt.range.start()) as usize);
                for alias in &import_stmt.names {
                    self.imports
                        .insert((alias.name.as_str().to_string(), line));
                }
            }
            ast::Stmt::ImportFrom(import_from) => {
                let line = self
                    .line_index
                    .line_of(u32::from(import_from.range.start()) as usize);
                let module = import_from
                    .module
                    .as_ref()
                    .map(|module| module.as_str())
                    .unwrap_or("");
                for alias in &import_from.names {
                    if alias.name.as_str() == "*" {
                        self.star_imports.insert(module.to_string());
                    } else if module.is_empty() {
                        self.imports
                            .insert((alias.name.as_str().to_string(), line));
                    } else {
                        self.imports
                            .insert((format!("{}.{}", module, alias.name.as_str()), line));
                    }
                }
            }
            _ => walk_stmt(self, stmt),
        }
    }

    fn visit_expr(&mut self, expr: &ast::Expr) {
        match expr {
            ast::Expr::Name(name) => {
                if matches!(name.ctx, ast::ExprContext::Load) {
                    self.read_names.insert(name.id.as_str().to_string());
                }
            }
            ast::Expr::Attribute(attribute) => {
                // Unwind `a.b.c` with a loop; only the innermost base name
                // counts as a read. Intermediate and trailing attribute
                // names are never recorded on their own.
                let mut base = &*attribute.value;
                while let ast::Expr::Attribute(inner) = base {
                    base = &*inner.value;
                }
                if let ast::Expr::Name(name) = base {
                    self.read_names.insert(name.id.as_str().to_string());
                } else {
                    // Calls, subscripts and the like keep their own reads.
                    self.visit_expr(base);
                }
            }
            _ => walk_expr(self, expr),
        }
    }
}

#[cfg(test)]
mod tests {
    use rustpython_parser::{Parse, ast};

    use super::*;

    fn findings(source: &str) -> ImportFindings {
        let suite = ast::Suite::parse(source, "<test>").expect("test source should parse");
        let line_index = LineIndex::new(source);
        ImportTracker::new(&line_index).find_unused(&suite)
    }

    fn unused_names(source: &str) -> Vec<(String, usize)> {
        findings(source)
            .unused_imports
            .into_iter()
            .map(|issue| (issue.name, issue.line))
            .collect()
    }

    #[test]
    fn test_used_import() {
        let unused = unused_names("import os\nprint(os.name)\n");
        assert!(unused.is_empty());
    }

    #[test]
    fn test_one_unused_import() {
        let unused = unused_names("import os\nimport sys\nprint(sys.path)\n");
        assert_eq!(unused, vec![("os".to_string(), 1)]);
    }

    #[test]
    fn test_dotted_import_used_via_root_segment() {
        let unused = unused_names("import os.path\nprint(os.path.join('/a', 'b'))\n");
        assert!(unused.is_empty());
    }

    #[test]
    fn test_unrelated_root_read_marks_dotted_import_used() {
        // Known false negative of the root-segment rule.
        let unused = unused_names("import os.path\nimport os\nprint(os.getcwd())\n");
        assert!(unused.is_empty());
    }

    #[test]
    fn test_from_import_records_qualified_names() {
        let unused = unused_names("from sys import path, version\n");
        assert_eq!(
            unused,
            vec![
                ("sys.path".to_string(), 1),
                ("sys.version".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_from_import_matches_on_root_segment() {
        // Reading the member alone does not reach the `sys` root; the
        // record only counts as used once `sys` itself is read.
        let unused = unused_names("from sys import path\nprint(sys.maxsize)\nprint(path)\n");
        assert!(unused.is_empty());
    }

    #[test]
    fn test_star_import_is_never_unused() {
        let result = findings("from math import *\nprint(pi)\n");
        assert!(result.unused_imports.is_empty());
        assert_eq!(result.star_imports.len(), 1);
        assert_eq!(result.star_imports[0].module, "math");
        assert_eq!(result.star_imports[0].line, 0);
    }

    #[test]
    fn test_star_module_also_imported_by_name() {
        let result = findings("from os import *\nfrom os import getcwd\n");
        assert_eq!(result.star_imports.len(), 1);
        assert_eq!(result.star_imports[0].module, "os");
        assert_eq!(
            result
                .unused_imports
                .iter()
                .map(|issue| issue.name.as_str())
                .collect::<Vec<_>>(),
            vec!["os.getcwd"]
        );
    }

    #[test]
    fn test_duplicate_star_imports_collapse() {
        let result = findings("from math import *\nfrom math import *\n");
        assert_eq!(result.star_imports.len(), 1);
        assert_eq!(result.star_imports[0].module, "math");
    }

    #[test]
    fn test_relative_import_without_module() {
        let unused = unused_names("from . import helpers\n");
        assert_eq!(unused, vec![("helpers".to_string(), 1)]);
    }

    #[test]
    fn test_reimport_reported_per_line() {
        let unused = unused_names("import os\nimport os\n");
        assert_eq!(
            unused,
            vec![("os".to_string(), 1), ("os".to_string(), 2)]
        );
    }

    #[test]
    fn test_attribute_base_behind_call_is_read() {
        let unused = unused_names("import os\nprint(get_env(os).sep)\n");
        assert!(unused.is_empty());
    }

    #[test]
    fn test_attribute_write_counts_as_read() {
        let unused = unused_names("import settings\nsettings.debug = True\n");
        assert!(unused.is_empty());
    }
}
