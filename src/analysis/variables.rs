//! Unused-variable detection.
//!
//! Records simple assignment targets per lexical scope and diffs them
//! against one global read set once the whole tree has been visited.
//! Reads are not partitioned by scope: a read anywhere in the file marks
//! the name used in every scope. That imprecision is part of the
//! contract, not something to tighten into per-scope shadowing.

use std::collections::HashSet;

use rustpython_parser::ast;

use crate::analysis::visit::{Visit, walk_expr, walk_stmt};
use crate::issues::UnusedVarIssue;
use crate::utils::LineIndex;

/// A retained assignment record. Frames are popped from the active stack
/// for scoping, but their entries live on here until the final diff:
/// a read that decides usage can appear anywhere in the file, in any
/// order relative to the definition.
#[derive(Debug)]
struct Binding {
    /// Id of the frame the assignment happened in.
    scope: usize,
    name: String,
    line: usize,
}

pub struct VariableTracker<'a> {
    line_index: &'a LineIndex,
    /// Active frame ids; the root frame is always present.
    scope_stack: Vec<usize>,
    next_scope: usize,
    /// Append-only; survives scope exit.
    bindings: Vec<Binding>,
    /// One flat set for the entire tree.
    read_names: HashSet<String>,
}

impl<'a> VariableTracker<'a> {
    pub fn new(line_index: &'a LineIndex) -> Self {
        Self {
            line_index,
            scope_stack: vec![0],
            next_scope: 1,
            bindings: Vec::new(),
            read_names: HashSet::new(),
        }
    }

    /// Walk the module and return every retained binding whose name was
    /// never read, sorted by line then name.
    pub fn find_unused(mut self, suite: &[ast::Stmt]) -> Vec<UnusedVarIssue> {
        self.visit_suite(suite);

        let Self {
            bindings,
            read_names,
            ..
        } = self;

        let mut unused: Vec<UnusedVarIssue> = bindings
            .into_iter()
            .filter(|binding| !read_names.contains(&binding.name))
            .map(|binding| UnusedVarIssue {
                name: binding.name,
                line: binding.line,
            })
            .collect();
        unused.sort_by(|a, b| a.line.cmp(&b.line).then_with(|| a.name.cmp(&b.name)));
        unused
    }

    fn enter_scope(&mut self) {
        self.scope_stack.push(self.next_scope);
        self.next_scope += 1;
    }

    fn exit_scope(&mut self) {
        self.scope_stack.pop();
    }

    fn record_assignment(&mut self, name: &str, line: usize) {
        let scope = self.scope_stack.last().copied().unwrap_or(0);

        // Re-assignment within the same frame keeps only the last line.
        if let Some(existing) = self
            .bindings
            .iter_mut()
            .find(|binding| binding.scope == scope && binding.name == name)
        {
            existing.line = line;
        } else {
            self.bindings.push(Binding {
                scope,
                name: name.to_string(),
                line,
            });
        }
    }
}

impl Visit for VariableTracker<'_> {
    fn visit_stmt(&mut self, stmt: &ast::Stmt) {
        match stmt {
            ast::Stmt::FunctionDef(_) | ast::Stmt::AsyncFunctionDef(_) | ast::Stmt::ClassDef(_) => {
                self.enter_scope();
                walk_stmt(self, stmt);
                self.exit_scope();
            }
            ast::Stmt::Assign(assign) => {
                let line = self
                    .line_index
                    .line_of(u32::from(assign.range.start()) as usize);
                // Only direct name targets count as definitions; attribute
                // and subscript targets (and tuple unpacking) do not.
                for target in &assign.targets {
                    if let ast::Expr::Name(name) = target {
                        self.record_assignment(name.id.as_str(), line);
                    }
                }
                walk_stmt(self, stmt);
            }
            _ => walk_stmt(self, stmt),
        }
    }

    fn visit_expr(&mut self, expr: &ast::Expr) {
        if let ast::Expr::Name(name) = expr {
            if matches!(name.ctx, ast::ExprContext::Load) {
                self.read_names.insert(name.id.as_str().to_string());
            }
        }
        walk_expr(self, expr);
    }
}
