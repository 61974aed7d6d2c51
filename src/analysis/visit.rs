//! Minimal visitor abstraction over the Python AST.
//!
//! Trackers implement [`Visit`], override the node kinds they care about,
//! and call the matching `walk_*` function to descend into children.
//! Dispatch is one explicit match arm per node kind; kinds that carry
//! nothing the trackers observe fall through to a no-op arm.

use rustpython_parser::ast;

pub trait Visit {
    fn visit_suite(&mut self, suite: &[ast::Stmt]) {
        walk_suite(self, suite);
    }

    fn visit_stmt(&mut self, stmt: &ast::Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &ast::Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_suite<V: Visit + ?Sized>(visitor: &mut V, suite: &[ast::Stmt]) {
    for stmt in suite {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<V: Visit + ?Sized>(visitor: &mut V, stmt: &ast::Stmt) {
    match stmt {
        ast::Stmt::FunctionDef(def) => {
            for decorator in &def.decorator_list {
                visitor.visit_expr(decorator);
            }
            if let Some(returns) = &def.returns {
                visitor.visit_expr(returns);
            }
            visitor.visit_suite(&def.body);
        }
        ast::Stmt::AsyncFunctionDef(def) => {
            for decorator in &def.decorator_list {
                visitor.visit_expr(decorator);
            }
            if let Some(returns) = &def.returns {
                visitor.visit_expr(returns);
            }
            visitor.visit_suite(&def.body);
        }
        ast::Stmt::ClassDef(def) => {
            for decorator in &def.decorator_list {
                visitor.visit_expr(decorator);
            }
            for base in &def.bases {
                visitor.visit_expr(base);
            }
            for keyword in &def.keywords {
                visitor.visit_expr(&keyword.value);
            }
            visitor.visit_suite(&def.body);
        }
        ast::Stmt::Return(return_stmt) => {
            if let Some(value) = &return_stmt.value {
                visitor.visit_expr(value);
            }
        }
        ast::Stmt::Delete(delete) => {
            for target in &delete.targets {
                visitor.visit_expr(target);
            }
        }
        ast::Stmt::Assign(assign) => {
            for target in &assign.targets {
                visitor.visit_expr(target);
            }
            visitor.visit_expr(&assign.value);
        }
        ast::Stmt::AugAssign(assign) => {
            visitor.visit_expr(&assign.target);
            visitor.visit_expr(&assign.value);
        }
        ast::Stmt::AnnAssign(assign) => {
            visitor.visit_expr(&assign.target);
            visitor.visit_expr(&assign.annotation);
            if let Some(value) = &assign.value {
                visitor.visit_expr(value);
            }
        }
        ast::Stmt::For(for_stmt) => {
            visitor.visit_expr(&for_stmt.target);
            visitor.visit_expr(&for_stmt.iter);
            visitor.visit_suite(&for_stmt.body);
            visitor.visit_suite(&for_stmt.orelse);
        }
        ast::Stmt::AsyncFor(for_stmt) => {
            visitor.visit_expr(&for_stmt.target);
            visitor.visit_expr(&for_stmt.iter);
            visitor.visit_suite(&for_stmt.body);
            visitor.visit_suite(&for_stmt.orelse);
        }
        ast::Stmt::While(while_stmt) => {
            visitor.visit_expr(&while_stmt.test);
            visitor.visit_suite(&while_stmt.body);
            visitor.visit_suite(&while_stmt.orelse);
        }
        ast::Stmt::If(if_stmt) => {
            visitor.visit_expr(&if_stmt.test);
            visitor.visit_suite(&if_stmt.body);
            visitor.visit_suite(&if_stmt.orelse);
        }
        ast::Stmt::With(with_stmt) => {
            for item in &with_stmt.items {
                visitor.visit_expr(&item.context_expr);
                if let Some(optional_vars) = &item.optional_vars {
                    visitor.visit_expr(optional_vars);
                }
            }
            visitor.visit_suite(&with_stmt.body);
        }
        ast::Stmt::AsyncWith(with_stmt) => {
            for item in &with_stmt.items {
                visitor.visit_expr(&item.context_expr);
                if let Some(optional_vars) = &item.optional_vars {
                    visitor.visit_expr(optional_vars);
                }
            }
            visitor.visit_suite(&with_stmt.body);
        }
        ast::Stmt::Match(match_stmt) => {
            visitor.visit_expr(&match_stmt.subject);
            for case in &match_stmt.cases {
                if let Some(guard) = &case.guard {
                    visitor.visit_expr(guard);
                }
                visitor.visit_suite(&case.body);
            }
        }
        ast::Stmt::Raise(raise) => {
            if let Some(exc) = &raise.exc {
                visitor.visit_expr(exc);
            }
            if let Some(cause) = &raise.cause {
                visitor.visit_expr(cause);
            }
        }
        ast::Stmt::Try(try_stmt) => {
            visitor.visit_suite(&try_stmt.body);
            for handler in &try_stmt.handlers {
                let ast::ExceptHandler::ExceptHandler(handler) = handler;
                if let Some(type_) = &handler.type_ {
                    visitor.visit_expr(type_);
                }
                visitor.visit_suite(&handler.body);
            }
            visitor.visit_suite(&try_stmt.orelse);
            visitor.visit_suite(&try_stmt.finalbody);
        }
        ast::Stmt::TryStar(try_stmt) => {
            visitor.visit_suite(&try_stmt.body);
            for handler in &try_stmt.handlers {
                let ast::ExceptHandler::ExceptHandler(handler) = handler;
                if let Some(type_) = &handler.type_ {
                    visitor.visit_expr(type_);
                }
                visitor.visit_suite(&handler.body);
            }
            visitor.visit_suite(&try_stmt.orelse);
            visitor.visit_suite(&try_stmt.finalbody);
        }
        ast::Stmt::Assert(assert) => {
            visitor.visit_expr(&assert.test);
            if let Some(msg) = &assert.msg {
                visitor.visit_expr(msg);
            }
        }
        ast::Stmt::Expr(expr_stmt) => {
            visitor.visit_expr(&expr_stmt.value);
        }
        // Import, ImportFrom, Global, Nonlocal, Pass, Break, Continue carry
        // identifiers only, no nested expressions to surface.
        _ => {}
    }
}

pub fn walk_expr<V: Visit + ?Sized>(visitor: &mut V, expr: &ast::Expr) {
    match expr {
        ast::Expr::BoolOp(bool_op) => {
            for value in &bool_op.values {
                visitor.visit_expr(value);
            }
        }
        ast::Expr::NamedExpr(named) => {
            visitor.visit_expr(&named.target);
            visitor.visit_expr(&named.value);
        }
        ast::Expr::BinOp(bin_op) => {
            visitor.visit_expr(&bin_op.left);
            visitor.visit_expr(&bin_op.right);
        }
        ast::Expr::UnaryOp(unary) => {
            visitor.visit_expr(&unary.operand);
        }
        ast::Expr::Lambda(lambda) => {
            visitor.visit_expr(&lambda.body);
        }
        ast::Expr::IfExp(if_exp) => {
            visitor.visit_expr(&if_exp.test);
            visitor.visit_expr(&if_exp.body);
            visitor.visit_expr(&if_exp.orelse);
        }
        ast::Expr::Dict(dict) => {
            for key in dict.keys.iter().flatten() {
                visitor.visit_expr(key);
            }
            for value in &dict.values {
                visitor.visit_expr(value);
            }
        }
        ast::Expr::Set(set) => {
            for elt in &set.elts {
                visitor.visit_expr(elt);
            }
        }
        ast::Expr::ListComp(comp) => {
            for generator in &comp.generators {
                visitor.visit_expr(&generator.target);
                visitor.visit_expr(&generator.iter);
                for if_clause in &generator.ifs {
                    visitor.visit_expr(if_clause);
                }
            }
            visitor.visit_expr(&comp.elt);
        }
        ast::Expr::SetComp(comp) => {
            for generator in &comp.generators {
                visitor.visit_expr(&generator.target);
                visitor.visit_expr(&generator.iter);
                for if_clause in &generator.ifs {
                    visitor.visit_expr(if_clause);
                }
            }
            visitor.visit_expr(&comp.elt);
        }
        ast::Expr::DictComp(comp) => {
            for generator in &comp.generators {
                visitor.visit_expr(&generator.target);
                visitor.visit_expr(&generator.iter);
                for if_clause in &generator.ifs {
                    visitor.visit_expr(if_clause);
                }
            }
            visitor.visit_expr(&comp.key);
            visitor.visit_expr(&comp.value);
        }
        ast::Expr::GeneratorExp(comp) => {
            for generator in &comp.generators {
                visitor.visit_expr(&generator.target);
                visitor.visit_expr(&generator.iter);
                for if_clause in &generator.ifs {
                    visitor.visit_expr(if_clause);
                }
            }
            visitor.visit_expr(&comp.elt);
        }
        ast::Expr::Await(await_expr) => {
            visitor.visit_expr(&await_expr.value);
        }
        ast::Expr::Yield(yield_expr) => {
            if let Some(value) = &yield_expr.value {
                visitor.visit_expr(value);
            }
        }
        ast::Expr::YieldFrom(yield_from) => {
            visitor.visit_expr(&yield_from.value);
        }
        ast::Expr::Compare(compare) => {
            visitor.visit_expr(&compare.left);
            for comparator in &compare.comparators {
                visitor.visit_expr(comparator);
            }
        }
        ast::Expr::Call(call) => {
            visitor.visit_expr(&call.func);
            for arg in &call.args {
                visitor.visit_expr(arg);
            }
            for keyword in &call.keywords {
                visitor.visit_expr(&keyword.value);
            }
        }
        ast::Expr::FormattedValue(formatted) => {
            visitor.visit_expr(&formatted.value);
            if let Some(format_spec) = &formatted.format_spec {
                visitor.visit_expr(format_spec);
            }
        }
        ast::Expr::JoinedStr(joined) => {
            for value in &joined.values {
                visitor.visit_expr(value);
            }
        }
        ast::Expr::Attribute(attribute) => {
            visitor.visit_expr(&attribute.value);
        }
        ast::Expr::Subscript(subscript) => {
            visitor.visit_expr(&subscript.value);
            visitor.visit_expr(&subscript.slice);
        }
        ast::Expr::Starred(starred) => {
            visitor.visit_expr(&starred.value);
        }
        ast::Expr::List(list) => {
            for elt in &list.elts {
                visitor.visit_expr(elt);
            }
        }
        ast::Expr::Tuple(tuple) => {
            for elt in &tuple.elts {
                visitor.visit_expr(elt);
            }
        }
        ast::Expr::Slice(slice) => {
            if let Some(lower) = &slice.lower {
                visitor.visit_expr(lower);
            }
            if let Some(upper) = &slice.upper {
                visitor.visit_expr(upper);
            }
            if let Some(step) = &slice.step {
                visitor.visit_expr(step);
            }
        }
        // Name and Constant are leaves.
        _ => {}
    }
}
