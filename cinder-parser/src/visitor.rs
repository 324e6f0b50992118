//! Visitor pattern for AST nodes.

use crate::ast::{
    Branch, CompoundStmt, Decl, Expr, InitDeclarator, Stmt, TranslationUnit, VarDecl,
};

pub trait Visitor<'ast>: Sized {
    fn visit_decl(&mut self, decl: &'ast Decl) {
        walk_decl(self, decl);
    }
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
}

/// Visits every top-level declaration in program order.
pub fn walk_translation_unit<'ast>(visitor: &mut impl Visitor<'ast>, unit: &'ast TranslationUnit) {
    for decl in &unit.declarations {
        visitor.visit_decl(decl);
    }
}

pub fn walk_decl<'ast>(visitor: &mut impl Visitor<'ast>, decl: &'ast Decl) {
    match decl {
        Decl::Func(func) => {
            for param in &func.params {
                walk_init_declarator(visitor, &param.declarator);
            }
            if let Some(body) = &func.body {
                walk_compound(visitor, body);
            }
        }
        Decl::Var(var) => walk_var_decl(visitor, var),
        Decl::Parameter(param) => walk_init_declarator(visitor, &param.declarator),
    }
}

fn walk_var_decl<'ast>(visitor: &mut impl Visitor<'ast>, var: &'ast VarDecl) {
    for declarator in &var.declarators {
        walk_init_declarator(visitor, declarator);
    }
}

fn walk_init_declarator<'ast>(visitor: &mut impl Visitor<'ast>, declarator: &'ast InitDeclarator) {
    if let Some(initializer) = &declarator.initializer {
        visitor.visit_expr(initializer);
    }
}

fn walk_compound<'ast>(visitor: &mut impl Visitor<'ast>, compound: &'ast CompoundStmt) {
    for stmt in &compound.body {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'ast>(visitor: &mut impl Visitor<'ast>, stmt: &'ast Stmt) {
    /// Visits the condition then the body of a branch.
    macro_rules! visit_branch {
        ($visitor: expr, $branch: expr) => {{
            let Branch { condition, body } = $branch;
            $visitor.visit_expr(condition);
            $visitor.visit_stmt(body);
        }};
    }

    match stmt {
        Stmt::Compound(compound) => walk_compound(visitor, compound),
        Stmt::Conditional {
            if_branch,
            elif_branches,
            else_branch,
        } => {
            visit_branch!(visitor, if_branch);
            for branch in elif_branches {
                visit_branch!(visitor, branch);
            }
            if let Some(else_branch) = else_branch {
                visitor.visit_stmt(else_branch);
            }
        }
        Stmt::While { condition, body } => {
            visitor.visit_expr(condition);
            visitor.visit_stmt(body);
        }
        Stmt::Repeat(body) => visitor.visit_stmt(body),
        Stmt::For | Stmt::Break | Stmt::Continue => {}
        Stmt::Return(expr) => visitor.visit_expr(expr),
        Stmt::Declaration(var) => walk_var_decl(visitor, var),
        Stmt::Expr(expr) => visitor.visit_expr(expr),
    }
}

pub fn walk_expr<'ast>(visitor: &mut impl Visitor<'ast>, expr: &'ast Expr) {
    match expr {
        Expr::IntLit(_)
        | Expr::FloatLit(_)
        | Expr::CharLit(_)
        | Expr::StringLit(_)
        | Expr::BoolLit(_)
        | Expr::Identifier(_) => {}
        Expr::Paren(inner) => visitor.visit_expr(inner),
        Expr::Binary { op: _, lhs, rhs } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
        Expr::Prefix { op: _, arg } => visitor.visit_expr(arg),
        Expr::PostfixIncrement(base) | Expr::PostfixDecrement(base) => visitor.visit_expr(base),
        Expr::Call { callee, args } => {
            visitor.visit_expr(callee);
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        Expr::Subscript { base, index } => {
            visitor.visit_expr(base);
            visitor.visit_expr(index);
        }
    }
}
