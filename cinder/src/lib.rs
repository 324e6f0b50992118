//! Front end for the cinder parser: lexing, parsing, logging setup and AST statistics.

use std::fmt;
use std::sync::Once;

use cinder_parser::ast::{Decl, Expr, Stmt, TranslationUnit};
use cinder_parser::lexer::lex;
use cinder_parser::parser::Parser;
use cinder_parser::visitor::{walk_decl, walk_expr, walk_stmt, walk_translation_unit, Visitor};
use cinder_source::SyntaxError;
use tracing::debug;

/// Lexes and parses `source` into a translation unit.
pub fn parse_source(source: &str) -> Result<TranslationUnit, SyntaxError> {
    let tokens = lex(source)?;
    debug!(tokens = tokens.len(), "lexed source");
    Parser::new(tokens).parse_program()
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times.
/// Enable with `RUST_LOG=cinder_parser=debug` or `RUST_LOG=cinder_parser=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Node counts of a translation unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Function definitions (with a body).
    pub functions: usize,
    pub prototypes: usize,
    /// Declared variables, global and local. Each init-declarator counts once.
    pub variables: usize,
    pub statements: usize,
    pub calls: usize,
}

impl Stats {
    pub fn collect(unit: &TranslationUnit) -> Self {
        let mut stats = Stats::default();
        walk_translation_unit(&mut stats, unit);
        stats
    }
}

impl<'ast> Visitor<'ast> for Stats {
    fn visit_decl(&mut self, decl: &'ast Decl) {
        match decl {
            Decl::Func(func) if func.body.is_some() => self.functions += 1,
            Decl::Func(_) => self.prototypes += 1,
            Decl::Var(var) => self.variables += var.declarators.len(),
            Decl::Parameter(_) => {}
        }
        walk_decl(self, decl);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        self.statements += 1;
        if let Stmt::Declaration(var) = stmt {
            self.variables += var.declarators.len();
        }
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        if let Expr::Call { .. } = expr {
            self.calls += 1;
        }
        walk_expr(self, expr);
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "functions:  {}", self.functions)?;
        writeln!(f, "prototypes: {}", self.prototypes)?;
        writeln!(f, "variables:  {}", self.variables)?;
        writeln!(f, "statements: {}", self.statements)?;
        write!(f, "calls:      {}", self.calls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let unit = parse_source(
            "int printf(string fmt, int x);
             int total = 0, *cursor;
             void main() {
                 int i = 0;
                 while (i < 10) { total += square(i); i++; }
                 printf(\"%d\", total);
             }",
        )
        .unwrap();
        assert_eq!(
            Stats::collect(&unit),
            Stats {
                functions: 1,
                prototypes: 1,
                variables: 3,
                statements: 6,
                calls: 2,
            }
        );
    }

    #[test]
    fn test_lex_error_is_syntax_error() {
        let err = parse_source("int x = $;").unwrap_err();
        assert_eq!(err.token(), "$");
    }
}
