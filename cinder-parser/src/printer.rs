//! Pretty-printer producing source text that parses back to the same AST.

use std::fmt::{self, Display, Write};

use crate::ast::*;

const INDENT: &str = "    ";

/// Prints every declaration of `unit`, one per line.
pub fn print_translation_unit(unit: &TranslationUnit) -> String {
    unit.to_string()
}

impl Display for TranslationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printer = Printer { f, depth: 0 };
        for decl in &self.declarations {
            printer.decl(decl)?;
            printer.f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Writes declarations and statements, tracking the block depth for indentation.
struct Printer<'a, 'f> {
    f: &'a mut fmt::Formatter<'f>,
    depth: usize,
}

impl Printer<'_, '_> {
    fn decl(&mut self, decl: &Decl) -> fmt::Result {
        match decl {
            Decl::Func(func) => {
                write!(self.f, "{} {}(", func.ty, func.declarator)?;
                for (i, param) in func.params.iter().enumerate() {
                    if i > 0 {
                        self.f.write_str(", ")?;
                    }
                    self.param(param)?;
                }
                self.f.write_char(')')?;
                match &func.body {
                    Some(body) => {
                        self.f.write_char(' ')?;
                        self.compound(body)
                    }
                    None => self.f.write_char(';'),
                }
            }
            Decl::Var(var) => self.var(var),
            Decl::Parameter(param) => self.param(param),
        }
    }

    fn param(&mut self, param: &ParameterDecl) -> fmt::Result {
        write!(self.f, "{} {}", param.ty, param.declarator)
    }

    fn var(&mut self, var: &VarDecl) -> fmt::Result {
        write!(self.f, "{} ", var.ty)?;
        for (i, declarator) in var.declarators.iter().enumerate() {
            if i > 0 {
                self.f.write_str(", ")?;
            }
            write!(self.f, "{}", declarator)?;
        }
        self.f.write_char(';')
    }

    fn compound(&mut self, compound: &CompoundStmt) -> fmt::Result {
        if compound.body.is_empty() {
            return self.f.write_str("{}");
        }

        self.f.write_str("{\n")?;
        self.depth += 1;
        for stmt in &compound.body {
            self.indent()?;
            self.stmt(stmt)?;
            self.f.write_char('\n')?;
        }
        self.depth -= 1;
        self.indent()?;
        self.f.write_char('}')
    }

    /// Writes `stmt` without leading indentation or trailing newline.
    fn stmt(&mut self, stmt: &Stmt) -> fmt::Result {
        match stmt {
            Stmt::Compound(compound) => self.compound(compound),
            Stmt::Conditional {
                if_branch,
                elif_branches,
                else_branch,
            } => {
                self.branch("if", if_branch)?;
                for branch in elif_branches {
                    self.f.write_char(' ')?;
                    self.branch("elif", branch)?;
                }
                if let Some(else_branch) = else_branch {
                    self.f.write_str(" else ")?;
                    self.stmt(else_branch)?;
                }
                Ok(())
            }
            Stmt::While { condition, body } => {
                write!(self.f, "while ({}) ", condition)?;
                self.stmt(body)
            }
            Stmt::Repeat(body) => {
                self.f.write_str("repeat ")?;
                self.stmt(body)
            }
            Stmt::For => self.f.write_str("for"),
            Stmt::Break => self.f.write_str("break;"),
            Stmt::Continue => self.f.write_str("continue;"),
            Stmt::Return(expr) => write!(self.f, "return {};", expr),
            Stmt::Declaration(var) => self.var(var),
            Stmt::Expr(expr) => write!(self.f, "{};", expr),
        }
    }

    fn branch(&mut self, keyword: &str, branch: &Branch) -> fmt::Result {
        write!(self.f, "{} ({}) ", keyword, branch.condition)?;
        self.stmt(&branch.body)
    }

    fn indent(&mut self) -> fmt::Result {
        for _ in 0..self.depth {
            self.f.write_str(INDENT)?;
        }
        Ok(())
    }
}

impl Display for Declarator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declarator::NoPtr(ident) => write!(f, "{}", ident),
            Declarator::Ptr(ident) => write!(f, "*{}", ident),
        }
    }
}

impl Display for InitDeclarator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.declarator)?;
        if let Some(initializer) = &self.initializer {
            write!(f, " = {}", initializer)?;
        }
        Ok(())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::IntLit(text)
            | Expr::FloatLit(text)
            | Expr::CharLit(text)
            | Expr::StringLit(text)
            | Expr::BoolLit(text)
            | Expr::Identifier(text) => f.write_str(text),
            Expr::Paren(inner) => write!(f, "({})", inner),
            Expr::Binary { op, lhs, rhs } => write!(f, "{} {} {}", lhs, op, rhs),
            Expr::Prefix { op, arg } => match **arg {
                // keep `- -x` from printing as `--x`
                Expr::Prefix { .. } => write!(f, "{} {}", op, arg),
                _ => write!(f, "{}{}", op, arg),
            },
            Expr::PostfixIncrement(base) => write!(f, "{}++", base),
            Expr::PostfixDecrement(base) => write!(f, "{}--", base),
            Expr::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
            Expr::Subscript { base, index } => write!(f, "{}[{}]", base, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::parser::Parser;
    use insta::assert_snapshot;

    fn parse(source: &str) -> TranslationUnit {
        Parser::new(lex(source).unwrap()).parse_program().unwrap()
    }

    fn assert_round_trip(source: &str) {
        let ast = parse(source);
        let printed = print_translation_unit(&ast);
        assert_eq!(parse(&printed), ast, "printed:\n{}", printed);
        assert_eq!(print_translation_unit(&parse(&printed)), printed);
    }

    #[test]
    fn test_print_program() {
        let ast = parse(
            "int  fact(int n){if(n<=1)return 1;else{return n*fact(n-1);}}
             int *p=&x,y; bool is_even(int n);",
        );
        assert_snapshot!(print_translation_unit(&ast).trim_end(), @r###"
int fact(int n) {
    if (n <= 1) return 1; else {
        return n * fact(n - 1);
    }
}
int *p = &x, y;
bool is_even(int n);
"###);
    }

    #[test]
    fn test_print_statements() {
        let ast = parse(
            "void main() { while (i < 10) { i++; if (a) {} elif (b) break; } repeat continue; int s = \"hi\"; }",
        );
        assert_snapshot!(print_translation_unit(&ast).trim_end(), @r###"
void main() {
    while (i < 10) {
        i++;
        if (a) {} elif (b) break;
    }
    repeat continue;
    int s = "hi";
}
"###);
    }

    #[test]
    fn test_print_expr() {
        let ast = parse("int x = - -a - +(b + c) * f(1, 'c')[i]--;");
        let printed = print_translation_unit(&ast);
        assert_snapshot!(printed.trim_end(), @"int x = - -a - +(b + c) * f(1, 'c')[i]--;");
    }

    #[test]
    fn test_round_trip() {
        assert_round_trip("int f(); float g(float *a, char b) {}");
        assert_round_trip("int x = 1 - 2 - 3, *y = 8 / (4 / 2);");
        assert_round_trip("int a = 1 * 2 + 3 ^ 4 == 5 || !b && c;");
        assert_round_trip("void m() { a += b = c **= 2; x = - - -y; z = &*p; k = ++i + i++ + --j; }");
        assert_round_trip(
            "void m() { if (a) if (b) x; else y; elif (c) { repeat { z; } } else while (d) d--; }",
        );
        assert_round_trip("bool t = f()[0]++ != a[b[c]](d, e(f));");
    }

    /// Accepts `capacity` bytes, then fails every write.
    struct Bounded {
        out: String,
        capacity: usize,
    }

    impl Write for Bounded {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.out.len() + s.len() > self.capacity {
                return Err(fmt::Error);
            }
            self.out.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_propagate() {
        let ast = parse("void main() { while (x) { if (y) { z; } } }");
        let printed = ast.to_string();
        assert_eq!(printed, print_translation_unit(&ast));

        for capacity in [0, 10, printed.len() - 3] {
            let mut sink = Bounded {
                out: String::new(),
                capacity,
            };
            assert_eq!(write!(sink, "{}", ast), Err(fmt::Error));
            assert!(printed.starts_with(&sink.out));
        }

        let mut sink = Bounded {
            out: String::new(),
            capacity: printed.len(),
        };
        assert_eq!(write!(sink, "{}", ast), Ok(()));
        assert_eq!(sink.out, printed);
    }
}
