use super::*;

impl Parser {
    /// Parses a statement, dispatching on the leading token.
    pub fn parse_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        self.nested(Self::parse_stmt_by_leading_token)
    }

    fn parse_stmt_by_leading_token(&mut self) -> Result<Stmt, SyntaxError> {
        let kind = self.current().kind;
        match kind {
            TokenKind::LBrace => {
                self.next();
                Ok(Stmt::Compound(self.parse_compound_stmt()?))
            }
            TokenKind::If => self.parse_conditional_stmt(),
            TokenKind::While | TokenKind::For | TokenKind::Repeat => self.parse_loop_stmt(),
            TokenKind::Return | TokenKind::Break | TokenKind::Continue => self.parse_jump_stmt(),
            // local declarations are variables only
            TokenKind::Type => Ok(Stmt::Declaration(self.parse_var_declaration()?)),
            _ => {
                // expression statement
                let expr = self.parse_expr()?;
                self.expect(&[TokenKind::Semicolon])?;
                Ok(Stmt::Expr(expr))
            }
        }
    }

    /// Parses the statements of a block up to and including the closing `}`.
    /// The opening `{` must already be eaten.
    pub(super) fn parse_compound_stmt(&mut self) -> Result<CompoundStmt, SyntaxError> {
        let mut body = Vec::new();
        while !self.eat(&[TokenKind::RBrace]) {
            body.push(self.parse_stmt()?);
        }
        Ok(CompoundStmt { body })
    }

    fn parse_conditional_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect(&[TokenKind::If])?;
        let if_branch = self.parse_branch()?;

        let mut elif_branches = Vec::new();
        while self.eat(&[TokenKind::Elif]) {
            elif_branches.push(self.parse_branch()?);
        }

        let else_branch = if self.eat(&[TokenKind::Else]) {
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };

        Ok(Stmt::Conditional {
            if_branch,
            elif_branches,
            else_branch,
        })
    }

    /// Parses `( condition ) statement`.
    fn parse_branch(&mut self) -> Result<Branch, SyntaxError> {
        let condition = self.parse_paren_condition()?;
        let body = Box::new(self.parse_stmt()?);
        Ok(Branch { condition, body })
    }

    fn parse_paren_condition(&mut self) -> Result<Expr, SyntaxError> {
        self.expect(&[TokenKind::LParen])?;
        let condition = self.parse_expr()?;
        self.expect(&[TokenKind::RParen])?;
        Ok(condition)
    }

    fn parse_loop_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        if self.eat(&[TokenKind::While]) {
            let condition = self.parse_paren_condition()?;
            let body = Box::new(self.parse_stmt()?);
            Ok(Stmt::While { condition, body })
        } else if self.check(&[TokenKind::For]) {
            // `for` has no clause grammar. Refuse it rather than desynchronize on its clauses.
            Err(self.unexpected())
        } else {
            self.expect(&[TokenKind::Repeat])?;
            Ok(Stmt::Repeat(Box::new(self.parse_stmt()?)))
        }
    }

    fn parse_jump_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        let stmt = if self.eat(&[TokenKind::Break]) {
            Stmt::Break
        } else if self.eat(&[TokenKind::Continue]) {
            Stmt::Continue
        } else {
            self.expect(&[TokenKind::Return])?;
            Stmt::Return(self.parse_expr()?)
        };
        self.expect(&[TokenKind::Semicolon])?;
        Ok(stmt)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::program;
    use super::*;

    /// Parses `source` as the body of `void main() { ... }`.
    fn body(source: &str) -> Result<Vec<Stmt>, SyntaxError> {
        let ast = program(&format!("void main() {{ {} }}", source))?;
        match ast.declarations.into_iter().next() {
            Some(Decl::Func(FuncDecl {
                body: Some(body), ..
            })) => Ok(body.body),
            other => panic!("expected function definition, got {:?}", other),
        }
    }

    fn stmt(source: &str) -> Stmt {
        let mut stmts = body(source).unwrap();
        assert_eq!(stmts.len(), 1);
        stmts.remove(0)
    }

    fn ident(name: &str) -> Expr {
        Expr::Identifier(name.to_string())
    }

    fn expr_stmt(name: &str) -> Box<Stmt> {
        Box::new(Stmt::Expr(ident(name)))
    }

    #[test]
    fn test_conditional_branch_order() {
        assert_eq!(
            stmt("if (c1) s1; elif (c2) s2; elif (c3) s3; else s4;"),
            Stmt::Conditional {
                if_branch: Branch {
                    condition: ident("c1"),
                    body: expr_stmt("s1"),
                },
                elif_branches: vec![
                    Branch {
                        condition: ident("c2"),
                        body: expr_stmt("s2"),
                    },
                    Branch {
                        condition: ident("c3"),
                        body: expr_stmt("s3"),
                    },
                ],
                else_branch: Some(expr_stmt("s4")),
            }
        );
    }

    #[test]
    fn test_dangling_else_binds_inner() {
        let outer = stmt("if (a) if (b) x; else y;");
        match outer {
            Stmt::Conditional {
                if_branch,
                else_branch: None,
                ..
            } => assert!(matches!(
                *if_branch.body,
                Stmt::Conditional {
                    else_branch: Some(_),
                    ..
                }
            )),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_loops() {
        assert_eq!(
            stmt("while (x) { x = x - 1; }"),
            Stmt::While {
                condition: ident("x"),
                body: Box::new(Stmt::Compound(CompoundStmt {
                    body: vec![Stmt::Expr(Expr::Binary {
                        op: "=".to_string(),
                        lhs: Box::new(ident("x")),
                        rhs: Box::new(Expr::Binary {
                            op: "-".to_string(),
                            lhs: Box::new(ident("x")),
                            rhs: Box::new(Expr::IntLit("1".to_string())),
                        }),
                    })]
                })),
            }
        );
        assert_eq!(stmt("repeat x;"), Stmt::Repeat(expr_stmt("x")));
    }

    #[test]
    fn test_for_is_rejected() {
        let err = body("for (i = 0; i < 3; i++) x;").unwrap_err();
        assert_eq!(err.token(), "for");
    }

    #[test]
    fn test_jumps() {
        assert_eq!(
            body("break; continue; return 0;").unwrap(),
            vec![
                Stmt::Break,
                Stmt::Continue,
                Stmt::Return(Expr::IntLit("0".to_string()))
            ]
        );
        assert_eq!(body("break }").unwrap_err().token(), "}");
        // `return` always takes an expression
        assert_eq!(body("return;").unwrap_err().token(), ";");
    }

    #[test]
    fn test_local_declaration() {
        assert_eq!(
            stmt("int *p, q = 2;"),
            Stmt::Declaration(VarDecl {
                ty: "int".to_string(),
                declarators: vec![
                    InitDeclarator {
                        declarator: Declarator::Ptr("p".to_string()),
                        initializer: None,
                    },
                    InitDeclarator {
                        declarator: Declarator::NoPtr("q".to_string()),
                        initializer: Some(Expr::IntLit("2".to_string())),
                    },
                ],
            })
        );
        // no nested functions
        assert_eq!(body("int f() {}").unwrap_err().token(), "(");
    }

    #[test]
    fn test_nested_blocks() {
        assert_eq!(
            stmt("{ {} { x; } }"),
            Stmt::Compound(CompoundStmt {
                body: vec![
                    Stmt::Compound(CompoundStmt::default()),
                    Stmt::Compound(CompoundStmt {
                        body: vec![Stmt::Expr(ident("x"))]
                    }),
                ]
            })
        );
    }

    #[test]
    fn test_unterminated_block() {
        let err = program("void main() { x;").unwrap_err();
        assert_eq!(err.token(), "");
    }

    #[test]
    fn test_expression_statement_requires_terminator() {
        assert_eq!(body("x y;").unwrap_err().token(), "y");
    }
}
