use super::*;

impl Parser {
    /* Expressions */
    /// Parses any expression.
    /// This is equivalent to calling [`Self::parse_expr_prec`] with `min_prec = 0`.
    pub fn parse_expr(&mut self) -> Result<Expr, SyntaxError> {
        self.nested(|parser| parser.parse_expr_prec(0)) // 0 to accept any expression
    }

    /// Parses an expression whose binary operators bind at least as tight as `min_prec`.
    /// To parse any expression, use [`Self::parse_expr`].
    ///
    /// The right operand is parsed with the operator's own precedence as the minimum,
    /// so chains of equal precedence group to the right: `1 - 2 - 3` is `1 - (2 - 3)`.
    fn parse_expr_prec(&mut self, min_prec: u8) -> Result<Expr, SyntaxError> {
        let mut lhs = self.parse_unary_expr()?;

        loop {
            let prec = match self.current().kind.binary_precedence() {
                Some(prec) => prec,
                None => break, // not a valid binop, stop parsing
            };
            if prec < min_prec {
                break; // less than the min_prec, stop parsing
            }

            // self.current() is a valid binop
            let op = self.next();
            let rhs = self.nested(|parser| parser.parse_expr_prec(prec))?;

            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            }
        }

        Ok(lhs)
    }

    /// Parses a prefix expression or falls through to a postfix expression.
    fn parse_unary_expr(&mut self) -> Result<Expr, SyntaxError> {
        if self.current().kind.is_prefix_operator() {
            let op = self.next();
            let arg = Box::new(self.nested(Self::parse_unary_expr)?);
            return Ok(Expr::Prefix { op, arg });
        }
        self.parse_postfix_expr()
    }

    /// Parses a primary expression followed by any chain of `++`, `--`, calls and subscripts.
    fn parse_postfix_expr(&mut self) -> Result<Expr, SyntaxError> {
        let mut base = self.parse_primary_expr()?;

        loop {
            let kind = self.current().kind;
            base = match kind {
                TokenKind::Increment => {
                    self.next();
                    Expr::PostfixIncrement(Box::new(base))
                }
                TokenKind::Decrement => {
                    self.next();
                    Expr::PostfixDecrement(Box::new(base))
                }
                TokenKind::LParen => {
                    self.next();
                    Expr::Call {
                        callee: Box::new(base),
                        args: self.parse_call_args()?,
                    }
                }
                TokenKind::LBracket => {
                    self.next();
                    let index = self.parse_expr()?;
                    self.expect(&[TokenKind::RBracket])?;
                    Expr::Subscript {
                        base: Box::new(base),
                        index: Box::new(index),
                    }
                }
                _ => break,
            };
        }

        Ok(base)
    }

    /// Parses call arguments up to and including the closing `)`.
    fn parse_call_args(&mut self) -> Result<Vec<Expr>, SyntaxError> {
        let mut args = Vec::new();

        if !self.eat(&[TokenKind::RParen]) {
            loop {
                args.push(self.parse_expr()?);

                if self.eat(&[TokenKind::RParen]) {
                    break;
                } else if !self.eat(&[TokenKind::Comma]) {
                    return Err(self.unexpected());
                }
            }
        }

        Ok(args)
    }

    /* Expressions.Primary */
    /// Parses a literal, an identifier or a parenthesized expression.
    fn parse_primary_expr(&mut self) -> Result<Expr, SyntaxError> {
        let kind = self.current().kind;
        let expr = match kind {
            TokenKind::IntegerLiteral => Expr::IntLit(self.next()),
            TokenKind::FloatLiteral => Expr::FloatLit(self.next()),
            TokenKind::CharLiteral => Expr::CharLit(self.next()),
            TokenKind::StringLiteral => Expr::StringLit(self.next()),
            TokenKind::BoolLiteral => Expr::BoolLit(self.next()),
            TokenKind::Identifier => Expr::Identifier(self.next()),
            TokenKind::LParen => {
                self.next();
                let inner = self.parse_expr()?;
                self.expect(&[TokenKind::RParen])?;
                Expr::Paren(Box::new(inner))
            }
            _ => return Err(self.unexpected()),
        };
        Ok(expr)
    }
}
