use super::*;
use tracing::debug;

impl Parser {
    /// Parses a function or variable declaration, classified by lookahead only.
    pub fn parse_declaration(&mut self) -> Result<Decl, SyntaxError> {
        use TokenKind::{Identifier, LParen, Multiply, Type};

        debug!(pos = self.position, text = %self.current().text, "parse_declaration");

        if self.check_pattern(&[Type, Identifier, LParen])
            || self.check_pattern(&[Type, Multiply, Identifier, LParen])
        {
            Ok(Decl::Func(self.parse_func_declaration()?))
        } else if self.check_pattern(&[Type, Identifier])
            || self.check_pattern(&[Type, Multiply, Identifier])
        {
            Ok(Decl::Var(self.parse_var_declaration()?))
        } else {
            Err(self.unexpected())
        }
    }

    fn parse_func_declaration(&mut self) -> Result<FuncDecl, SyntaxError> {
        let ty = self.expect(&[TokenKind::Type])?;
        let declarator = self.parse_declarator()?;
        self.expect(&[TokenKind::LParen])?;

        let mut params = Vec::new();
        if !self.eat(&[TokenKind::RParen]) {
            loop {
                params.push(self.parse_parameter_declaration()?);

                if self.eat(&[TokenKind::RParen]) {
                    break;
                } else if !self.eat(&[TokenKind::Comma]) {
                    return Err(self.unexpected());
                }
            }
        }

        let body = if self.eat(&[TokenKind::LBrace]) {
            Some(self.parse_compound_stmt()?)
        } else {
            self.expect(&[TokenKind::Semicolon])?;
            None // prototype
        };

        Ok(FuncDecl {
            ty,
            declarator,
            params,
            body,
        })
    }

    /// Parameters take a single declarator and no initializer.
    fn parse_parameter_declaration(&mut self) -> Result<ParameterDecl, SyntaxError> {
        let ty = self.expect(&[TokenKind::Type])?;
        let declarator = self.parse_declarator()?;
        Ok(ParameterDecl {
            ty,
            declarator: InitDeclarator {
                declarator,
                initializer: None,
            },
        })
    }

    /// Parses `TYPE init-declarator (, init-declarator)* ;`.
    /// Also used for local declaration statements.
    pub(super) fn parse_var_declaration(&mut self) -> Result<VarDecl, SyntaxError> {
        let ty = self.expect(&[TokenKind::Type])?;

        let mut declarators = Vec::new();
        loop {
            declarators.push(self.parse_init_declarator()?);

            if self.eat(&[TokenKind::Semicolon]) {
                break;
            } else if !self.eat(&[TokenKind::Comma]) {
                return Err(self.unexpected());
            }
        }

        Ok(VarDecl { ty, declarators })
    }

    fn parse_init_declarator(&mut self) -> Result<InitDeclarator, SyntaxError> {
        let declarator = self.parse_declarator()?;
        let initializer = if self.eat(&[TokenKind::Assignment]) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(InitDeclarator {
            declarator,
            initializer,
        })
    }

    fn parse_declarator(&mut self) -> Result<Declarator, SyntaxError> {
        if self.check_pattern(&[TokenKind::Multiply, TokenKind::Identifier]) {
            self.next(); // eat `*`
            Ok(Declarator::Ptr(self.next()))
        } else if self.check(&[TokenKind::Identifier]) {
            Ok(Declarator::NoPtr(self.next()))
        } else {
            Err(self.unexpected())
        }
    }
}
