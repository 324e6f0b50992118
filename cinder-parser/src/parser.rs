use crate::ast::*;
use crate::lexer::{Token, TokenKind};
use cinder_source::SyntaxError;
use tracing::trace;

mod decl;
mod expr;
mod stmt;

/// Maximum nesting of expressions and statements before parsing gives up.
/// Keeps deeply nested input from overflowing the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive descent parser over a pre-lexed token stream.
///
/// Parsing stops at the first syntax error. No recovery is attempted.
pub struct Parser {
    tokens: Vec<Token>,
    /// Index of the current token. Never decreases and never moves past the end-of-input token.
    position: usize,
    /// Current nesting of expressions and statements.
    depth: usize,
}

impl Parser {
    /// Creates a parser that owns `tokens`.
    /// An end-of-input token is appended if the stream is not already terminated by one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::End) {
            let offset = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token::end(offset));
        }
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }
}

impl Parser {
    /// Parses declarations until the end of input.
    /// The end-of-input token is left in place, so parsing again yields an empty unit.
    pub fn parse_program(&mut self) -> Result<TranslationUnit, SyntaxError> {
        let mut declarations = Vec::new();
        while !self.check(&[TokenKind::End]) {
            declarations.push(self.parse_declaration()?);
        }
        Ok(TranslationUnit { declarations })
    }
}

/// Parse utilities
impl Parser {
    fn current(&self) -> &Token {
        // `position` never moves past the end-of-input token.
        &self.tokens[self.position]
    }

    /// Consumes the current token and returns its text.
    /// The end-of-input token is never consumed.
    fn next(&mut self) -> String {
        let token = &self.tokens[self.position];
        trace!(pos = self.position, kind = ?token.kind, text = %token.text, "advance");
        let text = token.text.clone();
        if token.kind != TokenKind::End {
            self.position += 1;
        }
        text
    }

    /// Runs `parse` one nesting level deeper.
    /// Fails on the current token once [`MAX_NESTING_DEPTH`] is reached.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.unexpected());
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Predicate that tests whether the current token is one of `kinds`. Never consumes.
    fn check(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current().kind)
    }

    /// Eats the current token if it is one of `kinds`.
    fn eat(&mut self, kinds: &[TokenKind]) -> bool {
        if self.check(kinds) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Eats the current token if it is one of `kinds` and returns its text.
    /// Raises an unexpected token error otherwise.
    fn expect(&mut self, kinds: &[TokenKind]) -> Result<String, SyntaxError> {
        if self.check(kinds) {
            Ok(self.next())
        } else {
            Err(self.unexpected())
        }
    }

    /// Tests whether the upcoming tokens match `pattern` exactly, in order. Never consumes.
    ///
    /// The end-of-input token never appears in a pattern, so the scan stops at it
    /// and never reads past the stream.
    fn check_pattern(&self, pattern: &[TokenKind]) -> bool {
        pattern.iter().enumerate().all(|(i, kind)| {
            self.tokens
                .get(self.position + i)
                .map_or(false, |token| token.kind == *kind)
        })
    }

    /// Builds an unexpected token error for the current token.
    fn unexpected(&self) -> SyntaxError {
        let token = self.current();
        SyntaxError::new(&token.text, token.span.clone())
    }
}
