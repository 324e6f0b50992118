//! Source code representation and error management.

use std::ops::Range;

use thiserror::Error;

/// Represents source code.
pub struct Source<'a> {
    /// Name used when rendering diagnostics (usually a file path).
    pub name: &'a str,
    /// Original source code.
    pub content: &'a str,
}

impl<'a> Source<'a> {
    /// Create a new `Source` with the specified `name` and `content`.
    pub fn new(name: &'a str, content: &'a str) -> Self {
        Self { name, content }
    }

    /// Returns the 1-based `(line, column)` of the byte `offset`.
    /// Offsets past the end of the content are clamped to the end.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let before = &self.content[..floor_char_boundary(self.content, offset)];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }

    /// Renders `error` as a diagnostic with the offending line and a caret marker.
    pub fn render(&self, error: &SyntaxError) -> String {
        let (line, column) = self.line_col(error.span.start);
        let text = self.content.lines().nth(line - 1).unwrap_or("");
        let width = error.token.chars().count().max(1);
        format!(
            "{name}:{line}:{column}: error: {error}\n{line:>4} | {text}\n     | {:>pad$}{}\n",
            "",
            "^".repeat(width),
            name = self.name,
            pad = column - 1
        )
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new("<input>", content)
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Represents a syntax error (compile time error).
///
/// Carries the literal text of the token at which parsing stopped. An empty
/// text denotes the end-of-input sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.token))]
pub struct SyntaxError {
    token: String,
    span: Range<usize>,
}

fn describe(token: &str) -> String {
    if token.is_empty() {
        "unexpected end of input".to_string()
    } else {
        format!("unexpected token `{}`", token)
    }
}

impl SyntaxError {
    /// Create a new syntax error for the offending `token` text at `span`.
    pub fn new(token: impl ToString, span: Range<usize>) -> Self {
        Self {
            token: token.to_string(),
            span,
        }
    }

    /// Literal text of the offending token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Byte range of the offending token in the source.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}
