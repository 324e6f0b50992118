use std::ops::Range;

use cinder_source::SyntaxError;
use logos::Logos;

#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\r\f]+")]
#[logos(skip r"//[^\n]*")] // single line comments
pub enum TokenKind {
    // literals
    #[regex(r"[0-9]+")]
    IntegerLiteral,
    #[regex(r"[0-9]+\.[0-9]+")]
    FloatLiteral,
    #[regex(r"'([^'\\\n]|\\.)'")]
    CharLiteral,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,
    #[token("true")]
    #[token("false")]
    BoolLiteral,

    // identifiers
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Any type name. The grammar does not distinguish between them.
    #[token("int")]
    #[token("float")]
    #[token("char")]
    #[token("bool")]
    #[token("string")]
    #[token("void")]
    Type,

    // unary operators
    #[token("!")]
    Not,
    #[token("&")]
    Ampersand,
    #[token("++")]
    Increment,
    #[token("--")]
    Decrement,

    // binary operators
    // - arithmetics
    #[token("+")]
    Plus, // NOTE: can also be unary
    #[token("-")]
    Minus, // NOTE: can also be unary
    #[token("*")]
    Multiply, // NOTE: also the pointer declarator and dereference
    #[token("/")]
    Divide,
    #[token("%")]
    Modulo,
    #[token("^")]
    Caret,
    // - assignment
    #[token("=")]
    Assignment,
    #[token("+=")]
    PlusAssignment,
    #[token("-=")]
    MinusAssignment,
    #[token("*=")]
    MultiplyAssignment,
    #[token("/=")]
    DivideAssignment,
    #[token("%=")]
    ModuloAssignment,
    #[token("**=")]
    PowerAssignment,
    // - logical
    #[token("||")]
    Or,
    #[token("&&")]
    And,
    // - equality
    #[token("==")]
    Equal,
    #[token("!=")]
    NotEqual,
    // - ordering
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,

    // punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // keywords
    #[token("if")]
    If,
    #[token("elif")]
    Elif,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("repeat")]
    Repeat,
    #[token("return")]
    Return,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,

    /// End-of-input sentinel. Never produced by `logos`, only appended by [`lex`].
    End,
}

impl TokenKind {
    /// Returns the binding precedence of a binary operator or `None` if the token is not one.
    /// Higher binds tighter. The assignment family has the lowest precedence `0`.
    pub fn binary_precedence(self) -> Option<u8> {
        match self {
            /* Assignment */
            TokenKind::Assignment
            | TokenKind::PlusAssignment
            | TokenKind::MinusAssignment
            | TokenKind::MultiplyAssignment
            | TokenKind::DivideAssignment
            | TokenKind::ModuloAssignment
            | TokenKind::PowerAssignment => Some(0),
            /* Logical */
            TokenKind::Or => Some(1),
            TokenKind::And => Some(2),
            /* Equality */
            TokenKind::Equal | TokenKind::NotEqual => Some(3),
            /* Ordering */
            TokenKind::Less
            | TokenKind::LessEqual
            | TokenKind::Greater
            | TokenKind::GreaterEqual => Some(4),
            /* Additive */
            TokenKind::Plus | TokenKind::Minus => Some(5),
            /* Multiplicative */
            TokenKind::Multiply | TokenKind::Divide | TokenKind::Modulo => Some(6),
            TokenKind::Caret => Some(7),
            _ => None,
        }
    }

    /// Returns `true` if the token can start a prefix (unary) expression.
    pub fn is_prefix_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Ampersand
                | TokenKind::Multiply
                | TokenKind::Not
                | TokenKind::Increment
                | TokenKind::Decrement
        )
    }
}

/// A token as consumed by the parser: a kind tag plus the literal source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte range in the source. Only used for diagnostics.
    pub span: Range<usize>,
}

impl Token {
    /// Creates a token without a meaningful source location.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            span: 0..0,
        }
    }

    /// Creates the end-of-input sentinel.
    pub fn end(offset: usize) -> Self {
        Self {
            kind: TokenKind::End,
            text: String::new(),
            span: offset..offset,
        }
    }
}

/// Splits `source` into tokens, terminated by exactly one [`TokenKind::End`] token.
pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        match kind {
            Ok(kind) => tokens.push(Token {
                kind,
                text: lexer.slice().to_string(),
                span: lexer.span(),
            }),
            Err(()) => return Err(SyntaxError::new(lexer.slice(), lexer.span())),
        }
    }

    tokens.push(Token::end(source.len()));
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        use TokenKind::*;
        assert_eq!(
            kinds("if elif else iffy int integer true truely"),
            vec![If, Elif, Else, Identifier, Type, Identifier, BoolLiteral, Identifier, End]
        );
    }

    #[test]
    fn test_operators_longest_match() {
        use TokenKind::*;
        assert_eq!(
            kinds("a++ + --b **= c *= *d && &e"),
            vec![
                Identifier, Increment, Plus, Decrement, Identifier, PowerAssignment, Identifier,
                MultiplyAssignment, Multiply, Identifier, And, Ampersand, Identifier, End
            ]
        );
    }

    #[test]
    fn test_literals_keep_source_text() {
        let tokens = lex(r#"1 2.5 'a' '\n' "hi \"there\"" // trailing comment"#).unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["1", "2.5", "'a'", r"'\n'", r#""hi \"there\"""#, ""]);
        assert_eq!(tokens[1].kind, TokenKind::FloatLiteral);
        assert_eq!(tokens[3].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[4].kind, TokenKind::StringLiteral);
    }

    #[test]
    fn test_end_sentinel() {
        let tokens = lex("  ").unwrap();
        assert_eq!(tokens, vec![Token::end(2)]);
    }

    #[test]
    fn test_unknown_character() {
        let err = lex("int x = 1 @ 2;").unwrap_err();
        assert_eq!(err.token(), "@");
        assert_eq!(err.span(), 10..11);
    }

    #[test]
    fn test_precedence_table() {
        assert_eq!(TokenKind::Assignment.binary_precedence(), Some(0));
        assert_eq!(TokenKind::Caret.binary_precedence(), Some(7));
        assert_eq!(TokenKind::Multiply.binary_precedence(), Some(6));
        assert_eq!(TokenKind::Not.binary_precedence(), None);
        assert!(TokenKind::Multiply.is_prefix_operator());
        assert!(!TokenKind::Divide.is_prefix_operator());
    }
}
