//! Parser for the cinder language: a small C-like procedural language.
//!
//! The [`parser::Parser`] consumes a pre-lexed stream of [`lexer::Token`]s and
//! builds an [`ast::TranslationUnit`]. [`lexer::lex`] is a reference tokenizer
//! producing that stream from source text.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod visitor;
