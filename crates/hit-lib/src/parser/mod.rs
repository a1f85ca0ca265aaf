//! Lexer and parser for HIT text.
//!
//! # Architecture
//!
//! The parser pulls tokens lazily from [`Lexer`] and builds the [`Document`]
//! directly; there is no intermediate syntax tree. Scope tracking is an explicit
//! stack of open headers owned by the [`Parser`] value, so parses are independent
//! and may run concurrently.
//!
//! # Failure
//!
//! Parsing is atomic. The first lex or parse error aborts and no partial tree is
//! returned.

pub mod lexer;

mod core;
mod grammar;

#[cfg(test)]
mod tests;

pub use core::{DEFAULT_DEPTH_LIMIT, ParseOptions, Parser};
pub use lexer::{Lexer, Token, TokenKind, lex};

use crate::Result;
use crate::tree::Document;

/// Parse `source` with default options. `source_name` only labels positions.
pub fn parse(source_name: &str, source: &str) -> Result<Document> {
    Parser::new(source_name, source).parse()
}

/// Parse `source` with explicit limits.
pub fn parse_with_options(source_name: &str, source: &str, options: ParseOptions) -> Result<Document> {
    Parser::with_options(source_name, source, options).parse()
}
