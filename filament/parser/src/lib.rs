//! The filament parser.
//!
//! The parser works on trivia free tokens (see [`Token`]) and produces the typed tree of
//! the `ast` crate directly. The `Parser` struct from the `parser` module is a cursor into
//! the token sequence, the actual grammar lives in the `grammar` module.
//!
//! Parsing stops at the first error. Imports and items that were completed before that
//! point are still returned so that tools can work with the well formed prefix of a file.

mod token_set;
mod error;
mod grammar;
mod parser;

use ast::{Constraint, Expr, SourceFile, Time};
use text_size::TextRange;

pub use error::SyntaxError;
pub use tokens::parser::SyntaxKind;

/// A token as seen by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

/// Parses a complete source file.
///
/// `tokens` must not contain trivia. The trailing `EOF` token is optional.
pub fn parse(src: &str, tokens: &[Token], max_depth: u32) -> (SourceFile, Option<SyntaxError>) {
    let mut p = parser::Parser::new(src, tokens, max_depth);
    grammar::source_file(&mut p)
}

/// Parses a single expression spanning all of `tokens`.
pub fn parse_expr(src: &str, tokens: &[Token], max_depth: u32) -> Result<Expr, SyntaxError> {
    let mut p = parser::Parser::new(src, tokens, max_depth);
    let expr = grammar::expr(&mut p)?;
    p.expect(SyntaxKind::EOF)?;
    Ok(expr)
}

/// Parses a single time expression spanning all of `tokens`.
pub fn parse_time(src: &str, tokens: &[Token], max_depth: u32) -> Result<Time, SyntaxError> {
    let mut p = parser::Parser::new(src, tokens, max_depth);
    let time = grammar::time(&mut p)?;
    p.expect(SyntaxKind::EOF)?;
    Ok(time)
}

/// Parses a single ordering constraint spanning all of `tokens`.
pub fn parse_constraint(
    src: &str,
    tokens: &[Token],
    max_depth: u32,
) -> Result<Constraint, SyntaxError> {
    let mut p = parser::Parser::new(src, tokens, max_depth);
    let cons = grammar::constraint(&mut p)?;
    p.expect(SyntaxKind::EOF)?;
    Ok(cons)
}
