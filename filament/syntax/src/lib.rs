//! Turns filament source text into a [`SourceFile`].
//!
//! This crate glues the lexer and the parser together: raw tokens are classified,
//! trivia is dropped and lexer errors end the token stream. The parser then runs over
//! the remaining tokens and the first error (in source order) is reported.

mod error;
mod parsing;

#[cfg(test)]
mod tests;

pub use ast::SourceFile;
pub use error::{Error, LexError, LexErrorKind};
pub use parser::SyntaxError;
pub use parsing::{
    classify_tokens, parse_constraint_text, parse_expr_text, parse_text, parse_time_text,
    ClassifiedToken,
};
pub use text_size::{TextRange, TextSize};
pub use tokens::{SyntaxKind, TokenClass, T};

/// Settings that affect parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Expressions and blocks nested deeper than this fail with `NestingTooDeep`.
    pub max_nesting_depth: u32,
}

impl ParseConfig {
    pub const DEFAULT_MAX_NESTING_DEPTH: u32 = 128;
}

impl Default for ParseConfig {
    fn default() -> ParseConfig {
        ParseConfig { max_nesting_depth: ParseConfig::DEFAULT_MAX_NESTING_DEPTH }
    }
}

/// `Parse` is the result of parsing a file: the tree of everything that was parsed
/// successfully and the errors that stopped the parser.
///
/// Parsing stops at the first error, so `errors` holds at most one error and the
/// tree contains the imports and items that were completed before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Parse {
    tree: SourceFile,
    errors: Vec<Error>,
}

impl Parse {
    pub fn tree(&self) -> &SourceFile {
        &self.tree
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn ok(self) -> Result<SourceFile, Vec<Error>> {
        if self.errors.is_empty() {
            Ok(self.tree)
        } else {
            Err(self.errors)
        }
    }

    pub fn into_parts(self) -> (SourceFile, Vec<Error>) {
        (self.tree, self.errors)
    }
}
