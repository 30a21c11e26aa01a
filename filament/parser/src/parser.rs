//! See [`Parser`].

use std::cell::Cell;

use stdx::pretty::List;
use text_size::{TextRange, TextSize};

use crate::token_set::TokenSet;
use crate::SyntaxKind::{self, EOF};
use crate::{SyntaxError, Token};

pub(crate) type PResult<T> = Result<T, SyntaxError>;

/// `Parser` struct provides the low-level API for
/// navigating through the stream of tokens.
/// The actual parsing happens in the `grammar` module.
pub(crate) struct Parser<'t> {
    src: &'t str,
    tokens: &'t [Token],
    pos: usize,
    /// End of the last consumed token.
    prev_end: TextSize,
    eof: Token,
    depth: u32,
    max_depth: u32,
    steps: Cell<u32>,
}

impl<'t> Parser<'t> {
    pub(crate) fn new(src: &'t str, tokens: &'t [Token], max_depth: u32) -> Parser<'t> {
        let end = tokens.last().map_or_else(|| TextSize::of(src), |tok| tok.range.end());
        Parser {
            src,
            tokens,
            pos: 0,
            prev_end: TextSize::from(0),
            eof: Token { kind: EOF, range: TextRange::empty(end) },
            depth: 0,
            max_depth,
            steps: Cell::new(0),
        }
    }

    /// Returns the kind of the current token.
    /// If parser has already reached the end of input,
    /// the special `EOF` kind is returned.
    pub(crate) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    /// Lookahead operation: returns the kind of the next nth
    /// token.
    pub(crate) fn nth(&self, n: usize) -> SyntaxKind {
        self.nth_token(n).kind
    }

    pub(crate) fn nth_token(&self, n: usize) -> Token {
        assert!(n <= 3);

        let steps = self.steps.get();
        assert!(steps <= 10_000_000, "the parser seems stuck");
        self.steps.set(steps + 1);

        self.tokens.get(self.pos + n).copied().unwrap_or(self.eof)
    }

    pub(crate) fn current_range(&self) -> TextRange {
        self.nth_token(0).range
    }

    /// Source text of the current token.
    pub(crate) fn current_text(&self) -> &'t str {
        &self.src[self.current_range()]
    }

    pub(crate) fn nth_text(&self, n: usize) -> &'t str {
        &self.src[self.nth_token(n).range]
    }

    /// Checks if the current token is `kind`.
    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.nth_at(0, kind)
    }

    pub(crate) fn nth_at(&self, n: usize, kind: SyntaxKind) -> bool {
        self.nth(n) == kind
    }

    /// Checks if the current token is in `kinds`.
    pub(crate) fn at_ts(&self, kinds: TokenSet) -> bool {
        kinds.contains(self.current())
    }

    /// Checks for an identifier that is only a keyword in some productions.
    pub(crate) fn at_contextual_kw(&self, n: usize, kw: &str) -> bool {
        self.nth_at(n, SyntaxKind::IDENT) && self.nth_text(n) == kw
    }

    /// Consume the next token if `kind` matches.
    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if !self.at(kind) {
            return false;
        }
        self.do_bump();
        true
    }

    /// Consume the next token, `kind` must match.
    pub(crate) fn bump(&mut self, kind: SyntaxKind) {
        assert!(self.eat(kind), "expected {} found {}", kind, self.current());
    }

    /// Advances the parser by one token and returns its range.
    pub(crate) fn bump_any(&mut self) -> TextRange {
        let range = self.current_range();
        if self.current() != EOF {
            self.do_bump();
        }
        range
    }

    /// Consume the next token if it is `kind` or return an error
    /// otherwise.
    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> PResult<TextRange> {
        if self.at(kind) {
            return Ok(self.bump_any());
        }
        Err(self.unexpected(&[kind]))
    }

    pub(crate) fn expect_ts(&mut self, kinds: TokenSet) -> PResult<(SyntaxKind, TextRange)> {
        let kind = self.current();
        if kinds.contains(kind) {
            return Ok((kind, self.bump_any()));
        }
        Err(self.unexpected_ts(kinds))
    }

    pub(crate) fn unexpected(&self, expected: &[SyntaxKind]) -> SyntaxError {
        SyntaxError::UnexpectedToken {
            expected: List::new(expected.to_owned()),
            found: self.current(),
            range: self.current_range(),
        }
    }

    pub(crate) fn unexpected_ts(&self, expected: TokenSet) -> SyntaxError {
        SyntaxError::UnexpectedToken {
            expected: List::new(expected.iter().collect()),
            found: self.current(),
            range: self.current_range(),
        }
    }

    /// Start offset of the current token.
    pub(crate) fn start(&self) -> TextSize {
        self.current_range().start()
    }

    /// The range from `start` up to the end of the last consumed token.
    pub(crate) fn range_from(&self, start: TextSize) -> TextRange {
        TextRange::new(start, self.prev_end.max(start))
    }

    pub(crate) fn src_len(&self) -> TextSize {
        TextSize::of(self.src)
    }

    pub(crate) fn text(&self, range: TextRange) -> &'t str {
        &self.src[range]
    }

    /// Runs `f` one nesting level deeper. Fails with `NestingTooDeep` instead of
    /// overflowing the stack on pathological input.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.max_depth,
                range: self.current_range(),
            });
        }
        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    fn do_bump(&mut self) {
        self.prev_end = self.current_range().end();
        self.pos += 1;
    }
}
