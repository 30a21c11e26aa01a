use text_size::TextSize;
use tokens::lexer::{Token, TokenKind};

use crate::is_ident_start_char;

pub(crate) const EOF_CHAR: char = '\0';

/// Walks over the source by byte offset. `start` marks where the current token
/// began, everything between `start` and `pos` belongs to that token.
pub(crate) struct Cursor<'a> {
    src: &'a str,
    start: usize,
    pos: usize,
    dst: Vec<Token>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Cursor<'a> {
        // most filament tokens are short identifiers, punctuation or single spaces
        Cursor { src, start: 0, pos: 0, dst: Vec::with_capacity(src.len() / 4) }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// The next character, `EOF_CHAR` at the end of the input.
    pub(crate) fn first(&self) -> char {
        self.rest().chars().next().unwrap_or(EOF_CHAR)
    }

    pub(crate) fn second(&self) -> char {
        self.rest().chars().nth(1).unwrap_or(EOF_CHAR)
    }

    /// The character that was consumed last.
    pub(crate) fn prev(&self) -> char {
        self.src[..self.pos].chars().next_back().unwrap_or(EOF_CHAR)
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos == self.src.len()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes the next character if it is `c`.
    pub(crate) fn eat(&mut self, c: char) -> bool {
        if !self.is_eof() && self.first() == c {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// `'` followed by a radix letter, the tail of `8'b1010`.
    pub(crate) fn at_radix(&self) -> bool {
        self.first() == '\'' && matches!(self.second(), 'b' | 'd' | 'x' | 'o')
    }

    /// After a consumed `'`: does an event name follow?
    pub(crate) fn at_event_name(&self) -> bool {
        is_ident_start_char(self.first())
    }

    /// Ends the current token at the cursor position.
    pub(crate) fn finish_token(&mut self, kind: TokenKind) {
        debug_assert!(self.pos > self.start, "empty {kind:?} token at {}", self.start);
        let len = TextSize::from((self.pos - self.start) as u32);
        self.dst.push(Token { kind, len });
        self.start = self.pos;
    }

    pub(crate) fn finish(self) -> Vec<Token> {
        debug_assert_eq!(self.start, self.src.len());
        self.dst
    }
}
