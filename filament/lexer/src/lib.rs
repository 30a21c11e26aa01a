mod cursor;

#[cfg(test)]
mod tests;

use crate::cursor::{Cursor, EOF_CHAR};
use tokens::lexer::{
    LiteralKind::{self, *},
    Token,
    TokenKind::{self, *},
};

/// Splits `input` into raw tokens.
///
/// The returned tokens cover the whole input without gaps: their lengths always sum up
/// to `input.len()`. Malformed input does not stop the lexer, it produces tokens that the
/// caller reports as errors (see [`tokens::LexerErrorKind`]).
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut cursor = Cursor::new(input);
    while !cursor.is_eof() {
        cursor.advance_token();
    }
    cursor.finish()
}

/// True if `c` separates tokens. This is the Unicode `Pattern_White_Space` class.
pub fn is_whitespace(c: char) -> bool {
    // This is Pattern_White_Space.
    //
    // Note that this set is stable (ie, it doesn't change with different
    // Unicode versions), so it's ok to just hard-code the values.
    matches!(
        c,
        // Usual ASCII suspects
        '\u{0009}'   // \t
        | '\u{000A}' // \n
        | '\u{000B}' // vertical tab
        | '\u{000C}' // form feed
        | '\u{000D}' // \r
        | '\u{0020}' // space

        // NEXT LINE from latin1
        | '\u{0085}'

        // Bidi markers
        | '\u{200E}' // LEFT-TO-RIGHT MARK
        | '\u{200F}' // RIGHT-TO-LEFT MARK

        // Dedicated whitespace characters from Unicode
        | '\u{2028}' // LINE SEPARATOR
        | '\u{2029}' // PARAGRAPH SEPARATOR
    )
}

/// True if 'c' is allowed in an identifier after the first character
pub fn is_ident_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '_' | '0'..='9')
}

/// True if 'c' is allowed as the first character of an identifier
pub fn is_ident_start_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '_')
}

impl Cursor<'_> {
    /// Parses a token from the input string.
    fn advance_token(&mut self) {
        let Some(first_char) = self.bump() else { return };
        let token_kind = match first_char {
            // Slash, comment or block comment.
            '/' => match self.first() {
                '/' => self.line_comment(),
                '*' => self.block_comment(),
                _ => Slash,
            },

            c if is_whitespace(c) => self.whitespace(),

            c if is_ident_start_char(c) => {
                self.eat_while(is_ident_char);
                Ident
            }

            '\'' if self.at_event_name() => {
                self.eat_while(is_ident_char);
                EventMark
            }

            '0'..='9' => {
                let literal_kind = self.number();
                TokenKind::Literal { kind: literal_kind }
            }

            // `.5` is never a valid number, it is consumed as a whole so the error points at it
            '.' if self.first().is_ascii_digit() => {
                self.eat_decimal_digits();
                TokenKind::Literal { kind: Float { malformed: true } }
            }

            // Two Symbol tokens
            '.' if self.eat('.') => Dot2,
            ':' if self.eat(':') => Colon2,
            ':' if self.eat('=') => ColonEq,
            '=' if self.eat('=') => Eq2,
            '=' if self.eat('>') => FatArrow,
            '<' if self.eat('=') => Leq,
            '>' if self.eat('=') => Geq,
            '-' if self.eat('>') => ThinArrow,

            // One-symbol tokens.
            ';' => Semi,
            ',' => Comma,
            '.' => Dot,
            '(' => OpenParen,
            ')' => CloseParen,
            '{' => OpenBrace,
            '}' => CloseBrace,
            '[' => OpenBracket,
            ']' => CloseBracket,
            '#' => Pound,
            '?' => Question,
            ':' => Colon,
            '=' => Eq,
            '!' => Not,
            '<' => Lt,
            '>' => Gt,
            '-' => Minus,
            '+' => Plus,
            '*' => Star,
            '%' => Percent,

            '"' => {
                let terminated = self.double_quoted_string();
                Literal { kind: Str { terminated } }
            }
            _ => Unknown,
        };
        self.finish_token(token_kind)
    }

    fn line_comment(&mut self) -> TokenKind {
        debug_assert!(self.prev() == '/' && self.first() == '/');
        self.bump();
        self.eat_while(|c| c != '\n');
        LineComment
    }

    /// Block comments do not nest: the first `*/` ends the comment.
    fn block_comment(&mut self) -> TokenKind {
        debug_assert!(self.prev() == '/' && self.first() == '*');
        self.bump();

        while let Some(c) = self.bump() {
            if c == '*' && self.first() == '/' {
                self.bump();
                return BlockComment { terminated: true };
            }
        }

        BlockComment { terminated: false }
    }

    fn whitespace(&mut self) -> TokenKind {
        debug_assert!(is_whitespace(self.prev()));
        self.eat_while(is_whitespace);
        Whitespace
    }

    fn number(&mut self) -> LiteralKind {
        debug_assert!(self.prev().is_ascii_digit());
        self.eat_decimal_digits();

        match self.first() {
            // `0..4` is a range, not a float
            '.' if self.second() == '.' => Int,
            '.' => {
                self.bump();
                let has_fraction = self.eat_decimal_digits();
                Float { malformed: !has_fraction }
            }
            _ if self.at_radix() => {
                self.bump();
                let radix = self.bump().unwrap_or(EOF_CHAR);
                let has_digits = match radix {
                    'b' => self.eat_digits(|c| matches!(c, '0' | '1')),
                    'o' => self.eat_digits(|c| matches!(c, '0'..='7')),
                    'x' => self.eat_digits(|c| c.is_ascii_hexdigit()),
                    _ => self.eat_decimal_digits(),
                };
                SizedInt { empty: !has_digits }
            }
            _ => Int,
        }
    }

    /// Eats double-quoted string and returns true
    /// if string is terminated.
    fn double_quoted_string(&mut self) -> bool {
        debug_assert!(self.prev() == '"');
        while let Some(c) = self.bump() {
            match c {
                '"' => return true,
                '\\' => {
                    // Bump again to skip escaped character.
                    self.bump();
                }
                _ => (),
            }
        }
        // End of file reached.
        false
    }

    fn eat_decimal_digits(&mut self) -> bool {
        self.eat_digits(|c| c.is_ascii_digit())
    }

    fn eat_digits(&mut self, is_digit: impl Fn(char) -> bool) -> bool {
        let mut has_digits = false;
        while !self.is_eof() && is_digit(self.first()) {
            has_digits = true;
            self.bump();
        }
        has_digits
    }

    /// Eats symbols while predicate returns true or until the end of file is reached.
    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while predicate(self.first()) && !self.is_eof() {
            self.bump();
        }
    }
}
