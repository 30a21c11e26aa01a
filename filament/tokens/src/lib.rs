pub mod lexer;
pub mod parser;

use lexer::LiteralKind;
use lexer::TokenKind::*;
pub use parser::{SyntaxKind, TokenClass};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LexerErrorKind {
    UnterminatedBlockComment,
    UnterminatedStr,
    UnknownChar,
    MalformedNumber,
}

impl lexer::TokenKind {
    pub fn to_syntax(self, src: &str) -> (Option<SyntaxKind>, Option<LexerErrorKind>) {
        let token = match self {
            LineComment | BlockComment { terminated: true } => SyntaxKind::COMMENT,
            BlockComment { terminated: false } => {
                return (Some(SyntaxKind::COMMENT), Some(LexerErrorKind::UnterminatedBlockComment))
            }
            Whitespace => SyntaxKind::WHITESPACE,
            Ident => SyntaxKind::from_keyword(src).unwrap_or(SyntaxKind::IDENT),
            EventMark => SyntaxKind::EVENT,
            Literal { kind: LiteralKind::Int } => SyntaxKind::INT_NUMBER,
            Literal { kind: LiteralKind::SizedInt { empty: false } } => {
                SyntaxKind::SIZED_INT_NUMBER
            }
            Literal { kind: LiteralKind::SizedInt { empty: true } } => {
                return (
                    Some(SyntaxKind::SIZED_INT_NUMBER),
                    Some(LexerErrorKind::MalformedNumber),
                )
            }
            Literal { kind: LiteralKind::Float { malformed: false } } => SyntaxKind::FLOAT_NUMBER,
            Literal { kind: LiteralKind::Float { malformed: true } } => {
                return (Some(SyntaxKind::FLOAT_NUMBER), Some(LexerErrorKind::MalformedNumber))
            }
            Literal { kind: LiteralKind::Str { terminated: true } } => SyntaxKind::STR_LIT,
            Literal { kind: LiteralKind::Str { terminated: false } } => {
                return (Some(SyntaxKind::STR_LIT), Some(LexerErrorKind::UnterminatedStr))
            }
            Semi => T![;],
            Comma => T![,],
            Dot => T![.],
            OpenParen => T!['('],
            CloseParen => T![')'],
            OpenBrace => T!['{'],
            CloseBrace => T!['}'],
            OpenBracket => T!['['],
            CloseBracket => T![']'],
            Pound => T![#],
            Question => T![?],
            Colon => T![:],
            Eq => T![=],
            Not => T![!],
            Lt => T![<],
            Gt => T![>],
            Minus => T![-],
            Plus => T![+],
            Star => T![*],
            Slash => T![/],
            Percent => T![%],
            Dot2 => T![..],
            Colon2 => T![::],
            ColonEq => T![:=],
            Eq2 => T![==],
            Leq => T![<=],
            Geq => T![>=],
            FatArrow => T![=>],
            ThinArrow => T![->],

            Unknown => return (Some(SyntaxKind::ERROR), Some(LexerErrorKind::UnknownChar)),
        };

        (Some(token), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip_through_text() {
        for kind in SyntaxKind::ALL {
            if kind.is_keyword() {
                let text = kind.text().unwrap();
                assert_eq!(SyntaxKind::from_keyword(text), Some(kind));
                assert_eq!(kind.class(), TokenClass::Keyword);
            }
        }
        assert_eq!(SyntaxKind::from_keyword("interface"), None);
        assert_eq!(SyntaxKind::from_keyword("not"), None);
    }

    #[test]
    fn display() {
        assert_eq!(T![:=].to_string(), "':='");
        assert_eq!(SyntaxKind::IDENT.to_string(), "an identifier");
        assert_eq!(SyntaxKind::EOF.to_string(), "end of file");
    }
}
