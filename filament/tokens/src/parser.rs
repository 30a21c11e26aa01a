//! Token kinds as seen by the parser.

use std::fmt;

/// The kind of a token after keywords have been resolved and trivia has been classified.
#[allow(bad_style, missing_docs, unreachable_pub)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u16)]
pub enum SyntaxKind {
    SEMICOLON,
    COMMA,
    DOT,
    DOT2,
    L_PAREN,
    R_PAREN,
    L_CURLY,
    R_CURLY,
    L_BRACK,
    R_BRACK,
    L_ANGLE,
    R_ANGLE,
    COLON,
    COLON2,
    COLONEQ,
    EQ,
    EQ2,
    LTEQ,
    GTEQ,
    FAT_ARROW,
    THIN_ARROW,
    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    BANG,
    POUND,
    QUESTION,
    IMPORT_KW,
    EXTERN_KW,
    FOR_KW,
    IF_KW,
    ELSE_KW,
    COMP_KW,
    NEW_KW,
    WHERE_KW,
    GENERATE_KW,
    USING_KW,
    WITH_KW,
    LET_KW,
    SOME_KW,
    OPAQUE_KW,
    IN_KW,
    BUNDLE_KW,
    ASSUME_KW,
    ASSERT_KW,
    INT_NUMBER,
    SIZED_INT_NUMBER,
    FLOAT_NUMBER,
    STR_LIT,
    IDENT,
    EVENT,
    WHITESPACE,
    COMMENT,
    ERROR,
    EOF,
}

use SyntaxKind::*;

/// Coarse token classes. This is all an editor highlighter needs to know about a token.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum TokenClass {
    Keyword,
    Identifier,
    Event,
    Literal,
    Operator,
    Punctuation,
    Comment,
    Whitespace,
    Error,
}

impl SyntaxKind {
    pub const ALL: [SyntaxKind; 57] = [
        SEMICOLON, COMMA, DOT, DOT2, L_PAREN, R_PAREN, L_CURLY, R_CURLY, L_BRACK, R_BRACK,
        L_ANGLE, R_ANGLE, COLON, COLON2, COLONEQ, EQ, EQ2, LTEQ, GTEQ, FAT_ARROW, THIN_ARROW,
        PLUS, MINUS, STAR, SLASH, PERCENT, BANG, POUND, QUESTION, IMPORT_KW, EXTERN_KW, FOR_KW,
        IF_KW, ELSE_KW, COMP_KW, NEW_KW, WHERE_KW, GENERATE_KW, USING_KW, WITH_KW, LET_KW,
        SOME_KW, OPAQUE_KW, IN_KW, BUNDLE_KW, ASSUME_KW, ASSERT_KW, INT_NUMBER,
        SIZED_INT_NUMBER, FLOAT_NUMBER, STR_LIT, IDENT, EVENT, WHITESPACE, COMMENT, ERROR, EOF,
    ];

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            IMPORT_KW
                | EXTERN_KW
                | FOR_KW
                | IF_KW
                | ELSE_KW
                | COMP_KW
                | NEW_KW
                | WHERE_KW
                | GENERATE_KW
                | USING_KW
                | WITH_KW
                | LET_KW
                | SOME_KW
                | OPAQUE_KW
                | IN_KW
                | BUNDLE_KW
                | ASSUME_KW
                | ASSERT_KW
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(self, INT_NUMBER | SIZED_INT_NUMBER | FLOAT_NUMBER | STR_LIT)
    }

    pub fn is_trivia(self) -> bool {
        matches!(self, WHITESPACE | COMMENT)
    }

    pub fn from_keyword(ident: &str) -> Option<SyntaxKind> {
        let kw = match ident {
            "import" => IMPORT_KW,
            "extern" => EXTERN_KW,
            "for" => FOR_KW,
            "if" => IF_KW,
            "else" => ELSE_KW,
            "comp" => COMP_KW,
            "new" => NEW_KW,
            "where" => WHERE_KW,
            "generate" => GENERATE_KW,
            "using" => USING_KW,
            "with" => WITH_KW,
            "let" => LET_KW,
            "some" => SOME_KW,
            "opaque" => OPAQUE_KW,
            "in" => IN_KW,
            "bundle" => BUNDLE_KW,
            "assume" => ASSUME_KW,
            "assert" => ASSERT_KW,
            _ => return None,
        };
        Some(kw)
    }

    /// The fixed source text of punctuation and keywords.
    pub fn text(self) -> Option<&'static str> {
        let text = match self {
            SEMICOLON => ";",
            COMMA => ",",
            DOT => ".",
            DOT2 => "..",
            L_PAREN => "(",
            R_PAREN => ")",
            L_CURLY => "{",
            R_CURLY => "}",
            L_BRACK => "[",
            R_BRACK => "]",
            L_ANGLE => "<",
            R_ANGLE => ">",
            COLON => ":",
            COLON2 => "::",
            COLONEQ => ":=",
            EQ => "=",
            EQ2 => "==",
            LTEQ => "<=",
            GTEQ => ">=",
            FAT_ARROW => "=>",
            THIN_ARROW => "->",
            PLUS => "+",
            MINUS => "-",
            STAR => "*",
            SLASH => "/",
            PERCENT => "%",
            BANG => "!",
            POUND => "#",
            QUESTION => "?",
            IMPORT_KW => "import",
            EXTERN_KW => "extern",
            FOR_KW => "for",
            IF_KW => "if",
            ELSE_KW => "else",
            COMP_KW => "comp",
            NEW_KW => "new",
            WHERE_KW => "where",
            GENERATE_KW => "generate",
            USING_KW => "using",
            WITH_KW => "with",
            LET_KW => "let",
            SOME_KW => "some",
            OPAQUE_KW => "opaque",
            IN_KW => "in",
            BUNDLE_KW => "bundle",
            ASSUME_KW => "assume",
            ASSERT_KW => "assert",
            _ => return None,
        };
        Some(text)
    }

    pub fn class(self) -> TokenClass {
        match self {
            _ if self.is_keyword() => TokenClass::Keyword,
            _ if self.is_literal() => TokenClass::Literal,
            IDENT => TokenClass::Identifier,
            EVENT => TokenClass::Event,
            WHITESPACE => TokenClass::Whitespace,
            COMMENT => TokenClass::Comment,
            ERROR | EOF => TokenClass::Error,
            L_ANGLE | R_ANGLE | EQ | EQ2 | LTEQ | GTEQ | FAT_ARROW | THIN_ARROW | PLUS | MINUS
            | STAR | SLASH | PERCENT | BANG | COLONEQ | DOT2 => TokenClass::Operator,
            _ => TokenClass::Punctuation,
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.text() {
            return write!(f, "'{text}'");
        }
        let name = match self {
            INT_NUMBER => "an integer",
            SIZED_INT_NUMBER => "a sized integer",
            FLOAT_NUMBER => "a float",
            STR_LIT => "a string literal",
            IDENT => "an identifier",
            EVENT => "an event",
            WHITESPACE => "whitespace",
            COMMENT => "a comment",
            ERROR => "an invalid token",
            EOF => "end of file",
            _ => unreachable!("{self:?} has a fixed text"),
        };
        f.write_str(name)
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenClass::Keyword => "keyword",
            TokenClass::Identifier => "identifier",
            TokenClass::Event => "event",
            TokenClass::Literal => "literal",
            TokenClass::Operator => "operator",
            TokenClass::Punctuation => "punctuation",
            TokenClass::Comment => "comment",
            TokenClass::Whitespace => "whitespace",
            TokenClass::Error => "error",
        };
        f.write_str(name)
    }
}

#[macro_export]
macro_rules! T {
    [;] => { $crate::SyntaxKind::SEMICOLON };
    [,] => { $crate::SyntaxKind::COMMA };
    [..] => { $crate::SyntaxKind::DOT2 };
    [.] => { $crate::SyntaxKind::DOT };
    ['('] => { $crate::SyntaxKind::L_PAREN };
    [')'] => { $crate::SyntaxKind::R_PAREN };
    ['{'] => { $crate::SyntaxKind::L_CURLY };
    ['}'] => { $crate::SyntaxKind::R_CURLY };
    ['['] => { $crate::SyntaxKind::L_BRACK };
    [']'] => { $crate::SyntaxKind::R_BRACK };
    [<] => { $crate::SyntaxKind::L_ANGLE };
    [>] => { $crate::SyntaxKind::R_ANGLE };
    [::] => { $crate::SyntaxKind::COLON2 };
    [:=] => { $crate::SyntaxKind::COLONEQ };
    [:] => { $crate::SyntaxKind::COLON };
    [==] => { $crate::SyntaxKind::EQ2 };
    [<=] => { $crate::SyntaxKind::LTEQ };
    [>=] => { $crate::SyntaxKind::GTEQ };
    [=>] => { $crate::SyntaxKind::FAT_ARROW };
    [->] => { $crate::SyntaxKind::THIN_ARROW };
    [=] => { $crate::SyntaxKind::EQ };
    [+] => { $crate::SyntaxKind::PLUS };
    [-] => { $crate::SyntaxKind::MINUS };
    [*] => { $crate::SyntaxKind::STAR };
    [/] => { $crate::SyntaxKind::SLASH };
    [%] => { $crate::SyntaxKind::PERCENT };
    [!] => { $crate::SyntaxKind::BANG };
    [#] => { $crate::SyntaxKind::POUND };
    [?] => { $crate::SyntaxKind::QUESTION };
    [import] => { $crate::SyntaxKind::IMPORT_KW };
    [extern] => { $crate::SyntaxKind::EXTERN_KW };
    [for] => { $crate::SyntaxKind::FOR_KW };
    [if] => { $crate::SyntaxKind::IF_KW };
    [else] => { $crate::SyntaxKind::ELSE_KW };
    [comp] => { $crate::SyntaxKind::COMP_KW };
    [new] => { $crate::SyntaxKind::NEW_KW };
    [where] => { $crate::SyntaxKind::WHERE_KW };
    [generate] => { $crate::SyntaxKind::GENERATE_KW };
    [using] => { $crate::SyntaxKind::USING_KW };
    [with] => { $crate::SyntaxKind::WITH_KW };
    [let] => { $crate::SyntaxKind::LET_KW };
    [some] => { $crate::SyntaxKind::SOME_KW };
    [opaque] => { $crate::SyntaxKind::OPAQUE_KW };
    [in] => { $crate::SyntaxKind::IN_KW };
    [bundle] => { $crate::SyntaxKind::BUNDLE_KW };
    [assume] => { $crate::SyntaxKind::ASSUME_KW };
    [assert] => { $crate::SyntaxKind::ASSERT_KW };
}
