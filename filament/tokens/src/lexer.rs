use text_size::TextSize;

/// Parsed token.
/// It doesn't contain information about data that has been parsed,
/// only the type of the token and its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub len: TextSize,
}

/// Enum representing common lexeme types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Multi-char tokens:
    /// "// comment"
    LineComment,
    /// `/* block comment */`
    BlockComment {
        terminated: bool,
    },
    /// Any whitespace characters sequence.
    Whitespace,

    /// a normal identifier (keywords are identified later)
    Ident,

    /// `'G`, the name of an event
    EventMark,

    Literal {
        kind: LiteralKind,
    },

    // One-char tokens:
    /// ";"
    Semi,
    /// ","
    Comma,
    /// "."
    Dot,
    /// "("
    OpenParen,
    /// ")"
    CloseParen,
    /// "{"
    OpenBrace,
    /// "}"
    CloseBrace,
    /// "["
    OpenBracket,
    /// "]"
    CloseBracket,
    /// "#"
    Pound,
    /// "?"
    Question,
    /// ":"
    Colon,
    /// "="
    Eq,
    /// "!"
    Not,
    /// "<"
    Lt,
    /// ">"
    Gt,
    /// "-"
    Minus,
    /// "+"
    Plus,
    /// "*"
    Star,
    /// "/"
    Slash,
    /// "%"
    Percent,

    /// ..
    Dot2,
    /// ::
    Colon2,
    /// :=
    ColonEq,
    /// ==
    Eq2,
    /// <=
    Leq,
    /// >=
    Geq,
    /// =>
    FatArrow,
    /// ->
    ThinArrow,

    /// Unknown token, not expected by the lexer, e.g. "№"
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LiteralKind {
    Int,
    /// `8'b1010`; `empty` is set when no digits follow the radix
    SizedInt { empty: bool },
    /// `1.5`; `1.` and `.5` are lexed as malformed floats
    Float { malformed: bool },
    Str { terminated: bool },
}
