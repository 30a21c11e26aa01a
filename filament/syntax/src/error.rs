use parser::SyntaxError;
use stdx::impl_display;
use text_size::TextRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    UnknownChar(char),
    UnterminatedStr,
    UnterminatedBlockComment,
    MalformedNumber,
}

impl_display! {
    match LexErrorKind {
        LexErrorKind::UnknownChar(c) => "unknown character {:?}", c;
        LexErrorKind::UnterminatedStr => "unterminated string literal";
        LexErrorKind::UnterminatedBlockComment => "unterminated block comment";
        LexErrorKind::MalformedNumber => "malformed number literal";
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub range: TextRange,
}

impl_display! {
    err @ LexError => "{}", err.kind
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Lex(LexError),
    Syntax(SyntaxError),
    NestingTooDeep { limit: u32, range: TextRange },
}

impl Error {
    pub fn range(&self) -> TextRange {
        match self {
            Error::Lex(err) => err.range,
            Error::Syntax(err) => err.range(),
            Error::NestingTooDeep { range, .. } => *range,
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Error {
        match err {
            SyntaxError::NestingTooDeep { limit, range } => Error::NestingTooDeep { limit, range },
            err => Error::Syntax(err),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Error {
        Error::Lex(err)
    }
}

impl_display! {
    match Error {
        Error::Lex(err) => "{}", err;
        Error::Syntax(err) => "{}", err;
        Error::NestingTooDeep { limit, .. } => "nesting exceeds the maximum depth of {}", limit;
    }
}
