use std::time::Instant;

use ast::{Constraint, Expr, Time};
use parser::{SyntaxError, Token};
use text_size::{TextRange, TextSize};
use tokens::{LexerErrorKind, SyntaxKind, TokenClass};

use crate::{Error, LexError, LexErrorKind, Parse, ParseConfig};

/// Lexes and parses a complete file.
pub fn parse_text(text: &str, config: &ParseConfig) -> Parse {
    let start = Instant::now();
    let (tokens, lex_err) = lex(text);
    log::debug!("lexed {} tokens", tokens.len());

    let (tree, syntax_err) = parser::parse(text, &tokens, config.max_nesting_depth);
    log::debug!(
        "parsed {} imports and {} items in {:?}",
        tree.imports.len(),
        tree.items.len(),
        start.elapsed()
    );

    let errors = first_error(syntax_err, lex_err).into_iter().collect();
    Parse { tree, errors }
}

/// Parses `text` as a single expression.
pub fn parse_expr_text(text: &str, config: &ParseConfig) -> Result<Expr, Error> {
    parse_fragment(text, config, parser::parse_expr)
}

/// Parses `text` as a single time expression such as `'G + 1`.
pub fn parse_time_text(text: &str, config: &ParseConfig) -> Result<Time, Error> {
    parse_fragment(text, config, parser::parse_time)
}

/// Parses `text` as a single ordering constraint such as `'L > 'G + 1`.
pub fn parse_constraint_text(text: &str, config: &ParseConfig) -> Result<Constraint, Error> {
    parse_fragment(text, config, parser::parse_constraint)
}

fn parse_fragment<T>(
    text: &str,
    config: &ParseConfig,
    parse: impl FnOnce(&str, &[Token], u32) -> Result<T, SyntaxError>,
) -> Result<T, Error> {
    let (tokens, lex_err) = lex(text);
    match parse(text, &tokens, config.max_nesting_depth) {
        Ok(res) => lex_err.map_or(Ok(res), |err| Err(err.into())),
        Err(err) => Err(syntax_or_lex_error(err, lex_err)),
    }
}

/// Lexer errors truncate the token stream, so the parser never sees anything after them.
/// A syntax error at (or after) the truncation point only exists because of the
/// truncation and is replaced by the lexer error.
fn syntax_or_lex_error(syntax_err: SyntaxError, lex_err: Option<LexError>) -> Error {
    match lex_err {
        Some(lex_err) if syntax_err.range().start() >= lex_err.range.start() => lex_err.into(),
        _ => syntax_err.into(),
    }
}

fn first_error(syntax_err: Option<SyntaxError>, lex_err: Option<LexError>) -> Option<Error> {
    match syntax_err {
        Some(syntax_err) => Some(syntax_or_lex_error(syntax_err, lex_err)),
        None => lex_err.map(Error::from),
    }
}

/// Produces the trivia free token stream for the parser. The stream ends with an `EOF`
/// token, either at the end of the text or at the first lexer error.
fn lex(text: &str) -> (Vec<Token>, Option<LexError>) {
    let mut tokens = Vec::new();
    let mut offset = TextSize::from(0);
    let mut err = None;

    for token in lexer::tokenize(text) {
        let range = TextRange::at(offset, token.len);
        let src = &text[range];
        let (kind, lex_err) = token.kind.to_syntax(src);
        if let Some(kind) = lex_err {
            let kind = match kind {
                LexerErrorKind::UnknownChar => {
                    LexErrorKind::UnknownChar(src.chars().next().unwrap_or('\0'))
                }
                LexerErrorKind::UnterminatedStr => LexErrorKind::UnterminatedStr,
                LexerErrorKind::UnterminatedBlockComment => {
                    LexErrorKind::UnterminatedBlockComment
                }
                LexerErrorKind::MalformedNumber => LexErrorKind::MalformedNumber,
            };
            err = Some(LexError { kind, range });
            break;
        }
        match kind {
            Some(kind) if !kind.is_trivia() => tokens.push(Token { kind, range }),
            _ => (),
        }
        offset += token.len;
    }

    tokens.push(Token { kind: SyntaxKind::EOF, range: TextRange::empty(offset) });
    (tokens, err)
}

/// A token of the source text including trivia, used by highlighters and `--emit tokens`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub kind: SyntaxKind,
    pub class: TokenClass,
    pub range: TextRange,
}

/// Classifies every token of `text`. Unlike parsing this never stops early, malformed
/// tokens are reported with the `Error` class.
pub fn classify_tokens(text: &str) -> Vec<ClassifiedToken> {
    let mut offset = TextSize::from(0);
    lexer::tokenize(text)
        .into_iter()
        .map(|token| {
            let range = TextRange::at(offset, token.len);
            offset += token.len;
            let kind = match token.kind.to_syntax(&text[range]) {
                (Some(kind), None) => kind,
                _ => SyntaxKind::ERROR,
            };
            ClassifiedToken { kind, class: kind.class(), range }
        })
        .collect()
}
