//! The grammar of filament. Each production has its own function that consumes exactly
//! the tokens of that production and returns the finished node.
//!
//! Alternatives are always selected with at most four tokens of lookahead, the parser
//! never backtracks.

mod commands;
mod expressions;
mod items;
mod time;

use ast::{Import, IntLit, Name, Radix, SourceFile, StrLit};
use text_size::TextRange;
use tokens::T;

use crate::parser::{PResult, Parser};
use crate::token_set::TokenSet;
use crate::SyntaxError;
use crate::SyntaxKind::{self, *};

pub(crate) use self::expressions::expr;
pub(crate) use self::time::{constraint, time};

pub(crate) fn source_file(p: &mut Parser) -> (SourceFile, Option<SyntaxError>) {
    let mut file = SourceFile { range: TextRange::up_to(p.src_len()), ..SourceFile::default() };
    let err = source_file_contents(p, &mut file).err();
    (file, err)
}

fn source_file_contents(p: &mut Parser, file: &mut SourceFile) -> PResult<()> {
    while p.at(T![import]) {
        file.imports.push(import(p)?);
    }
    while !p.at(EOF) {
        file.items.push(items::item(p)?);
    }
    Ok(())
}

fn import(p: &mut Parser) -> PResult<Import> {
    let start = p.start();
    p.bump(T![import]);
    let path = str_lit(p)?;
    p.eat(T![;]);
    Ok(Import { path, range: p.range_from(start) })
}

pub(crate) fn name(p: &mut Parser) -> PResult<Name> {
    let range = p.expect(IDENT)?;
    Ok(Name::new(p.text(range), range))
}

/// `in` is a keyword but also the conventional name of input ports.
fn port_name(p: &mut Parser) -> PResult<Name> {
    if p.at(T![in]) {
        let range = p.bump_any();
        return Ok(Name::new(p.text(range), range));
    }
    name(p)
}

/// `#W` or `W`; the name is stored without the `#`.
fn param_var(p: &mut Parser) -> PResult<Name> {
    let start = p.start();
    p.eat(T![#]);
    let ident = p.expect(IDENT)?;
    Ok(Name::new(p.text(ident), p.range_from(start)))
}

/// `'G`; the name is stored without the `'`.
fn event(p: &mut Parser) -> PResult<Name> {
    let range = p.expect(EVENT)?;
    Ok(Name::new(&p.text(range)[1..], range))
}

fn str_lit(p: &mut Parser) -> PResult<StrLit> {
    let range = p.expect(STR_LIT)?;
    let text = p.text(range);
    let inner = text.strip_prefix('"').and_then(|text| text.strip_suffix('"')).unwrap_or(text);
    Ok(StrLit { value: unescape(inner), range })
}

fn unescape(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            res.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => res.push('\n'),
            Some('t') => res.push('\t'),
            Some(c) => res.push(c),
            None => res.push('\\'),
        }
    }
    res
}

const INT_LITERALS: TokenSet = TokenSet::new(&[INT_NUMBER, SIZED_INT_NUMBER]);

fn int_lit(p: &mut Parser) -> PResult<IntLit> {
    let (kind, range) = p.expect_ts(INT_LITERALS)?;
    let text = p.text(range);
    let overflow = || SyntaxError::IntegerOverflow { range };
    if kind == INT_NUMBER {
        let value = text.parse().map_err(|_| overflow())?;
        return Ok(IntLit { value, sized: None });
    }

    let (width, digits) = text.split_once('\'').ok_or_else(overflow)?;
    let mut digits = digits.chars();
    let radix = digits.next().and_then(Radix::from_char).ok_or_else(overflow)?;
    let width = width.parse().map_err(|_| overflow())?;
    let value = u64::from_str_radix(digits.as_str(), radix.base()).map_err(|_| overflow())?;
    Ok(IntLit { value, sized: Some((width, radix)) })
}

/// `open (elem ("," elem)* ","?)? close`. With `non_empty` at least one element is required.
fn delimited<T>(
    p: &mut Parser,
    open: SyntaxKind,
    close: SyntaxKind,
    non_empty: bool,
    mut elem: impl FnMut(&mut Parser) -> PResult<T>,
) -> PResult<Vec<T>> {
    p.expect(open)?;
    let mut res = Vec::new();
    loop {
        if p.at(close) && !(non_empty && res.is_empty()) {
            break;
        }
        res.push(elem(p)?);
        if !p.eat(T![,]) {
            if !p.at(close) {
                return Err(p.unexpected(&[T![,], close]));
            }
            break;
        }
    }
    p.bump(close);
    Ok(res)
}
