use ast::{
    AbstractVar, AttrBind, AttrValue, Attributes, BundleDef, BundleType, Component, Constraints,
    Delay, EventBind, External, FloatLit, Generate, Io, Item, ParamBind, Params, PortDef,
    SigBind, SigBindings, Signature,
};

use super::commands::block;
use super::time::{constraint_list, interval_range};
use super::*;

const ITEM_EXPECTED: &[SyntaxKind] = &[T![comp], T![#], T![extern], T![generate]];

pub(super) fn item(p: &mut Parser) -> PResult<Item> {
    let item = match p.current() {
        T![extern] => Item::External(external(p)?),
        T![generate] => Item::Generate(generate(p)?),
        T![comp] | T![#] => Item::Component(component(p)?),
        _ => return Err(p.unexpected(ITEM_EXPECTED)),
    };
    Ok(item)
}

fn component(p: &mut Parser) -> PResult<Component> {
    let start = p.start();
    let sig = signature(p)?;
    let body = block(p)?;
    Ok(Component { sig, body, range: p.range_from(start) })
}

fn external(p: &mut Parser) -> PResult<External> {
    let start = p.start();
    p.bump(T![extern]);
    let path = str_lit(p)?;
    let sigs = signature_block(p)?;
    Ok(External { path, sigs, range: p.range_from(start) })
}

fn generate(p: &mut Parser) -> PResult<Generate> {
    let start = p.start();
    p.bump(T![generate]);
    p.expect(T!['('])?;
    let tool = name(p)?;
    p.expect(T![')'])?;
    p.expect(T![using])?;
    let using = str_lit(p)?;
    let sigs = signature_block(p)?;
    Ok(Generate { tool, using, sigs, range: p.range_from(start) })
}

/// `{ (signature ";")* }`
fn signature_block(p: &mut Parser) -> PResult<Vec<Signature>> {
    p.expect(T!['{'])?;
    let mut sigs = Vec::new();
    while !p.eat(T!['}']) {
        if !p.at_ts(TokenSet::new(&[T![comp], T![#]])) {
            return Err(p.unexpected(&[T![comp], T![#], T!['}']]));
        }
        sigs.push(signature(p)?);
        p.expect(T![;])?;
    }
    Ok(sigs)
}

/// The parts of a signature always appear in this order:
/// `attrs? comp name params? events? io bindings? constraints?`
fn signature(p: &mut Parser) -> PResult<Signature> {
    let start = p.start();
    let attrs = if p.at(T![#]) { Some(attributes(p)?) } else { None };
    p.expect(T![comp])?;
    let name = name(p)?;
    let params = if p.at(T!['[']) { Some(params(p)?) } else { None };
    let events = if p.at(T![<]) { Some(abstract_var(p)?) } else { None };
    let io = io(p)?;
    let bindings = if p.at(T![with]) { Some(sig_bindings(p)?) } else { None };
    let constraints = if p.at(T![where]) {
        let start = p.start();
        p.bump(T![where]);
        let list = constraint_list(p)?;
        Some(Constraints { list, range: p.range_from(start) })
    } else {
        None
    };
    Ok(Signature {
        attrs,
        name,
        params,
        events,
        io,
        bindings,
        constraints,
        range: p.range_from(start),
    })
}

/// `#[flag, not(flag), name=1, name=0.5]`
pub(super) fn attributes(p: &mut Parser) -> PResult<Attributes> {
    let start = p.start();
    p.bump(T![#]);
    let binds = delimited(p, T!['['], T![']'], true, attr_bind)?;
    Ok(Attributes { binds, range: p.range_from(start) })
}

fn attr_bind(p: &mut Parser) -> PResult<AttrBind> {
    let start = p.start();
    if p.at_contextual_kw(0, "not") && p.nth_at(1, T!['(']) {
        p.bump(IDENT);
        p.bump(T!['(']);
        let name = name(p)?;
        p.expect(T![')'])?;
        return Ok(AttrBind { name, value: AttrValue::Negated, range: p.range_from(start) });
    }

    let name = name(p)?;
    let value = if p.eat(T![=]) {
        if p.at(FLOAT_NUMBER) {
            let range = p.bump_any();
            let text = p.text(range);
            let value = text.parse().map_err(|_| p.unexpected(&[FLOAT_NUMBER]))?;
            AttrValue::Float(FloatLit { value, text: text.into() })
        } else if p.at_ts(INT_LITERALS) {
            AttrValue::Int(int_lit(p)?.value)
        } else {
            return Err(p.unexpected(&[INT_NUMBER, FLOAT_NUMBER]));
        }
    } else {
        AttrValue::Flag
    };
    Ok(AttrBind { name, value, range: p.range_from(start) })
}

/// `[#W, ?#N = 32]`
fn params(p: &mut Parser) -> PResult<Params> {
    let start = p.start();
    let binds = delimited(p, T!['['], T![']'], false, param_bind)?;
    Ok(Params { binds, range: p.range_from(start) })
}

fn param_bind(p: &mut Parser) -> PResult<ParamBind> {
    let start = p.start();
    let default = p.eat(T![?]);
    let name = param_var(p)?;
    let default = if default {
        p.expect(T![=])?;
        Some(expr(p)?)
    } else {
        None
    };
    Ok(ParamBind { name, default, range: p.range_from(start) })
}

/// `<'G: 1, ?'L: 'G - ('H) = 'G + 1>`
fn abstract_var(p: &mut Parser) -> PResult<AbstractVar> {
    let start = p.start();
    let binds = delimited(p, T![<], T![>], true, event_bind)?;
    Ok(AbstractVar { binds, range: p.range_from(start) })
}

fn event_bind(p: &mut Parser) -> PResult<EventBind> {
    let start = p.start();
    let existential = p.eat(T![?]);
    let event = event(p)?;
    p.expect(T![:])?;
    let delay = delay(p)?;
    let default = if p.at(T![=]) {
        if !existential {
            return Err(SyntaxError::DefaultOutsideExistential { range: p.current_range() });
        }
        p.bump(T![=]);
        Some(time(p)?)
    } else {
        None
    };
    Ok(EventBind { existential, event, delay, default, range: p.range_from(start) })
}

/// `expr` or `end - (start)`
fn delay(p: &mut Parser) -> PResult<Delay> {
    let end = time(p)?;
    if p.eat(T![-]) {
        p.expect(T!['('])?;
        let start = time(p)?;
        p.expect(T![')'])?;
        return Ok(Delay::Diff { end, start });
    }
    match end.into_expr() {
        Ok(delay) => Ok(Delay::Expr(delay)),
        Err(_) => Err(p.unexpected(&[T![-]])),
    }
}

/// `(inputs) -> (outputs)`
fn io(p: &mut Parser) -> PResult<Io> {
    let start = p.start();
    let inputs = delimited(p, T!['('], T![')'], false, port_def)?;
    p.expect(T![->])?;
    let outputs = delimited(p, T!['('], T![')'], false, port_def)?;
    Ok(Io { inputs, outputs, range: p.range_from(start) })
}

fn port_def(p: &mut Parser) -> PResult<PortDef> {
    if p.at(T![#]) || p.nth_at(1, T!['[']) {
        return Ok(PortDef::Bundle(bundle_def(p)?));
    }
    if p.nth_at(1, T![:]) && (p.nth_at(2, T![for]) || p.nth_at(2, T!['['])) {
        return Ok(PortDef::Bundle(bundle_def(p)?));
    }

    let start = p.start();
    let name = port_name(p)?;
    p.expect(T![:])?;
    if p.at_contextual_kw(0, "interface") && p.nth_at(1, T!['[']) {
        p.bump(IDENT);
        p.bump(T!['[']);
        let event = event(p)?;
        p.expect(T![']'])?;
        return Ok(PortDef::Interface { name, event, range: p.range_from(start) });
    }
    let width = expr(p)?;
    Ok(PortDef::Scalar { name, width, range: p.range_from(start) })
}

/// `#[attrs] name[dims]: for<#k> [start, end] width`
pub(super) fn bundle_def(p: &mut Parser) -> PResult<BundleDef> {
    let start = p.start();
    let attrs = if p.at(T![#]) { Some(attributes(p)?) } else { None };
    let name = port_name(p)?;
    let mut dims = Vec::new();
    while p.eat(T!['[']) {
        dims.push(expr(p)?);
        p.expect(T![']'])?;
    }
    p.expect(T![:])?;

    let typ_start = p.start();
    let params = if p.eat(T![for]) {
        Some(delimited(p, T![<], T![>], true, param_var)?)
    } else {
        None
    };
    let liveness = interval_range(p)?;
    let width = expr(p)?;
    let typ = BundleType { params, liveness, width, range: p.range_from(typ_start) };

    Ok(BundleDef { attrs, name, dims, typ, range: p.range_from(start) })
}

/// `with { let #x = e; some #y where c; opaque #z; }`
fn sig_bindings(p: &mut Parser) -> PResult<SigBindings> {
    let start = p.start();
    p.bump(T![with]);
    p.expect(T!['{'])?;
    let mut binds = Vec::new();
    while !p.eat(T!['}']) {
        binds.push(sig_bind(p)?);
    }
    Ok(SigBindings { binds, range: p.range_from(start) })
}

fn sig_bind(p: &mut Parser) -> PResult<SigBind> {
    let start = p.start();
    let bind = match p.current() {
        T![let] => {
            p.bump(T![let]);
            let name = param_var(p)?;
            p.expect(T![=])?;
            let value = expr(p)?;
            p.expect(T![;])?;
            SigBind::Let { name, value, range: p.range_from(start) }
        }
        T![some] | T![opaque] => {
            let opaque = p.at(T![opaque]);
            p.bump_any();
            let name = param_var(p)?;
            let constraints = if p.eat(T![where]) { constraint_list(p)? } else { Vec::new() };
            p.expect(T![;])?;
            SigBind::Exists { opaque, name, constraints, range: p.range_from(start) }
        }
        _ => return Err(p.unexpected(&[T![let], T![some], T![opaque], T!['}']])),
    };
    Ok(bind)
}
