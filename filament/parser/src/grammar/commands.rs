use ast::{
    Access, AssignValue, Assignment, Command, Connect, Fact, FactKind, ForLoop, IfStmt,
    Implication, Instance, Invoke, LetValue, ParamLet, Port,
};

use super::expressions::expr_cmp;
use super::items::bundle_def;
use super::time::interval_range;
use super::*;

const COMMAND_EXPECTED: &[SyntaxKind] = &[
    T![bundle],
    T![for],
    T![if],
    T![assume],
    T![assert],
    T![let],
    IDENT,
    T!['}'],
];

/// `{ command* }`
pub(super) fn block(p: &mut Parser) -> PResult<Vec<Command>> {
    p.nested(|p| {
        p.expect(T!['{'])?;
        let mut body = Vec::new();
        while !p.eat(T!['}']) {
            body.push(command(p)?);
        }
        Ok(body)
    })
}

fn command(p: &mut Parser) -> PResult<Command> {
    let cmd = match p.current() {
        T![bundle] => {
            p.bump(T![bundle]);
            let bundle = bundle_def(p)?;
            p.expect(T![;])?;
            Command::Bundle(bundle)
        }
        T![for] => Command::ForLoop(for_loop(p)?),
        T![if] => Command::If(if_stmt(p)?),
        T![assume] | T![assert] => Command::Fact(fact(p)?),
        T![let] => Command::ParamLet(param_let(p)?),
        IDENT if p.nth_at(1, T![:=]) => Command::Assign(assignment(p)?),
        IDENT | T![in] => Command::Connect(connect(p)?),
        _ => return Err(p.unexpected(COMMAND_EXPECTED)),
    };
    Ok(cmd)
}

/// After `:=` the next one or two tokens select the kind of assignment:
/// `new` starts an instance, `Comp <` an invocation and anything else an expression.
fn assignment(p: &mut Parser) -> PResult<Assignment> {
    let start = p.start();
    let name = name(p)?;
    p.bump(T![:=]);
    let value = if p.at(T![new]) {
        AssignValue::Instance(instance(p)?)
    } else if p.at(IDENT) && p.nth_at(1, T![<]) {
        AssignValue::Invoke(invoke(p)?)
    } else {
        AssignValue::Exists(expr(p)?)
    };
    p.expect(T![;])?;
    Ok(Assignment { name, value, range: p.range_from(start) })
}

/// `new Comp[params]<events>(args) in [s, e], ..`
fn instance(p: &mut Parser) -> PResult<Instance> {
    let start = p.start();
    p.bump(T![new]);
    let component = name(p)?;
    let params =
        if p.at(T!['[']) { Some(delimited(p, T!['['], T![']'], false, expr)?) } else { None };
    let events = if p.at(T![<]) { Some(delimited(p, T![<], T![>], false, time)?) } else { None };
    let args =
        if p.at(T!['(']) { Some(delimited(p, T!['('], T![')'], false, port)?) } else { None };
    let mut lives = Vec::new();
    if p.eat(T![in]) {
        lives.push(interval_range(p)?);
        while p.eat(T![,]) {
            lives.push(interval_range(p)?);
        }
    }
    Ok(Instance { component, params, events, args, lives, range: p.range_from(start) })
}

/// `Comp<events>(args)`
fn invoke(p: &mut Parser) -> PResult<Invoke> {
    let start = p.start();
    let component = name(p)?;
    let events = delimited(p, T![<], T![>], false, time)?;
    let args = delimited(p, T!['('], T![')'], false, port)?;
    Ok(Invoke { component, events, args, range: p.range_from(start) })
}

fn connect(p: &mut Parser) -> PResult<Connect> {
    let start = p.start();
    let dst = port(p)?;
    p.expect(T![=])?;
    let src = port(p)?;
    p.expect(T![;])?;
    Ok(Connect { dst, src, range: p.range_from(start) })
}

/// `inst.name{idx}{start..end}`
fn port(p: &mut Parser) -> PResult<Port> {
    let start = p.start();
    let first = port_name(p)?;
    let (instance, name) =
        if p.eat(T![.]) { (Some(first), port_name(p)?) } else { (None, first) };

    let mut accesses = Vec::new();
    while p.at(T!['{']) {
        let access_start = p.start();
        p.bump(T!['{']);
        let start = expr(p)?;
        let end = if p.eat(T![..]) { Some(expr(p)?) } else { None };
        p.expect(T!['}'])?;
        accesses.push(Access { start, end, range: p.range_from(access_start) });
    }
    Ok(Port { instance, name, accesses, range: p.range_from(start) })
}

/// `for #i in start..end { body }`
fn for_loop(p: &mut Parser) -> PResult<ForLoop> {
    let start_pos = p.start();
    p.bump(T![for]);
    let var = param_var(p)?;
    p.expect(T![in])?;
    let start = expr(p)?;
    p.expect(T![..])?;
    let end = expr(p)?;
    let body = block(p)?;
    Ok(ForLoop { var, start, end, body, range: p.range_from(start_pos) })
}

fn if_stmt(p: &mut Parser) -> PResult<IfStmt> {
    let start = p.start();
    p.bump(T![if]);
    let cond = expr_cmp(p)?;
    let then_branch = block(p)?;
    let else_branch = if p.eat(T![else]) {
        if p.at(T![if]) {
            let else_if = p.nested(if_stmt)?;
            Some(vec![Command::If(else_if)])
        } else {
            Some(block(p)?)
        }
    } else {
        None
    };
    Ok(IfStmt { cond, then_branch, else_branch, range: p.range_from(start) })
}

/// `assume g => c;` or `assert c;`
fn fact(p: &mut Parser) -> PResult<Fact> {
    let start = p.start();
    let kind = if p.eat(T![assume]) {
        FactKind::Assume
    } else {
        p.bump(T![assert]);
        FactKind::Assert
    };

    let imp_start = p.start();
    let first = expr_cmp(p)?;
    let (guard, cons) =
        if p.eat(T![=>]) { (Some(first), expr_cmp(p)?) } else { (None, first) };
    let implication = Implication { guard, cons, range: p.range_from(imp_start) };
    p.expect(T![;])?;
    Ok(Fact { kind, implication, range: p.range_from(start) })
}

/// `let #x = e;` or `let #x = ?;`
fn param_let(p: &mut Parser) -> PResult<ParamLet> {
    let start = p.start();
    p.bump(T![let]);
    let name = param_var(p)?;
    p.expect(T![=])?;
    let value = if p.at(T![?]) { LetValue::Hole(p.bump_any()) } else { LetValue::Expr(expr(p)?) };
    p.expect(T![;])?;
    Ok(ParamLet { name, value, range: p.range_from(start) })
}
