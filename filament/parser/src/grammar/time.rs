use ast::{Constraint, IntervalRange, OrderConstraint, Time, TimeKind};

use super::expressions::order_op;
use super::*;

/// A time starts with an event (`'G`, `'G + e`) or with an expression (`e + 'G`, `e`).
/// One token of lookahead decides which, the trailing `+ 'G` is detected with two.
pub(crate) fn time(p: &mut Parser) -> PResult<Time> {
    let start = p.start();
    let kind = if p.at(EVENT) {
        let event = event(p)?;
        if p.eat(T![+]) {
            TimeKind::EventPlus(event, expr(p)?)
        } else {
            TimeKind::Event(event)
        }
    } else {
        let offset = expr(p)?;
        if p.at(T![+]) && p.nth_at(1, EVENT) {
            p.bump(T![+]);
            TimeKind::PlusEvent(offset, event(p)?)
        } else {
            TimeKind::Expr(offset)
        }
    };
    Ok(Time { kind, range: p.range_from(start) })
}

/// `[start, end]`
pub(super) fn interval_range(p: &mut Parser) -> PResult<IntervalRange> {
    let start_pos = p.start();
    p.expect(T!['['])?;
    let start = time(p)?;
    p.expect(T![,])?;
    let end = time(p)?;
    p.expect(T![']'])?;
    Ok(IntervalRange { start, end, range: p.range_from(start_pos) })
}

/// Both sides are parsed as times. When neither side mentions an event the
/// constraint is a plain expression constraint.
pub(crate) fn constraint(p: &mut Parser) -> PResult<Constraint> {
    let start = p.start();
    let lhs = time(p)?;
    let op = order_op(p)?;
    let rhs = time(p)?;
    let range = p.range_from(start);

    let cons = match (lhs.kind, rhs.kind) {
        (TimeKind::Expr(lhs), TimeKind::Expr(rhs)) => {
            Constraint::Expr(OrderConstraint { lhs, op, rhs, range })
        }
        (lhs_kind, rhs_kind) => Constraint::Time(OrderConstraint {
            lhs: Time { kind: lhs_kind, range: lhs.range },
            op,
            rhs: Time { kind: rhs_kind, range: rhs.range },
            range,
        }),
    };
    Ok(cons)
}

pub(super) fn constraint_list(p: &mut Parser) -> PResult<Vec<Constraint>> {
    let mut list = vec![constraint(p)?];
    while p.eat(T![,]) {
        list.push(constraint(p)?);
    }
    Ok(list)
}
