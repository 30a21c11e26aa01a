use ast::{BinaryOp, Builtin, Expr, ExprCmp, ExprKind, OrderConstraint, OrderOp};

use super::*;

const EXPR_EXPECTED: &[SyntaxKind] =
    &[T![if], IDENT, T![#], T!['('], INT_NUMBER, SIZED_INT_NUMBER];

pub(super) const ORDER_OPS: TokenSet =
    TokenSet::new(&[T![>], T![>=], T![<], T![<=], T![==]]);

pub(crate) fn expr(p: &mut Parser) -> PResult<Expr> {
    p.nested(|p| expr_bp(p, 0))
}

fn current_op(p: &Parser) -> Option<BinaryOp> {
    let op = match p.current() {
        // `e + 'G` is a time, the expression ends before the `+`
        T![+] if p.nth_at(1, EVENT) => return None,
        // `t - ('G)` is a delay
        T![-] if p.nth_at(1, T!['(']) && p.nth_at(2, EVENT) => return None,
        T![+] => BinaryOp::Add,
        T![-] => BinaryOp::Sub,
        T![*] => BinaryOp::Mul,
        T![/] => BinaryOp::Div,
        T![%] => BinaryOp::Rem,
        _ => return None,
    };
    Some(op)
}

// Parses expression with binding power of at least min_bp.
fn expr_bp(p: &mut Parser, min_bp: u8) -> PResult<Expr> {
    let mut lhs = atom_expr(p)?;

    while let Some(op) = current_op(p) {
        let (l_bp, r_bp) = op.binding_power();
        if l_bp < min_bp {
            break;
        }
        p.bump_any();
        let rhs = expr_bp(p, r_bp)?;
        let range = lhs.range.cover(rhs.range);
        lhs = Expr { kind: ExprKind::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }, range };
    }
    Ok(lhs)
}

fn atom_expr(p: &mut Parser) -> PResult<Expr> {
    let start = p.start();
    let kind = match p.current() {
        T![if] => if_expr(p)?,
        IDENT if p.nth_at(1, T!['(']) => call(p)?,
        IDENT if p.nth_at(1, T![::]) => {
            let scope = name(p)?;
            p.bump(T![::]);
            let name = param_var(p)?;
            ExprKind::Scoped { scope, name }
        }
        T!['('] => {
            p.bump(T!['(']);
            let inner = expr(p)?;
            p.expect(T![')'])?;
            ExprKind::Paren(Box::new(inner))
        }
        INT_NUMBER | SIZED_INT_NUMBER => ExprKind::Literal(int_lit(p)?),
        T![#] | IDENT => ExprKind::Param(param_var(p)?),
        _ => return Err(p.unexpected(EXPR_EXPECTED)),
    };
    Ok(Expr { kind, range: p.range_from(start) })
}

fn if_expr(p: &mut Parser) -> PResult<ExprKind> {
    p.bump(T![if]);
    let cond = expr_cmp(p)?;
    p.expect(T!['{'])?;
    let then_val = expr(p)?;
    p.expect(T!['}'])?;
    p.expect(T![else])?;
    p.expect(T!['{'])?;
    let else_val = expr(p)?;
    p.expect(T!['}'])?;
    Ok(ExprKind::If {
        cond: Box::new(cond),
        then_val: Box::new(then_val),
        else_val: Box::new(else_val),
    })
}

fn call(p: &mut Parser) -> PResult<ExprKind> {
    let name = name(p)?;
    let func = Builtin::from_name(name.as_str())
        .ok_or(SyntaxError::UnknownFunction { name: name.text, range: name.range })?;
    let args = delimited(p, T!['('], T![')'], true, expr)?;
    Ok(ExprKind::Call { func, args })
}

pub(super) fn order_op(p: &mut Parser) -> PResult<OrderOp> {
    let (kind, _) = p.expect_ts(ORDER_OPS)?;
    let op = match kind {
        T![>] => OrderOp::Gt,
        T![>=] => OrderOp::Gte,
        T![<] => OrderOp::Lt,
        T![<=] => OrderOp::Lte,
        _ => OrderOp::Eq,
    };
    Ok(op)
}

/// `expr op expr`. Comparisons never chain.
pub(super) fn expr_cmp(p: &mut Parser) -> PResult<ExprCmp> {
    let start = p.start();
    let lhs = expr(p)?;
    let op = order_op(p)?;
    let rhs = expr(p)?;
    Ok(OrderConstraint { lhs, op, rhs, range: p.range_from(start) })
}
