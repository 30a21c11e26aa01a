use expect_test::expect;
use text_size::TextRange;

use crate::{
    BinaryOp, Builtin, Component, Expr, ExprKind, IntLit, Io, Item, Name, PortDef, Radix,
    Signature, SourceFile, Time, TimeKind,
};

fn name(text: &str) -> Name {
    Name::new(text, TextRange::default())
}

fn expr(kind: ExprKind) -> Expr {
    Expr { kind, range: TextRange::default() }
}

fn int(value: u64) -> Expr {
    expr(ExprKind::Literal(IntLit { value, sized: None }))
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    expr(ExprKind::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) })
}

#[test]
fn expr_display() {
    let sum = binary(BinaryOp::Add, expr(ExprKind::Param(name("W"))), int(1));
    let e = binary(BinaryOp::Mul, expr(ExprKind::Paren(Box::new(sum))), int(2));
    assert_eq!(e.to_string(), "(#W + 1) * 2");

    let call = expr(ExprKind::Call { func: Builtin::Log2, args: vec![int(8)] });
    assert_eq!(call.to_string(), "log2(8)");

    let scoped = expr(ExprKind::Scoped { scope: name("Add"), name: name("W") });
    assert_eq!(scoped.to_string(), "Add::#W");

    let sized = expr(ExprKind::Literal(IntLit { value: 10, sized: Some((4, Radix::Bin)) }));
    assert_eq!(sized.to_string(), "4'b1010");
}

#[test]
fn time_display() {
    let times = [
        TimeKind::Event(name("G")),
        TimeKind::EventPlus(name("G"), int(1)),
        TimeKind::PlusEvent(int(1), name("G")),
        TimeKind::Expr(int(3)),
    ];
    let actual: Vec<_> = times
        .into_iter()
        .map(|kind| Time { kind, range: TextRange::default() }.to_string())
        .collect();
    assert_eq!(actual, ["'G", "'G + 1", "1 + 'G", "3"]);
}

#[test]
fn builtins_by_name() {
    for builtin in Builtin::ALL {
        assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
    }
    assert_eq!(Builtin::from_name("pow3"), None);
}

#[test]
fn dump_component() {
    let sig = Signature {
        attrs: None,
        name: name("Id"),
        params: None,
        events: None,
        io: Io {
            inputs: vec![PortDef::Scalar {
                name: name("x"),
                width: int(32),
                range: TextRange::default(),
            }],
            outputs: vec![],
            range: TextRange::default(),
        },
        bindings: None,
        constraints: None,
        range: TextRange::default(),
    };
    let file = SourceFile {
        imports: vec![],
        items: vec![Item::Component(Component { sig, body: vec![], range: TextRange::default() })],
        range: TextRange::default(),
    };
    expect![[r#"
        comp Id(x: 32) -> () {
        }
    "#]]
    .assert_eq(&file.dump());
}
