use ast::{
    AssignValue, Command, Constraint, Expr, ExprKind, FactKind, IntLit, Item, LetValue, PortDef,
    TimeKind,
};
use expect_test::{expect, Expect};
use stdx::format_to;

use crate::{
    classify_tokens, parse_constraint_text, parse_expr_text, parse_text, parse_time_text, Error,
    LexErrorKind, Parse, ParseConfig,
};

fn parse(text: &str) -> Parse {
    parse_text(text, &ParseConfig::default())
}

fn check_dump(text: &str, expect: Expect) {
    let parse = parse(text);
    assert!(!parse.has_errors(), "unexpected errors: {:?}", parse.errors());
    expect.assert_eq(&parse.tree().dump());
}

fn check_errors(text: &str, expect: Expect) {
    let mut actual = String::new();
    for err in parse(text).errors() {
        format_to!(actual, "{:?}: {}\n", err.range(), err);
    }
    expect.assert_eq(&actual);
}

/// Renders an expression with every binary operation in parens.
fn grouped(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Binary { op, lhs, rhs } => format!("({} {} {})", grouped(lhs), op, grouped(rhs)),
        ExprKind::Paren(inner) => grouped(inner),
        _ => expr.to_string(),
    }
}

#[test]
fn register_component() {
    let file = parse("comp Reg[W](in: 32) -> (out: 32) { out = in; }").ok().unwrap();
    assert!(file.imports.is_empty());
    let comp = match &file.items[..] {
        [Item::Component(comp)] => comp,
        items => panic!("expected a single component, found {items:?}"),
    };
    assert_eq!(comp.sig.name.as_str(), "Reg");

    let params = comp.sig.params.as_ref().unwrap();
    assert_eq!(params.binds.len(), 1);
    assert_eq!(params.binds[0].name.as_str(), "W");
    assert!(params.binds[0].default.is_none());

    match &comp.sig.io.inputs[..] {
        [PortDef::Scalar { name, width, .. }] => {
            assert_eq!(name.as_str(), "in");
            assert_eq!(width.kind, ExprKind::Literal(IntLit { value: 32, sized: None }));
        }
        ports => panic!("unexpected inputs {ports:?}"),
    }
    assert_eq!(comp.sig.io.outputs.len(), 1);
    assert_eq!(comp.sig.io.outputs[0].name().as_str(), "out");

    match &comp.body[..] {
        [Command::Connect(connect)] => {
            assert_eq!(connect.dst.name.as_str(), "out");
            assert_eq!(connect.src.name.as_str(), "in");
            assert!(connect.src.instance.is_none());
        }
        body => panic!("unexpected body {body:?}"),
    }
}

#[test]
fn lex_error_keeps_preceding_imports() {
    let parse = parse("import \"core.fil\"\nextern \"foo {");
    assert_eq!(parse.tree().imports.len(), 1);
    assert_eq!(parse.tree().imports[0].path.value, "core.fil");
    assert!(parse.tree().items.is_empty());
    match parse.errors() {
        [Error::Lex(err)] => assert_eq!(err.kind, LexErrorKind::UnterminatedStr),
        errors => panic!("expected a single lexer error, found {errors:?}"),
    }
    check_errors(
        "import \"core.fil\"\nextern \"foo {",
        expect![[r#"
            25..31: unterminated string literal
        "#]],
    );
}

#[test]
fn time_forms() {
    let config = ParseConfig::default();
    let time = |text: &str| parse_time_text(text, &config).unwrap();

    match time("'G + 1").kind {
        TimeKind::EventPlus(event, offset) => {
            assert_eq!(event.as_str(), "G");
            assert_eq!(offset.to_string(), "1");
        }
        kind => panic!("unexpected {kind:?}"),
    }
    match time("#W * 2 + 'G").kind {
        TimeKind::PlusEvent(offset, event) => {
            assert_eq!(event.as_str(), "G");
            assert_eq!(grouped(&offset), "(#W * 2)");
        }
        kind => panic!("unexpected {kind:?}"),
    }
    assert!(matches!(time("'G").kind, TimeKind::Event(event) if event.as_str() == "G"));
    assert!(matches!(time("3").kind, TimeKind::Expr(_)));
    assert_eq!(time("'G+1").to_string(), "'G + 1");
}

#[test]
fn constraint_kinds() {
    let config = ParseConfig::default();
    let cons = |text: &str| parse_constraint_text(text, &config).unwrap();

    assert!(matches!(cons("#W > 1"), Constraint::Expr(_)));
    assert!(matches!(cons("'L > 'G + 1"), Constraint::Time(_)));
    assert!(matches!(cons("#W + 1 >= 'G"), Constraint::Time(_)));
    assert_eq!(cons("'L>='G").to_string(), "'L >= 'G");
}

#[test]
fn guarded_fact() {
    let file = parse("comp A() -> () { assert #x > 1 => #y < 2; }").ok().unwrap();
    let Item::Component(comp) = &file.items[0] else { panic!("expected a component") };
    match &comp.body[..] {
        [Command::Fact(fact)] => {
            assert_eq!(fact.kind, FactKind::Assert);
            let guard = fact.implication.guard.as_ref().unwrap();
            assert_eq!(guard.to_string(), "#x > 1");
            assert_eq!(fact.implication.cons.to_string(), "#y < 2");
        }
        body => panic!("unexpected body {body:?}"),
    }
}

#[test]
fn bundle_in_loop() {
    let text = "comp A() -> () { for i in 0..4 { bundle b[i]: for<k> [0, 4] 32; } }";
    let file = parse(text).ok().unwrap();
    let Item::Component(comp) = &file.items[0] else { panic!("expected a component") };
    let for_loop = match &comp.body[..] {
        [Command::ForLoop(for_loop)] => for_loop,
        body => panic!("unexpected body {body:?}"),
    };
    assert_eq!(for_loop.var.as_str(), "i");
    let bundle = match &for_loop.body[..] {
        [Command::Bundle(bundle)] => bundle,
        body => panic!("unexpected loop body {body:?}"),
    };
    assert_eq!(bundle.name.as_str(), "b");
    assert_eq!(bundle.dims.len(), 1);
    let params = bundle.typ.params.as_ref().unwrap();
    assert_eq!(params.iter().map(|param| param.as_str()).collect::<Vec<_>>(), ["k"]);
    assert_eq!(bundle.typ.liveness.to_string(), "[0, 4]");

    check_dump(
        text,
        expect![[r#"
            comp A() -> () {
                for #i in 0..4 {
                    bundle b[#i]: for<#k> [0, 4] 32;
                }
            }
        "#]],
    );
}

#[test]
fn precedence() {
    let config = ParseConfig::default();
    let expr = |text: &str| grouped(&parse_expr_text(text, &config).unwrap());

    assert_eq!(expr("1 + 2 * 3 - 4"), "((1 + (2 * 3)) - 4)");
    assert_eq!(expr("#a - #b - #c"), "((#a - #b) - #c)");
    assert_eq!(expr("#a % #b / 2 * 3"), "(((#a % #b) / 2) * 3)");
    assert_eq!(expr("(1 + 2) * 3"), "((1 + 2) * 3)");
    assert_eq!(expr("pow2(#W) + 1"), "(pow2(#W) + 1)");
}

#[test]
fn assignment_forms() {
    let text = "comp A() -> () {
        r := new Reg[32]<'G>(x.out) in ['G, 'G + 1];
        s := Add<'G>(r.out, y);
        t := #W + 1;
        let #H = ?;
    }";
    let file = parse(text).ok().unwrap();
    let Item::Component(comp) = &file.items[0] else { panic!("expected a component") };
    let kinds: Vec<_> = comp
        .body
        .iter()
        .map(|cmd| match cmd {
            Command::Assign(assign) => match &assign.value {
                AssignValue::Instance(inst) => {
                    assert_eq!(inst.lives.len(), 1);
                    "instance"
                }
                AssignValue::Invoke(_) => "invoke",
                AssignValue::Exists(_) => "exists",
            },
            Command::ParamLet(param_let) => match param_let.value {
                LetValue::Hole(_) => "hole",
                LetValue::Expr(_) => "let",
            },
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, ["instance", "invoke", "exists", "hole"]);
}

#[test]
fn canonical_dump() {
    check_dump(
        r#"
import "primitives/core.fil";
import "other.fil"

/* a register */
#[toplevel, not(pipelined), latency=1, freq=1.5]
comp Main[#W, ?#N = 4]<'G: 1, ?'L: 'G - ('H) = 'G + 1>(
    go: interface['G],
    left: ['G, 'G + 1] 32,
    #[phantom] inputs[4][#N]: for<#k> ['G + #k, 'G + #k + 1] #W,
) -> (out: ['L, 'L + 1] 32) with {
    let #D = #W * 2;
    some #S where #S > 0;
    opaque #O;
} where 'L > 'G, #W >= 1 {
    bundle b[#N]: ['G, 'G + 1] 32;
    r := new Register[32]<'G, 'G + 2>(left) in ['G, 'G + 2];
    x := Add<'G>(r.out, left); // invocation
    let #P = pow2(log2(#W)) - 1;
    let #Q = ?;
    for #i in 0..#N {
        b{#i} = inputs{#i}{0..2};
    }
    if #W > 8 {
        assume #W % 2 == 0;
    } else if #W == 4 {
        assert #W > 1 => #W / 2 >= 2;
    } else {
        m := if #W < 2 { 1 } else { Main::#W + 8'xff };
    }
    out = x.out;
}

extern "prims.sv" {
    comp Add<'G: 1>(l: ['G, 'G + 1] 32, r: ['G, 'G + 1] 32) -> (out: ['G, 'G + 1] 32);
}

generate (gen) using "tool.toml" {
    comp Mult[#W]<'G: 1>(l: ['G, 'G + 1] #W) -> (out: ['G + 2, 'G + 3] #W);
}
"#,
        expect![[r#"
            import "primitives/core.fil";
            import "other.fil";

            #[toplevel, not(pipelined), latency=1, freq=1.5] comp Main[#W, ?#N = 4]<'G: 1, ?'L: 'G - ('H) = 'G + 1>(go: interface['G], left: ['G, 'G + 1] 32, #[phantom] inputs[4][#N]: for<#k> ['G + #k, 'G + #k + 1] #W) -> (out: ['L, 'L + 1] 32) with { let #D = #W * 2; some #S where #S > 0; opaque #O; } where 'L > 'G, #W >= 1 {
                bundle b[#N]: ['G, 'G + 1] 32;
                r := new Register[32]<'G, 'G + 2>(left) in ['G, 'G + 2];
                x := Add<'G>(r.out, left);
                let #P = pow2(log2(#W)) - 1;
                let #Q = ?;
                for #i in 0..#N {
                    b{#i} = inputs{#i}{0..2};
                }
                if #W > 8 {
                    assume #W % 2 == 0;
                } else if #W == 4 {
                    assert #W > 1 => #W / 2 >= 2;
                } else {
                    m := if #W < 2 { 1 } else { Main::#W + 8'xff };
                }
                out = x.out;
            }

            extern "prims.sv" {
                comp Add<'G: 1>(l: ['G, 'G + 1] 32, r: ['G, 'G + 1] 32) -> (out: ['G, 'G + 1] 32);
            }

            generate (gen) using "tool.toml" {
                comp Mult[#W]<'G: 1>(l: ['G, 'G + 1] #W) -> (out: ['G + 2, 'G + 3] #W);
            }
        "#]],
    );
}

#[test]
fn dump_is_idempotent() {
    let text = "comp A[W]<'G:1>(x:['G,'G+1]W)->(y:['G,'G+1]W){y=x;if W>1{assert W>=2;}}";
    let first = parse(text).tree().dump();
    let second = parse(&first);
    assert!(!second.has_errors(), "{:?}", second.errors());
    assert_eq!(second.tree().dump(), first);
}

#[test]
fn comments_are_transparent() {
    let plain = "comp A() -> () { x = y; }";
    let commented = "// leading\ncomp /* inline */ A() -> () {\n    x = y; // trailing\n}\n";
    assert_eq!(parse(plain).tree().dump(), parse(commented).tree().dump());
}

#[test]
fn parsing_is_deterministic() {
    let text = "import \"a.fil\"; comp A<'G: 1>() -> () { x := new B<'G>; }";
    assert_eq!(parse(text), parse(text));
}

#[test]
fn syntax_errors() {
    check_errors(
        "comp A() -> () { x = ; }",
        expect![[r#"
            21..22: expected an identifier, found ';'
        "#]],
    );
    check_errors(
        "comp A() -> () { let #x = foo(1); }",
        expect![[r#"
            26..29: unknown function `foo`; expected one of pow2, log2, sin_bits, cos_bits or bit_rev
        "#]],
    );
    check_errors(
        "comp A<'G: 1 = 'G>() -> () {}",
        expect![[r#"
            13..14: only existential events (`?'E`) may have a default
        "#]],
    );
    check_errors(
        "comp A() -> () { let #x = 99999999999999999999; }",
        expect![[r#"
            26..46: integer literal is too large
        "#]],
    );
    check_errors(
        "comp A() -> () { assert #a < #b < #c; }",
        expect![[r#"
            32..33: expected ';', found '<'
        "#]],
    );
}

#[test]
fn partial_tree_before_error() {
    let parse = parse("comp A() -> () {}\ncomp B(x 32) -> () {}");
    assert_eq!(parse.tree().items.len(), 1);
    assert_eq!(parse.errors().len(), 1);
    assert!(matches!(parse.errors()[0], Error::Syntax(_)));
}

#[test]
fn nesting_limit() {
    let text = "comp A() -> () { let #x = ((((((1)))))); }";
    assert!(!parse(text).has_errors());

    let config = ParseConfig { max_nesting_depth: 4 };
    let parse = parse_text(text, &config);
    match parse.errors() {
        [Error::NestingTooDeep { limit: 4, .. }] => (),
        errors => panic!("expected a nesting error, found {errors:?}"),
    }
}

#[test]
fn malformed_number_in_fragment() {
    let err = parse_expr_text("1. + 2", &ParseConfig::default()).unwrap_err();
    match err {
        Error::Lex(err) => {
            assert_eq!(err.kind, LexErrorKind::MalformedNumber);
            assert_eq!(format!("{:?}", err.range), "0..2");
        }
        err => panic!("expected a lexer error, found {err:?}"),
    }
}

#[test]
fn token_classes() {
    let actual: String = classify_tokens("comp A // c\n'G 8'b1 @")
        .into_iter()
        .map(|token| format!("{:?} {} {:?}\n", token.kind, token.class, token.range))
        .collect();
    expect![[r#"
        COMP_KW keyword 0..4
        WHITESPACE whitespace 4..5
        IDENT identifier 5..6
        WHITESPACE whitespace 6..7
        COMMENT comment 7..11
        WHITESPACE whitespace 11..12
        EVENT event 12..14
        WHITESPACE whitespace 14..15
        SIZED_INT_NUMBER literal 15..19
        WHITESPACE whitespace 19..20
        ERROR error 20..21
    "#]]
    .assert_eq(&actual);
}
