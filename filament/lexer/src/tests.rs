use expect_test::{expect, Expect};
use text_size::{TextRange, TextSize};

use crate::tokenize;

fn check_lexing(src: &str, expect: Expect) {
    let mut offset = TextSize::from(0);
    let actual: String = tokenize(src)
        .into_iter()
        .map(|token| {
            let content = &src[TextRange::at(offset, token.len)];
            offset += token.len;
            format!("{:?}\n{:?}\n", token, content)
        })
        .collect();
    expect.assert_eq(&actual)
}

#[test]
fn smoke_test() {
    check_lexing(
        "comp Reg<'G: 1>(x: 32) -> () {}",
        expect![[r#"
            Token { kind: Ident, len: 4 }
            "comp"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Ident, len: 3 }
            "Reg"
            Token { kind: Lt, len: 1 }
            "<"
            Token { kind: EventMark, len: 2 }
            "'G"
            Token { kind: Colon, len: 1 }
            ":"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Literal { kind: Int }, len: 1 }
            "1"
            Token { kind: Gt, len: 1 }
            ">"
            Token { kind: OpenParen, len: 1 }
            "("
            Token { kind: Ident, len: 1 }
            "x"
            Token { kind: Colon, len: 1 }
            ":"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Literal { kind: Int }, len: 2 }
            "32"
            Token { kind: CloseParen, len: 1 }
            ")"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: ThinArrow, len: 2 }
            "->"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: OpenParen, len: 1 }
            "("
            Token { kind: CloseParen, len: 1 }
            ")"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: OpenBrace, len: 1 }
            "{"
            Token { kind: CloseBrace, len: 1 }
            "}"
        "#]],
    );
}

#[test]
fn numbers() {
    check_lexing(
        "0..4 1.5 1. .5 8'b1010 4'x 3'd7",
        expect![[r#"
            Token { kind: Literal { kind: Int }, len: 1 }
            "0"
            Token { kind: Dot2, len: 2 }
            ".."
            Token { kind: Literal { kind: Int }, len: 1 }
            "4"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Literal { kind: Float { malformed: false } }, len: 3 }
            "1.5"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Literal { kind: Float { malformed: true } }, len: 2 }
            "1."
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Literal { kind: Float { malformed: true } }, len: 2 }
            ".5"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Literal { kind: SizedInt { empty: false } }, len: 7 }
            "8'b1010"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Literal { kind: SizedInt { empty: true } }, len: 3 }
            "4'x"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Literal { kind: SizedInt { empty: false } }, len: 4 }
            "3'd7"
        "#]],
    );
}

#[test]
fn compound_punctuation_and_comments() {
    check_lexing(
        "a::b := c; /* x */ // y\n=> == <= >= ?",
        expect![[r#"
            Token { kind: Ident, len: 1 }
            "a"
            Token { kind: Colon2, len: 2 }
            "::"
            Token { kind: Ident, len: 1 }
            "b"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: ColonEq, len: 2 }
            ":="
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Ident, len: 1 }
            "c"
            Token { kind: Semi, len: 1 }
            ";"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: BlockComment { terminated: true }, len: 7 }
            "/* x */"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: LineComment, len: 4 }
            "// y"
            Token { kind: Whitespace, len: 1 }
            "\n"
            Token { kind: FatArrow, len: 2 }
            "=>"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Eq2, len: 2 }
            "=="
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Leq, len: 2 }
            "<="
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Geq, len: 2 }
            ">="
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Question, len: 1 }
            "?"
        "#]],
    );
}

#[test]
fn block_comments_do_not_nest() {
    check_lexing(
        "/* a /* b */ c */",
        expect![[r#"
            Token { kind: BlockComment { terminated: true }, len: 12 }
            "/* a /* b */"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Ident, len: 1 }
            "c"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Star, len: 1 }
            "*"
            Token { kind: Slash, len: 1 }
            "/"
        "#]],
    );
}

#[test]
fn malformed_input() {
    check_lexing(
        r#""a\"b" $ ' "open"#,
        expect![[r#"
            Token { kind: Literal { kind: Str { terminated: true } }, len: 6 }
            "\"a\\\"b\""
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Unknown, len: 1 }
            "$"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Unknown, len: 1 }
            "'"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Literal { kind: Str { terminated: false } }, len: 5 }
            "\"open"
        "#]],
    );
    check_lexing(
        "/* open",
        expect![[r#"
            Token { kind: BlockComment { terminated: false }, len: 7 }
            "/* open"
        "#]],
    );
}

#[test]
fn multibyte_and_quote_lookahead() {
    check_lexing(
        "№ 'é 1'b1 2'q",
        expect![[r#"
            Token { kind: Unknown, len: 3 }
            "№"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Unknown, len: 1 }
            "'"
            Token { kind: Unknown, len: 2 }
            "é"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Literal { kind: SizedInt { empty: false } }, len: 4 }
            "1'b1"
            Token { kind: Whitespace, len: 1 }
            " "
            Token { kind: Literal { kind: Int }, len: 1 }
            "2"
            Token { kind: EventMark, len: 2 }
            "'q"
        "#]],
    );
}
