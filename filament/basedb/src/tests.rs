use expect_test::expect;
use syntax::{parse_text, ParseConfig};
use text_size::{TextRange, TextSize};

use crate::diagnostics::sink::Buffer;
use crate::diagnostics::{ConsoleSink, DiagnosticSink};
use crate::{Line, LineCol, LineColUtf16, LineIndex, SourceDb};

const TEXT: &str = "comp A\n  x = 'ä';\n😀 y\n";

#[test]
fn line_col() {
    let index = LineIndex::new(TEXT);
    assert_eq!(index.line_count(), 4);
    assert_eq!(index.line_col(0.into()), LineCol { line: 0, col: 0 });
    assert_eq!(index.line_col(9.into()), LineCol { line: 1, col: 2 });
    assert_eq!(index.line_col(16.into()), LineCol { line: 1, col: 9 });
    assert_eq!(index.line_col(24.into()), LineCol { line: 2, col: 5 });
    assert_eq!(index.line_col(26.into()), LineCol { line: 3, col: 0 });

    assert_eq!(index.offset(LineCol { line: 1, col: 2 }), Some(TextSize::from(9)));
    assert_eq!(index.offset(LineCol { line: 5, col: 0 }), None);
}

#[test]
fn line_ranges() {
    let index = LineIndex::new(TEXT);
    let range = |start: u32, end: u32| Some(TextRange::new(start.into(), end.into()));
    assert_eq!(index.line_range(Line::from(0)), range(0, 7));
    assert_eq!(index.line_range(Line::from(1)), range(7, 19));
    assert_eq!(index.line_range(Line::from(3)), range(26, 26));
    assert_eq!(index.line_range(Line::from(4)), None);
}

#[test]
fn utf16_columns() {
    let index = LineIndex::new(TEXT);
    let cases = [((1, 2), 2), ((1, 9), 8), ((2, 0), 0), ((2, 5), 3)];
    for ((line, col), col_utf16) in cases {
        let utf16 = index.to_utf16(LineCol { line, col });
        assert_eq!(utf16, LineColUtf16 { line, col: col_utf16 });
        assert_eq!(index.to_utf8(utf16), LineCol { line, col });
    }
}

#[test]
fn locations() {
    let mut db = SourceDb::new();
    let first = db.add_file("a.fil", TEXT);
    let second = db.add_file("dir/b.fil", "");
    assert_eq!(db.location(first, 9.into()), "a.fil:2:3");
    assert_eq!(db.location(second, 0.into()), "dir/b.fil:1:1");
    assert_eq!(db.files().collect::<Vec<_>>(), [first, second]);
}

fn render(path: &str, text: &str) -> String {
    let mut db = SourceDb::new();
    let file = db.add_file(path, text);
    let parse = parse_text(text, &ParseConfig::default());

    let mut buf = Buffer::no_color();
    {
        let mut sink = ConsoleSink::buffer(&db, &mut buf);
        sink.anonymize_paths();
        sink.add_diagnostics(parse.errors(), file, &db);
        assert_eq!(sink.error_cnt(), parse.errors().len());
        sink.summary(&"test.fil");
    }
    String::from_utf8(buf.into_inner()).unwrap()
}

#[test]
fn unexpected_token_report() {
    expect![[r#"
        error: unexpected ';'
          --> /test.fil:1:22
          |
        1 | comp A() -> () { x = ; }
          |                      ^ expected an identifier

        error: could not check `test.fil` due to 1 previous error

    "#]]
    .assert_eq(&render("some/dir/test.fil", "comp A() -> () { x = ; }"));
}

#[test]
fn report_with_note() {
    expect![[r#"
        error: unknown function `foo`
          --> /test.fil:2:15
          |
        2 |     let #x = foo(1);
          |               ^^^ not a builtin
          |
          = help: the builtin functions are pow2, log2, sin_bits, cos_bits and bit_rev

        error: could not check `test.fil` due to 1 previous error

    "#]]
    .assert_eq(&render("test.fil", "comp A() -> () {\n    let #x = foo(1);\n}\n"));
}

#[test]
fn unterminated_string_report() {
    expect![[r#"
        error: unterminated string literal
          --> /test.fil:1:8
          |
        1 | import "core.fil
          |        ^ string starts here

        error: could not check `test.fil` due to 1 previous error

    "#]]
    .assert_eq(&render("test.fil", "import \"core.fil"));
}

#[test]
fn clean_file_has_no_summary() {
    assert_eq!(render("test.fil", "comp A() -> () {}"), "");
}
