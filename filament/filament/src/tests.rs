use std::fs;

use basedb::diagnostics::sink::Buffer;
use expect_test::expect;
use stdx::{filament_test_data, is_fil_file};

use crate::{check_sources, Emit, ParseConfig, Termination};

fn run(sources: &[(&str, &str)], emit: Emit) -> (Termination, String, String) {
    let sources =
        sources.iter().map(|(path, text)| (path.to_string(), text.to_string())).collect();
    let mut out = Vec::new();
    let mut diagnostics = Buffer::no_color();
    let res = check_sources(
        sources,
        emit,
        &ParseConfig::default(),
        &mut out,
        &mut diagnostics,
    )
    .unwrap();
    (res, String::from_utf8(out).unwrap(), String::from_utf8(diagnostics.into_inner()).unwrap())
}

#[test]
fn corpus_checks() {
    let sources: Vec<_> = fs::read_dir(filament_test_data())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| is_fil_file(path))
        .map(|path| (path.display().to_string(), fs::read_to_string(&path).unwrap()))
        .collect();
    let mut out = Vec::new();
    let mut diagnostics = Buffer::no_color();
    let res = check_sources(
        sources,
        Emit::Check,
        &ParseConfig::default(),
        &mut out,
        &mut diagnostics,
    )
    .unwrap();
    assert_eq!(res, Termination::Success);
    assert!(out.is_empty());
    let diagnostics = String::from_utf8(diagnostics.into_inner()).unwrap();
    assert!(diagnostics.starts_with("Finished checking 4 files in "), "{diagnostics}");
}

#[test]
fn status_line_uses_diagnostics_writer() {
    let sources = vec![("a.fil".to_owned(), "comp A() -> () {}".to_owned())];
    let mut plain = Buffer::no_color();
    let config = ParseConfig::default();
    let mut out: Vec<u8> = Vec::new();
    check_sources(sources.clone(), Emit::Check, &config, &mut out, &mut plain).unwrap();
    let plain = String::from_utf8(plain.into_inner()).unwrap();
    assert!(plain.starts_with("Finished checking a.fil in "), "{plain}");
    assert!(plain.ends_with("s\n"), "{plain}");
    assert!(!plain.contains('\u{1b}'), "{plain:?}");

    let mut colored = Buffer::ansi();
    check_sources(sources, Emit::Check, &config, &mut out, &mut colored).unwrap();
    let colored = String::from_utf8(colored.into_inner()).unwrap();
    assert!(colored.contains("\u{1b}["), "{colored:?}");
    assert!(colored.contains(" checking a.fil in "), "{colored:?}");
}

#[test]
fn emit_ast() {
    let (res, out, diagnostics) =
        run(&[("a.fil", "import \"b.fil\" comp A<'G:1>(x:['G,'G+1]32)->(){}")], Emit::Ast);
    assert_eq!(res, Termination::Success);
    assert_eq!(diagnostics, "");
    expect![[r#"
        import "b.fil";

        comp A<'G: 1>(x: ['G, 'G + 1] 32) -> () {
        }
    "#]]
    .assert_eq(&out);
}

#[test]
fn emit_tokens() {
    let (res, out, _) = run(&[("a.fil", "comp /* c */ A\n'G")], Emit::Tokens);
    assert_eq!(res, Termination::Success);
    expect![[r#"
        a.fil:1:1 keyword COMP_KW 0..4 "comp"
        a.fil:1:5 whitespace WHITESPACE 4..5 " "
        a.fil:1:6 comment COMMENT 5..12 "/* c */"
        a.fil:1:13 whitespace WHITESPACE 12..13 " "
        a.fil:1:14 identifier IDENT 13..14 "A"
        a.fil:1:15 whitespace WHITESPACE 14..15 "\n"
        a.fil:2:1 event EVENT 15..17 "'G"
    "#]]
    .assert_eq(&out);
}

#[test]
fn diagnostics_in_input_order() {
    let (res, out, diagnostics) = run(
        &[
            ("first.fil", "comp A() -> () { let #x = 1 }"),
            ("ok.fil", "comp B() -> () {}"),
            ("second.fil", "comp C() -> () {}\n@"),
        ],
        Emit::Ast,
    );
    assert_eq!(res, Termination::FatalDiagnostic);
    expect![[r#"
        comp B() -> () {
        }
    "#]]
    .assert_eq(&out);
    expect![[r#"
        error: unexpected '}'
          --> first.fil:1:29
          |
        1 | comp A() -> () { let #x = 1 }
          |                             ^ expected ';'

        error: unknown character '@'
          --> second.fil:2:1
          |
        2 | @
          | ^ not valid in filament source

        error: could not check `3 files` due to 2 previous errors

    "#]]
    .assert_eq(&diagnostics);
}
