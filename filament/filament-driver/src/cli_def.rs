use std::fs;

use anyhow::bail;
use camino::Utf8Path;
use clap::{value_parser, Arg, ArgAction, Command, ValueHint};
use filament::ParseConfig;

const ABOUT: &str = r"Parses filament (.fil) sources and reports syntax errors.";

pub fn main_command() -> Command {
    Command::new("filparse")
        .version(env!("CARGO_PKG_VERSION"))
        .about(ABOUT)
        .args([emit(), max_depth(), color(), input()])
        .arg_required_else_help(true)
}

pub const INPUT: &str = "input";
pub const EMIT: &str = "emit";
pub const MAX_DEPTH: &str = "max-depth";
pub const COLOR: &str = "color";

fn input() -> Arg {
    input_file_path_arg(INPUT)
        .help("The filament files to parse.")
        .num_args(1..)
        .action(ArgAction::Append)
        .required(true)
}

fn emit() -> Arg {
    Arg::new(EMIT)
        .long(EMIT)
        .help("What to print for every file that parsed without errors.")
        .long_help(
            "What to print for every file that parsed without errors.\n\npossible values\n\ncheck - only report diagnostics\nast - print the canonical source text of the parsed tree\ntokens - print every token with its class, kind, range and text",
        )
        .value_name("KIND")
        .value_parser(["check", "ast", "tokens"])
        .default_value("check")
        .hide_possible_values(true)
        .required(false)
}

fn max_depth() -> Arg {
    Arg::new(MAX_DEPTH)
        .long(MAX_DEPTH)
        .help("Maximum nesting depth of expressions and blocks.")
        .value_name("N")
        .value_hint(ValueHint::Other)
        .value_parser(value_parser!(u32).range(1..))
        .default_value(DEFAULT_MAX_DEPTH)
        .required(false)
}

const DEFAULT_MAX_DEPTH: &str = {
    // keep in sync with ParseConfig::DEFAULT_MAX_NESTING_DEPTH
    assert!(ParseConfig::DEFAULT_MAX_NESTING_DEPTH == 128);
    "128"
};

fn color() -> Arg {
    Arg::new(COLOR)
        .long(COLOR)
        .help("When to use colors in diagnostics.")
        .value_name("WHEN")
        .value_parser(["auto", "always", "never"])
        .default_value("auto")
        .required(false)
}

fn input_file_path_arg(name: &'static str) -> Arg {
    let parse = |raw: &str| {
        let path = Utf8Path::new(raw).to_owned();

        match fs::metadata(&path) {
            Err(err) => bail!("{err}"),
            Ok(info) if !info.is_file() => bail!("is not a file"),
            _ => Ok(path),
        }
    };

    Arg::new(name).value_name("FILE").value_hint(ValueHint::FilePath).value_parser(parse)
}
