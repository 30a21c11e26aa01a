use anyhow::{bail, Result};
use camino::Utf8PathBuf;
use clap::ArgMatches;
use filament::{ColorChoice, Emit, Opts, ParseConfig};

use crate::cli_def::{COLOR, EMIT, INPUT, MAX_DEPTH};

pub fn matches_to_opts(matches: ArgMatches) -> Result<Opts> {
    let inputs: Vec<Utf8PathBuf> =
        matches.get_many::<Utf8PathBuf>(INPUT).map_or_else(Vec::new, |it| it.cloned().collect());
    if inputs.is_empty() {
        bail!("no input files");
    }

    let emit = match matches.get_one::<String>(EMIT).map(String::as_str) {
        Some("ast") => Emit::Ast,
        Some("tokens") => Emit::Tokens,
        _ => Emit::Check,
    };

    let max_nesting_depth = matches
        .get_one::<u32>(MAX_DEPTH)
        .copied()
        .unwrap_or(ParseConfig::DEFAULT_MAX_NESTING_DEPTH);

    let color = match matches.get_one::<String>(COLOR).map(String::as_str) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    };

    Ok(Opts { inputs, emit, config: ParseConfig { max_nesting_depth }, color })
}
