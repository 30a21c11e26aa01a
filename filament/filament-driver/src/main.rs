use std::io::{self, Write};
use std::process::exit;

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::ArgMatches;
use mimalloc::MiMalloc;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use cli_def::{main_command, INPUT};
use filament::{check, Termination};

use crate::cli_process::matches_to_opts;

mod cli_def;
mod cli_process;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

pub fn main() {
    let matches = main_command().get_matches();
    let inputs: Vec<String> = matches
        .get_many::<Utf8PathBuf>(INPUT)
        .map_or_else(Vec::new, |it| it.map(|path| path.to_string()).collect());

    let env = env_logger::Env::default().filter("FILAMENT_LOG").write_style("FILAMENT_LOG_STYLE");
    env_logger::Builder::new()
        .format_timestamp(None)
        .filter_level(log::LevelFilter::Off)
        .parse_env(env)
        .init();
    match wrapped_main(matches) {
        Ok(err_code) => exit(err_code),
        Err(err) => {
            let mut stderr = StandardStream::stderr(ColorChoice::Auto);
            for cause in err.chain() {
                let _ = print_error(&mut stderr, &cause);
            }
            let _ = print_error(&mut stderr, &format_args!("failed to check {}", inputs.join(", ")));
            exit(1)
        }
    }
}

pub const DATA_ERROR: i32 = 65;

fn wrapped_main(matches: ArgMatches) -> Result<i32> {
    let opts = matches_to_opts(matches)?;
    let res = match check(&opts)? {
        Termination::Success => 0,
        Termination::FatalDiagnostic => DATA_ERROR,
    };
    Ok(res)
}

fn print_error(stderr: &mut StandardStream, msg: &dyn std::fmt::Display) -> io::Result<()> {
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stderr, "error")?;
    stderr.set_color(ColorSpec::new().set_bold(true))?;
    write!(stderr, ":")?;
    stderr.set_color(&ColorSpec::new())?;
    writeln!(stderr, " {msg}")
}
