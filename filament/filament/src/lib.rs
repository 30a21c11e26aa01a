use std::fs;
use std::io::Write;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use basedb::diagnostics::{ConsoleSink, DiagnosticSink};
use basedb::{FileId, SourceDb};
use camino::Utf8PathBuf;
use syntax::{classify_tokens, parse_text, Parse};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

pub use syntax::ParseConfig;
pub use termcolor::ColorChoice;

#[cfg(test)]
mod tests;

/// What is printed to stdout for every input that parsed without errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Nothing, only diagnostics are reported.
    Check,
    /// The canonical source text of the parsed tree.
    Ast,
    /// Every token (including comments and whitespace) with its class and range.
    Tokens,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Success,
    FatalDiagnostic,
}

#[derive(Debug, Clone)]
pub struct Opts {
    pub inputs: Vec<Utf8PathBuf>,
    pub emit: Emit,
    pub config: ParseConfig,
    pub color: ColorChoice,
}

pub fn check(opts: &Opts) -> Result<Termination> {
    let mut sources = Vec::with_capacity(opts.inputs.len());
    for path in &opts.inputs {
        let text = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
        sources.push((path.to_string(), text));
    }

    let stdout = std::io::stdout();
    let mut stderr = StandardStream::stderr(opts.color);
    check_sources(sources, opts.emit, &opts.config, &mut stdout.lock(), &mut stderr)
}

/// Parses already loaded `(path, text)` pairs. Output selected by `emit` goes to `out`,
/// diagnostics and the final status line go to `diagnostics`.
pub fn check_sources(
    sources: Vec<(String, String)>,
    emit: Emit,
    config: &ParseConfig,
    out: &mut dyn Write,
    diagnostics: &mut dyn WriteColor,
) -> Result<Termination> {
    let start = Instant::now();
    let mut db = SourceDb::new();
    let files: Vec<FileId> =
        sources.into_iter().map(|(path, text)| db.add_file(path, text)).collect();

    let parses = parse_all(&db, &files, config);

    let mut sink = ConsoleSink::new_with(&db, Box::new(&mut *diagnostics));
    for (&file, parse) in files.iter().zip(&parses) {
        sink.add_diagnostics(parse.errors(), file, &db);
        for import in &parse.tree().imports {
            log::debug!("`{}` imports {}", db.file_path(file), import.path);
        }
        if parse.has_errors() {
            continue;
        }

        match emit {
            Emit::Check => (),
            Emit::Ast => write!(out, "{}", parse.tree().dump())?,
            Emit::Tokens => write_tokens(&db, file, out)?,
        }
    }

    let target = match &*files {
        [file] => db.file_path(*file).to_owned(),
        files => format!("{} files", files.len()),
    };
    let failed = sink.summary(&target);
    drop(sink);
    if failed {
        return Ok(Termination::FatalDiagnostic);
    }

    if emit == Emit::Check {
        let seconds = start.elapsed().as_secs_f64();
        diagnostics.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(diagnostics, "Finished")?;
        diagnostics.reset()?;
        writeln!(diagnostics, " checking {target} in {seconds:.2}s")?;
    }

    Ok(Termination::Success)
}

/// Every file gets its own thread and its own parser, the only shared state is the
/// read-only source database.
fn parse_all(db: &SourceDb, files: &[FileId], config: &ParseConfig) -> Vec<Parse> {
    thread::scope(|scope| {
        let handles: Vec<_> = files
            .iter()
            .map(|&file| {
                scope.spawn(move || {
                    let start = Instant::now();
                    let parse = parse_text(&db.file_text(file), config);
                    log::info!(
                        "parsed `{}` in {}ms",
                        db.file_path(file),
                        start.elapsed().as_millis()
                    );
                    parse
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|err| std::panic::resume_unwind(err)))
            .collect()
    })
}

fn write_tokens(db: &SourceDb, file: FileId, out: &mut dyn Write) -> Result<()> {
    let text = db.file_text(file);
    for token in classify_tokens(&text) {
        writeln!(
            out,
            "{} {} {:?} {:?} {:?}",
            db.location(file, token.range.start()),
            token.class,
            token.kind,
            token.range,
            &text[token.range]
        )?;
    }
    Ok(())
}
