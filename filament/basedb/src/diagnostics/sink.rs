use std::fmt::Display;
use std::ops::Range;
use std::sync::Arc;

use codespan_reporting::diagnostic::Severity;
use codespan_reporting::files::{Error, Files};
pub use codespan_reporting::term::termcolor::{Ansi, Buffer, ColorChoice, NoColor};
use codespan_reporting::term::termcolor::{StandardStream, WriteColor};
use codespan_reporting::term::{emit, Chars, Config};
use text_size::TextSize;

use crate::diagnostics::{Diagnostic, Report};
use crate::{FileId, SourceDb};

pub trait DiagnosticSink {
    fn add_report(&mut self, report: Report);
    fn add_diagnostic(&mut self, diagnostic: &impl Diagnostic, file: FileId, db: &SourceDb) {
        self.add_report(diagnostic.build_report(file, db))
    }
    fn add_diagnostics<'a>(
        &mut self,
        diagnostics: impl IntoIterator<Item = &'a (impl Diagnostic + 'a)>,
        file: FileId,
        db: &SourceDb,
    ) {
        diagnostics.into_iter().for_each(|diagnostic| self.add_diagnostic(diagnostic, file, db))
    }
}

struct FileSrc<'a> {
    db: &'a SourceDb,
    anon_paths: bool,
}

impl Files<'_> for FileSrc<'_> {
    type FileId = FileId;

    type Name = String;

    type Source = Arc<str>;

    fn name(&self, id: FileId) -> Result<String, Error> {
        let path = self.db.get(id).ok_or(Error::FileMissing)?.path.as_str();
        if self.anon_paths {
            let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
            return Ok(format!("/{name}"));
        }
        Ok(path.to_owned())
    }

    fn source(&self, id: FileId) -> Result<Arc<str>, Error> {
        Ok(self.db.get(id).ok_or(Error::FileMissing)?.text.clone())
    }

    fn line_index(&self, id: FileId, byte_index: usize) -> Result<usize, Error> {
        let file = self.db.get(id).ok_or(Error::FileMissing)?;
        let max = file.text.len();
        match u32::try_from(byte_index) {
            Ok(offset) if byte_index <= max => {
                Ok(file.line_index.line(TextSize::from(offset)).into())
            }
            _ => Err(Error::IndexTooLarge { given: byte_index, max }),
        }
    }

    fn line_range(&self, id: FileId, line_index: usize) -> Result<Range<usize>, Error> {
        let file = self.db.get(id).ok_or(Error::FileMissing)?;
        match file.line_index.line_range(line_index.into()) {
            Some(range) => Ok(range.into()),
            None => Err(Error::LineTooLarge {
                given: line_index,
                max: file.line_index.line_count() - 1,
            }),
        }
    }
}

/// Renders reports to a terminal (or a buffer in tests) and counts errors and warnings.
pub struct ConsoleSink<'a> {
    warning_cnt: usize,
    error_cnt: usize,
    config: Config,
    db: &'a SourceDb,
    dst: Box<dyn WriteColor + 'a>,
    anon_paths: bool,
}

impl<'a> ConsoleSink<'a> {
    pub fn new(db: &'a SourceDb, color: ColorChoice) -> ConsoleSink<'a> {
        ConsoleSink::new_with(db, Box::new(StandardStream::stderr(color)))
    }

    pub fn buffer(db: &'a SourceDb, buffer: &'a mut Buffer) -> ConsoleSink<'a> {
        ConsoleSink::new_with(db, Box::new(buffer))
    }

    pub fn new_with(db: &'a SourceDb, dst: Box<dyn WriteColor + 'a>) -> ConsoleSink<'a> {
        let mut config = Config { chars: Chars::ascii(), ..Config::default() };
        config.styles.header_error.set_intense(false);
        config.styles.header_warning.set_intense(false);
        config.styles.header_help.set_intense(false);
        config.styles.header_bug.set_intense(false);
        config.styles.header_note.set_intense(false);

        config.styles.note_bullet.set_bold(true).set_intense(true);
        config.styles.line_number.set_bold(true).set_intense(true);
        config.styles.source_border.set_bold(true).set_intense(true);
        config.styles.primary_label_bug.set_bold(true);
        config.styles.primary_label_note.set_bold(true);
        config.styles.primary_label_help.set_bold(true);
        config.styles.primary_label_error.set_bold(true);
        config.styles.primary_label_warning.set_bold(true);
        config.styles.secondary_label.set_bold(true);

        ConsoleSink { warning_cnt: 0, error_cnt: 0, config, db, dst, anon_paths: false }
    }

    /// Only print the file name instead of the full path. UI tests use this so the
    /// output does not depend on where the repository is checked out.
    pub fn anonymize_paths(&mut self) {
        self.anon_paths = true;
    }

    pub fn error_cnt(&self) -> usize {
        self.error_cnt
    }

    /// Prints a closing line if anything went wrong. Returns whether errors were reported.
    pub fn summary(&mut self, target_name: &impl Display) -> bool {
        if self.error_cnt != 0 {
            let warn = if self.warning_cnt != 0 {
                format!("; {} warning emitted", self.warning_cnt)
            } else {
                String::new()
            };
            let errors = if self.error_cnt == 1 { "error" } else { "errors" };
            let message = format!(
                "could not check `{}` due to {} previous {}{}",
                target_name, self.error_cnt, errors, warn
            );

            self.print_simple_message(Severity::Error, message);
            return true;
        }

        if self.warning_cnt != 0 {
            let message = format!("`{}` generated {} warning", target_name, self.warning_cnt);
            self.print_simple_message(Severity::Warning, message);
            self.warning_cnt = 0;
        }

        false
    }

    pub fn print_simple_message(&mut self, severity: Severity, msg: String) {
        self.emit(&Report::new(severity).with_message(msg))
    }

    fn emit(&mut self, report: &Report) {
        let files = FileSrc { db: self.db, anon_paths: self.anon_paths };
        if let Err(err) = emit(&mut self.dst, &self.config, &files, report) {
            log::error!("failed to print diagnostic: {err}");
        }
    }
}

impl DiagnosticSink for ConsoleSink<'_> {
    fn add_report(&mut self, report: Report) {
        match report.severity {
            Severity::Error | Severity::Bug => self.error_cnt += 1,
            Severity::Warning => self.warning_cnt += 1,
            _ => (),
        }
        self.emit(&report)
    }
}

pub fn print_all<'a>(
    diagnostics: impl IntoIterator<Item = &'a (impl Diagnostic + 'a)>,
    db: &SourceDb,
    file: FileId,
) {
    ConsoleSink::new(db, ColorChoice::Auto).add_diagnostics(diagnostics, file, db)
}
