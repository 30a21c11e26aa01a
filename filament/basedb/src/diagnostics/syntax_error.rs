use syntax::{Error, LexError, LexErrorKind, SyntaxError, TextRange, TextSize};

use crate::diagnostics::{Diagnostic, Label, Report};
use crate::{FileId, SourceDb};

const HINT_BUILTINS: &str =
    "help: the builtin functions are pow2, log2, sin_bits, cos_bits and bit_rev";

fn nesting_report(limit: u32, range: TextRange, file: FileId) -> Report {
    Report::error()
        .with_message(format!("nesting exceeds the maximum depth of {limit}"))
        .with_labels(vec![Label::primary(file, range).with_message("limit reached here")])
        .with_notes(vec!["help: the limit can be raised with `--max-depth`".to_owned()])
}

impl Diagnostic for LexError {
    fn build_report(&self, file: FileId, _db: &SourceDb) -> Report {
        // unterminated tokens run until the end of the file, only the opening delimiter is marked
        let (range, label) = match self.kind {
            LexErrorKind::UnknownChar(_) => (self.range, "not valid in filament source"),
            LexErrorKind::UnterminatedStr => {
                (TextRange::at(self.range.start(), TextSize::from(1)), "string starts here")
            }
            LexErrorKind::UnterminatedBlockComment => {
                (TextRange::at(self.range.start(), TextSize::from(2)), "comment starts here")
            }
            LexErrorKind::MalformedNumber => (self.range, "not a valid number"),
        };

        let report = Report::error()
            .with_message(self.kind.to_string())
            .with_labels(vec![Label::primary(file, range).with_message(label)]);
        match self.kind {
            LexErrorKind::MalformedNumber => report.with_notes(vec![
                "help: numbers are written as `12`, `1.5` or `8'xff`".to_owned(),
            ]),
            _ => report,
        }
    }
}

impl Diagnostic for SyntaxError {
    fn build_report(&self, file: FileId, _db: &SourceDb) -> Report {
        match *self {
            SyntaxError::UnexpectedToken { ref expected, found, range } => {
                let report = Report::error().with_message(format!("unexpected {found}"));
                if expected.data.len() < 4 {
                    report.with_labels(vec![
                        Label::primary(file, range).with_message(format!("expected {expected}"))
                    ])
                } else {
                    report
                        .with_labels(vec![
                            Label::primary(file, range).with_message("unexpected token")
                        ])
                        .with_notes(vec![format!("expected {expected}")])
                }
            }
            SyntaxError::UnknownFunction { ref name, range } => Report::error()
                .with_message(format!("unknown function `{name}`"))
                .with_labels(vec![Label::primary(file, range).with_message("not a builtin")])
                .with_notes(vec![HINT_BUILTINS.to_owned()]),
            SyntaxError::IntegerOverflow { range } => Report::error()
                .with_message(self.to_string())
                .with_labels(vec![
                    Label::primary(file, range).with_message("does not fit into 64 bits")
                ]),
            SyntaxError::DefaultOutsideExistential { range } => Report::error()
                .with_message(self.to_string())
                .with_labels(vec![Label::primary(file, range).with_message("default given here")])
                .with_notes(vec!["help: mark the event as existential: `?'E`".to_owned()]),
            SyntaxError::NestingTooDeep { limit, range } => nesting_report(limit, range, file),
        }
    }
}

impl Diagnostic for Error {
    fn build_report(&self, file: FileId, db: &SourceDb) -> Report {
        match self {
            Error::Lex(err) => err.build_report(file, db),
            Error::Syntax(err) => err.build_report(file, db),
            Error::NestingTooDeep { limit, range } => nesting_report(*limit, *range, file),
        }
    }
}
