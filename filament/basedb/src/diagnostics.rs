pub use codespan_reporting::diagnostic::{LabelStyle, Severity};
pub use codespan_reporting::term::Config;

pub use sink::{print_all, ConsoleSink, DiagnosticSink};

use crate::{FileId, SourceDb};

pub mod sink;
mod syntax_error;

pub type Report = codespan_reporting::diagnostic::Diagnostic<FileId>;
pub type Label = codespan_reporting::diagnostic::Label<FileId>;

pub trait Diagnostic {
    fn build_report(&self, file: FileId, db: &SourceDb) -> Report;
}

impl<D: Diagnostic> Diagnostic for &D {
    fn build_report(&self, file: FileId, db: &SourceDb) -> Report {
        D::build_report(self, file, db)
    }
}
