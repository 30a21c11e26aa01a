//! Owns the text of every file that is checked and turns parse errors into
//! human readable reports.

use std::fmt;
use std::sync::Arc;

pub mod diagnostics;
mod line_index;

#[cfg(test)]
mod tests;

pub use line_index::{Line, LineCol, LineColUtf16, LineIndex};
pub use text_size::{TextRange, TextSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(u32);

impl From<FileId> for usize {
    fn from(file: FileId) -> usize {
        file.0 as usize
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct FileData {
    path: String,
    text: Arc<str>,
    line_index: LineIndex,
}

/// All files known to one invocation. Files are only ever added, so a `FileId` stays
/// valid for the lifetime of the database.
#[derive(Debug, Default)]
pub struct SourceDb {
    files: Vec<FileData>,
}

impl SourceDb {
    pub fn new() -> SourceDb {
        SourceDb::default()
    }

    pub fn add_file(&mut self, path: impl Into<String>, text: impl Into<Arc<str>>) -> FileId {
        let text = text.into();
        let line_index = LineIndex::new(&text);
        let id = FileId(self.files.len() as u32);
        self.files.push(FileData { path: path.into(), text, line_index });
        id
    }

    pub fn file_path(&self, file: FileId) -> &str {
        &self.files[usize::from(file)].path
    }

    pub fn file_text(&self, file: FileId) -> Arc<str> {
        self.files[usize::from(file)].text.clone()
    }

    pub fn line_index(&self, file: FileId) -> &LineIndex {
        &self.files[usize::from(file)].line_index
    }

    pub fn files(&self) -> impl Iterator<Item = FileId> + '_ {
        (0..self.files.len()).map(|i| FileId(i as u32))
    }

    /// Renders `offset` as `path:line:col` with one based line and column.
    pub fn location(&self, file: FileId, offset: TextSize) -> String {
        let LineCol { line, col } = self.line_index(file).line_col(offset);
        format!("{}:{}:{}", self.file_path(file), line + 1, col + 1)
    }

    fn get(&self, file: FileId) -> Option<&FileData> {
        self.files.get(usize::from(file))
    }
}
