//! `LineIndex` maps `TextSize` offsets to line/column pairs and back.
//! Columns are counted in UTF-8 bytes, editors that count UTF-16 code units
//! convert with [`LineIndex::to_utf16`].

use ahash::AHashMap;
use text_size::{TextRange, TextSize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first character of every line. Always starts with `0`.
    line_starts: Vec<TextSize>,
    /// Characters outside of ASCII, grouped by line.
    wide_chars: AHashMap<u32, Vec<WideChar>>,
    len: TextSize,
}

/// Zero based line and UTF-8 column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Zero based line and UTF-16 column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineColUtf16 {
    pub line: u32,
    pub col: u32,
}

/// Position of a multi-byte character relative to the start of its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct WideChar {
    start: TextSize,
    end: TextSize,
}

impl WideChar {
    fn len_utf8(self) -> u32 {
        u32::from(self.end - self.start)
    }

    /// Only characters encoded with four bytes need a surrogate pair.
    fn len_utf16(self) -> u32 {
        if self.len_utf8() == 4 {
            2
        } else {
            1
        }
    }
}

/// A zero based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(u32);

impl From<usize> for Line {
    #[inline]
    fn from(raw: usize) -> Line {
        // offsets are u32 so there can never be more than u32::MAX lines
        Line(raw as u32)
    }
}

impl From<Line> for usize {
    #[inline]
    fn from(line: Line) -> usize {
        line.0 as usize
    }
}

impl LineIndex {
    pub fn new(text: &str) -> LineIndex {
        let mut line_starts = vec![TextSize::from(0)];
        let mut wide_chars = AHashMap::default();
        let mut line_wide_chars = Vec::new();
        let mut line = 0;
        let mut line_start = TextSize::from(0);

        for (pos, c) in text.char_indices() {
            let pos = TextSize::from(pos as u32);
            if c == '\n' {
                let next = pos + TextSize::of(c);
                line_starts.push(next);
                if !line_wide_chars.is_empty() {
                    wide_chars.insert(line, std::mem::take(&mut line_wide_chars));
                }
                line += 1;
                line_start = next;
            } else if !c.is_ascii() {
                let start = pos - line_start;
                line_wide_chars.push(WideChar { start, end: start + TextSize::of(c) });
            }
        }

        if !line_wide_chars.is_empty() {
            wide_chars.insert(line, line_wide_chars);
        }

        LineIndex { line_starts, wide_chars, len: TextSize::of(text) }
    }

    pub fn len(&self) -> TextSize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == TextSize::from(0)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn line(&self, offset: TextSize) -> Line {
        Line::from(self.line_starts.partition_point(|&start| start <= offset) - 1)
    }

    /// The range of `line` including its trailing newline, `None` past the last line.
    pub fn line_range(&self, line: Line) -> Option<TextRange> {
        let line = usize::from(line);
        let start = *self.line_starts.get(line)?;
        let end = self.line_starts.get(line + 1).copied().unwrap_or(self.len);
        Some(TextRange::new(start, end))
    }

    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self.line(offset);
        let col = offset - self.line_starts[usize::from(line)];
        LineCol { line: line.0, col: col.into() }
    }

    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let start = *self.line_starts.get(line_col.line as usize)?;
        let offset = start + TextSize::from(line_col.col);
        (offset <= self.len).then_some(offset)
    }

    pub fn to_utf16(&self, line_col: LineCol) -> LineColUtf16 {
        let mut col = line_col.col;
        for c in self.wide_chars_on(line_col.line) {
            if u32::from(c.end) > line_col.col {
                break;
            }
            col -= c.len_utf8() - c.len_utf16();
        }
        LineColUtf16 { line: line_col.line, col }
    }

    pub fn to_utf8(&self, line_col: LineColUtf16) -> LineCol {
        let mut col = line_col.col;
        for c in self.wide_chars_on(line_col.line) {
            if u32::from(c.start) >= col {
                break;
            }
            col += c.len_utf8() - c.len_utf16();
        }
        LineCol { line: line_col.line, col }
    }

    fn wide_chars_on(&self, line: u32) -> &[WideChar] {
        self.wide_chars.get(&line).map_or(&[], Vec::as_slice)
    }
}
