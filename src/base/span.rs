//! Byte offsets and line/column conversion.

pub use text_size::{TextRange, TextSize};

/// A 0-indexed line/column pair. Columns count bytes from the line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets of a text to line/column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line. Always starts with 0.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        let mut offset = TextSize::new(0);
        for c in text.chars() {
            offset += TextSize::of(c);
            if c == '\n' {
                line_starts.push(offset);
            }
        }
        Self {
            line_starts,
            len: offset,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert an offset into a line/column pair.
    ///
    /// Returns `None` for offsets past the end of the text.
    pub fn line_col(&self, offset: TextSize) -> Option<LineCol> {
        if offset > self.len {
            return None;
        }
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let col = offset - self.line_starts[line];
        Some(LineCol {
            line: line as u32,
            col: col.into(),
        })
    }

    /// Convert a line/column pair back into an offset.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let start = *self.line_starts.get(line_col.line as usize)?;
        let end = self
            .line_starts
            .get(line_col.line as usize + 1)
            .copied()
            .unwrap_or(self.len);
        let offset = start + TextSize::new(line_col.col);
        (offset <= end).then_some(offset)
    }
}
