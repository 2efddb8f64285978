//! The output of a render: both texts and the slices mapping one onto the
//! other.

use std::ops::Range;

use text_size::{TextRange, TextSize};

use super::slice::{MappedSlice, RawSlice, SliceKind};
use crate::base::{FileId, LineCol, LineIndex};

/// A rendered model file.
///
/// `raw_slices` and `mapped_slices` are index-aligned. Their source ranges
/// tile the whole source text in order, and their rendered ranges tile the
/// whole rendered text in order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderResult {
    pub file: FileId,
    pub source_text: String,
    pub rendered_text: String,
    pub raw_slices: Vec<RawSlice>,
    pub mapped_slices: Vec<MappedSlice>,
}

impl RenderResult {
    pub fn source_len(&self) -> TextSize {
        TextSize::of(self.source_text.as_str())
    }

    pub fn rendered_len(&self) -> TextSize {
        TextSize::of(self.rendered_text.as_str())
    }

    /// Project an offset in the rendered text back onto the source.
    ///
    /// Inside a literal slice this is an affine shift; anywhere in a
    /// placeholder it is the start of the macro arguments. The end of the
    /// rendered text maps to the end of the last rendered slice.
    pub fn source_offset(&self, rendered: TextSize) -> Option<TextSize> {
        if let Some(slice) = self
            .mapped_slices
            .iter()
            .find(|slice| slice.rendered_range.contains(rendered))
        {
            return Some(match slice.kind {
                SliceKind::Literal => {
                    slice.source_range.start() + (rendered - slice.rendered_range.start())
                }
                SliceKind::Generated => slice.source_range.start(),
            });
        }
        if rendered == self.rendered_len() {
            return self
                .mapped_slices
                .iter()
                .rev()
                .find(|slice| !slice.rendered_range.is_empty())
                .map(|slice| slice.source_range.end());
        }
        None
    }

    /// Project a range of the rendered text back onto the source.
    pub fn source_range(&self, rendered: TextRange) -> Option<TextRange> {
        let start = self.source_offset(rendered.start())?;
        if rendered.is_empty() {
            return Some(TextRange::empty(start));
        }
        let slice = self
            .mapped_slices
            .iter()
            .find(|slice| {
                let range = slice.rendered_range;
                range.start() < rendered.end() && rendered.end() <= range.end()
            })?;
        let end = match slice.kind {
            SliceKind::Literal => {
                slice.source_range.start() + (rendered.end() - slice.rendered_range.start())
            }
            SliceKind::Generated => slice.source_range.end(),
        };
        Some(TextRange::new(start, end.max(start)))
    }

    /// Project a source offset forward into the rendered text.
    ///
    /// Offsets in dropped or replaced source text map to where that text
    /// would have been rendered.
    pub fn rendered_offset(&self, source: TextSize) -> Option<TextSize> {
        if source == self.source_len() {
            return Some(self.rendered_len());
        }
        let slice = self
            .mapped_slices
            .iter()
            .find(|slice| slice.source_range.contains(source))?;
        Some(match slice.kind {
            SliceKind::Literal => {
                slice.rendered_range.start() + (source - slice.source_range.start())
            }
            SliceKind::Generated => slice.rendered_range.start(),
        })
    }

    /// Check whether `source` lies entirely in literal slices, i.e. an edit
    /// there can be projected through the rendered text.
    pub fn is_source_literal(&self, source: TextRange) -> bool {
        if source.end() > self.source_len() {
            return false;
        }
        self.mapped_slices
            .iter()
            .filter(|slice| {
                if source.is_empty() {
                    slice.source_range.contains(source.start())
                } else {
                    slice
                        .source_range
                        .intersect(source)
                        .is_some_and(|overlap| !overlap.is_empty())
                }
            })
            .all(|slice| slice.kind.is_literal())
    }

    /// Slices that render something, in order.
    pub fn rendered_slices(&self) -> impl Iterator<Item = (&RawSlice, &MappedSlice)> {
        self.raw_slices
            .iter()
            .zip(&self.mapped_slices)
            .filter(|(_, mapped)| !mapped.rendered_range.is_empty())
    }

    pub fn source_line_index(&self) -> LineIndex {
        LineIndex::new(&self.source_text)
    }

    /// Line/column of a source offset, for reporting.
    pub fn source_line_col(&self, source: TextSize) -> Option<LineCol> {
        self.source_line_index().line_col(source)
    }

    /// Verify the slice invariants, describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.raw_slices.len() != self.mapped_slices.len() {
            return Err(format!(
                "{} raw slices but {} mapped slices",
                self.raw_slices.len(),
                self.mapped_slices.len()
            ));
        }

        let mut source_pos = TextSize::new(0);
        let mut rendered_pos = TextSize::new(0);
        for (i, (raw, mapped)) in self.raw_slices.iter().zip(&self.mapped_slices).enumerate() {
            if raw.kind != mapped.kind || raw.source_range() != mapped.source_range {
                return Err(format!("slice {i}: raw {raw:?} does not match mapped {mapped:?}"));
            }
            if mapped.source_range.start() != source_pos {
                return Err(format!(
                    "slice {i}: source range {:?} does not start at {source_pos:?}",
                    mapped.source_range
                ));
            }
            if mapped.rendered_range.start() != rendered_pos {
                return Err(format!(
                    "slice {i}: rendered range {:?} does not start at {rendered_pos:?}",
                    mapped.rendered_range
                ));
            }
            let source_text = text_at(&self.source_text, mapped.source_range);
            if source_text != Some(raw.text.as_str()) {
                return Err(format!("slice {i}: raw text {:?} is not the source text", raw.text));
            }
            if mapped.kind.is_literal()
                && text_at(&self.rendered_text, mapped.rendered_range) != source_text
            {
                return Err(format!("slice {i}: literal slice is not copied verbatim"));
            }
            source_pos = mapped.source_range.end();
            rendered_pos = mapped.rendered_range.end();
        }

        if source_pos != self.source_len() {
            return Err(format!(
                "slices cover the source up to {source_pos:?} of {:?}",
                self.source_len()
            ));
        }
        if rendered_pos != self.rendered_len() {
            return Err(format!(
                "slices cover the rendered text up to {rendered_pos:?} of {:?}",
                self.rendered_len()
            ));
        }
        Ok(())
    }
}

fn text_at(text: &str, range: TextRange) -> Option<&str> {
    text.get(Range::<usize>::from(range))
}
