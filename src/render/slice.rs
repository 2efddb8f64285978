//! Slice records mapping source bytes to rendered bytes.

use text_size::{TextRange, TextSize};

/// How a run of source text was treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SliceKind {
    /// Copied into the rendered text verbatim.
    Literal,
    /// Consumed: dropped from the output, or replaced by synthetic text.
    Generated,
}

impl SliceKind {
    pub fn is_literal(self) -> bool {
        matches!(self, Self::Literal)
    }
}

/// A contiguous run of the source text and how it was treated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RawSlice {
    pub text: String,
    pub kind: SliceKind,
    pub source_offset: TextSize,
}

impl RawSlice {
    pub fn new(text: impl Into<String>, kind: SliceKind, source_offset: TextSize) -> Self {
        Self {
            text: text.into(),
            kind,
            source_offset,
        }
    }

    pub fn source_range(&self) -> TextRange {
        TextRange::at(self.source_offset, TextSize::of(self.text.as_str()))
    }
}

/// The same run as a [`RawSlice`], expressed as a mapping between source
/// and rendered coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MappedSlice {
    pub kind: SliceKind,
    pub source_range: TextRange,
    pub rendered_range: TextRange,
}

impl MappedSlice {
    pub fn new(kind: SliceKind, source_range: TextRange, rendered_range: TextRange) -> Self {
        Self {
            kind,
            source_range,
            rendered_range,
        }
    }

    /// A slice whose source bytes do not appear in the output at all.
    pub fn is_deletion(&self) -> bool {
        !self.kind.is_literal() && self.rendered_range.is_empty()
    }
}
