//! Slice Assembler
//!
//! Stitches the dropped text before the statement, the substituted
//! statement, the consumed separator and the dropped text after it into one
//! slice list covering the whole source.

use text_size::{TextRange, TextSize};

use super::bounds::StatementBounds;
use super::result::RenderResult;
use super::slice::{MappedSlice, RawSlice, SliceKind};
use super::substitute::Substitution;
use crate::base::FileId;

/// Build the final [`RenderResult`].
///
/// `region` must have been substituted with rendered offsets starting at 0:
/// the statement is the entire rendered output.
pub fn assemble(
    file: FileId,
    source: &str,
    bounds: &StatementBounds,
    region: Substitution,
) -> RenderResult {
    let source_len = TextSize::of(source);
    let rendered_end = TextSize::of(region.rendered.as_str());

    let mut slices = Slices {
        raw: Vec::with_capacity(region.raw_slices.len() + 3),
        mapped: Vec::with_capacity(region.mapped_slices.len() + 3),
    };

    if bounds.select_start() > TextSize::new(0) {
        slices.push_dropped(source, TextRange::up_to(bounds.select_start()), TextSize::new(0));
    }
    slices.raw.extend(region.raw_slices);
    slices.mapped.extend(region.mapped_slices);
    if let Some(separator) = bounds.separator {
        slices.push_dropped(source, separator, rendered_end);
    }
    if bounds.select_end() < source_len {
        let after = TextRange::new(bounds.select_end(), source_len);
        slices.push_dropped(source, after, rendered_end);
    }

    tracing::trace!(slices = slices.mapped.len(), "assembled render slices");
    RenderResult {
        file,
        source_text: source.to_owned(),
        rendered_text: region.rendered,
        raw_slices: slices.raw,
        mapped_slices: slices.mapped,
    }
}

struct Slices {
    raw: Vec<RawSlice>,
    mapped: Vec<MappedSlice>,
}

impl Slices {
    /// Source text that is consumed without rendering anything.
    fn push_dropped(&mut self, source: &str, range: TextRange, at: TextSize) {
        self.raw.push(RawSlice::new(
            &source[range],
            SliceKind::Generated,
            range.start(),
        ));
        self.mapped.push(MappedSlice::new(
            SliceKind::Generated,
            range,
            TextRange::empty(at),
        ));
    }
}
