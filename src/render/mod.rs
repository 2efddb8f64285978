//! Rendering of SQLMesh model files into plain SQL.
//!
//! ```text
//! Source Text
//!     ↓
//! Tokenizer → tokens
//!     ↓
//! Statement Bounder → [select_start, select_end)
//!     ↓
//! Macro Substitution → rendered statement + slices
//!     ↓
//! Slice Assembler → RenderResult covering the whole source
//! ```
//!
//! Everything outside the first `SELECT` statement is dropped from the
//! rendered text but still accounted for in the slices, so every source
//! byte maps somewhere.

mod assemble;
mod bounds;
mod error;
mod result;
mod slice;
mod substitute;

pub use bounds::{StatementBounds, find_statement};
pub use error::{Disposition, RenderError};
pub use result::RenderResult;
pub use slice::{MappedSlice, RawSlice, SliceKind};
pub use substitute::{PLACEHOLDER, Substitution, substitute};

use text_size::TextSize;

use crate::base::{Dialect, FileId};
use crate::lexer::Tokenizer;

/// Render `source` with the given tokenizer.
///
/// `source` must be shorter than `u32::MAX` bytes.
pub fn render(
    source: &str,
    file: &FileId,
    dialect: &Dialect,
    tokenizer: &dyn Tokenizer,
) -> Result<RenderResult, RenderError> {
    if source.is_empty() {
        return Err(RenderError::EmptyInput { file: file.clone() });
    }

    let no_statement = || RenderError::NoRenderableStatement { file: file.clone() };
    let source_len = TextSize::of(source);
    let tokens = tokenizer.tokenize(source, dialect);
    let bounds = find_statement(&tokens, source_len).ok_or_else(no_statement)?;

    let region_range = bounds.region();
    let in_bounds = bounds.select_end() <= source_len
        && source.is_char_boundary(region_range.start().into())
        && source.is_char_boundary(region_range.end().into())
        && bounds
            .separator
            .is_none_or(|separator| source.is_char_boundary(separator.end().into()));
    if !in_bounds {
        tracing::warn!(%file, ?bounds, "tokenizer produced a statement outside the source");
        return Err(no_statement());
    }
    tracing::debug!(%file, statement = ?bounds.statement, "rendering statement");

    let region = &source[region_range];
    let substitution = substitute(region, region_range.start(), TextSize::new(0), file)?;
    let result = assemble::assemble(file.clone(), source, &bounds, substitution);
    debug_assert_eq!(result.check_invariants(), Ok(()));
    Ok(result)
}
