//! Macro Substitution Engine
//!
//! A single left-to-right scan over the bounded statement. Text is copied
//! through in literal runs; macro syntax breaks the runs:
//!
//! - `@` is deleted (a zero-length generated slice).
//! - `@name` keeps `name`.
//! - `@name(args)` keeps `name(` and `)`, and `args` is replaced by
//!   [`PLACEHOLDER`].
//!
//! Quoted strings, quoted identifiers and comments are opaque: an `@` or a
//! parenthesis inside them is plain text.

use text_size::{TextRange, TextSize};

use super::error::RenderError;
use super::slice::{MappedSlice, RawSlice, SliceKind};
use crate::base::FileId;
use crate::lexer::scan;

/// Rendered in place of a function-call macro's arguments.
pub const PLACEHOLDER: &str = "'PLACEHOLDER'";

/// Rendered text and slices for a bounded statement.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub rendered: String,
    pub raw_slices: Vec<RawSlice>,
    pub mapped_slices: Vec<MappedSlice>,
}

/// Rewrite the macros in `region`.
///
/// `source_offset` is the absolute source offset of `region`, and
/// `rendered_offset` the absolute offset in the final rendered text where
/// the output of this region starts.
pub fn substitute(
    region: &str,
    source_offset: TextSize,
    rendered_offset: TextSize,
    file: &FileId,
) -> Result<Substitution, RenderError> {
    Scanner {
        region,
        bytes: region.as_bytes(),
        source_offset,
        rendered_offset,
        pos: 0,
        run_start: 0,
        file,
        out: Substitution::default(),
    }
    .run()
}

struct Scanner<'a> {
    region: &'a str,
    bytes: &'a [u8],
    source_offset: TextSize,
    rendered_offset: TextSize,
    /// Cursor into `region`
    pos: usize,
    /// Start of the open literal run; the run is empty when equal to `pos`
    run_start: usize,
    file: &'a FileId,
    out: Substitution,
}

impl Scanner<'_> {
    fn run(mut self) -> Result<Substitution, RenderError> {
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'@' {
                self.macro_reference()?;
            } else {
                self.pos += scan::opaque_len(&self.bytes[self.pos..]).unwrap_or(1);
            }
        }
        self.close_run();
        Ok(self.out)
    }

    /// Handle an `@` at `pos`.
    fn macro_reference(&mut self) -> Result<(), RenderError> {
        self.close_run();
        self.emit_generated(self.pos, self.pos + 1, "");
        self.pos += 1;
        self.run_start = self.pos;

        let name_len = self.count_while(self.pos, |b| b.is_ascii_alphanumeric() || b == b'_');
        if name_len == 0 {
            return Ok(());
        }
        self.pos += name_len;

        let space_len = self.count_while(self.pos, |b| b.is_ascii_whitespace());
        if self.bytes.get(self.pos + space_len) != Some(&b'(') {
            // Bare reference: only the sigil goes.
            return Ok(());
        }

        let open_paren = self.pos + space_len;
        self.pos = open_paren + 1;
        self.close_run();

        let close_paren = self.matching_paren(open_paren)?;
        self.emit_generated(self.pos, close_paren, PLACEHOLDER);
        self.pos = close_paren;
        self.run_start = close_paren;
        self.pos += 1;
        Ok(())
    }

    /// Find the `)` closing the `(` at `open`.
    fn matching_paren(&self, open: usize) -> Result<usize, RenderError> {
        let mut depth = 1usize;
        let mut i = open + 1;
        while i < self.bytes.len() {
            match self.bytes[i] {
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(i);
                    }
                }
                _ => {
                    if let Some(len) = scan::opaque_len(&self.bytes[i..]) {
                        i += len;
                        continue;
                    }
                }
            }
            i += 1;
        }
        Err(RenderError::MalformedMacroArguments {
            file: self.file.clone(),
            offset: self.source_offset + offset(open),
        })
    }

    fn count_while(&self, from: usize, pred: impl Fn(u8) -> bool) -> usize {
        self.bytes[from..].iter().take_while(|&&b| pred(b)).count()
    }

    fn tpl_pos(&self) -> TextSize {
        self.rendered_offset + TextSize::of(self.out.rendered.as_str())
    }

    /// Emit the open literal run `[run_start, pos)`, if it is not empty.
    fn close_run(&mut self) {
        if self.run_start >= self.pos {
            return;
        }
        let text = &self.region[self.run_start..self.pos];
        let rendered_range = TextRange::at(self.tpl_pos(), TextSize::of(text));
        let source_range = self.source_range(self.run_start, self.pos);

        self.out
            .raw_slices
            .push(RawSlice::new(text, SliceKind::Literal, source_range.start()));
        self.out.mapped_slices.push(MappedSlice::new(
            SliceKind::Literal,
            source_range,
            rendered_range,
        ));
        self.out.rendered.push_str(text);
        self.run_start = self.pos;
    }

    /// Emit `[start, end)` of the region as consumed, rendering `replacement`
    /// in its place.
    fn emit_generated(&mut self, start: usize, end: usize, replacement: &str) {
        let source_range = self.source_range(start, end);
        let rendered_range = TextRange::at(self.tpl_pos(), TextSize::of(replacement));
        tracing::trace!(?source_range, ?rendered_range, "generated slice");

        self.out.raw_slices.push(RawSlice::new(
            &self.region[start..end],
            SliceKind::Generated,
            source_range.start(),
        ));
        self.out.mapped_slices.push(MappedSlice::new(
            SliceKind::Generated,
            source_range,
            rendered_range,
        ));
        self.out.rendered.push_str(replacement);
    }

    fn source_range(&self, start: usize, end: usize) -> TextRange {
        TextRange::new(
            self.source_offset + offset(start),
            self.source_offset + offset(end),
        )
    }
}

fn offset(pos: usize) -> TextSize {
    TextSize::new(pos as u32)
}
