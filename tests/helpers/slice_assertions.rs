//! Assertions over render results.

use sqlmesh_templater::{RenderResult, SliceKind, TextRange};

pub fn text_at(text: &str, range: TextRange) -> &str {
    &text[range]
}

/// Check every slice invariant and the source reconstruction.
pub fn assert_well_formed(result: &RenderResult) {
    if let Err(violation) = result.check_invariants() {
        panic!("invalid render of {}: {violation}", result.file);
    }
    let source: String = result.raw_slices.iter().map(|raw| raw.text.as_str()).collect();
    assert_eq!(source, result.source_text);
    let rendered: String = result
        .mapped_slices
        .iter()
        .map(|slice| text_at(&result.rendered_text, slice.rendered_range))
        .collect();
    assert_eq!(rendered, result.rendered_text);
}

/// Source texts of the generated slices, in order.
pub fn generated_texts(result: &RenderResult) -> Vec<&str> {
    result
        .raw_slices
        .iter()
        .filter(|raw| raw.kind == SliceKind::Generated)
        .map(|raw| raw.text.as_str())
        .collect()
}
