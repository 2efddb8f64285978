//! Projecting positions between the model source and the rendered SQL.

use crate::helpers::source_fixtures::*;
use sqlmesh_templater::{
    FileId, LineCol, RenderConfig, RenderResult, SqlMeshTemplater, TextRange, TextSize,
};

fn process(source: &str) -> RenderResult {
    SqlMeshTemplater::new()
        .process(source, &FileId::stdin(), Some(&RenderConfig::new("postgres")))
        .unwrap()
}

fn find(text: &str, needle: &str) -> TextSize {
    TextSize::new(text.find(needle).unwrap() as u32)
}

#[test]
fn test_diagnostic_on_literal_maps_to_source() {
    let result = process(ACTIVE_DEVELOPERS_MODEL);
    let rendered = find(&result.rendered_text, "last_accessed_time");
    let source = result.source_offset(rendered).unwrap();
    assert_eq!(source, find(&result.source_text, "last_accessed_time"));

    let line_col = result.source_line_col(source).unwrap();
    assert_eq!(line_col, LineCol { line: 24, col: 4 });
}

#[test]
fn test_diagnostic_on_placeholder_maps_to_arguments() {
    let result = process(ACTIVE_DEVELOPERS_MODEL);
    let placeholder = find(&result.rendered_text, "'PLACEHOLDER'");
    let source = result.source_offset(placeholder).unwrap();
    let open_paren = find(&result.source_text, "@generate_surrogate_key(") + TextSize::new(24);
    assert_eq!(source, open_paren);
}

#[test]
fn test_literal_range_round_trips() {
    let result = process(INCREMENTAL_MODEL);
    let start = find(&result.source_text, "raw.orders");
    let source = TextRange::at(start, TextSize::of("raw.orders"));
    assert!(result.is_source_literal(source));

    let rendered = TextRange::new(
        result.rendered_offset(source.start()).unwrap(),
        result.rendered_offset(source.end()).unwrap(),
    );
    assert_eq!(&result.rendered_text[rendered], "raw.orders");
    assert_eq!(result.source_range(rendered), Some(source));
}

#[test]
fn test_model_block_is_not_editable() {
    let result = process(INCREMENTAL_MODEL);
    let kind = find(&result.source_text, "kind");
    assert!(!result.is_source_literal(TextRange::at(kind, TextSize::of("kind"))));
    assert_eq!(result.rendered_offset(kind), Some(TextSize::new(0)));
}

#[test]
fn test_every_rendered_offset_maps_back_in_order() {
    let result = process(INCREMENTAL_MODEL);
    let mut previous = TextSize::new(0);
    for offset in 0..=u32::from(result.rendered_len()) {
        let source = result.source_offset(TextSize::new(offset)).unwrap();
        assert!(source >= previous, "offset {offset} maps backwards");
        previous = source;
    }
}
