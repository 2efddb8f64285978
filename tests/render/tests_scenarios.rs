//! End-to-end render scenarios through the host-facing templater.

use crate::helpers::slice_assertions::{assert_well_formed, generated_texts};
use crate::helpers::source_fixtures::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sqlmesh_templater::{
    Disposition, FileId, PLACEHOLDER, RenderConfig, RenderError, RenderResult, SqlMeshTemplater,
};

fn process(source: &str) -> Result<RenderResult, RenderError> {
    SqlMeshTemplater::new().process(
        source,
        &FileId::new("example.sql"),
        Some(&RenderConfig::new("postgres")),
    )
}

#[test]
fn test_active_developers_model() {
    let result = process(ACTIVE_DEVELOPERS_MODEL).unwrap();
    assert_eq!(result.rendered_text, ACTIVE_DEVELOPERS_RENDERED);
    assert_well_formed(&result);

    let generated = generated_texts(&result);
    // MODEL block, sigil, arguments, separator, trailing statement
    assert_eq!(generated.len(), 5);
    assert!(generated[0].contains("MODEL ("));
    assert!(generated[0].contains("@feature_flag"));
    assert_eq!(generated[1], "@");
    assert_eq!(
        generated[2],
        "\n        account_id,\n        project_id,\n        user_id\n    "
    );
    assert_eq!(generated[3], ";");
    assert_eq!(generated[4], "\n\nVACUUM @this_model;\n");
}

#[test]
fn test_incremental_model() {
    let result = process(INCREMENTAL_MODEL).unwrap();
    assert_eq!(result.rendered_text, INCREMENTAL_RENDERED);
    assert_well_formed(&result);
    // The nested @target_currency is part of the opaque arguments
    assert!(generated_texts(&result).contains(&"amount, 'USD', @target_currency"));
}

#[test]
fn test_semicolon_is_consumed() {
    let result = process("SELECT @foo() AS x;").unwrap();
    assert_eq!(result.rendered_text, "SELECT foo('PLACEHOLDER') AS x");
    assert_well_formed(&result);
}

#[test]
fn test_pre_statement_block_renders_nothing() {
    let source = "MODEL (name a.b);\nSELECT @generate_key(a, b, c) AS k, d, e FROM t;";
    let result = process(source).unwrap();
    assert_eq!(
        result.rendered_text,
        "SELECT generate_key('PLACEHOLDER') AS k, d, e FROM t"
    );
    assert!(!result.rendered_text.contains("MODEL"));
    assert_well_formed(&result);
}

#[test]
fn test_bare_reference_outside_statement_is_dropped() {
    let result = process("SELECT a FROM @this_model;\nVACUUM @this_model;").unwrap();
    assert_eq!(result.rendered_text, "SELECT a FROM this_model");
    assert!(!result.rendered_text.contains('@'));
    assert!(!result.rendered_text.contains("VACUUM"));
    assert_well_formed(&result);
}

#[rstest]
#[case("", Disposition::SkipFile)]
#[case("MODEL (name a);\nVACUUM t;", Disposition::SkipFile)]
#[case("SELECT @broken(a, b", Disposition::SkipFile)]
fn test_failures_are_skips(#[case] source: &str, #[case] disposition: Disposition) {
    let err = process(source).unwrap_err();
    assert_eq!(err.disposition(), disposition);
    assert_eq!(err.file(), Some(&FileId::new("example.sql")));
}

#[test]
fn test_placeholder_is_a_string_literal() {
    assert!(PLACEHOLDER.starts_with('\'') && PLACEHOLDER.ends_with('\''));
    assert!(!PLACEHOLDER[1..PLACEHOLDER.len() - 1].contains('\''));
}

#[test]
fn test_every_sigil_is_deleted() {
    let result = process(INCREMENTAL_MODEL).unwrap();
    for (raw, mapped) in result.raw_slices.iter().zip(&result.mapped_slices) {
        if raw.text == "@" {
            assert!(mapped.is_deletion());
        }
    }
    assert!(!result.rendered_text.contains('@'));
}
