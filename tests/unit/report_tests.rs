/*!
 * Tests for report rendering
 */

use anyhow::Result;
use progtranslate::locale_document::LocaleDocument;
use progtranslate::report::{render_report, ReportOptions, ReportRenderer, MISSING_MARKER};
use crate::common;

fn render_json(json: &str) -> Result<String> {
    Ok(render_report(&LocaleDocument::from_json_str(json)?))
}

/// An empty document prints exactly the two header lines
#[test]
fn test_render_report_withNoCategories_shouldPrintOnlyHeader() -> Result<()> {
    assert_eq!(render_json("{}")?, common::report_header());
    assert_eq!(render_json(r#"{"progressions": {}}"#)?, common::report_header());
    Ok(())
}

/// The single-progression layout matches line for line
#[test]
fn test_render_report_withBasicCategory_shouldMatchExpectedLines() -> Result<()> {
    let report = render_json(
        r#"{"progressions": {"Basic": {"I-IV-V": {"nickname": "Classic", "description": "Simple and strong"}}}}"#,
    )?;

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "English progression descriptions to translate:",
            "================================================================================",
            "",
            "### Basic ###",
            "",
            "I-IV-V - Classic",
            "  EN: Simple and strong",
            "",
        ]
    );
    assert!(report.ends_with("\n\n"));

    Ok(())
}

/// Reordering keys in the source reorders the report
#[test]
fn test_render_report_withSwappedKeys_shouldFollowSourceOrder() -> Result<()> {
    let forward = render_json(r#"{"progressions": {"A": {"x": {}}, "B": {"y": {}}}}"#)?;
    let backward = render_json(r#"{"progressions": {"B": {"y": {}}, "A": {"x": {}}}}"#)?;

    assert!(forward.find("### A ###").unwrap() < forward.find("### B ###").unwrap());
    assert!(backward.find("### B ###").unwrap() < backward.find("### A ###").unwrap());

    Ok(())
}

/// Missing nickname and description leave a trailing space
#[test]
fn test_render_report_withMissingFields_shouldKeepTrailingSpace() -> Result<()> {
    let report = render_json(r#"{"progressions": {"Basic": {"I-V": {}}}}"#)?;

    assert!(report.lines().any(|l| l == "I-V - "));
    assert!(report.lines().any(|l| l == "  EN: "));

    Ok(())
}

/// The reference locale adds DE lines and marks gaps
#[test]
fn test_render_withReference_shouldShowGermanOrMissing() -> Result<()> {
    let doc = LocaleDocument::from_json_str(common::SAMPLE_LOCALE)?;
    let reference = LocaleDocument::from_json_str(common::SAMPLE_REFERENCE)?;

    let mut buffer = Vec::new();
    let summary = ReportRenderer::new(ReportOptions::default())
        .with_reference(&reference)
        .render(&doc, &mut buffer)?;
    let report = String::from_utf8(buffer)?;

    assert!(report.contains("  DE: Die beliebteste Progression im modernen Pop.\n"));
    assert_eq!(report.matches(&format!("  DE: {}\n", MISSING_MARKER)).count(), 2);
    assert_eq!(summary.missing, 2);
    assert_eq!(summary.listed, 3);

    Ok(())
}

/// Missing-only mode skips translated progressions but keeps headers
#[test]
fn test_render_withMissingOnly_shouldSkipTranslated() -> Result<()> {
    let doc = LocaleDocument::from_json_str(common::SAMPLE_LOCALE)?;
    let reference = LocaleDocument::from_json_str(common::SAMPLE_REFERENCE)?;
    let options = ReportOptions { missing_only: true, ..ReportOptions::default() };

    let report = ReportRenderer::new(options)
        .with_reference(&reference)
        .render_to_string(&doc);

    assert!(!report.contains("I-V-vi-IV"));
    assert!(report.contains("vi-IV-I-V - Sensitive Female"));
    assert!(report.contains("ii-V-I - Two-Five-One"));
    assert!(report.contains("### Pop ###"));

    Ok(())
}

/// The glossary option appends both tables and adds hints
#[test]
fn test_render_withGlossary_shouldAppendTablesAndHints() -> Result<()> {
    let doc = LocaleDocument::from_json_str(common::SAMPLE_LOCALE)?;
    let options = ReportOptions { show_glossary: true, ..ReportOptions::default() };

    let report = ReportRenderer::new(options).render_to_string(&doc);

    assert!(report.contains("\n### Glossary: terms ###\n\nprogression -> Progression\n"));
    assert!(report.contains("\n### Glossary: phrases ###\n\nThe most popular progression -> Die beliebteste Progression\n"));
    assert!(report.contains("  HINT: voice leading = Stimmführung; smooth = glatt/fließend; The foundation of = Die Grundlage von; Foundation of = Grundlage von\n"));
    assert!(report.ends_with("Common in -> Üblich in\n"));

    Ok(())
}

/// Rendering twice gives identical output
#[test]
fn test_render_report_twice_shouldBeIdentical() -> Result<()> {
    let doc = LocaleDocument::from_json_str(common::SAMPLE_LOCALE)?;
    assert_eq!(render_report(&doc), render_report(&doc));
    Ok(())
}
