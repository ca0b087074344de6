/*!
 * Tests that run the progtranslate binary
 */

use std::path::Path;
use std::process::{Command, Output};
use anyhow::Result;
use crate::common;

// Runs the binary from `dir` so no stray progtranslate.json is picked up
fn run_cli(dir: &Path, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_progtranslate"))
        .current_dir(dir)
        .env_remove("PROGTRANSLATE_LOCALE")
        .args(args)
        .output()?)
}

#[test]
fn test_cli_withLocaleArgument_shouldPrintReportAndSucceed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_sample_locale(temp_dir.path())?;

    let output = run_cli(temp_dir.path(), &["en.json"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with(&common::report_header()));
    assert!(stdout.contains("### Jazz ###"));

    Ok(())
}

#[test]
fn test_cli_twice_shouldProduceIdenticalOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_sample_locale(temp_dir.path())?;

    let first = run_cli(temp_dir.path(), &["en.json"])?;
    let second = run_cli(temp_dir.path(), &["en.json"])?;

    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn test_cli_withMissingFile_shouldFailWithoutReport() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = run_cli(temp_dir.path(), &["en.json"])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("en.json"));

    Ok(())
}

#[test]
fn test_cli_withMalformedFile_shouldFailWithoutReport() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "en.json", "not json")?;

    let output = run_cli(temp_dir.path(), &["en.json"])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_cli_withScalarRecord_shouldFailWithoutReport() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "en.json", r#"{"progressions": {"Basic": {"I-V": 3}}}"#)?;

    let output = run_cli(temp_dir.path(), &["en.json"])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Document error"));

    Ok(())
}

#[test]
fn test_cli_withEnvironmentVariable_shouldUseThatLocale() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let locale = common::create_sample_locale(temp_dir.path())?;

    let output = Command::new(env!("CARGO_BIN_EXE_progtranslate"))
        .current_dir(temp_dir.path())
        .env("PROGTRANSLATE_LOCALE", &locale)
        .output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("ii-V-I - Two-Five-One"));

    Ok(())
}

#[test]
fn test_cli_withConfigFile_shouldApplySettings() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_sample_locale(temp_dir.path())?;
    common::create_test_file(
        temp_dir.path(),
        "progtranslate.json",
        r#"{"locale_path": "en.json", "show_glossary": true}"#,
    )?;

    let output = run_cli(temp_dir.path(), &[])?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("### Glossary: terms ###"));

    Ok(())
}

#[test]
fn test_cli_reportSubcommand_withReference_shouldShowGerman() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_sample_locale(temp_dir.path())?;
    common::create_sample_reference(temp_dir.path())?;

    let output = run_cli(temp_dir.path(), &["report", "--reference", "de.json", "--missing-only", "en.json"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("  DE: (missing)"));
    assert!(!stdout.contains("Axis of Awesome"));

    Ok(())
}

#[test]
fn test_cli_missingOnlyWithoutReference_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_sample_locale(temp_dir.path())?;

    let output = run_cli(temp_dir.path(), &["--missing-only", "en.json"])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_cli_completions_shouldPrintScript() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = run_cli(temp_dir.path(), &["completions", "bash"])?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("progtranslate"));

    Ok(())
}
