/*!
 * Plain-text report for translators.
 *
 * The report lists every progression of a locale document, grouped by
 * category, in the order the locale file declares them:
 *
 * ```text
 * English progression descriptions to translate:
 * ================================================================================
 *
 * ### Basic ###
 *
 * I-IV-V - Classic
 *   EN: Simple and strong
 *
 * ```
 */

use std::io::{self, Write};

use crate::glossary::{self, GlossaryEntry, PHRASE_GLOSSARY, TERM_GLOSSARY};
use crate::locale_document::{Category, LocaleDocument, Progression};

/// First line of every report
pub const REPORT_HEADER: &str = "English progression descriptions to translate:";

/// Width of the `=` rule under the header
pub const SEPARATOR_WIDTH: usize = 80;

/// Shown on the DE line when the reference locale has no description
pub const MISSING_MARKER: &str = "(missing)";

/// Optional report sections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Append the glossary tables and per-progression hints
    pub show_glossary: bool,

    /// Skip progressions the reference locale already describes
    pub missing_only: bool,
}

/// Counts gathered while rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Categories printed
    pub categories: usize,

    /// Progressions printed
    pub listed: usize,

    /// Progressions without a reference description
    pub missing: usize,
}

/// Renders a locale document as a translator report
pub struct ReportRenderer<'a> {
    options: ReportOptions,
    reference: Option<&'a LocaleDocument>,
}

impl<'a> ReportRenderer<'a> {
    /// Create a renderer with the given options and no reference locale
    pub fn new(options: ReportOptions) -> Self {
        Self {
            options,
            reference: None,
        }
    }

    /// Show the reference locale's description next to each English one
    pub fn with_reference(mut self, reference: &'a LocaleDocument) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Write the report to `out`
    pub fn render<W: Write>(&self, document: &LocaleDocument, out: &mut W) -> io::Result<ReportSummary> {
        let mut summary = ReportSummary::default();

        writeln!(out, "{}", REPORT_HEADER)?;
        writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;

        for category in document.categories() {
            writeln!(out)?;
            writeln!(out, "### {} ###", category.name)?;
            writeln!(out)?;
            summary.categories += 1;

            for progression in &category.progressions {
                let translated = self.reference_description(category, progression);
                if self.reference.is_some() {
                    if translated.is_none() {
                        summary.missing += 1;
                    } else if self.options.missing_only {
                        continue;
                    }
                }

                self.render_progression(progression, translated, out)?;
                summary.listed += 1;
            }
        }

        if self.options.show_glossary {
            render_glossary_section(out, "Glossary: terms", &TERM_GLOSSARY)?;
            render_glossary_section(out, "Glossary: phrases", &PHRASE_GLOSSARY)?;
        }

        Ok(summary)
    }

    /// Render the report into a string
    pub fn render_to_string(&self, document: &LocaleDocument) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(document, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn render_progression<W: Write>(
        &self,
        progression: &Progression,
        translated: Option<&str>,
        out: &mut W,
    ) -> io::Result<()> {
        let record = &progression.record;
        writeln!(out, "{} - {}", progression.name, record.nickname())?;
        writeln!(out, "  EN: {}", record.description())?;

        if self.reference.is_some() {
            writeln!(out, "  DE: {}", translated.unwrap_or(MISSING_MARKER))?;
        }

        if self.options.show_glossary {
            let hints = glossary::entries_in(record.description());
            if !hints.is_empty() {
                let joined = hints
                    .iter()
                    .map(|e| format!("{} = {}", e.english, e.german))
                    .collect::<Vec<_>>()
                    .join("; ");
                writeln!(out, "  HINT: {}", joined)?;
            }
        }

        writeln!(out)
    }

    fn reference_description(&self, category: &Category, progression: &Progression) -> Option<&'a str> {
        self.reference?
            .record(&category.name, &progression.name)
            .filter(|r| r.has_description())
            .map(|r| r.description())
    }
}

fn render_glossary_section<W: Write>(out: &mut W, title: &str, entries: &[GlossaryEntry]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "### {} ###", title)?;
    writeln!(out)?;
    for entry in entries {
        writeln!(out, "{} -> {}", entry.english, entry.german)?;
    }
    Ok(())
}

/// Render the default report, with no reference and no glossary
pub fn render_report(document: &LocaleDocument) -> String {
    ReportRenderer::new(ReportOptions::default()).render_to_string(document)
}
