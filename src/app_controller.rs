use anyhow::{Result, Context};
use log::{warn, info, debug};
use std::io::{self, BufWriter, Write};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::locale_document::LocaleDocument;
use crate::report::{ReportOptions, ReportRenderer, ReportSummary};

// @module: Application controller for the translator report

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Print the report to standard output
    pub fn run(&self) -> Result<ReportSummary> {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let summary = self.run_with_writer(&mut out)?;
        out.flush().context("Failed to flush standard output")?;
        Ok(summary)
    }

    /// Load every input, then write the report to `out`.
    ///
    /// Nothing is written unless all inputs load successfully.
    pub fn run_with_writer<W: Write>(&self, out: &mut W) -> Result<ReportSummary> {
        let locale_path = &self.config.locale_path;
        debug!("Locale file: {:?}", locale_path);
        if !FileManager::is_json_file(locale_path) {
            warn!("Locale file does not have a .json extension: {:?}", locale_path);
        }

        let document = LocaleDocument::load(locale_path)
            .with_context(|| format!("Failed to load locale file {:?}", locale_path))?;
        info!(
            "Loaded {} categories with {} progressions",
            document.categories().len(),
            document.progression_count()
        );

        let reference = match &self.config.reference_path {
            Some(path) => {
                debug!("Reference locale file: {:?}", path);
                let reference = LocaleDocument::load(path)
                    .with_context(|| format!("Failed to load reference locale {:?}", path))?;
                info!("Loaded reference locale with {} progressions", reference.progression_count());
                Some(reference)
            }
            None => None,
        };

        let options = ReportOptions {
            show_glossary: self.config.show_glossary,
            missing_only: self.config.missing_only,
        };
        let mut renderer = ReportRenderer::new(options);
        if let Some(reference) = &reference {
            renderer = renderer.with_reference(reference);
        }

        let summary = renderer
            .render(&document, out)
            .context("Failed to write report")?;

        if reference.is_some() {
            info!("{} of {} progressions still need a translation", summary.missing, document.progression_count());
        }
        debug!("Listed {} progressions in {} categories", summary.listed, summary.categories);

        Ok(summary)
    }
}
