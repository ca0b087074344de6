// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use progtranslate::app_config::{self, Config, DEFAULT_CONFIG_FILE, LOCALE_ENV_VAR};
use progtranslate::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the translator report (default command)
    Report(ReportArgs),

    /// Generate shell completions for progtranslate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// English locale file to list
    #[arg(value_name = "LOCALE_PATH", env = LOCALE_ENV_VAR)]
    locale_path: Option<PathBuf>,

    /// Configuration file path (read only if it exists)
    #[arg(short, long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config_path: PathBuf,

    /// Translated locale to show next to each English description
    #[arg(short, long, value_name = "PATH")]
    reference: Option<PathBuf>,

    /// Append the English/German glossary and per-progression hints
    #[arg(short, long)]
    glossary: bool,

    /// Only list progressions the reference locale has not described
    #[arg(short, long)]
    missing_only: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// progtranslate - chord progression translation helper
///
/// Lists the English progression names, nicknames and descriptions of a locale
/// file so a translator can author the German locale by hand.
#[derive(Parser, Debug)]
#[command(name = "progtranslate")]
#[command(version)]
#[command(about = "Chord progression locale listing for translators")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "progtranslate prints every progression of an English locale file,
grouped by category, as a reference for manual German translation.

EXAMPLES:
    progtranslate                                  # List the default locale file
    progtranslate locales/en.json                  # List another locale file
    progtranslate -r locales/de.json en.json       # Show German text next to English
    progtranslate -r de.json -m en.json            # Only untranslated progressions
    progtranslate -g en.json                       # Append the glossary
    progtranslate completions bash > progtranslate.bash

CONFIGURATION:
    Settings are read from progtranslate.json when it exists. The locale path
    can also be set with the PROGTRANSLATE_LOCALE environment variable.
    Command line flags take precedence over both.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    report: ReportArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // The logger itself accepts everything; log::set_max_level does the filtering.
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");

            // stdout carries the report, diagnostics go to stderr
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Warn)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "progtranslate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Report(args)) => run_report(args),
        None => run_report(cli.report),
    }
}

fn run_report(options: ReportArgs) -> Result<()> {
    let mut config = Config::load_or_default(&options.config_path)?;

    // Command line and environment take precedence over the config file
    if let Some(locale_path) = options.locale_path {
        config.locale_path = locale_path;
    }
    if let Some(reference) = options.reference {
        config.reference_path = Some(reference);
    }
    if options.glossary {
        config.show_glossary = true;
    }
    if options.missing_only {
        config.missing_only = true;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    log::set_max_level(config.log_level.to_level_filter());
    debug!("Effective configuration: {:?}", config);

    let controller = Controller::with_config(config)?;
    controller.run()?;

    Ok(())
}
