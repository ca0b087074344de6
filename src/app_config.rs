use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::file_utils::FileManager;

/// Locale file read when nothing else is configured
pub const DEFAULT_LOCALE_PATH: &str = "/home/user/AkaiMPC/AkaiMPCChordProgressionGenerator/locales/en.json";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "progtranslate.json";

/// Environment variable overriding the locale path
pub const LOCALE_ENV_VAR: &str = "PROGTRANSLATE_LOCALE";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// English locale file to list
    #[serde(default = "default_locale_path")]
    pub locale_path: PathBuf,

    /// Translated locale shown next to the English text
    #[serde(default)]
    pub reference_path: Option<PathBuf>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Append glossary tables and hints to the report
    #[serde(default)]
    pub show_glossary: bool,

    /// Only list progressions the reference has not described yet
    #[serde(default)]
    pub missing_only: bool,
}

impl Config {
    /// Load a config file if it exists, defaults otherwise.
    ///
    /// A missing file is not an error and is never created.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !FileManager::file_exists(path) {
            return Ok(Self::default());
        }

        let content = FileManager::read_to_string(path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Check the configuration for inconsistent settings
    pub fn validate(&self) -> std::result::Result<(), AppError> {
        if self.locale_path.as_os_str().is_empty() {
            return Err(AppError::Config("Locale path must not be empty".to_string()));
        }

        if self.missing_only && self.reference_path.is_none() {
            return Err(AppError::Config(
                "missing-only mode requires a reference locale (--reference)".to_string(),
            ));
        }

        if let Some(reference) = &self.reference_path {
            if reference.as_os_str().is_empty() {
                return Err(AppError::Config("Reference path must not be empty".to_string()));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            locale_path: default_locale_path(),
            reference_path: None,
            log_level: LogLevel::default(),
            show_glossary: false,
            missing_only: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log crate
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(anyhow!("Invalid log level: {}", s)),
        }
    }
}

fn default_locale_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOCALE_PATH)
}
