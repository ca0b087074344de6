use anyhow::{Result, Context};
use std::fs;
use std::path::Path;

use crate::errors::AppError;

// @module: File utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Read a locale file as UTF-8, mapping failures to a typed file error
    pub fn read_locale<P: AsRef<Path>>(path: P) -> Result<String, AppError> {
        fs::read_to_string(&path).map_err(|e| AppError::file(&path, &e))
    }

    // @checks: Locale file extension
    pub fn is_json_file<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
    }
}
