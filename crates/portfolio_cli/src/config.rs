//! Locating and reading the portfolio document.
//!
//! The document path is taken from the `--path` argument when given, then
//! from the `PORTFOLIO_CONFIG` environment variable, and finally defaults to
//! `repositories.yaml` in the current directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::errors::Error;

/// Default portfolio document file name
pub const DEFAULT_DOCUMENT_FILENAME: &str = "repositories.yaml";

/// Environment variable naming the portfolio document
pub const DOCUMENT_PATH_ENV: &str = "PORTFOLIO_CONFIG";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Determines the portfolio document path.
pub fn get_document_path(document_path: Option<&str>) -> PathBuf {
    resolve_document_path(document_path, std::env::var(DOCUMENT_PATH_ENV).ok())
}

fn resolve_document_path(document_path: Option<&str>, env_path: Option<String>) -> PathBuf {
    if let Some(path) = document_path {
        return PathBuf::from(path);
    }

    match env_path {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => {
            let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            current_dir.join(DEFAULT_DOCUMENT_FILENAME)
        }
    }
}

/// Reads the portfolio document at `path`.
///
/// # Errors
///
/// - `Error::DocumentNotFound` if nothing exists at `path`
/// - `Error::LoadFile` if the file cannot be read
pub fn load_document(path: &Path) -> Result<String, Error> {
    debug!(message = "Loading portfolio document", path = ?path);

    if !path.exists() {
        return Err(Error::DocumentNotFound(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(Error::LoadFile)
}
