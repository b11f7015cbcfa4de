use std::{io, path::PathBuf};

use portfolio_config::ConfigurationError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Process exit code for configuration errors (parse, validation, type).
pub const EXIT_CONFIGURATION_ERROR: i32 = 1;

/// Process exit code for I/O and output errors.
pub const EXIT_IO_ERROR: i32 = 2;

/// Errors that can occur in the portfolio CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// The portfolio document could not be resolved.
    ///
    /// Wraps the resolver's error, which names the offending field.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),

    /// The portfolio document does not exist.
    #[error("Portfolio document not found: {0:?}")]
    DocumentNotFound(PathBuf),

    /// Failed to read the portfolio document.
    #[error("Failed to load file.")]
    LoadFile(io::Error),

    /// The requested repository is not part of the portfolio.
    #[error("Repository not found in portfolio: {0}")]
    RepositoryNotFound(String),

    /// Failed to render the resolved portfolio as JSON.
    #[error("Failed to serialize output: {0}")]
    Serialization(serde_json::Error),
}

impl Error {
    /// Exit code the process should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::RepositoryNotFound(_) => EXIT_CONFIGURATION_ERROR,
            Self::DocumentNotFound(_) | Self::LoadFile(_) | Self::Serialization(_) => {
                EXIT_IO_ERROR
            }
        }
    }
}
