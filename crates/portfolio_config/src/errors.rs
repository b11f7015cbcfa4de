//! Configuration resolution error types.
//!
//! Domain-specific errors for parsing the portfolio document and
//! validating the resolved repository configurations.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Broad classification of a [`ConfigurationError`].
///
/// Callers that only need to distinguish "the document is not YAML" from
/// "the document is YAML but describes an invalid portfolio" can match on
/// this instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not well-formed structured text.
    Parse,
    /// A required field is missing, a key is duplicated or a value is out of range.
    Validation,
    /// A value has the wrong type for the option it is assigned to.
    Type,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse => write!(f, "ParseError"),
            Self::Validation => write!(f, "ValidationError"),
            Self::Type => write!(f, "TypeError"),
        }
    }
}

/// Configuration resolution errors.
///
/// Every error aborts the resolution pass. Field paths name the repository
/// being resolved (`repositories[web].visibility`) or, when the name is not
/// known yet, the position of the entry (`repositories[3].name`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Failed to parse configuration: {reason}")]
    ParseError { reason: String },

    #[error("Required field missing: {field} - {context}")]
    RequiredFieldMissing { field: String, context: String },

    #[error("Repository '{name}' is defined more than once")]
    DuplicateRepository { name: String },

    #[error("Collaborator '{key}' is defined more than once")]
    DuplicateCollaborator { key: String },

    #[error("Invalid value for {field}: '{value}' - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Type mismatch for {field}: expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
    },
}

impl ConfigurationError {
    /// Returns the broad category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ParseError { .. } => ErrorKind::Parse,
            Self::RequiredFieldMissing { .. }
            | Self::DuplicateRepository { .. }
            | Self::DuplicateCollaborator { .. }
            | Self::InvalidValue { .. } => ErrorKind::Validation,
            Self::TypeMismatch { .. } => ErrorKind::Type,
        }
    }
}

impl From<serde_yaml::Error> for ConfigurationError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::ParseError {
            reason: error.to_string(),
        }
    }
}

/// Result type alias for configuration operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
