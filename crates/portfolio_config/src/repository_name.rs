//! Repository name validation.
//!
//! Provides a branded type for repository names so that every key in the
//! resolved portfolio is known to be a name GitHub will accept.

use crate::{ConfigurationError, ConfigurationResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

#[cfg(test)]
#[path = "repository_name_tests.rs"]
mod tests;

/// Maximum length GitHub allows for a repository name.
pub const MAX_REPOSITORY_NAME_LENGTH: usize = 100;

/// A validated repository name.
///
/// Repository names must:
/// - Be 1-100 characters long
/// - Contain only ASCII letters, digits, hyphens, underscores and periods
/// - Not be `.` or `..`
///
/// # Examples
///
/// ```
/// use portfolio_config::RepositoryName;
///
/// let name = RepositoryName::try_new("infra-modules").unwrap();
/// assert_eq!(name.as_str(), "infra-modules");
///
/// assert!(RepositoryName::try_new("").is_err());
/// assert!(RepositoryName::try_new("has space").is_err());
/// assert!(RepositoryName::try_new("..").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Create a new RepositoryName from a string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidValue` if the name is empty, too
    /// long, contains characters GitHub rejects, or is a relative path
    /// component.
    pub fn try_new(name: impl Into<String>) -> ConfigurationResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(invalid(&name, "Repository name cannot be empty"));
        }

        if name.len() > MAX_REPOSITORY_NAME_LENGTH {
            return Err(invalid(
                &name,
                &format!(
                    "Repository name too long ({} characters, maximum {})",
                    name.len(),
                    MAX_REPOSITORY_NAME_LENGTH
                ),
            ));
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(invalid(
                &name,
                "Repository name contains invalid characters (only letters, digits, hyphens, underscores, and periods allowed)",
            ));
        }

        if name == "." || name == ".." {
            return Err(invalid(&name, "Repository name cannot be '.' or '..'"));
        }

        Ok(Self(name))
    }

    /// Get the underlying string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }
}

fn invalid(name: &str, reason: &str) -> ConfigurationError {
    ConfigurationError::InvalidValue {
        field: "name".to_string(),
        value: name.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RepositoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for RepositoryName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for RepositoryName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<RepositoryName> for String {
    fn from(name: RepositoryName) -> String {
        name.0
    }
}
