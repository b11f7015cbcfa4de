//! Repository visibility values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;

/// Repository visibility level (GitHub platform concept).
///
/// Internal visibility is only available in GitHub Enterprise environments.
///
/// # Serialization
///
/// Serializes to/from lowercase strings: "public", "private", "internal"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryVisibility {
    /// Visible to all GitHub users
    Public,

    /// Visible only to repository collaborators
    Private,

    /// Visible to all organization/enterprise members (GitHub Enterprise only)
    Internal,
}

impl RepositoryVisibility {
    pub const ALL: [RepositoryVisibility; 3] = [Self::Public, Self::Private, Self::Internal];

    /// "public", "private", or "internal"
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for RepositoryVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepositoryVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| "Must be one of: public, private, internal".to_string())
    }
}
