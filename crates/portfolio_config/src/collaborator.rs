//! Collaborator entries and the flattened collaborator relation table.
//!
//! Repositories list their collaborators as a nested sequence:
//!
//! ```yaml
//! collaborators:
//!   - username: alice
//!     permission: push
//! ```
//!
//! The reconciliation engine wants one flat record per (repository, user)
//! pair instead, keyed by `"<repository>:<username>"`.

use crate::{
    document::{display_value, type_mismatch},
    option_schema::{option_path, read_string, COLLABORATORS},
    ConfigurationError, ConfigurationResult, RepositoryName,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "collaborator_tests.rs"]
mod tests;

const USERNAME_KEY: &str = "username";
const PERMISSION_KEY: &str = "permission";

/// Permission granted to a collaborator.
///
/// Accepts GitHub's role names plus the `read`/`write` aliases used by the
/// web UI. The spelling from the input is kept so the engine sees what the
/// author wrote; [`CollaboratorPermission::api_role`] gives the canonical
/// role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaboratorPermission {
    Pull,
    Triage,
    Push,
    Maintain,
    Admin,
    /// Alias of `pull`.
    Read,
    /// Alias of `push`.
    Write,
}

impl CollaboratorPermission {
    pub const ALL: [CollaboratorPermission; 7] = [
        Self::Pull,
        Self::Triage,
        Self::Push,
        Self::Maintain,
        Self::Admin,
        Self::Read,
        Self::Write,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Triage => "triage",
            Self::Push => "push",
            Self::Maintain => "maintain",
            Self::Admin => "admin",
            Self::Read => "read",
            Self::Write => "write",
        }
    }

    /// The GitHub API role this permission maps to.
    pub fn api_role(&self) -> &'static str {
        match self {
            Self::Pull | Self::Read => "pull",
            Self::Push | Self::Write => "push",
            other => other.as_str(),
        }
    }
}

impl Default for CollaboratorPermission {
    /// GitHub grants `push` when no permission is given.
    fn default() -> Self {
        Self::Push
    }
}

impl fmt::Display for CollaboratorPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollaboratorPermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                "Must be one of: pull, triage, push, maintain, admin, read, write".to_string()
            })
    }
}

/// One entry of a repository's `collaborators` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorEntry {
    pub username: String,
    pub permission: CollaboratorPermission,
}

impl CollaboratorEntry {
    /// Decodes one entry of the `collaborators` sequence.
    ///
    /// `field` is the path of the entry, used in error messages.
    pub fn from_value(field: &str, value: &Value) -> ConfigurationResult<Self> {
        let Value::Object(entry) = value else {
            return Err(type_mismatch(field, "mapping", value));
        };

        if let Some(unknown) = entry
            .keys()
            .find(|k| k.as_str() != USERNAME_KEY && k.as_str() != PERMISSION_KEY)
        {
            return Err(ConfigurationError::InvalidValue {
                field: format!("{}.{}", field, unknown),
                value: display_value(&entry[unknown]),
                reason: "Collaborator entries only accept username and permission".to_string(),
            });
        }

        let username_field = format!("{}.{}", field, USERNAME_KEY);
        let username = match entry.get(USERNAME_KEY) {
            None | Some(Value::Null) => {
                return Err(ConfigurationError::RequiredFieldMissing {
                    field: username_field,
                    context: "Every collaborator entry must have a username".to_string(),
                })
            }
            Some(value) => read_string(&username_field, value)?,
        };
        validate_username(&username_field, &username)?;

        let permission_field = format!("{}.{}", field, PERMISSION_KEY);
        let permission = match entry.get(PERMISSION_KEY) {
            None | Some(Value::Null) => CollaboratorPermission::default(),
            Some(value) => {
                let permission = read_string(&permission_field, value)?;
                permission
                    .parse()
                    .map_err(|reason| ConfigurationError::InvalidValue {
                        field: permission_field.clone(),
                        value: permission.clone(),
                        reason,
                    })?
            }
        };

        Ok(Self {
            username,
            permission,
        })
    }
}

/// GitHub usernames are letters, digits and hyphens; managed (EMU) accounts
/// add an `_shortcode` suffix.
fn validate_username(field: &str, username: &str) -> ConfigurationResult<()> {
    if username.is_empty()
        || !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigurationError::InvalidValue {
            field: field.to_string(),
            value: username.to_string(),
            reason: "Usernames may only contain letters, digits, hyphens, and underscores"
                .to_string(),
        });
    }
    Ok(())
}

/// One (repository, user, permission) triple of the flattened table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorRelation {
    pub repository: RepositoryName,
    pub username: String,
    pub permission: CollaboratorPermission,
}

impl CollaboratorRelation {
    pub fn new(repository: RepositoryName, entry: CollaboratorEntry) -> Self {
        Self {
            repository,
            username: entry.username,
            permission: entry.permission,
        }
    }

    /// The composite `"<repository>:<username>"` key.
    pub fn key(&self) -> String {
        relation_key(&self.repository, &self.username)
    }
}

/// Builds the composite key of a collaborator relation.
pub fn relation_key(repository: &RepositoryName, username: &str) -> String {
    format!("{}:{}", repository, username)
}

/// Decodes the `collaborators` option of a repository.
///
/// Returns an empty list when the option is absent or null.
pub fn collaborator_entries(
    repository: &RepositoryName,
    value: Option<&Value>,
) -> ConfigurationResult<Vec<CollaboratorEntry>> {
    let field = option_path(repository, COLLABORATORS);

    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                CollaboratorEntry::from_value(&format!("{}[{}]", field, index), entry)
            })
            .collect(),
        Some(other) => Err(type_mismatch(&field, "sequence", other)),
    }
}
