//! Expected types of the well-known repository options.
//!
//! The resolver checks every resolved repository against this table after
//! merging, so a mistyped default is reported against the first repository
//! it reaches. Options not listed here are passed through to the
//! reconciliation engine unchecked.
//!
//! A `null` value is accepted for every option and means "unset".

use crate::{
    document::{display_value, type_mismatch, OptionMap},
    ConfigurationError, ConfigurationResult, RepositoryName, RepositoryVisibility,
};
use serde_json::Value;
use tracing::debug;

#[cfg(test)]
#[path = "option_schema_tests.rs"]
mod tests;

pub const VISIBILITY: &str = "visibility";
pub const TOPICS: &str = "topics";
pub const DEFAULT_BRANCH: &str = "default_branch";
pub const COLLABORATORS: &str = "collaborators";
pub const CODEOWNERS: &str = "codeowners";
pub const BRANCH_PROTECTION: &str = "branch_protection";

/// Maximum length GitHub allows for a topic.
pub const MAX_TOPIC_LENGTH: usize = 50;

/// Shape a known option's value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Boolean,
    StringList,
    MappingList,
    Mapping,
}

impl OptionKind {
    /// Name of the kind as it appears in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::StringList | Self::MappingList => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

/// Known repository options and their kinds.
pub const KNOWN_OPTIONS: &[(&str, OptionKind)] = &[
    ("description", OptionKind::String),
    ("homepage_url", OptionKind::String),
    (DEFAULT_BRANCH, OptionKind::String),
    (CODEOWNERS, OptionKind::String),
    (VISIBILITY, OptionKind::String),
    ("gitignore_template", OptionKind::String),
    ("license_template", OptionKind::String),
    ("has_issues", OptionKind::Boolean),
    ("has_wiki", OptionKind::Boolean),
    ("has_projects", OptionKind::Boolean),
    ("has_discussions", OptionKind::Boolean),
    ("has_downloads", OptionKind::Boolean),
    ("is_template", OptionKind::Boolean),
    ("archived", OptionKind::Boolean),
    ("archive_on_destroy", OptionKind::Boolean),
    ("auto_init", OptionKind::Boolean),
    ("vulnerability_alerts", OptionKind::Boolean),
    ("allow_merge_commit", OptionKind::Boolean),
    ("allow_squash_merge", OptionKind::Boolean),
    ("allow_rebase_merge", OptionKind::Boolean),
    ("allow_auto_merge", OptionKind::Boolean),
    ("allow_update_branch", OptionKind::Boolean),
    ("delete_branch_on_merge", OptionKind::Boolean),
    (TOPICS, OptionKind::StringList),
    (COLLABORATORS, OptionKind::MappingList),
    (BRANCH_PROTECTION, OptionKind::Mapping),
];

/// Looks up the expected kind of a known option.
pub fn known_option_kind(option: &str) -> Option<OptionKind> {
    KNOWN_OPTIONS
        .iter()
        .find(|(name, _)| *name == option)
        .map(|(_, kind)| *kind)
}

/// Field path of an option on a repository, used in error messages.
pub fn option_path(repository: &RepositoryName, option: &str) -> String {
    format!("repositories[{}].{}", repository, option)
}

/// Checks the resolved settings of one repository.
///
/// # Errors
///
/// - `TypeMismatch` if a known option has the wrong shape
/// - `InvalidValue` if `visibility` or a topic is not a value GitHub accepts
pub fn validate_settings(
    repository: &RepositoryName,
    settings: &OptionMap,
) -> ConfigurationResult<()> {
    for (option, value) in settings {
        let Some(kind) = known_option_kind(option) else {
            debug!(
                message = "Passing through unknown option",
                repository = %repository,
                option = %option
            );
            continue;
        };

        if value.is_null() {
            continue;
        }

        check_kind(&option_path(repository, option), kind, value)?;
    }

    if let Some(Value::String(visibility)) = settings.get(VISIBILITY) {
        visibility
            .parse::<RepositoryVisibility>()
            .map_err(|reason| ConfigurationError::InvalidValue {
                field: option_path(repository, VISIBILITY),
                value: visibility.clone(),
                reason,
            })?;
    }

    if let Some(Value::Array(topics)) = settings.get(TOPICS) {
        for (index, topic) in topics.iter().enumerate() {
            if let Value::String(topic) = topic {
                validate_topic(&format!("{}[{}]", option_path(repository, TOPICS), index), topic)?;
            }
        }
    }

    Ok(())
}

fn check_kind(field: &str, kind: OptionKind, value: &Value) -> ConfigurationResult<()> {
    match (kind, value) {
        (OptionKind::String, Value::String(_)) => Ok(()),
        (OptionKind::Boolean, Value::Bool(_)) => Ok(()),
        (OptionKind::Mapping, Value::Object(_)) => Ok(()),
        (OptionKind::StringList, Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                if !item.is_string() {
                    return Err(type_mismatch(&format!("{}[{}]", field, index), "string", item));
                }
            }
            Ok(())
        }
        (OptionKind::MappingList, Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                if !item.is_object() {
                    return Err(type_mismatch(&format!("{}[{}]", field, index), "mapping", item));
                }
            }
            Ok(())
        }
        (kind, other) => Err(type_mismatch(field, kind.describe(), other)),
    }
}

/// Topics must be lowercase letters, digits and hyphens, start with a
/// letter or digit and be at most 50 characters.
fn validate_topic(field: &str, topic: &str) -> ConfigurationResult<()> {
    let invalid = |reason: &str| ConfigurationError::InvalidValue {
        field: field.to_string(),
        value: topic.to_string(),
        reason: reason.to_string(),
    };

    if topic.is_empty() {
        return Err(invalid("Topics cannot be empty"));
    }
    if topic.len() > MAX_TOPIC_LENGTH {
        return Err(invalid("Topics can be at most 50 characters"));
    }
    if !topic
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(invalid(
            "Topics may only contain lowercase letters, digits, and hyphens",
        ));
    }
    if topic.starts_with('-') {
        return Err(invalid("Topics must start with a letter or digit"));
    }

    Ok(())
}

// ------------------------------------------------------------------------
// Typed readers for nested blocks (collaborators, branch protection)
// ------------------------------------------------------------------------

pub(crate) fn read_bool(field: &str, value: &Value) -> ConfigurationResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| type_mismatch(field, "boolean", value))
}

pub(crate) fn read_string(field: &str, value: &Value) -> ConfigurationResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| type_mismatch(field, "string", value))
}

pub(crate) fn read_u64(field: &str, value: &Value) -> ConfigurationResult<u64> {
    match value {
        Value::Number(number) => number.as_u64().ok_or_else(|| ConfigurationError::InvalidValue {
            field: field.to_string(),
            value: display_value(value),
            reason: "Must be a non-negative integer".to_string(),
        }),
        other => Err(type_mismatch(field, "integer", other)),
    }
}

pub(crate) fn read_string_list(field: &str, value: &Value) -> ConfigurationResult<Vec<String>> {
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| read_string(&format!("{}[{}]", field, index), item))
            .collect(),
        other => Err(type_mismatch(field, "sequence", other)),
    }
}
