//! Portfolio document parsing.
//!
//! The portfolio is authored as a YAML document holding a shared
//! `defaults` mapping and a `repositories` sequence of per-repository
//! override mappings:
//!
//! ```yaml
//! defaults:
//!   visibility: private
//!   has_wiki: false
//! repositories:
//!   - name: web
//!     visibility: public
//!     collaborators:
//!       - username: alice
//!         permission: push
//!     codeowners: "* @alice"
//! ```
//!
//! This module turns that text into a [`DefaultsDocument`] and a list of
//! [`RepositoryOverride`]s. It checks the document's shape (mappings where
//! mappings are expected, a `name` on every entry) but not the option
//! values; those are checked after merging by the resolver.

use crate::{ConfigurationError, ConfigurationResult, RepositoryName};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;

/// Option name to option value.
///
/// Ordered so that every projection derived from it serializes
/// deterministically.
pub type OptionMap = BTreeMap<String, Value>;

/// Key holding the repository name in an override document.
pub const NAME_KEY: &str = "name";

const DEFAULTS_KEY: &str = "defaults";
const REPOSITORIES_KEY: &str = "repositories";

/// Baseline options applied to every repository before its overrides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefaultsDocument {
    options: OptionMap,
}

impl DefaultsDocument {
    /// Creates a defaults document from a set of options.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidValue` if the options define
    /// `name`; a name only makes sense on an individual repository.
    pub fn new(options: OptionMap) -> ConfigurationResult<Self> {
        if let Some(name) = options.get(NAME_KEY) {
            return Err(ConfigurationError::InvalidValue {
                field: format!("{}.{}", DEFAULTS_KEY, NAME_KEY),
                value: display_value(name),
                reason: "Repository names cannot be given a default".to_string(),
            });
        }

        Ok(Self { options })
    }

    /// Parses a YAML mapping into a defaults document.
    ///
    /// An empty document yields empty defaults.
    pub fn from_yaml_str(text: &str) -> ConfigurationResult<Self> {
        let value = parse_yaml(text)?;
        Self::from_value(DEFAULTS_KEY, value)
    }

    fn from_value(field: &str, value: Value) -> ConfigurationResult<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Self::new(map.into_iter().collect()),
            other => Err(type_mismatch(field, "mapping", &other)),
        }
    }

    /// The default options.
    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// One repository's deviation from the defaults.
///
/// The `name` is lifted out of the option map into its own validated field.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryOverride {
    name: RepositoryName,
    options: OptionMap,
}

impl RepositoryOverride {
    /// Builds an override from the raw mapping found at `index` in the
    /// repositories sequence.
    ///
    /// # Errors
    ///
    /// - `RequiredFieldMissing` if the mapping has no `name` (or a null one)
    /// - `TypeMismatch` if `name` is not a string
    /// - `InvalidValue` if `name` is not a valid repository name
    pub fn from_mapping(index: usize, mut options: OptionMap) -> ConfigurationResult<Self> {
        let field = format!("{}[{}].{}", REPOSITORIES_KEY, index, NAME_KEY);

        let name = match options.remove(NAME_KEY) {
            None | Some(Value::Null) => {
                return Err(ConfigurationError::RequiredFieldMissing {
                    field,
                    context: "Every repository entry must have a name".to_string(),
                })
            }
            Some(Value::String(name)) => name,
            Some(other) => return Err(type_mismatch(&field, "string", &other)),
        };

        let name = RepositoryName::try_new(name).map_err(|e| match e {
            ConfigurationError::InvalidValue { value, reason, .. } => {
                ConfigurationError::InvalidValue {
                    field: field.clone(),
                    value,
                    reason,
                }
            }
            other => other,
        })?;

        Ok(Self { name, options })
    }

    pub fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// The override options, without `name`.
    pub fn options(&self) -> &OptionMap {
        &self.options
    }
}

/// A parsed portfolio document: defaults plus the ordered overrides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PortfolioDocument {
    pub defaults: DefaultsDocument,
    pub repositories: Vec<RepositoryOverride>,
}

impl PortfolioDocument {
    /// Parses the combined `defaults` + `repositories` document.
    ///
    /// # Errors
    ///
    /// - `ParseError` if the text is not well-formed YAML
    /// - `TypeMismatch` if the document, `defaults`, `repositories` or an
    ///   entry of `repositories` has the wrong shape
    /// - `RequiredFieldMissing` if `repositories` or an entry's `name` is absent
    pub fn from_yaml_str(text: &str) -> ConfigurationResult<Self> {
        let mut document = match parse_yaml(text)? {
            Value::Object(map) => map,
            Value::Null => serde_json::Map::new(),
            other => return Err(type_mismatch("document", "mapping", &other)),
        };

        let defaults = match document.remove(DEFAULTS_KEY) {
            Some(value) => DefaultsDocument::from_value(DEFAULTS_KEY, value)?,
            None => DefaultsDocument::default(),
        };

        let repositories = match document.remove(REPOSITORIES_KEY) {
            Some(value) => overrides_from_value(value)?,
            None => {
                return Err(ConfigurationError::RequiredFieldMissing {
                    field: REPOSITORIES_KEY.to_string(),
                    context: "The portfolio document must list its repositories".to_string(),
                })
            }
        };

        for key in document.keys() {
            warn!(message = "Ignoring unknown top-level key", key = %key);
        }

        debug!(
            message = "Parsed portfolio document",
            defaults = defaults.options().len(),
            repositories = repositories.len()
        );

        Ok(Self {
            defaults,
            repositories,
        })
    }
}

/// Parses a YAML sequence of override mappings.
///
/// An empty document yields no overrides.
pub fn parse_overrides(text: &str) -> ConfigurationResult<Vec<RepositoryOverride>> {
    overrides_from_value(parse_yaml(text)?)
}

fn overrides_from_value(value: Value) -> ConfigurationResult<Vec<RepositoryOverride>> {
    let entries = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(entries) => entries,
        other => return Err(type_mismatch(REPOSITORIES_KEY, "sequence", &other)),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(map) => RepositoryOverride::from_mapping(index, map.into_iter().collect()),
            other => Err(type_mismatch(
                &format!("{}[{}]", REPOSITORIES_KEY, index),
                "mapping",
                &other,
            )),
        })
        .collect()
}

fn parse_yaml(text: &str) -> ConfigurationResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_yaml::from_str::<Value>(text)?)
}

/// Name of a value's type as it appears in error messages.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// Short rendering of a value for error messages.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn type_mismatch(field: &str, expected: &str, found: &Value) -> ConfigurationError {
    ConfigurationError::TypeMismatch {
        field: field.to_string(),
        expected: expected.to_string(),
        found: value_type_name(found).to_string(),
    }
}
