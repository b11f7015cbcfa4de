//! Resolved repository configurations and the projections derived from them.
//!
//! A [`ResolvedRepository`] is the defaults merged with one repository's
//! overrides. It keeps a source trace recording, per option, which document
//! supplied the value, so that "why is the wiki enabled on this repo?" can be
//! answered without re-reading the YAML.
//!
//! A [`ResolvedPortfolio`] holds every resolved repository plus the
//! collections the reconciliation engine iterates over.

use crate::{
    collaborator::CollaboratorRelation,
    document::OptionMap,
    option_schema::CODEOWNERS,
    BranchProtectionRule, RepositoryName,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "resolved_tests.rs"]
mod tests;

/// Which document supplied a resolved option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigurationSource {
    /// The shared defaults document
    Defaults,
    /// The repository's own override document
    Override,
}

/// One repository's fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRepository {
    pub name: RepositoryName,

    /// Merged options, without `name`.
    pub settings: OptionMap,

    /// Source of every key in `settings`.
    pub sources: BTreeMap<String, ConfigurationSource>,
}

impl ResolvedRepository {
    /// Shallow merge of `defaults` and `overrides`: every default key is
    /// copied, then every override key replaces it. Nested values are never
    /// merged.
    pub fn merge(name: RepositoryName, defaults: &OptionMap, overrides: &OptionMap) -> Self {
        let mut settings = OptionMap::new();
        let mut sources = BTreeMap::new();

        for (option, value) in defaults {
            settings.insert(option.clone(), value.clone());
            sources.insert(option.clone(), ConfigurationSource::Defaults);
        }

        for (option, value) in overrides {
            settings.insert(option.clone(), value.clone());
            sources.insert(option.clone(), ConfigurationSource::Override);
        }

        Self {
            name,
            settings,
            sources,
        }
    }

    pub fn get(&self, option: &str) -> Option<&Value> {
        self.settings.get(option)
    }

    pub fn source_of(&self, option: &str) -> Option<ConfigurationSource> {
        self.sources.get(option).copied()
    }

    /// The ownership file content, when present and non-empty.
    pub fn codeowners(&self) -> Option<&str> {
        match self.settings.get(CODEOWNERS) {
            Some(Value::String(content)) if !content.is_empty() => Some(content),
            _ => None,
        }
    }
}

/// Result of one resolution pass.
///
/// Every key of `codeowners` and `branch_protections`, and the repository of
/// every collaborator relation, is a key of `repositories`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedPortfolio {
    /// Every repository, keyed by name
    pub repositories: BTreeMap<RepositoryName, ResolvedRepository>,

    /// Collaborator relations keyed by `"<repository>:<username>"`
    pub collaborators: BTreeMap<String, CollaboratorRelation>,

    /// Repositories carrying a non-empty ownership file
    pub codeowners: BTreeMap<RepositoryName, ResolvedRepository>,

    /// Branch protection rules of the repositories that declare one
    pub branch_protections: BTreeMap<RepositoryName, BranchProtectionRule>,
}

impl ResolvedPortfolio {
    pub fn repository(&self, name: &str) -> Option<&ResolvedRepository> {
        self.repositories.get(name)
    }

    /// Collaborator relations of one repository.
    pub fn collaborators_of<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a CollaboratorRelation> + 'a {
        self.collaborators
            .values()
            .filter(move |relation| relation.repository.as_str() == name)
    }
}
