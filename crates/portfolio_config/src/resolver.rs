//! Configuration resolution engine.
//!
//! Turns the defaults document and the ordered repository overrides into a
//! [`ResolvedPortfolio`] in a single pass:
//!
//! 1. **Merge** - each override is layered on top of the defaults
//!    (shallow, override wins) and the result is checked against the
//!    known option types.
//! 2. **Collaborators** - every resolved `collaborators` entry becomes one
//!    relation keyed by `"<repository>:<username>"`.
//! 3. **Ownership files** - repositories with a non-empty `codeowners`
//!    string form the ownership subset.
//! 4. **Branch protection** - repositories with a `branch_protection`
//!    block form the branch protection subset.
//!
//! # Duplicate policy
//!
//! Duplicates are rejected rather than silently resolved: two overrides
//! with the same name, or two collaborator entries producing the same key,
//! abort the pass.
//!
//! # Examples
//!
//! ```rust
//! use portfolio_config::resolve_document;
//!
//! let portfolio = resolve_document(
//!     r#"
//! defaults:
//!   visibility: private
//!   has_wiki: true
//! repositories:
//!   - name: a
//!     visibility: public
//! "#,
//! )?;
//!
//! let a = portfolio.repository("a").unwrap();
//! assert_eq!(a.get("visibility"), Some(&serde_json::json!("public")));
//! assert_eq!(a.get("has_wiki"), Some(&serde_json::json!(true)));
//! # Ok::<(), portfolio_config::ConfigurationError>(())
//! ```

use crate::{
    branch_protection::BranchProtectionRule,
    collaborator::{collaborator_entries, relation_key, CollaboratorRelation},
    document::{parse_overrides, DefaultsDocument, PortfolioDocument, RepositoryOverride},
    option_schema::{validate_settings, COLLABORATORS},
    resolved::{ResolvedPortfolio, ResolvedRepository},
    ConfigurationError, ConfigurationResult,
};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// Configuration resolution engine.
///
/// Stateless: every call derives a fresh result from its inputs, so one
/// resolver can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationResolver {}

impl ConfigurationResolver {
    pub fn new() -> Self {
        Self {}
    }

    /// Resolves every override against the defaults and derives the
    /// collaborator table and the filtered subsets.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigurationError` encountered; no partial
    /// result is produced.
    /// - `DuplicateRepository` if two overrides share a name
    /// - `DuplicateCollaborator` if two collaborator entries share a key
    /// - `TypeMismatch` / `InvalidValue` from option validation
    pub fn resolve(
        &self,
        defaults: &DefaultsDocument,
        overrides: &[RepositoryOverride],
    ) -> ConfigurationResult<ResolvedPortfolio> {
        let mut repositories = BTreeMap::new();
        for repository_override in overrides {
            let name = repository_override.name();
            if repositories.contains_key(name) {
                return Err(ConfigurationError::DuplicateRepository {
                    name: name.to_string(),
                });
            }

            let resolved = self.resolve_repository(defaults, repository_override)?;
            repositories.insert(name.clone(), resolved);
        }

        let mut collaborators = BTreeMap::new();
        for repository in repositories.values() {
            for entry in collaborator_entries(&repository.name, repository.get(COLLABORATORS))? {
                let key = relation_key(&repository.name, &entry.username);
                if collaborators.contains_key(&key) {
                    return Err(ConfigurationError::DuplicateCollaborator { key });
                }
                collaborators.insert(key, CollaboratorRelation::new(repository.name.clone(), entry));
            }
        }

        let codeowners: BTreeMap<_, _> = repositories
            .iter()
            .filter(|(_, repository)| repository.codeowners().is_some())
            .map(|(name, repository)| (name.clone(), repository.clone()))
            .collect();

        let mut branch_protections = BTreeMap::new();
        for (name, repository) in &repositories {
            let Some(rule) = BranchProtectionRule::from_settings(name, &repository.settings)?
            else {
                continue;
            };

            if rule.require_code_owner_reviews && !codeowners.contains_key(name) {
                warn!(
                    message = "Code owner reviews required but no ownership file is managed",
                    repository = %name
                );
            }
            branch_protections.insert(name.clone(), rule);
        }

        info!(
            message = "Resolved repository portfolio",
            repositories = repositories.len(),
            collaborators = collaborators.len(),
            codeowners = codeowners.len(),
            branch_protections = branch_protections.len()
        );

        Ok(ResolvedPortfolio {
            repositories,
            collaborators,
            codeowners,
            branch_protections,
        })
    }

    /// Merges one override with the defaults and validates the result.
    pub fn resolve_repository(
        &self,
        defaults: &DefaultsDocument,
        repository_override: &RepositoryOverride,
    ) -> ConfigurationResult<ResolvedRepository> {
        let resolved = ResolvedRepository::merge(
            repository_override.name().clone(),
            defaults.options(),
            repository_override.options(),
        );

        validate_settings(&resolved.name, &resolved.settings)?;

        debug!(
            message = "Resolved repository",
            repository = %resolved.name,
            options = resolved.settings.len(),
            overridden = repository_override.options().len()
        );

        Ok(resolved)
    }

    /// Resolves an already parsed portfolio document.
    pub fn resolve_portfolio(
        &self,
        document: &PortfolioDocument,
    ) -> ConfigurationResult<ResolvedPortfolio> {
        self.resolve(&document.defaults, &document.repositories)
    }
}

/// Parses a defaults mapping and an overrides sequence from separate YAML
/// sources and resolves them.
///
/// # Errors
///
/// `ParseError` when either source is not well-formed YAML, plus every
/// error [`ConfigurationResolver::resolve`] reports.
pub fn load_and_resolve(
    defaults_source: &str,
    overrides_source: &str,
) -> ConfigurationResult<ResolvedPortfolio> {
    let defaults = DefaultsDocument::from_yaml_str(defaults_source)?;
    let overrides = parse_overrides(overrides_source)?;
    ConfigurationResolver::new().resolve(&defaults, &overrides)
}

/// Parses and resolves a combined `defaults` + `repositories` document.
pub fn resolve_document(text: &str) -> ConfigurationResult<ResolvedPortfolio> {
    let document = PortfolioDocument::from_yaml_str(text)?;
    ConfigurationResolver::new().resolve_portfolio(&document)
}
