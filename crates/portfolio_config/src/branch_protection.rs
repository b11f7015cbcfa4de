//! Branch protection rules.
//!
//! A repository opts into branch protection by carrying a
//! `branch_protection` mapping, either directly or through the defaults:
//!
//! ```yaml
//! branch_protection:
//!   required_approving_review_count: 1
//!   require_code_owner_reviews: true
//!   required_status_checks: [build, test]
//! ```
//!
//! Only repositories with such a block end up in the branch protection
//! subset handed to the reconciliation engine.

use crate::{
    document::{display_value, type_mismatch, OptionMap},
    option_schema::{
        option_path, read_bool, read_string, read_string_list, read_u64, BRANCH_PROTECTION,
        DEFAULT_BRANCH,
    },
    ConfigurationError, ConfigurationResult, RepositoryName,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "branch_protection_tests.rs"]
mod tests;

/// Branch protected when neither the block nor the repository names one.
pub const FALLBACK_BRANCH: &str = "main";

/// GitHub's upper bound on required approving reviews.
pub const MAX_REQUIRED_REVIEWS: u64 = 6;

/// Branch protection rule for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchProtectionRule {
    /// Branch name or pattern the rule applies to
    pub pattern: String,

    /// Apply the rule to administrators too
    pub enforce_admins: bool,

    /// Require signed commits
    pub require_signed_commits: bool,

    /// Required number of approving reviews; no review requirement when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_approving_review_count: Option<u64>,

    /// Dismiss stale reviews when new commits are pushed
    pub dismiss_stale_reviews: bool,

    /// Require review from code owners
    pub require_code_owner_reviews: bool,

    /// Status checks that must pass before merging
    pub required_status_checks: Vec<String>,

    /// Require branches to be up to date before merging
    pub strict_status_checks: bool,

    /// Require all conversations to be resolved before merging
    pub require_conversation_resolution: bool,

    /// Allow force pushes
    pub allow_force_pushes: bool,

    /// Allow deletions
    pub allow_deletions: bool,
}

impl BranchProtectionRule {
    /// A rule for `pattern` with every protection switched off.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            enforce_admins: false,
            require_signed_commits: false,
            required_approving_review_count: None,
            dismiss_stale_reviews: false,
            require_code_owner_reviews: false,
            required_status_checks: Vec::new(),
            strict_status_checks: false,
            require_conversation_resolution: false,
            allow_force_pushes: false,
            allow_deletions: false,
        }
    }

    /// Builds the rule for a resolved repository.
    ///
    /// Returns `Ok(None)` when the repository has no `branch_protection`
    /// block (or a null one). The pattern falls back to the repository's
    /// `default_branch`, then to `main`.
    ///
    /// # Errors
    ///
    /// - `TypeMismatch` if the block or one of its fields has the wrong type
    /// - `InvalidValue` for unknown keys or an out of range review count
    pub fn from_settings(
        repository: &RepositoryName,
        settings: &OptionMap,
    ) -> ConfigurationResult<Option<Self>> {
        let field = option_path(repository, BRANCH_PROTECTION);

        let block = match settings.get(BRANCH_PROTECTION) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Object(block)) => block,
            Some(other) => return Err(type_mismatch(&field, "mapping", other)),
        };

        let fallback = match settings.get(DEFAULT_BRANCH) {
            Some(Value::String(branch)) if !branch.is_empty() => branch.as_str(),
            _ => FALLBACK_BRANCH,
        };
        let mut rule = Self::new(fallback);

        for (key, value) in block {
            let key_field = format!("{}.{}", field, key);
            if value.is_null() {
                continue;
            }

            match key.as_str() {
                "pattern" => rule.pattern = read_string(&key_field, value)?,
                "enforce_admins" => rule.enforce_admins = read_bool(&key_field, value)?,
                "require_signed_commits" => {
                    rule.require_signed_commits = read_bool(&key_field, value)?
                }
                "required_approving_review_count" => {
                    let count = read_u64(&key_field, value)?;
                    if count > MAX_REQUIRED_REVIEWS {
                        return Err(ConfigurationError::InvalidValue {
                            field: key_field,
                            value: count.to_string(),
                            reason: format!("Must be between 0 and {}", MAX_REQUIRED_REVIEWS),
                        });
                    }
                    rule.required_approving_review_count = Some(count);
                }
                "dismiss_stale_reviews" => {
                    rule.dismiss_stale_reviews = read_bool(&key_field, value)?
                }
                "require_code_owner_reviews" => {
                    rule.require_code_owner_reviews = read_bool(&key_field, value)?
                }
                "required_status_checks" => {
                    rule.required_status_checks = read_string_list(&key_field, value)?
                }
                "strict_status_checks" => rule.strict_status_checks = read_bool(&key_field, value)?,
                "require_conversation_resolution" => {
                    rule.require_conversation_resolution = read_bool(&key_field, value)?
                }
                "allow_force_pushes" => rule.allow_force_pushes = read_bool(&key_field, value)?,
                "allow_deletions" => rule.allow_deletions = read_bool(&key_field, value)?,
                _ => {
                    return Err(ConfigurationError::InvalidValue {
                        field: key_field,
                        value: display_value(value),
                        reason: "Unknown branch protection setting".to_string(),
                    })
                }
            }
        }

        if rule.pattern.is_empty() {
            return Err(ConfigurationError::InvalidValue {
                field: format!("{}.pattern", field),
                value: String::new(),
                reason: "Branch pattern cannot be empty".to_string(),
            });
        }

        Ok(Some(rule))
    }
}
