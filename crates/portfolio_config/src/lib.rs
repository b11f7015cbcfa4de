//! Repository portfolio configuration resolution.
//!
//! Resolves a YAML portfolio of GitHub repository definitions into the
//! collections an external reconciliation engine iterates over: the
//! resolved configuration of every repository, a flattened collaborator
//! relation table, and the subsets of repositories that manage an
//! ownership file or a branch protection rule.
//!
//! The crate is a pure, synchronous library. It performs no I/O beyond the
//! `tracing` events it emits; reading the document and applying the result
//! are left to the caller.

// Document model
pub mod document;
pub mod errors;
pub mod repository_name;

// Option values
pub mod branch_protection;
pub mod collaborator;
pub mod option_schema;
pub mod visibility;

// Resolution
pub mod resolved;
pub mod resolver;


// Re-export for convenient access
pub use branch_protection::BranchProtectionRule;
pub use collaborator::{CollaboratorEntry, CollaboratorPermission, CollaboratorRelation};
pub use document::{parse_overrides, DefaultsDocument, OptionMap, PortfolioDocument, RepositoryOverride};
pub use errors::{ConfigurationError, ConfigurationResult, ErrorKind};
pub use repository_name::RepositoryName;
pub use resolved::{ConfigurationSource, ResolvedPortfolio, ResolvedRepository};
pub use resolver::{load_and_resolve, resolve_document, ConfigurationResolver};
pub use visibility::RepositoryVisibility;
