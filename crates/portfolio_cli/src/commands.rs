//! Command modules for the portfolio CLI.
//!
//! - `resolve_cmd`: prints the resolved portfolio as JSON for the reconciliation engine
//! - `show_cmd`: prints one resolved repository with the source of each option
//! - `validate_cmd`: checks the portfolio document and prints a summary

use std::path::Path;

use portfolio_config::{resolve_document, ResolvedPortfolio};
use tracing::debug;

use crate::config::load_document;
use crate::errors::Error;

pub mod resolve_cmd;
pub mod show_cmd;
pub mod validate_cmd;

/// Reads the document at `path` and resolves it.
pub fn resolve_path(path: &Path) -> Result<ResolvedPortfolio, Error> {
    let content = load_document(path)?;
    let portfolio = resolve_document(&content)?;
    debug!(
        message = "Resolved portfolio document",
        path = ?path,
        repositories = portfolio.repositories.len()
    );
    Ok(portfolio)
}

/// Removes terminal colour escapes so rendered output can be compared as text.
#[cfg(test)]
pub(crate) fn plain_text(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len());
    let mut chars = rendered.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip the CSI sequence up to and including its final letter
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
