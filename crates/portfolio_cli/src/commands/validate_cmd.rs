//! `portfolio validate`: check the portfolio document without emitting it.

use clap::Args;
use colored::Colorize;
use portfolio_config::ResolvedPortfolio;
use std::{fmt, path::Path};
use tracing::{error, info, instrument};

use crate::commands::resolve_path;
use crate::config::get_document_path;
use crate::errors::Error;

#[cfg(test)]
#[path = "validate_cmd_tests.rs"]
mod tests;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the portfolio document
    #[arg(short, long)]
    pub path: Option<String>,
}

/// Counts of what a valid portfolio document manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSummary {
    pub repositories: usize,
    pub collaborators: usize,
    pub codeowners: usize,
    pub branch_protections: usize,
}

impl From<&ResolvedPortfolio> for ValidationSummary {
    fn from(portfolio: &ResolvedPortfolio) -> Self {
        Self {
            repositories: portfolio.repositories.len(),
            collaborators: portfolio.collaborators.len(),
            codeowners: portfolio.codeowners.len(),
            branch_protections: portfolio.branch_protections.len(),
        }
    }
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "Portfolio is valid".green().bold())?;
        writeln!(f, "  Repositories:        {}", self.repositories)?;
        writeln!(f, "  Collaborators:       {}", self.collaborators)?;
        writeln!(f, "  Ownership files:     {}", self.codeowners)?;
        write!(f, "  Branch protections:  {}", self.branch_protections)
    }
}

/// Execute the validate command
#[instrument]
pub fn execute(args: &ValidateArgs) -> Result<(), Error> {
    let document_path = get_document_path(args.path.as_deref());

    match validate_document(&document_path) {
        Ok(summary) => {
            info!(message = "Portfolio is valid", path = ?document_path);
            println!("{}", summary);
            Ok(())
        }
        Err(e) => {
            error!(
                message = "Portfolio is invalid",
                path = ?document_path,
                error = %e
            );
            Err(e)
        }
    }
}

/// Resolves the document at `path` and summarizes the result.
pub fn validate_document(path: &Path) -> Result<ValidationSummary, Error> {
    let portfolio = resolve_path(path)?;
    Ok(ValidationSummary::from(&portfolio))
}
