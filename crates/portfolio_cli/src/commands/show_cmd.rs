//! `portfolio show`: inspect one resolved repository.
//!
//! Prints every resolved option together with the document it came from,
//! followed by the repository's collaborators and branch protection rule.

use clap::{Args, ValueEnum};
use colored::Colorize;
use portfolio_config::{ConfigurationSource, ResolvedPortfolio};
use std::fmt::Write as _;
use std::path::Path;
use tracing::{debug, instrument};

use crate::commands::resolve_path;
use crate::config::get_document_path;
use crate::errors::Error;

#[cfg(test)]
#[path = "show_cmd_tests.rs"]
mod tests;

/// Output format of the show command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Name of the repository to show
    pub name: String,

    /// Path to the portfolio document
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

/// Execute the show command
#[instrument]
pub fn execute(args: &ShowArgs) -> Result<(), Error> {
    let document_path = get_document_path(args.path.as_deref());
    let output = render_repository(&document_path, &args.name, args.format)?;
    println!("{}", output);
    Ok(())
}

/// Resolves the document at `path` and renders the repository `name`.
pub fn render_repository(path: &Path, name: &str, format: OutputFormat) -> Result<String, Error> {
    let portfolio = resolve_path(path)?;
    debug!(message = "Rendering repository", repository = name, format = ?format);

    match format {
        OutputFormat::Json => {
            let repository = portfolio
                .repository(name)
                .ok_or_else(|| Error::RepositoryNotFound(name.to_string()))?;
            serde_json::to_string_pretty(repository).map_err(Error::Serialization)
        }
        OutputFormat::Pretty => format_repository(&portfolio, name),
    }
}

fn format_repository(portfolio: &ResolvedPortfolio, name: &str) -> Result<String, Error> {
    let repository = portfolio
        .repository(name)
        .ok_or_else(|| Error::RepositoryNotFound(name.to_string()))?;

    // Writing to a String cannot fail.
    let mut out = String::new();
    let _ = writeln!(out, "{}", repository.name.as_str().bold());

    let _ = writeln!(out, "\nSettings:");
    for (option, value) in &repository.settings {
        let source = match repository.source_of(option) {
            Some(ConfigurationSource::Override) => "override".yellow(),
            _ => "defaults".dimmed(),
        };
        let _ = writeln!(out, "  {} = {} ({})", option, value, source);
    }

    let collaborators: Vec<_> = portfolio.collaborators_of(name).collect();
    if !collaborators.is_empty() {
        let _ = writeln!(out, "\nCollaborators:");
        for relation in collaborators {
            let _ = writeln!(out, "  {} ({})", relation.username, relation.permission);
        }
    }

    if let Some(rule) = portfolio.branch_protections.get(name) {
        let _ = writeln!(out, "\nBranch protection: {}", rule.pattern);
        if let Some(count) = rule.required_approving_review_count {
            let _ = writeln!(out, "  Required approving reviews: {}", count);
        }
        if !rule.required_status_checks.is_empty() {
            let _ = writeln!(
                out,
                "  Required status checks: {}",
                rule.required_status_checks.join(", ")
            );
        }
    }

    Ok(out.trim_end().to_string())
}
