//! `portfolio resolve`: emit the resolved portfolio as JSON.
//!
//! The output is the input of the reconciliation engine: the resolved
//! repositories, the collaborator relations and the ownership file and
//! branch protection subsets. Log output goes to stderr so stdout can be
//! piped straight into the engine.

use clap::Args;
use std::path::Path;
use tracing::{info, instrument};

use crate::commands::resolve_path;
use crate::config::get_document_path;
use crate::errors::Error;

#[cfg(test)]
#[path = "resolve_cmd_tests.rs"]
mod tests;

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the portfolio document
    #[arg(short, long)]
    pub path: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the resolve command
#[instrument]
pub fn execute(args: &ResolveArgs) -> Result<(), Error> {
    let document_path = get_document_path(args.path.as_deref());
    let output = render_portfolio(&document_path, args.pretty)?;

    info!(message = "Portfolio resolved", path = ?document_path);
    println!("{}", output);
    Ok(())
}

/// Resolves the document at `path` and renders it as JSON.
pub fn render_portfolio(path: &Path, pretty: bool) -> Result<String, Error> {
    let portfolio = resolve_path(path)?;

    if pretty {
        serde_json::to_string_pretty(&portfolio).map_err(Error::Serialization)
    } else {
        serde_json::to_string(&portfolio).map_err(Error::Serialization)
    }
}
