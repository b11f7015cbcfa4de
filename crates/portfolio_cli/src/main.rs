use clap::{Parser, Subcommand};

use portfolio_cli::commands::{
    resolve_cmd::{self, ResolveArgs},
    show_cmd::{self, ShowArgs},
    validate_cmd::{self, ValidateArgs},
};
use portfolio_cli::errors::Error;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Portfolio CLI: resolve the declarative repository portfolio for the reconciliation engine
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Resolve a declarative GitHub repository portfolio", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved portfolio as JSON
    Resolve(ResolveArgs),

    /// Check the portfolio document and print a summary
    Validate(ValidateArgs),

    /// Show one resolved repository
    Show(ShowArgs),

    /// Show the CLI version
    Version,
}

fn main() {
    // Logs go to stderr so the JSON on stdout stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("PORTFOLIO_LOG"))
        .init();

    let cli = Cli::parse();
    let result: Result<(), Error> = match &cli.command {
        Commands::Resolve(args) => resolve_cmd::execute(args),
        Commands::Validate(args) => validate_cmd::execute(args),
        Commands::Show(args) => show_cmd::execute(args),
        Commands::Version => {
            println!(
                "portfolio version {}",
                option_env!("PORTFOLIO_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
