//! tagtree CLI - markup to node forest.
//!
//! Provides commands for:
//! - `parse`: Parse markup and print the node forest as JSON
//! - `tokens`: Print the token stream of the markup

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ParseArgs, TokensArgs};
use output::Output;

/// tagtree - parse vocabulary-driven markup into a node tree.
#[derive(Parser)]
#[command(name = "tagtree", version, about)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse markup and print the node forest as JSON.
    Parse(ParseArgs),
    /// Print the token stream of the markup.
    Tokens(TokensArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Parse(args) => args.execute(&output),
        Commands::Tokens(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
