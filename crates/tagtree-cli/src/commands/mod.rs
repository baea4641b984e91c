//! CLI command implementations.

pub(crate) mod parse;
pub(crate) mod tokens;

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tagtree::Parser;
use tagtree_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use parse::ParseArgs;
pub(crate) use tokens::TokensArgs;

/// Input and configuration arguments shared by all commands.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Markup file to read (default: stdin).
    file: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover tagtree.toml).
    #[arg(short, long, env = "TAGTREE_CONFIG")]
    config: Option<PathBuf>,

    /// Additional tag name to recognize (repeatable).
    #[arg(short, long = "tag", value_name = "NAME")]
    tags: Vec<String>,

    /// Keep quotes around attribute values.
    #[arg(long)]
    keep_quotes: bool,

    /// Drop whitespace-only text between tags.
    #[arg(long)]
    skip_whitespace: bool,

    /// Maximum nesting depth (default: limits.max_depth from config, 1000).
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,
}

impl SourceArgs {
    /// Build a parser from the configuration and CLI overrides.
    pub(crate) fn parser(&self) -> Result<Parser, CliError> {
        let cli_settings = CliSettings {
            extra_tags: self.tags.clone(),
            strip_quotes: self.keep_quotes.then_some(false),
            skip_whitespace: self.skip_whitespace.then_some(true),
            max_depth: self.max_depth,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let options = config.parser_options();
        tracing::debug!(
            config = ?config.config_path,
            tags = ?options.vocabulary,
            strip_quotes = options.strip_quotes,
            skip_whitespace = options.skip_whitespace_text,
            max_depth = ?options.max_depth,
            "Parser configured"
        );

        Ok(Parser::new(options))
    }

    /// Read the markup from the file argument or stdin.
    pub(crate) fn read_input(&self) -> Result<String, CliError> {
        if let Some(path) = &self.file {
            tracing::debug!(path = %path.display(), "Reading markup file");
            return Ok(std::fs::read_to_string(path)?);
        }

        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    }
}
