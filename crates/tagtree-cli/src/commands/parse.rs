//! `tagtree parse` command implementation.

use clap::Args;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the parse command.
#[derive(Args)]
pub(crate) struct ParseArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,
}

impl ParseArgs {
    /// Execute the parse command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, input, or parsing fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let parser = self.source.parser()?;
        let input = self.source.read_input()?;

        let forest = parser.parse(&input)?;
        tracing::info!(nodes = forest.len(), "Parsed markup");

        let json = if self.compact {
            serde_json::to_string(&forest)?
        } else {
            serde_json::to_string_pretty(&forest)?
        };
        output.result(&json)?;

        Ok(())
    }
}
