//! `tagtree tokens` command implementation.

use clap::Args;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tokens command.
#[derive(Args)]
pub(crate) struct TokensArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl TokensArgs {
    /// Execute the tokens command.
    ///
    /// Prints one `offset kind value` line per token.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or input fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let parser = self.source.parser()?;
        let input = self.source.read_input()?;

        for spanned in parser.tokenize(&input) {
            let line = format!(
                "{} {} {:?}",
                spanned.offset,
                spanned.token.kind(),
                spanned.token.to_string()
            );
            output.result(&line)?;
        }

        Ok(())
    }
}
