//! Spell command: replay an encoded command list and print what it selects.

use crate::cli::common::{resolve_config, CliError, CliResult};
use clap::Args;
use gridnav::models::decode_commands;
use gridnav::StrategyKind;
use tracing::debug;

/// Replay COMMANDS (e.g. "d,d,s") on a grid keyboard and print the selected text
#[derive(Debug, Clone, Args)]
pub struct SpellArgs {
    /// Comma-separated command codes: u, d, l, r, s
    #[arg(value_name = "COMMANDS")]
    pub commands: String,

    /// Strategy whose grid the commands run on
    #[arg(short, long, value_name = "NAME")]
    pub strategy: Option<StrategyKind>,

    /// Grid width for general and qwerty
    #[arg(short, long, value_name = "N")]
    pub columns: Option<usize>,

    /// Ordered alphabet for the general strategy
    #[arg(short, long, value_name = "SYMBOLS")]
    pub alphabet: Option<String>,
}

impl SpellArgs {
    /// Execute the spell command
    pub fn execute(&self) -> CliResult<()> {
        let commands =
            decode_commands(&self.commands).map_err(|e| CliError::validation(e.to_string()))?;
        let config = resolve_config(self.strategy, self.columns, self.alphabet.as_deref())?;

        let generator = config.generator.build();
        debug!(
            strategy = generator.name(),
            commands = commands.len(),
            "replaying commands"
        );

        let text = generator.spell(&commands).ok_or_else(|| {
            CliError::validation("Commands select a cell with no character on this grid")
        })?;
        println!("{text}");

        Ok(())
    }
}
