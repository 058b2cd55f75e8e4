//! Generate command: text in, navigation commands out.

use crate::cli::common::{resolve_config, CliError, CliResult};
use clap::Args;
use gridnav::models::{encode_commands, submission_line, Command};
use gridnav::StrategyKind;
use serde::Serialize;
use tracing::debug;

/// Generate the commands that spell TEXT on a grid keyboard
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Text to spell
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Strategy: linear, two-by-thirteen, six-by-five, general, qwerty
    #[arg(short, long, value_name = "NAME")]
    pub strategy: Option<StrategyKind>,

    /// Grid width for general and qwerty
    #[arg(short, long, value_name = "N")]
    pub columns: Option<usize>,

    /// Ordered alphabet for the general strategy
    #[arg(short, long, value_name = "SYMBOLS")]
    pub alphabet: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Replay the commands and fail unless they spell TEXT
    #[arg(long)]
    pub verify: bool,
}

#[derive(Debug, Serialize)]
struct GenerateResult<'a> {
    input: &'a str,
    strategy: StrategyKind,
    columns: usize,
    commands: &'a [Command],
    encoded: String,
    count: usize,
    moves: usize,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = resolve_config(self.strategy, self.columns, self.alphabet.as_deref())?;

        let generator = config.generator.build();
        debug!(
            strategy = generator.name(),
            columns = generator.columns(),
            "generating commands"
        );

        let commands = generator
            .generate(&self.text)
            .map_err(|e| CliError::validation(e.to_string()))?;

        if self.verify {
            let spelled = generator.spell(&commands);
            debug!(?spelled, "replayed commands");
            if spelled.as_deref() != Some(self.text.as_str()) {
                return Err(CliError::validation(format!(
                    "Verification failed: commands spell {:?}, expected {:?}",
                    spelled.unwrap_or_default(),
                    self.text
                )));
            }
        }

        if self.json {
            let result = GenerateResult {
                input: &self.text,
                strategy: config.generator.strategy,
                columns: generator.columns(),
                commands: &commands,
                encoded: encode_commands(&commands),
                count: commands.len(),
                moves: commands.iter().filter(|command| command.is_move()).count(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{}", submission_line(&self.text, &commands));
        }

        Ok(())
    }
}
