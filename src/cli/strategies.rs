//! List the available generation strategies.

use crate::cli::common::{CliError, CliResult};
use clap::Args;
use gridnav::StrategyKind;
use serde::Serialize;

/// List available strategies
#[derive(Debug, Clone, Args)]
pub struct StrategiesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StrategyInfo {
    name: StrategyKind,
    description: &'static str,
    uses_columns: bool,
    uses_alphabet: bool,
}

impl StrategiesArgs {
    /// Execute the strategies command
    pub fn execute(&self) -> CliResult<()> {
        let strategies: Vec<StrategyInfo> = StrategyKind::ALL
            .into_iter()
            .map(|kind| StrategyInfo {
                name: kind,
                description: kind.description(),
                uses_columns: kind.uses_columns(),
                uses_alphabet: kind.uses_alphabet(),
            })
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&strategies)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for strategy in &strategies {
                println!("{:<16} {}", strategy.name.as_str(), strategy.description);
            }
        }

        Ok(())
    }
}
