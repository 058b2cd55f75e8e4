//! Configuration inspection commands.

use crate::cli::common::{resolve_config, CliError, CliResult};
use clap::{Args, Subcommand};
use gridnav::config::Config;
use gridnav::StrategyKind;

/// Inspect configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Config action to run
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the config file location
    Path,
    /// Update generator defaults and write the config file
    Set {
        /// Default strategy
        #[arg(short, long, value_name = "NAME")]
        strategy: Option<StrategyKind>,

        /// Default grid width for general and qwerty
        #[arg(short, long, value_name = "N")]
        columns: Option<usize>,

        /// Default alphabet for the general strategy
        #[arg(short, long, value_name = "SYMBOLS")]
        alphabet: Option<String>,
    },
}

impl ConfigArgs {
    /// Execute the config command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show { json } => show(*json),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Set {
                strategy,
                columns,
                alphabet,
            } => set(*strategy, *columns, alphabet.as_deref()),
        }
    }
}

fn show(json: bool) -> CliResult<()> {
    let config =
        Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&config)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
        );
    } else {
        let generator = &config.generator;
        println!("Strategy: {}", generator.strategy);
        println!("Columns:  {}", generator.columns);
        println!("Alphabet: {}", generator.alphabet);
        if !Config::exists() {
            println!("(defaults, no config file)");
        }
    }

    Ok(())
}

fn set(
    strategy: Option<StrategyKind>,
    columns: Option<usize>,
    alphabet: Option<&str>,
) -> CliResult<()> {
    if strategy.is_none() && columns.is_none() && alphabet.is_none() {
        return Err(CliError::validation(
            "Nothing to set. Use --strategy, --columns or --alphabet",
        ));
    }

    let config = resolve_config(strategy, columns, alphabet)?;
    config
        .save()
        .map_err(|e| CliError::io(format!("Failed to save config: {e:#}")))?;

    let generator = &config.generator;
    println!(
        "Saved: strategy={} columns={} alphabet={}",
        generator.strategy, generator.columns, generator.alphabet
    );
    Ok(())
}
