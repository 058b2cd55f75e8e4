//! GridNav - spell text on on-screen grid keyboards
//!
//! Prints the UP/DOWN/LEFT/RIGHT/SELECT sequence that drives a console or TV
//! keyboard cursor through the characters of a string.

mod cli;

use clap::{Parser, Subcommand};
use cli::{ConfigArgs, ExitCode, GenerateArgs, SpellArgs, StrategiesArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// GridNav - spell text on on-screen grid keyboards
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate navigation commands for a string
    Generate(GenerateArgs),
    /// Replay encoded commands and print the text they select
    Spell(SpellArgs),
    /// List available strategies
    Strategies(StrategiesArgs),
    /// Inspect configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Spell(args) => args.execute(),
        Commands::Strategies(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    match result {
        Ok(()) => std::process::exit(ExitCode::Success.code()),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
