//! Shared CLI error types, exit codes, and config resolution.

use gridnav::config::Config;
use gridnav::StrategyKind;
use std::fmt;

/// Process exit codes returned by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input or settings were rejected (unmapped character, bad column count)
    Validation = 1,
    /// Config file could not be read, parsed, or written
    Io = 2,
}

impl ExitCode {
    /// Numeric process exit status.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command, carrying the exit code to use.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code category
    pub kind: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Input or settings were rejected.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// File system or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Reads the config file, applies command line overrides, then validates.
///
/// Validation runs once on the merged settings so a flag can repair a bad file value.
pub fn resolve_config(
    strategy: Option<StrategyKind>,
    columns: Option<usize>,
    alphabet: Option<&str>,
) -> CliResult<Config> {
    let mut config =
        Config::read().map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;

    let settings = &mut config.generator;
    if let Some(strategy) = strategy {
        settings.strategy = strategy;
    }
    if let Some(columns) = columns {
        settings.columns = columns;
    }
    if let Some(alphabet) = alphabet {
        settings.alphabet = alphabet.to_string();
    }

    config
        .validate()
        .map_err(|e| CliError::validation(e.to_string()))?;
    Ok(config)
}
