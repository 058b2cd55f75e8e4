//! CLI command handlers for GridNav.
//!
//! Thin, scriptable wrappers over the library. Output goes to stdout, logs to stderr.

pub mod common;
pub mod config;
pub mod generate;
pub mod spell;
pub mod strategies;

// Re-export types used by main.rs
pub use common::ExitCode;
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use spell::SpellArgs;
pub use strategies::StrategiesArgs;
