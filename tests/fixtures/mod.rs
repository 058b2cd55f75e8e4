//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the gridnav binary
pub fn gridnav_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gridnav")
}

/// Creates an empty config directory that no test shares with another.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Writes `content` as `config.toml` inside `config_dir`.
pub fn write_config(config_dir: &Path, content: &str) {
    fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
}

/// Runs gridnav with `args` against an isolated config directory.
pub fn run_isolated(args: &[&str], config_dir: &Path) -> Output {
    Command::new(gridnav_bin())
        .env("GRIDNAV_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Stdout as a trimmed string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Stderr as a string.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
