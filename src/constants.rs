//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed keyboard alphabets.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "GridNav";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "gridnav";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "GRIDNAV_CONFIG_DIR";

/// Upper-case Latin alphabet used by the linear, 13-column and 5-column grids.
pub const UPPERCASE_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// QWERTY-like symbol order used by the keyboard-layout grid, row by row.
pub const QWERTY_ALPHABET: &str = "QWERTYUIOPASDFGHJKL;ZXCVBNM<>?";

/// Column count used when neither config nor command line specify one.
pub const DEFAULT_COLUMNS: usize = 10;
