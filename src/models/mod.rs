//! Data models for navigation commands and grid geometry.
//!
//! Models are independent of any particular generation strategy.

pub mod command;
pub mod grid;

// Re-export all model types
pub use command::{decode_commands, encode_commands, submission_line, Command};
pub use grid::{Cursor, GridPosition};
