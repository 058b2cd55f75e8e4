//! GridNav Library
//!
//! This library turns text into the cursor commands that spell it on an
//! on-screen grid keyboard, as found on game consoles and smart TVs. It
//! provides the character tables, the generation strategies for each grid
//! shape, and the configuration used by the `gridnav` binary.

// Module declarations
pub mod config;
pub mod constants;
pub mod generator;
pub mod keymap;
pub mod models;

pub use generator::{CommandGenerator, StrategyKind};
pub use keymap::{KeyMapping, UnmappedCharacter};
pub use models::Command;
