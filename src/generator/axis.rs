//! Per-axis delta to command expansion shared by every strategy.

use crate::models::Command;
use serde::{Deserialize, Serialize};

/// Direction pair a delta is expanded along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Columns: RIGHT for positive deltas, LEFT for negative
    Horizontal,
    /// Rows: DOWN for positive deltas, UP for negative
    Vertical,
}

impl Axis {
    const fn forward(self) -> Command {
        match self {
            Self::Horizontal => Command::Right,
            Self::Vertical => Command::Down,
        }
    }

    const fn backward(self) -> Command {
        match self {
            Self::Horizontal => Command::Left,
            Self::Vertical => Command::Up,
        }
    }
}

/// How many commands a non-zero delta expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepMode {
    /// One command per cell travelled
    #[default]
    Full,
    /// A single command whatever the distance (13-column keyboard rows)
    Single,
}

/// Appends the moves for `delta` cells along `axis`. Zero appends nothing.
pub fn push_moves(commands: &mut Vec<Command>, axis: Axis, delta: isize, step: StepMode) {
    let command = match delta.signum() {
        1 => axis.forward(),
        -1 => axis.backward(),
        _ => return,
    };
    let count = match step {
        StepMode::Full => delta.unsigned_abs(),
        StepMode::Single => 1,
    };
    commands.extend(std::iter::repeat(command).take(count));
}
