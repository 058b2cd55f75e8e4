//! Grid geometry and cursor replay.

use super::command::Command;
use serde::{Deserialize, Serialize};

/// A (column, row) cell on a grid keyboard, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPosition {
    /// Zero-based column
    pub column: usize,
    /// Zero-based row
    pub row: usize,
}

impl GridPosition {
    /// Creates a position from its column and row.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Decomposes a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is zero.
    #[must_use]
    pub const fn from_index(index: usize, columns: usize) -> Self {
        Self {
            column: index % columns,
            row: index / columns,
        }
    }

    /// Row-major cell index on a grid `columns` wide.
    #[must_use]
    pub const fn to_index(self, columns: usize) -> usize {
        self.row * columns + self.column
    }

    /// Signed (column, row) offset from `self` to `target`.
    #[must_use]
    pub const fn delta_to(self, target: Self) -> (isize, isize) {
        (
            target.column as isize - self.column as isize,
            target.row as isize - self.row as isize,
        )
    }
}

/// Replays commands on a grid, tracking the cells that get selected.
///
/// Moves past the top or left edge stay on the edge. There is no right or
/// bottom edge because the grid has no fixed row count.
#[derive(Debug, Clone)]
pub struct Cursor {
    columns: usize,
    position: GridPosition,
}

impl Cursor {
    /// Creates a cursor at the origin of a grid `columns` wide.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is zero.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        assert!(columns > 0, "grid must have at least one column");
        Self {
            columns,
            position: GridPosition::default(),
        }
    }

    /// Current cursor cell.
    #[must_use]
    pub const fn position(&self) -> GridPosition {
        self.position
    }

    /// Applies one command, returning the selected cell index on SELECT.
    pub fn apply(&mut self, command: Command) -> Option<usize> {
        let position = &mut self.position;
        match command {
            Command::Up => position.row = position.row.saturating_sub(1),
            Command::Down => position.row += 1,
            Command::Left => position.column = position.column.saturating_sub(1),
            Command::Right => position.column += 1,
            Command::Select => return Some(position.to_index(self.columns)),
        }
        None
    }

    /// Runs a whole sequence from the origin and returns the selected indices in order.
    #[must_use]
    pub fn replay(columns: usize, commands: &[Command]) -> Vec<usize> {
        let mut cursor = Self::new(columns);
        commands
            .iter()
            .filter_map(|&command| cursor.apply(command))
            .collect()
    }
}
