//! Two-coordinate keyboards: one parameterized algorithm for every grid shape.
//!
//! Each character is placed at `(index % columns, index / columns)`. The run
//! for a character is all horizontal moves, then all vertical moves, then one
//! SELECT; the two axes are never interleaved.

use super::axis::{push_moves, Axis, StepMode};
use super::CommandGenerator;
use crate::keymap::{KeyMapping, UnmappedCharacter};
use crate::models::{Command, GridPosition};
use tracing::{debug, trace};

/// Column count of the two-row alphabet keyboard.
pub const TWO_BY_THIRTEEN_COLUMNS: usize = 13;

/// Column count of the six-row alphabet keyboard.
pub const SIX_BY_FIVE_COLUMNS: usize = 5;

/// Grid keyboard with a fixed column count and character table.
#[derive(Debug, Clone)]
pub struct GridGenerator {
    name: &'static str,
    columns: usize,
    mapping: KeyMapping,
    vertical_step: StepMode,
}

impl GridGenerator {
    /// Creates a general grid `columns` wide over a caller-supplied mapping.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is zero.
    pub fn new(columns: usize, mapping: KeyMapping) -> Self {
        assert!(columns > 0, "grid must have at least one column");
        Self {
            name: "general",
            columns,
            mapping,
            vertical_step: StepMode::Full,
        }
    }

    /// `A`..`Z` on two rows of 13. Row changes are a single UP or DOWN.
    pub fn two_by_thirteen() -> Self {
        Self {
            name: "two-by-thirteen",
            vertical_step: StepMode::Single,
            ..Self::new(TWO_BY_THIRTEEN_COLUMNS, KeyMapping::uppercase())
        }
    }

    /// `A`..`Z` on rows of 5.
    pub fn six_by_five() -> Self {
        Self {
            name: "six-by-five",
            ..Self::new(SIX_BY_FIVE_COLUMNS, KeyMapping::uppercase())
        }
    }

    /// Overrides the name reported by [`CommandGenerator::name`] and in logs.
    #[must_use]
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Overrides how vertical deltas are expanded.
    #[must_use]
    pub fn with_vertical_step(mut self, step: StepMode) -> Self {
        self.vertical_step = step;
        self
    }

    /// Vertical step mode in effect.
    pub fn vertical_step(&self) -> StepMode {
        self.vertical_step
    }
}

impl CommandGenerator for GridGenerator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn mapping(&self) -> &KeyMapping {
        &self.mapping
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn generate(&self, input: &str) -> Result<Vec<Command>, UnmappedCharacter> {
        let mut commands = Vec::new();
        let mut cursor = GridPosition::default();

        for (position, character) in input.chars().enumerate() {
            let index = self.mapping.index_of(character).map_err(|err| {
                debug!(strategy = self.name, %character, position, "unmapped character");
                err.at(position)
            })?;
            let target = GridPosition::from_index(index, self.columns);
            let (x_diff, y_diff) = cursor.delta_to(target);
            trace!(%character, index, x_diff, y_diff, "grid run");

            push_moves(&mut commands, Axis::Horizontal, x_diff, StepMode::Full);
            push_moves(&mut commands, Axis::Vertical, y_diff, self.vertical_step);
            commands.push(Command::Select);
            cursor = target;
        }

        debug!(
            strategy = self.name,
            columns = self.columns,
            chars = input.chars().count(),
            commands = commands.len(),
            "generated commands"
        );
        Ok(commands)
    }
}
