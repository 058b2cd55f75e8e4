//! Command generation strategies.
//!
//! Every strategy implements [`CommandGenerator`]: given a string, produce the
//! ordered UP/DOWN/LEFT/RIGHT/SELECT commands that walk a grid cursor from the
//! top-left cell to each character in turn. Strategies differ only in grid
//! width, character table, and how vertical distance is expanded.
//!
//! Generation is a pure function of the input and the strategy's fixed
//! configuration. Cursor state lives on the stack of each call, so a single
//! generator can be shared freely between threads.

pub mod axis;
pub mod grid;
pub mod linear;
pub mod qwerty;

pub use axis::StepMode;
pub use grid::GridGenerator;
pub use linear::LinearGenerator;
pub use qwerty::QwertyGenerator;

use crate::keymap::{KeyMapping, UnmappedCharacter};
use crate::models::{Command, Cursor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maps an input string to grid navigation commands.
pub trait CommandGenerator: fmt::Debug + Send + Sync {
    /// Short identifier used in logs and listings.
    fn name(&self) -> &'static str;

    /// Character table this strategy places characters with.
    fn mapping(&self) -> &KeyMapping;

    /// Grid width in cells.
    fn columns(&self) -> usize;

    /// Generates the full command sequence for `input`.
    ///
    /// Fails on the first character without a cell; no partial list is returned.
    fn generate(&self, input: &str) -> Result<Vec<Command>, UnmappedCharacter>;

    /// Replays `commands` on this strategy's grid and reads back the selected characters.
    ///
    /// Returns `None` if a selection lands on an empty cell.
    fn spell(&self, commands: &[Command]) -> Option<String> {
        Cursor::replay(self.columns(), commands)
            .into_iter()
            .map(|index| self.mapping().character_at(index))
            .collect()
    }
}

/// Named strategy selectable from configuration or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// One column of `A`..`Z`
    Linear,
    /// `A`..`Z` on 13 columns, single-step row changes
    TwoByThirteen,
    /// `A`..`Z` on 5 columns
    SixByFive,
    /// Caller-supplied alphabet and column count
    General,
    /// QWERTY-ordered keyboard on a configurable column count
    #[default]
    Qwerty,
}

impl StrategyKind {
    /// All strategies in listing order.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Linear,
        StrategyKind::TwoByThirteen,
        StrategyKind::SixByFive,
        StrategyKind::General,
        StrategyKind::Qwerty,
    ];

    /// Kebab-case identifier, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::TwoByThirteen => "two-by-thirteen",
            Self::SixByFive => "six-by-five",
            Self::General => "general",
            Self::Qwerty => "qwerty",
        }
    }

    /// One-line description for listings.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Linear => "Single column A-Z, moves with UP/DOWN only",
            Self::TwoByThirteen => "A-Z on 13 columns, one UP/DOWN per row change",
            Self::SixByFive => "A-Z on 5 columns",
            Self::General => "Custom alphabet on N columns",
            Self::Qwerty => "QWERTYUIOPASDFGHJKL;ZXCVBNM<>? on N columns",
        }
    }

    /// Returns true if the strategy reads the configured column count.
    #[must_use]
    pub const fn uses_columns(self) -> bool {
        matches!(self, Self::General | Self::Qwerty)
    }

    /// Returns true if the strategy reads the configured alphabet.
    #[must_use]
    pub const fn uses_alphabet(self) -> bool {
        matches!(self, Self::General)
    }

    /// Builds the generator. `columns` and `alphabet` are ignored by fixed layouts.
    ///
    /// # Panics
    ///
    /// Panics if the strategy uses `columns` and it is zero.
    pub fn build(self, columns: usize, alphabet: &str) -> Box<dyn CommandGenerator> {
        match self {
            Self::Linear => Box::new(LinearGenerator::new()),
            Self::TwoByThirteen => Box::new(GridGenerator::two_by_thirteen()),
            Self::SixByFive => Box::new(GridGenerator::six_by_five()),
            Self::General => Box::new(GridGenerator::new(
                columns,
                KeyMapping::from_alphabet(alphabet),
            )),
            Self::Qwerty => Box::new(QwertyGenerator::new(columns)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
                format!("Unknown strategy '{}'. Expected one of: {}", s, known.join(", "))
            })
    }
}
