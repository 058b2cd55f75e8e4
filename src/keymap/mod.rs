//! Character to grid cell lookup.
//!
//! A [`KeyMapping`] assigns each supported symbol a row-major cell index on a
//! grid keyboard. Lookups for symbols outside the table fail with
//! [`UnmappedCharacter`] instead of silently landing on cell zero.

use crate::constants::{QWERTY_ALPHABET, UPPERCASE_ALPHABET};
use std::collections::HashMap;
use std::fmt;

/// Error raised when a character has no cell on the active grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnmappedCharacter {
    /// The character that could not be placed
    pub character: char,
    /// Zero-based character position in the input, when known
    pub position: Option<usize>,
}

impl UnmappedCharacter {
    /// Creates an error for `character` with no input position.
    #[must_use]
    pub const fn new(character: char) -> Self {
        Self {
            character,
            position: None,
        }
    }

    /// Sets the input position context.
    #[must_use]
    pub const fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for UnmappedCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(
                f,
                "Unmapped character {:?} at position {}",
                self.character, position
            ),
            None => write!(f, "Unmapped character {:?}", self.character),
        }
    }
}

impl std::error::Error for UnmappedCharacter {}

/// Immutable character to cell index table.
///
/// # Preconditions
///
/// Tables built with [`KeyMapping::from_pairs`] are taken as-is: the caller is
/// responsible for covering every character it intends to generate commands for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyMapping {
    indices: HashMap<char, usize>,
}

impl KeyMapping {
    /// Builds a mapping where each symbol's index is its position in `alphabet`.
    ///
    /// A symbol that appears more than once keeps its last position.
    pub fn from_alphabet(alphabet: &str) -> Self {
        let indices = alphabet
            .chars()
            .enumerate()
            .map(|(index, character)| (character, index))
            .collect();

        Self { indices }
    }

    /// Builds a mapping from explicit `(character, index)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, usize)>) -> Self {
        Self {
            indices: pairs.into_iter().collect(),
        }
    }

    /// `A` = 0 through `Z` = 25.
    pub fn uppercase() -> Self {
        Self::from_alphabet(UPPERCASE_ALPHABET)
    }

    /// The QWERTY-like keyboard order, `Q` = 0 through `?` = 29.
    pub fn qwerty() -> Self {
        Self::from_alphabet(QWERTY_ALPHABET)
    }

    /// Returns the cell index for `character`.
    pub fn index_of(&self, character: char) -> Result<usize, UnmappedCharacter> {
        self.indices
            .get(&character)
            .copied()
            .ok_or_else(|| UnmappedCharacter::new(character))
    }

    /// Reverse lookup: the character placed on `index`, if any.
    ///
    /// When several characters share an index the smallest one is returned so
    /// the answer does not depend on hash order.
    #[must_use]
    pub fn character_at(&self, index: usize) -> Option<char> {
        self.indices
            .iter()
            .filter(|&(_, &cell)| cell == index)
            .map(|(&character, _)| character)
            .min()
    }

    /// Returns true if `character` has a cell.
    #[must_use]
    pub fn contains(&self, character: char) -> bool {
        self.indices.contains_key(&character)
    }

    /// Number of mapped characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if nothing is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
