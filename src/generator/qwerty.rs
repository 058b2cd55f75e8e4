//! QWERTY-ordered keyboard on a caller-chosen grid width.

use super::grid::GridGenerator;
use super::CommandGenerator;
use crate::keymap::{KeyMapping, UnmappedCharacter};
use crate::models::Command;

/// Keyboard whose cells follow [`QWERTY_ALPHABET`](crate::constants::QWERTY_ALPHABET).
///
/// All generation is delegated to a general [`GridGenerator`] built over the
/// fixed table, so the two always agree.
#[derive(Debug, Clone)]
pub struct QwertyGenerator {
    inner: GridGenerator,
}

impl QwertyGenerator {
    /// Creates a QWERTY keyboard `columns` wide.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is zero.
    pub fn new(columns: usize) -> Self {
        Self {
            inner: GridGenerator::new(columns, KeyMapping::qwerty()).with_name("qwerty"),
        }
    }
}

impl CommandGenerator for QwertyGenerator {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn mapping(&self) -> &KeyMapping {
        self.inner.mapping()
    }

    fn columns(&self) -> usize {
        self.inner.columns()
    }

    fn generate(&self, input: &str) -> Result<Vec<Command>, UnmappedCharacter> {
        self.inner.generate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::QWERTY_ALPHABET;
    use Command::{Down, Left, Right, Select, Up};

    #[test]
    fn test_zebra_on_ten_columns() {
        // Z=20 (0,2) E=2 (2,0) B=24 (4,2) R=3 (3,0) A=10 (0,1)
        let commands = QwertyGenerator::new(10).generate("ZEBRA").unwrap();
        assert_eq!(
            commands,
            vec![
                Down, Down, Select, //
                Right, Right, Up, Up, Select, //
                Right, Right, Down, Down, Select, //
                Left, Up, Up, Select, //
                Left, Left, Left, Down, Select,
            ]
        );
    }

    #[test]
    fn test_matches_general_generator() {
        let qwerty = QwertyGenerator::new(7);
        let general = GridGenerator::new(7, KeyMapping::from_alphabet(QWERTY_ALPHABET));
        for input in ["HELLO", "QWERTY", "<?>", "A;Z"] {
            assert_eq!(qwerty.generate(input), general.generate(input));
        }
    }

    #[test]
    fn test_inner_generator_reports_qwerty() {
        let generator = QwertyGenerator::new(10);
        assert_eq!(generator.name(), "qwerty");
        assert_eq!(generator.inner.name(), "qwerty");
    }

    #[test]
    fn test_punctuation_is_mapped() {
        // '?' = 29 -> (9, 2)
        let commands = QwertyGenerator::new(10).generate("?").unwrap();
        assert_eq!(commands.iter().filter(|c| **c == Right).count(), 9);
        assert_eq!(commands.iter().filter(|c| **c == Down).count(), 2);
        assert_eq!(commands.last(), Some(&Select));
    }

    #[test]
    fn test_space_is_unmapped() {
        let err = QwertyGenerator::new(10).generate("HI THERE").unwrap_err();
        assert_eq!(err.character, ' ');
        assert_eq!(err.position, Some(2));
    }
}
