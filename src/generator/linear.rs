//! Single-column keyboard: the cursor only moves up and down.

use super::axis::{push_moves, Axis, StepMode};
use super::CommandGenerator;
use crate::keymap::{KeyMapping, UnmappedCharacter};
use crate::models::Command;
use tracing::{debug, trace};

/// Spells upper-case Latin letters on a one-column list, `A` at the top.
#[derive(Debug, Clone)]
pub struct LinearGenerator {
    mapping: KeyMapping,
}

impl LinearGenerator {
    /// Creates a generator over `A`..`Z`.
    pub fn new() -> Self {
        Self {
            mapping: KeyMapping::uppercase(),
        }
    }
}

impl Default for LinearGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandGenerator for LinearGenerator {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn mapping(&self) -> &KeyMapping {
        &self.mapping
    }

    fn columns(&self) -> usize {
        1
    }

    fn generate(&self, input: &str) -> Result<Vec<Command>, UnmappedCharacter> {
        let mut commands = Vec::new();
        let mut index = 0_usize;

        for (position, character) in input.chars().enumerate() {
            let target = self.mapping.index_of(character).map_err(|err| {
                debug!(strategy = self.name(), %character, position, "unmapped character");
                err.at(position)
            })?;
            let diff = target as isize - index as isize;
            trace!(%character, target, diff, "linear run");

            push_moves(&mut commands, Axis::Vertical, diff, StepMode::Full);
            commands.push(Command::Select);
            index = target;
        }

        debug!(
            strategy = self.name(),
            chars = input.chars().count(),
            commands = commands.len(),
            "generated commands"
        );
        Ok(commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Command::{Down, Select, Up};

    #[test]
    fn test_single_letter_a() {
        assert_eq!(LinearGenerator::new().generate("A").unwrap(), vec![Select]);
    }

    #[test]
    fn test_forward_then_back() {
        let generator = LinearGenerator::new();
        assert_eq!(
            generator.generate("AC").unwrap(),
            vec![Select, Down, Down, Select]
        );
        assert_eq!(
            generator.generate("CA").unwrap(),
            vec![Down, Down, Select, Up, Up, Select]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(LinearGenerator::new().generate("").unwrap().is_empty());
    }

    #[test]
    fn test_repeated_letters_only_select() {
        let commands = LinearGenerator::new().generate("BBB").unwrap();
        assert_eq!(commands, vec![Down, Select, Select, Select]);
    }

    #[test]
    fn test_lowercase_fails_with_position() {
        let err = LinearGenerator::new().generate("ABc").unwrap_err();
        assert_eq!(err.character, 'c');
        assert_eq!(err.position, Some(2));
    }

    #[test]
    fn test_net_displacement_matches_last_target() {
        let commands = LinearGenerator::new().generate("ZEBRA").unwrap();
        let downs = commands.iter().filter(|c| **c == Down).count() as isize;
        let ups = commands.iter().filter(|c| **c == Up).count() as isize;
        assert_eq!(downs - ups, 0); // ends on 'A'

        let commands = LinearGenerator::new().generate("HELLO").unwrap();
        let downs = commands.iter().filter(|c| **c == Down).count() as isize;
        let ups = commands.iter().filter(|c| **c == Up).count() as isize;
        assert_eq!(downs - ups, 14); // 'O'
    }
}
