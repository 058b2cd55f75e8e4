//! Navigation commands understood by an on-screen grid keyboard.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cursor instruction.
///
/// The serialized form uses the lowercase name (`"up"`, `"select"`), while
/// [`Command::code`] gives the one-letter code used in submission lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Move the cursor one row up
    Up,
    /// Move the cursor one row down
    Down,
    /// Move the cursor one column left
    Left,
    /// Move the cursor one column right
    Right,
    /// Confirm the cell under the cursor
    Select,
}

impl Command {
    /// All commands in declaration order.
    pub const ALL: [Command; 5] = [
        Command::Up,
        Command::Down,
        Command::Left,
        Command::Right,
        Command::Select,
    ];

    /// Returns the single-letter lowercase code (`u`, `d`, `l`, `r`, `s`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Up => 'u',
            Self::Down => 'd',
            Self::Left => 'l',
            Self::Right => 'r',
            Self::Select => 's',
        }
    }

    /// Parses a single-letter code back into a command.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'u' => Some(Self::Up),
            'd' => Some(Self::Down),
            'l' => Some(Self::Left),
            'r' => Some(Self::Right),
            's' => Some(Self::Select),
            _ => None,
        }
    }

    /// Returns true for the four cursor movements.
    #[must_use]
    pub const fn is_move(self) -> bool {
        !matches!(self, Self::Select)
    }

    /// Returns true for LEFT and RIGHT.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns true for UP and DOWN.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Joins command codes with commas, e.g. `"d,d,s"`.
#[must_use]
pub fn encode_commands(commands: &[Command]) -> String {
    commands
        .iter()
        .map(|command| command.code().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses a comma-separated code list produced by [`encode_commands`].
///
/// Whitespace around codes is ignored. An empty string yields an empty list.
pub fn decode_commands(encoded: &str) -> Result<Vec<Command>> {
    if encoded.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut commands = Vec::new();
    for token in encoded.split(',') {
        let token = token.trim();
        let mut chars = token.chars();
        let command = match (chars.next(), chars.next()) {
            (Some(code), None) => Command::from_code(code),
            _ => None,
        };
        match command {
            Some(command) => commands.push(command),
            None => bail!("Unknown command code '{}'", token),
        }
    }

    Ok(commands)
}

/// Formats the line a host submits for validation: `INPUT:c1,c2,...`.
#[must_use]
pub fn submission_line(input: &str, commands: &[Command]) -> String {
    format!("{}:{}", input, encode_commands(commands))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_lowercase_initials() {
        for command in Command::ALL {
            let name = format!("{:?}", command).to_lowercase();
            assert_eq!(name.chars().next(), Some(command.code()));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(Command::from_code('s'), Some(Command::Select));
        assert_eq!(Command::from_code('x'), None);
        assert_eq!(Command::from_code('U'), None);
    }

    #[test]
    fn test_axis_classification() {
        assert!(Command::Left.is_horizontal());
        assert!(Command::Right.is_horizontal());
        assert!(Command::Up.is_vertical());
        assert!(!Command::Down.is_horizontal());
        assert!(!Command::Select.is_move());
    }

    #[test]
    fn test_encode_commands() {
        let commands = [Command::Down, Command::Down, Command::Select];
        assert_eq!(encode_commands(&commands), "d,d,s");
        assert_eq!(encode_commands(&[]), "");
    }

    #[test]
    fn test_decode_commands_trims_whitespace() {
        let commands = decode_commands("r, r ,d,s").unwrap();
        assert_eq!(
            commands,
            vec![Command::Right, Command::Right, Command::Down, Command::Select]
        );
        assert!(decode_commands("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_commands_rejects_bad_token() {
        let err = decode_commands("d,dd,s").unwrap_err();
        assert!(err.to_string().contains("'dd'"));
        assert!(decode_commands("d,,s").is_err());
    }

    #[test]
    fn test_submission_line() {
        let commands = [Command::Select, Command::Down, Command::Select];
        assert_eq!(submission_line("AB", &commands), "AB:s,d,s");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&[Command::Up, Command::Select]).unwrap();
        assert_eq!(json, r#"["up","select"]"#);
        let parsed: Vec<Command> = serde_json::from_str(r#"["left","right"]"#).unwrap();
        assert_eq!(parsed, vec![Command::Left, Command::Right]);
    }
}
