//! Rotor and reflector positions.

use super::alphabet::{Letters, ALPHABET_LEN};
use super::error::EngineError;

/// A requested position: a numeric offset, or the letter that should sit at
/// the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Index(u8),
    Letter(char),
}

impl Position {
    /// Resolve against a wiring, yielding the numeric position 0..25.
    ///
    /// A letter resolves to its index in `letters` (not in the alphabet), so
    /// the component's current letter afterwards is that letter.
    pub fn resolve(self, letters: &Letters) -> Result<u8, EngineError> {
        match self {
            Position::Index(index) if (index as usize) < ALPHABET_LEN => Ok(index),
            Position::Index(index) => Err(EngineError::InvalidPosition(format!(
                "Position {} is invalid",
                index
            ))),
            Position::Letter(letter) => letters
                .index_of(letter.to_ascii_uppercase())
                .map(|index| index as u8)
                .ok_or_else(|| {
                    EngineError::InvalidPosition(format!("{} is not a character on the rotor", letter))
                }),
        }
    }
}

impl From<u8> for Position {
    fn from(index: u8) -> Self {
        Position::Index(index)
    }
}

impl From<char> for Position {
    fn from(letter: char) -> Self {
        Position::Letter(letter)
    }
}
