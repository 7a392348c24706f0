//! Fixed substitution ring that turns the signal back through the rotors.

use super::alphabet::{alphabet_index, Letters};
use super::catalog::{CatalogKind, ReflectorKind, ReflectorSpec};
use super::error::EngineError;
use super::position::Position;
use super::wheel::Wheel;
use std::fmt;

/// A reflector. Its position is a static offset: it never steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reflector {
    letters: Letters,
    position: u8,
}

impl Reflector {
    /// Build a reflector from a wiring and a start position.
    ///
    /// Custom wirings must be a permutation of A..Z, exactly as for rotors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rotor_machine::core::{Reflector, ReflectorKind, Wheel};
    ///
    /// let reflector = Reflector::new(ReflectorKind::A, 0u8).unwrap();
    /// assert_eq!(reflector.reflect('A'), 'E');
    /// assert_eq!(reflector.kind_name(), "REFLECTOR_A");
    /// ```
    pub fn new(
        spec: impl Into<ReflectorSpec>,
        start: impl Into<Position>,
    ) -> Result<Self, EngineError> {
        let spec = spec.into();
        let letters = spec.letters().map_err(|reason| {
            EngineError::InvalidReflectorKind(format!("{} ({})", spec.label(), reason))
        })?;
        let position = start.into().resolve(&letters)?;

        Ok(Self { letters, position })
    }

    /// Catalog reflector at position 0.
    pub fn from_kind(kind: ReflectorKind) -> Self {
        Self {
            letters: Letters::catalog(kind.letters()),
            position: 0,
        }
    }

    /// Same semantics as [`Rotor::set_position`](super::Rotor::set_position).
    pub fn set_position(&mut self, position: impl Into<Position>) -> Result<(), EngineError> {
        self.position = self.resolve_position(position.into())?;
        Ok(())
    }

    /// Reflect a single symbol. Non-letters pass through.
    pub fn reflect(&self, symbol: char) -> char {
        match alphabet_index(symbol) {
            Some(index) => self.letters.at(index + self.position as usize),
            None => symbol,
        }
    }

    /// Reflect every character of `text`, uppercasing first.
    pub fn reflect_text(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.reflect(c.to_ascii_uppercase()))
            .collect()
    }
}

impl Wheel for Reflector {
    type Kind = ReflectorKind;

    fn letters(&self) -> &Letters {
        &self.letters
    }

    fn position(&self) -> u8 {
        self.position
    }
}

impl fmt::Display for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a reflector of type '{}'", self.kind_name())
    }
}
