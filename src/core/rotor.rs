//! Steppable substitution rotor.
//!
//! A rotor maps a symbol forward (alphabet → wiring) on the way in and
//! backward (wiring → alphabet) on the way out of the rotor stack. Both
//! directions are offset by the current position, so `reverse(forward(c))`
//! is `c` at every position. After each character the machine steps its
//! rotors like an odometer; [`Rotor::wrapped`] is the carry signal.

use super::alphabet::{alphabet_index, alphabet_letter, Letters, ALPHABET_LEN};
use super::catalog::{CatalogKind, RotorKind, RotorSpec};
use super::error::EngineError;
use super::position::Position;
use super::wheel::Wheel;
use std::fmt;

/// Smallest and largest permitted step size.
pub const MIN_STEP_SIZE: u8 = 1;
pub const MAX_STEP_SIZE: u8 = 25;

/// A substitution rotor with a mutable position and step size.
#[derive(Clone, Debug)]
pub struct Rotor {
    letters: Letters,
    position: u8,
    step_size: u8,
    wrapped: bool,
}

impl Rotor {
    /// Build a rotor from a wiring, a start position and a step size.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidRotorKind`] if the wiring is not a permutation of A..Z
    /// - [`EngineError::InvalidPosition`] if `start` is out of range or not on the rotor
    /// - [`EngineError::InvalidStepSize`] if `step_size` is outside 1..25
    ///
    /// # Example
    ///
    /// ```rust
    /// use rotor_machine::core::{Rotor, RotorKind, Wheel};
    ///
    /// let rotor = Rotor::new(RotorKind::I, 20u8, 1).unwrap();
    /// assert_eq!(rotor.forward('C'), 'L');
    /// assert_eq!(rotor.reverse('L'), 'C');
    ///
    /// let custom = Rotor::new("QWERTYUIOPLKJHGFDSAZXCVBNM", 'Q', 2).unwrap();
    /// assert_eq!(custom.kind_name(), "CUSTOM");
    /// assert_eq!(custom.position(), 0);
    /// ```
    pub fn new(
        spec: impl Into<RotorSpec>,
        start: impl Into<Position>,
        step_size: u8,
    ) -> Result<Self, EngineError> {
        let spec = spec.into();
        let letters = spec.letters().map_err(|reason| {
            EngineError::InvalidRotorKind(format!("{} ({})", spec.label(), reason))
        })?;
        let position = start.into().resolve(&letters)?;
        validate_step_size(step_size)?;

        Ok(Self {
            letters,
            position,
            step_size,
            wrapped: false,
        })
    }

    /// Catalog rotor at position 0 with step size 1.
    pub fn from_kind(kind: RotorKind) -> Self {
        Self {
            letters: Letters::catalog(kind.letters()),
            position: 0,
            step_size: MIN_STEP_SIZE,
            wrapped: false,
        }
    }

    /// Catalog rotor turned so that `letter` shows, with step size 1.
    ///
    /// Catalog wirings hold every letter; anything else leaves the rotor at 0.
    pub(crate) fn showing(kind: RotorKind, letter: char) -> Self {
        let mut rotor = Self::from_kind(kind);
        let upper = letter.to_ascii_uppercase();
        rotor.position = rotor.letters.index_of(upper).map_or(0, |index| index as u8);
        rotor
    }

    /// Move to a numeric position or to the position showing a given letter.
    ///
    /// The rotor is unchanged if the position is rejected.
    pub fn set_position(&mut self, position: impl Into<Position>) -> Result<(), EngineError> {
        self.position = self.resolve_position(position.into())?;
        Ok(())
    }

    pub fn step_size(&self) -> u8 {
        self.step_size
    }

    pub fn set_step_size(&mut self, step_size: u8) -> Result<(), EngineError> {
        validate_step_size(step_size)?;
        self.step_size = step_size;
        Ok(())
    }

    /// Whether the last step carried past the end of the ring.
    pub fn wrapped(&self) -> bool {
        self.wrapped
    }

    /// Substitute on the way into the rotor stack. Non-letters pass through.
    pub fn forward(&self, symbol: char) -> char {
        match alphabet_index(symbol) {
            Some(index) => self.letters.at(index + self.position as usize),
            None => symbol,
        }
    }

    /// Substitute on the way back out of the rotor stack. Non-letters pass through.
    pub fn reverse(&self, symbol: char) -> char {
        if alphabet_index(symbol).is_none() {
            return symbol;
        }
        match self.letters.index_of(symbol) {
            Some(index) => alphabet_letter(index + ALPHABET_LEN - self.position as usize),
            None => symbol,
        }
    }

    /// Advance by the rotor's step size.
    pub fn step(&mut self) -> bool {
        self.advance(self.step_size)
    }

    /// Advance by `amount` positions and record whether the ring wrapped.
    ///
    /// Returns the new value of [`Rotor::wrapped`]. Like the step size,
    /// `amount` must lie in 1..25; the rotor is unchanged otherwise.
    pub fn step_by(&mut self, amount: u8) -> Result<bool, EngineError> {
        validate_step_size(amount)?;
        Ok(self.advance(amount))
    }

    fn advance(&mut self, amount: u8) -> bool {
        let old = self.position;
        self.position = ((old as usize + amount as usize) % ALPHABET_LEN) as u8;
        self.wrapped = old > self.position;
        self.wrapped
    }
}

fn validate_step_size(step_size: u8) -> Result<(), EngineError> {
    if (MIN_STEP_SIZE..=MAX_STEP_SIZE).contains(&step_size) {
        Ok(())
    } else {
        Err(EngineError::InvalidStepSize(step_size))
    }
}

impl Wheel for Rotor {
    type Kind = RotorKind;

    fn letters(&self) -> &Letters {
        &self.letters
    }

    fn position(&self) -> u8 {
        self.position
    }
}

impl PartialEq for Rotor {
    fn eq(&self, other: &Self) -> bool {
        self.letters == other.letters
            && self.position == other.position
            && self.step_size == other.step_size
    }
}

impl Eq for Rotor {}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a rotor of type '{}', position={} ({}), step_size={}",
            self.kind_name(),
            self.position,
            self.current_letter(),
            self.step_size
        )
    }
}
