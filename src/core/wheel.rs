//! Behaviour shared by rotors and reflectors.

use super::alphabet::Letters;
use super::catalog::{kind_name, CatalogKind};
use super::error::EngineError;
use super::position::Position;

/// A ring of 26 contacts with a fixed wiring and a position offset.
///
/// Implementors supply the wiring and position; catalog lookup, current
/// letter and position resolution come for free.
///
/// # Example
///
/// ```rust
/// use rotor_machine::core::{Rotor, RotorKind, Wheel};
///
/// let rotor = Rotor::new(RotorKind::I, 'A', 1).unwrap();
/// assert_eq!(rotor.kind_name(), "ROTOR_I");
/// assert_eq!(rotor.position(), 9);
/// assert_eq!(rotor.current_letter(), 'A');
/// ```
pub trait Wheel {
    /// Catalog the wiring is matched against.
    type Kind: CatalogKind;

    fn letters(&self) -> &Letters;

    /// Current numeric position, 0..25.
    fn position(&self) -> u8;

    /// Catalog entry whose sequence equals this wiring, if any.
    fn kind(&self) -> Option<Self::Kind> {
        Self::Kind::from_letters(self.letters().as_str())
    }

    /// Catalog identifier, or `"CUSTOM"`.
    fn kind_name(&self) -> &'static str {
        kind_name::<Self::Kind>(self.letters())
    }

    /// Letter of the wiring at the current position.
    fn current_letter(&self) -> char {
        self.letters().at(self.position() as usize)
    }

    /// Check a requested position against this wiring without applying it.
    fn resolve_position(&self, position: Position) -> Result<u8, EngineError> {
        position.resolve(self.letters())
    }
}
