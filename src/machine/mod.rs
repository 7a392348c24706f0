//! The rotor machine: components, odometer and description.
//!
//! A [`Machine`] owns an ordered list of rotors (index 0 is the leftmost,
//! slowest rotor), an optional reflector and an optional plugboard. Its only
//! evolving state is the odometer formed by the rotor positions.

mod signal;

use crate::core::{
    EngineError, Plugboard, Position, Reflector, ReflectorKind, Rotor, RotorKind, Wheel,
};
use std::fmt;

/// Rotor letters used by [`Machine::default_machine`].
pub const DEFAULT_ROTOR_LETTERS: &str = "AAA";

/// A rotor cipher machine.
///
/// Two machines are equal when their rotors, reflector and plugboard are
/// pairwise equal. Cloning makes a deep copy.
///
/// # Example
///
/// ```rust
/// use rotor_machine::Machine;
///
/// let mut machine = Machine::default_machine();
/// let ciphertext = machine.encipher("THIS IS A TEST").unwrap();
/// assert_eq!(ciphertext, "QCTBG IJSWI H");
///
/// let mut machine = Machine::default_machine();
/// let plaintext = machine.encipher(&ciphertext).unwrap();
/// assert_eq!(plaintext, "THISI SATES T");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Machine {
    rotors: Vec<Rotor>,
    reflector: Option<Reflector>,
    plugboard: Option<Plugboard>,
}

impl Machine {
    /// Assemble a machine from parts.
    pub fn with_components(
        rotors: Vec<Rotor>,
        reflector: Option<Reflector>,
        plugboard: Option<Plugboard>,
    ) -> Self {
        Self {
            rotors,
            reflector,
            plugboard,
        }
    }

    /// No rotors, no reflector, an empty plugboard.
    pub fn empty() -> Self {
        Self::with_components(Vec::new(), None, Some(Plugboard::new()))
    }

    /// Rotors I, II and III showing `A`, step size 1, reflector A, empty plugboard.
    pub fn default_machine() -> Self {
        let rotors = [RotorKind::I, RotorKind::II, RotorKind::III]
            .into_iter()
            .zip(DEFAULT_ROTOR_LETTERS.chars())
            .map(|(kind, letter)| Rotor::showing(kind, letter))
            .collect();
        Self::with_components(
            rotors,
            Some(Reflector::from_kind(ReflectorKind::A)),
            Some(Plugboard::new()),
        )
    }

    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Mutable access to the rotor list, for inserting, removing or replacing rotors.
    pub fn rotors_mut(&mut self) -> &mut Vec<Rotor> {
        &mut self.rotors
    }

    /// Append a rotor on the right (fast) end.
    pub fn add_rotor(&mut self, rotor: Rotor) {
        self.rotors.push(rotor);
    }

    pub fn reflector(&self) -> Option<&Reflector> {
        self.reflector.as_ref()
    }

    pub fn set_reflector(&mut self, reflector: Option<Reflector>) {
        self.reflector = reflector;
    }

    pub fn plugboard(&self) -> Option<&Plugboard> {
        self.plugboard.as_ref()
    }

    pub fn plugboard_mut(&mut self) -> Option<&mut Plugboard> {
        self.plugboard.as_mut()
    }

    pub fn set_plugboard(&mut self, plugboard: Option<Plugboard>) {
        self.plugboard = plugboard;
    }

    /// Whether the machine has at least one rotor and a reflector.
    pub fn is_ready(&self) -> bool {
        !self.rotors.is_empty() && self.reflector.is_some()
    }

    /// Numeric rotor positions, left to right.
    pub fn rotor_positions(&self) -> Vec<u8> {
        self.rotors.iter().map(Wheel::position).collect()
    }

    /// Letters currently showing on the rotors, left to right.
    pub fn rotor_letters(&self) -> String {
        self.rotors.iter().map(Wheel::current_letter).collect()
    }

    /// Set rotor `i` to show the `i`-th letter of `letters`.
    ///
    /// Extra letters are ignored and missing ones leave their rotors alone.
    /// Every letter is checked before any rotor moves.
    pub fn set_rotors(&mut self, letters: &str) -> Result<(), EngineError> {
        let positions = self
            .rotors
            .iter()
            .zip(letters.chars())
            .map(|(rotor, letter)| rotor.resolve_position(Position::Letter(letter)))
            .collect::<Result<Vec<u8>, EngineError>>()?;

        for (rotor, position) in self.rotors.iter_mut().zip(positions) {
            rotor.set_position(position)?;
        }
        tracing::debug!("Rotors set to {}", self.rotor_letters());
        Ok(())
    }

    /// Advance the odometer by one character.
    ///
    /// The rightmost rotor always steps; each rotor to its left steps only
    /// while the rotor to its right has just wrapped.
    pub fn step_rotors(&mut self) {
        for rotor in self.rotors.iter_mut().rev() {
            if !rotor.step() {
                break;
            }
        }
        tracing::trace!(positions = ?self.rotor_positions(), "Stepped rotors");
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "a rotor machine with the following configuration:")?;
        writeln!(f, "  Rotors: {}", self.rotors.len())?;
        for rotor in &self.rotors {
            writeln!(f, "    - {}", rotor)?;
        }
        match &self.reflector {
            Some(reflector) => writeln!(f, "  Reflector: {}", reflector)?,
            None => writeln!(f, "  Reflector: none")?,
        }
        match &self.plugboard {
            Some(plugboard) => write!(f, "  Plugboard: {}", plugboard),
            None => write!(f, "  Plugboard: none"),
        }
    }
}
