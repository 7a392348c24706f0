//! Builder API for configuring machines and their components.
//!
//! Each builder starts from sensible defaults, records options fluently and
//! validates everything in `build()`.

pub mod machine;
pub mod wheel;

pub use machine::MachineBuilder;
pub use wheel::{ReflectorBuilder, RotorBuilder};

use crate::core::{EngineError, Position, Rotor, RotorSpec};

/// Build a list of rotors with default step size, optionally positioned.
///
/// `positions` is matched to the rotors left to right; a missing or short
/// string leaves the remaining rotors at position 0.
///
/// # Example
///
/// ```
/// use rotor_machine::builder::rotor_set;
/// use rotor_machine::core::{RotorKind, Wheel};
///
/// let rotors = rotor_set([RotorKind::I, RotorKind::II, RotorKind::III], Some("AAA")).unwrap();
/// let positions: Vec<u8> = rotors.iter().map(Wheel::position).collect();
/// assert_eq!(positions, vec![9, 18, 10]);
/// ```
pub fn rotor_set<I>(kinds: I, positions: Option<&str>) -> Result<Vec<Rotor>, EngineError>
where
    I: IntoIterator,
    I::Item: Into<RotorSpec>,
{
    let mut letters = positions.unwrap_or_default().chars();

    kinds
        .into_iter()
        .map(|kind| {
            let builder = RotorBuilder::new().kind(kind);
            match letters.next() {
                Some(letter) => builder.position(Position::Letter(letter)).build(),
                None => builder.build(),
            }
        })
        .collect()
}
