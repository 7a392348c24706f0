//! Cipher primitives.
//!
//! This module contains the substitution components a machine is built from:
//! - `Rotor`: steppable ring with independent forward and reverse mappings
//! - `Reflector`: fixed ring that folds the signal back
//! - `Plugboard`: symmetric letter swaps applied before and after the rotors
//!
//! plus the shared alphabet, wiring catalogs and error taxonomy. Nothing
//! here performs I/O.

mod alphabet;
mod catalog;
mod error;
mod plugboard;
mod position;
mod reflector;
mod rotor;
mod wheel;

pub use alphabet::{alphabet_index, alphabet_letter, Letters, LettersError, ALPHABET, ALPHABET_LEN};
pub use catalog::{
    kind_name, CatalogKind, ReflectorKind, ReflectorSpec, RotorKind, RotorSpec, WheelSpec, CUSTOM,
};
pub use error::EngineError;
pub use plugboard::Plugboard;
pub use position::Position;
pub use reflector::Reflector;
pub use rotor::{Rotor, MAX_STEP_SIZE, MIN_STEP_SIZE};
pub use wheel::Wheel;
