//! rotor-machine: a rotor cipher machine simulator
//!
//! A machine is an ordered stack of rotors, a reflector and a plugboard. Each
//! letter is swapped by the plugboard, substituted through every rotor,
//! folded back by the reflector, substituted back out through the rotors in
//! reverse and swapped by the plugboard again. After each changed letter the
//! rotors advance like an odometer. With a reflector that has no fixed
//! points, enciphering is its own inverse.
//!
//! # Core Concepts
//!
//! - **Rotor**: steppable 26-letter wiring with a position and step size
//! - **Reflector**: fixed wiring at the end of the rotor stack
//! - **Plugboard**: symmetric letter swaps around the rotor stack
//! - **Machine State**: serializable snapshot used to save and restore
//!
//! # Example
//!
//! ```rust
//! use rotor_machine::builder::{rotor_set, MachineBuilder};
//! use rotor_machine::core::{ReflectorKind, RotorKind};
//!
//! let rotors = rotor_set([RotorKind::I, RotorKind::II, RotorKind::III], Some("KEY")).unwrap();
//! let mut machine = MachineBuilder::new()
//!     .rotors(rotors)
//!     .reflector_kind(ReflectorKind::B)
//!     .connect('A', 'Q')
//!     .build()
//!     .unwrap();
//! let start = machine.machine_state();
//!
//! let ciphertext = machine.encipher("attack at dawn").unwrap();
//!
//! machine.apply_state(&start).unwrap();
//! assert_eq!(machine.encipher(&ciphertext).unwrap(), "ATTAC KATDA WN");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod machine;
pub mod text;

// Re-export commonly used types
pub use builder::{MachineBuilder, ReflectorBuilder, RotorBuilder};
pub use checkpoint::{MachineState, PersistenceError, SERIALIZATION_VERSION};
pub use crate::core::{
    EngineError, Plugboard, Position, Reflector, ReflectorKind, Rotor, RotorKind, Wheel,
};
pub use machine::Machine;
