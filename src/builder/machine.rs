//! Builder for constructing machines.

use super::wheel::{ReflectorBuilder, RotorBuilder};
use crate::core::{EngineError, Plugboard, Reflector, ReflectorSpec, Rotor};
use crate::machine::Machine;

/// A rotor slot: either a finished rotor or a builder still to be validated.
#[derive(Clone, Debug)]
enum RotorSource {
    Built(Rotor),
    Pending(RotorBuilder),
}

#[derive(Clone, Debug)]
enum ReflectorSource {
    Built(Reflector),
    Pending(ReflectorBuilder),
}

/// Builder for a [`Machine`] with a fluent API.
///
/// Nothing is validated until [`build`](Self::build), which reports the first
/// problem found. The built machine always has a plugboard; rotors and
/// reflector are optional, so an unready machine can be built and completed
/// later.
///
/// # Example
///
/// ```rust
/// use rotor_machine::builder::{MachineBuilder, RotorBuilder};
/// use rotor_machine::core::{ReflectorKind, RotorKind};
///
/// let mut machine = MachineBuilder::new()
///     .rotor(RotorBuilder::new().kind(RotorKind::I))
///     .rotor(RotorBuilder::new().kind(RotorKind::II))
///     .rotor(RotorBuilder::new().kind(RotorKind::III))
///     .reflector_kind(ReflectorKind::A)
///     .positions("AAA")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.encipher("THIS IS A TEST").unwrap(), "QCTBG IJSWI H");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    rotors: Vec<RotorSource>,
    reflector: Option<ReflectorSource>,
    connections: Vec<(char, char)>,
    positions: Option<String>,
}

impl MachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rotor described by a builder.
    pub fn rotor(mut self, builder: RotorBuilder) -> Self {
        self.rotors.push(RotorSource::Pending(builder));
        self
    }

    /// Append an already built rotor.
    pub fn add_rotor(mut self, rotor: Rotor) -> Self {
        self.rotors.push(RotorSource::Built(rotor));
        self
    }

    /// Append several built rotors, left to right.
    pub fn rotors(mut self, rotors: impl IntoIterator<Item = Rotor>) -> Self {
        self.rotors.extend(rotors.into_iter().map(RotorSource::Built));
        self
    }

    pub fn reflector(mut self, builder: ReflectorBuilder) -> Self {
        self.reflector = Some(ReflectorSource::Pending(builder));
        self
    }

    /// Shorthand for a reflector builder with only its kind set.
    pub fn reflector_kind(self, spec: impl Into<ReflectorSpec>) -> Self {
        self.reflector(ReflectorBuilder::new().kind(spec))
    }

    pub fn add_reflector(mut self, reflector: Reflector) -> Self {
        self.reflector = Some(ReflectorSource::Built(reflector));
        self
    }

    /// Wire two plugboard letters together.
    pub fn connect(mut self, from: char, to: char) -> Self {
        self.connections.push((from, to));
        self
    }

    pub fn connections(mut self, pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        self.connections.extend(pairs);
        self
    }

    /// Letters to show on the rotors once built, as for [`Machine::set_rotors`].
    pub fn positions(mut self, letters: impl Into<String>) -> Self {
        self.positions = Some(letters.into());
        self
    }

    pub fn build(self) -> Result<Machine, EngineError> {
        let rotors = self
            .rotors
            .into_iter()
            .map(|source| match source {
                RotorSource::Built(rotor) => Ok(rotor),
                RotorSource::Pending(builder) => builder.build(),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let reflector = self
            .reflector
            .map(|source| match source {
                ReflectorSource::Built(reflector) => Ok(reflector),
                ReflectorSource::Pending(builder) => builder.build(),
            })
            .transpose()?;

        let mut plugboard = Plugboard::new();
        for (from, to) in self.connections {
            plugboard.connect(from, to)?;
        }

        let mut machine = Machine::with_components(rotors, reflector, Some(plugboard));
        if let Some(letters) = self.positions {
            machine.set_rotors(&letters)?;
        }
        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ReflectorKind, RotorKind, Wheel};

    #[test]
    fn empty_builder_builds_unready_machine() {
        let machine = MachineBuilder::new().build().unwrap();
        assert_eq!(machine, Machine::empty());
        assert!(!machine.is_ready());
    }

    #[test]
    fn builds_default_equivalent() {
        let machine = MachineBuilder::new()
            .rotors([
                Rotor::from_kind(RotorKind::I),
                Rotor::from_kind(RotorKind::II),
                Rotor::from_kind(RotorKind::III),
            ])
            .add_reflector(Reflector::from_kind(ReflectorKind::A))
            .positions("AAA")
            .build()
            .unwrap();

        assert_eq!(machine, Machine::default_machine());
    }

    #[test]
    fn wires_plugboard() {
        let machine = MachineBuilder::new()
            .connect('A', 'Q')
            .connections([('f', 'p')])
            .build()
            .unwrap();

        let plugboard = machine.plugboard().unwrap();
        assert_eq!(plugboard.len(), 2);
        assert_eq!(plugboard.partner('Q'), Some('A'));
        assert_eq!(plugboard.partner('P'), Some('F'));
    }

    #[test]
    fn reports_conflicting_connections() {
        let result = MachineBuilder::new()
            .connect('A', 'B')
            .connect('B', 'C')
            .build();
        assert!(matches!(result, Err(EngineError::PlugboardConflict(_))));
    }

    #[test]
    fn reports_invalid_components() {
        let result = MachineBuilder::new()
            .rotor(RotorBuilder::new().step_size(30))
            .build();
        assert_eq!(result, Err(EngineError::InvalidStepSize(30)));

        let result = MachineBuilder::new()
            .reflector_kind("NOT_A_REFLECTOR")
            .build();
        assert!(matches!(result, Err(EngineError::InvalidReflectorKind(_))));
    }

    #[test]
    fn reports_invalid_positions() {
        let result = MachineBuilder::new()
            .rotor(RotorBuilder::new())
            .positions("*")
            .build();
        assert!(matches!(result, Err(EngineError::InvalidPosition(_))));
    }

    #[test]
    fn keeps_rotor_order() {
        let machine = MachineBuilder::new()
            .rotor(RotorBuilder::new().kind(RotorKind::III))
            .rotor(RotorBuilder::new().kind(RotorKind::I).position(4u8))
            .reflector(ReflectorBuilder::new().kind(ReflectorKind::B))
            .build()
            .unwrap();

        assert_eq!(machine.rotors()[0].kind(), Some(RotorKind::III));
        assert_eq!(machine.rotors()[1].kind(), Some(RotorKind::I));
        assert_eq!(machine.rotor_positions(), vec![0, 4]);
        assert_eq!(
            machine.reflector().and_then(Wheel::kind),
            Some(ReflectorKind::B)
        );
    }
}
