//! Builders for rotors and reflectors.

use crate::core::{
    EngineError, Position, Reflector, ReflectorKind, ReflectorSpec, Rotor, RotorKind, RotorSpec,
    MIN_STEP_SIZE,
};

/// Fluent construction of a [`Rotor`].
///
/// Defaults: `ROTOR_I`, position 0, step size 1.
#[derive(Clone, Debug)]
pub struct RotorBuilder {
    spec: RotorSpec,
    position: Position,
    step_size: u8,
}

impl RotorBuilder {
    pub fn new() -> Self {
        Self {
            spec: RotorKind::I.into(),
            position: Position::Index(0),
            step_size: MIN_STEP_SIZE,
        }
    }

    /// Catalog kind, catalog identifier, or literal 26-letter wiring.
    pub fn kind(mut self, spec: impl Into<RotorSpec>) -> Self {
        self.spec = spec.into();
        self
    }

    /// Start position as an index or as a letter on the wiring.
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = position.into();
        self
    }

    pub fn step_size(mut self, step_size: u8) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn build(self) -> Result<Rotor, EngineError> {
        Rotor::new(self.spec, self.position, self.step_size)
    }
}

impl Default for RotorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent construction of a [`Reflector`].
///
/// Defaults: `REFLECTOR_A`, position 0.
#[derive(Clone, Debug)]
pub struct ReflectorBuilder {
    spec: ReflectorSpec,
    position: Position,
}

impl ReflectorBuilder {
    pub fn new() -> Self {
        Self {
            spec: ReflectorKind::A.into(),
            position: Position::Index(0),
        }
    }

    pub fn kind(mut self, spec: impl Into<ReflectorSpec>) -> Self {
        self.spec = spec.into();
        self
    }

    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = position.into();
        self
    }

    pub fn build(self) -> Result<Reflector, EngineError> {
        Reflector::new(self.spec, self.position)
    }
}

impl Default for ReflectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CatalogKind, Wheel, CUSTOM};

    #[test]
    fn rotor_defaults() {
        let rotor = RotorBuilder::new().build().unwrap();
        assert_eq!(rotor.kind(), Some(RotorKind::I));
        assert_eq!(rotor.position(), 0);
        assert_eq!(rotor.step_size(), 1);
    }

    #[test]
    fn rotor_from_identifier_and_letter() {
        let rotor = RotorBuilder::new()
            .kind("ROTOR_III")
            .position('A')
            .step_size(3)
            .build()
            .unwrap();
        assert_eq!(rotor.kind(), Some(RotorKind::III));
        assert_eq!(rotor.current_letter(), 'A');
        assert_eq!(rotor.step_size(), 3);
    }

    #[test]
    fn rotor_from_custom_wiring() {
        let rotor = RotorBuilder::new()
            .kind("qwertyuiopasdfghjklzxcvbnm")
            .build()
            .unwrap();
        assert_eq!(rotor.kind_name(), CUSTOM);
        assert_eq!(rotor.current_letter(), 'Q');
    }

    #[test]
    fn rotor_rejects_bad_configuration() {
        assert!(matches!(
            RotorBuilder::new().kind("UNDEFINED_ROTOR").build(),
            Err(EngineError::InvalidRotorKind(_))
        ));
        assert!(matches!(
            RotorBuilder::new().kind("TOO SHORT").build(),
            Err(EngineError::InvalidRotorKind(_))
        ));
        assert!(matches!(
            RotorBuilder::new().position(38u8).build(),
            Err(EngineError::InvalidPosition(_))
        ));
        assert!(matches!(
            RotorBuilder::new().position('*').build(),
            Err(EngineError::InvalidPosition(_))
        ));
        assert!(matches!(
            RotorBuilder::new().step_size(0).build(),
            Err(EngineError::InvalidStepSize(0))
        ));
        assert!(matches!(
            RotorBuilder::new().step_size(26).build(),
            Err(EngineError::InvalidStepSize(26))
        ));
    }

    #[test]
    fn reflector_defaults() {
        let reflector = ReflectorBuilder::default().build().unwrap();
        assert_eq!(reflector.kind(), Some(ReflectorKind::A));
        assert_eq!(reflector.position(), 0);
    }

    #[test]
    fn reflector_positions() {
        let reflector = ReflectorBuilder::new().position(7u8).build().unwrap();
        assert_eq!(reflector.position(), 7);
        assert_eq!(
            reflector.current_letter(),
            ReflectorKind::A.letters().as_bytes()[7] as char
        );

        let reflector = ReflectorBuilder::new().position('A').build().unwrap();
        assert_eq!(reflector.current_letter(), 'A');
    }

    #[test]
    fn reflector_rejects_bad_configuration() {
        assert!(matches!(
            ReflectorBuilder::new().kind("UNDEFINED_REFLECTOR").build(),
            Err(EngineError::InvalidReflectorKind(_))
        ));
        assert!(matches!(
            ReflectorBuilder::new().position(26u8).build(),
            Err(EngineError::InvalidPosition(_))
        ));
    }
}
