//! Engine error types.

use thiserror::Error;

/// Errors raised while configuring or running a machine.
///
/// Every variant except [`EngineError::MachineNotReady`] is an
/// "invalid configuration" error: it is returned before any state is
/// changed, so the component that rejected the call is left as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Unknown rotor identifier, or a custom sequence that is not a permutation of A..Z
    #[error("Invalid rotor kind: {0}")]
    InvalidRotorKind(String),

    /// Unknown reflector identifier, or a custom sequence that is not a permutation of A..Z
    #[error("Invalid reflector kind: {0}")]
    InvalidReflectorKind(String),

    /// Numeric position outside 0..25, or a letter not present on the component
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid step size {0} (must be between 1 and 25)")]
    InvalidStepSize(u8),

    /// Symbol already connected, or connected to itself
    #[error("Plugboard conflict: {0}")]
    PlugboardConflict(String),

    #[error("{0} is not connected")]
    PlugboardNotConnected(char),

    /// Only the letters A..Z can be wired on the plugboard
    #[error("Invalid plugboard symbol {0:?}")]
    InvalidSymbol(char),

    #[error("Cannot encipher; {0}")]
    MachineNotReady(&'static str),
}

impl EngineError {
    /// True for every error caused by a rejected configuration value.
    pub fn is_invalid_configuration(&self) -> bool {
        !self.is_not_ready()
    }

    /// True when encipherment was attempted without rotors or a reflector.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::MachineNotReady(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EngineError::InvalidStepSize(30).to_string(),
            "Invalid step size 30 (must be between 1 and 25)"
        );
        assert_eq!(
            EngineError::PlugboardNotConnected('X').to_string(),
            "X is not connected"
        );
        assert_eq!(
            EngineError::MachineNotReady("no rotors loaded").to_string(),
            "Cannot encipher; no rotors loaded"
        );
    }

    #[test]
    fn categories_are_distinguishable() {
        let config = EngineError::PlugboardConflict("A is already connected".to_string());
        let not_ready = EngineError::MachineNotReady("no reflector loaded");

        assert!(config.is_invalid_configuration());
        assert!(!config.is_not_ready());
        assert!(not_ready.is_not_ready());
        assert!(!not_ready.is_invalid_configuration());
    }
}
