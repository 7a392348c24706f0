//! Persistence error types.

use super::validation::StateViolation;
use crate::core::EngineError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving or loading machine state
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file to load does not exist
    #[error("Machine state file not found: {path:?}")]
    NotFound { path: PathBuf },

    /// The record was written by a newer serialization format
    #[error("Unsupported serialization version {found}, supported: {supported}")]
    VersionMismatch { found: u64, supported: u32 },

    /// Reading or writing the file failed
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The document is not a machine state record
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The record is well-formed but inconsistent; carries every violation found
    #[error("Machine state validation failed: {}", join_violations(.0))]
    ValidationFailed(Vec<StateViolation>),

    /// A component could not be rebuilt from the record
    #[error("Invalid machine configuration: {0}")]
    Engine(#[from] EngineError),
}

fn join_violations(violations: &[StateViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_mismatch_message() {
        let err = PersistenceError::VersionMismatch {
            found: 3,
            supported: 1,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported serialization version 3, supported: 1"
        );
    }

    #[test]
    fn validation_message_lists_every_violation() {
        let err = PersistenceError::ValidationFailed(vec![
            StateViolation::SelfConnection('A'),
            StateViolation::ReflectorPositionOutOfRange(30),
        ]);
        assert_eq!(
            err.to_string(),
            "Machine state validation failed: plugboard: A is connected to itself; reflector: position 30 is out of range"
        );
    }
}
