//! Validation of persisted machine state, accumulating every violation.
//!
//! A record read from disk may be wrong in several places at once. Instead of
//! stopping at the first problem, each rotor, the reflector and every
//! plugboard connection is checked and all violations are reported together
//! using Stillwater's `Validation` type.

use super::{MachineState, PlugboardState, ReflectorState, RotorState};
use crate::core::{
    alphabet_index, CatalogKind, Letters, ReflectorKind, RotorKind, ALPHABET_LEN, CUSTOM,
    MAX_STEP_SIZE, MIN_STEP_SIZE,
};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Accumulated outcome of validating a record.
pub type StateValidation = Validation<(), NonEmptyVec<StateViolation>>;

/// A single inconsistency in a machine state record
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateViolation {
    #[error("rotor {index}: unknown kind '{kind}'")]
    UnknownRotorKind { index: usize, kind: String },

    #[error("rotor {index}: {reason}")]
    InvalidRotorLetters { index: usize, reason: String },

    #[error("rotor {index}: position {position} is out of range")]
    RotorPositionOutOfRange { index: usize, position: u8 },

    #[error("rotor {index}: step size {step_size} is out of range")]
    StepSizeOutOfRange { index: usize, step_size: u8 },

    #[error("reflector: unknown kind '{0}'")]
    UnknownReflectorKind(String),

    #[error("reflector: {0}")]
    InvalidReflectorLetters(String),

    #[error("reflector: position {0} is out of range")]
    ReflectorPositionOutOfRange(u8),

    #[error("plugboard: '{0}' is not a single letter")]
    InvalidPlugSymbol(String),

    #[error("plugboard: {0} is connected to itself")]
    SelfConnection(char),

    #[error("plugboard: {from} -> {to} has no matching {to} -> {from}")]
    NotReciprocal { from: char, to: char },
}

/// Check every part of `state`, collecting ALL violations.
///
/// The version field is not checked here; see [`MachineState::check_version`].
pub fn validate_state(state: &MachineState) -> StateValidation {
    let mut checks: Vec<StateValidation> = Vec::new();

    for (index, rotor) in state.rotors.iter().enumerate() {
        checks.extend(rotor_checks(index, rotor));
    }

    if let Some(reflector) = &state.reflector {
        checks.extend(reflector_checks(reflector));
    }

    if let Some(plugboard) = &state.plugboard {
        checks.extend(plugboard_checks(plugboard));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a failed validation into a plain list.
pub fn violations(validation: &StateValidation) -> Vec<StateViolation> {
    match validation {
        Validation::Failure(errors) => errors.iter().cloned().collect(),
        Validation::Success(_) => Vec::new(),
    }
}

fn require(condition: bool, violation: impl FnOnce() -> StateViolation) -> StateValidation {
    if condition {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Why a kind/letters pair does not describe a wiring.
enum WiringProblem {
    UnknownKind,
    Letters(String),
}

fn check_wiring<K: CatalogKind>(kind: &str, letters: Option<&str>) -> Result<(), WiringProblem> {
    if kind != CUSTOM {
        return K::from_identifier(kind)
            .map(|_| ())
            .ok_or(WiringProblem::UnknownKind);
    }
    match letters {
        None => Err(WiringProblem::Letters(
            "custom wiring has no letters".to_string(),
        )),
        Some(sequence) => Letters::parse(sequence)
            .map(|_| ())
            .map_err(|reason| WiringProblem::Letters(reason.to_string())),
    }
}

fn rotor_checks(index: usize, rotor: &RotorState) -> Vec<StateValidation> {
    let wiring = match check_wiring::<RotorKind>(&rotor.kind, rotor.letters.as_deref()) {
        Ok(()) => Validation::success(()),
        Err(WiringProblem::UnknownKind) => Validation::fail(StateViolation::UnknownRotorKind {
            index,
            kind: rotor.kind.clone(),
        }),
        Err(WiringProblem::Letters(reason)) => {
            Validation::fail(StateViolation::InvalidRotorLetters { index, reason })
        }
    };

    vec![
        wiring,
        require((rotor.position as usize) < ALPHABET_LEN, || {
            StateViolation::RotorPositionOutOfRange {
                index,
                position: rotor.position,
            }
        }),
        require(
            (MIN_STEP_SIZE..=MAX_STEP_SIZE).contains(&rotor.step_size),
            || StateViolation::StepSizeOutOfRange {
                index,
                step_size: rotor.step_size,
            },
        ),
    ]
}

fn reflector_checks(reflector: &ReflectorState) -> Vec<StateValidation> {
    let wiring = match check_wiring::<ReflectorKind>(&reflector.kind, reflector.letters.as_deref())
    {
        Ok(()) => Validation::success(()),
        Err(WiringProblem::UnknownKind) => {
            Validation::fail(StateViolation::UnknownReflectorKind(reflector.kind.clone()))
        }
        Err(WiringProblem::Letters(reason)) => {
            Validation::fail(StateViolation::InvalidReflectorLetters(reason))
        }
    };

    vec![
        wiring,
        require((reflector.position as usize) < ALPHABET_LEN, || {
            StateViolation::ReflectorPositionOutOfRange(reflector.position)
        }),
    ]
}

/// Parse a connection endpoint: exactly one letter, any case.
pub(crate) fn plug_symbol(value: &str) -> Option<char> {
    let mut chars = value.chars();
    let symbol = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    alphabet_index(symbol).map(|_| symbol)
}

fn plugboard_checks(plugboard: &PlugboardState) -> Vec<StateValidation> {
    let mut checks = Vec::new();

    for (from, to) in &plugboard.connections {
        let (from_symbol, to_symbol) = match (plug_symbol(from), plug_symbol(to)) {
            (Some(a), Some(b)) => (a, b),
            (a, b) => {
                if a.is_none() {
                    checks.push(Validation::fail(StateViolation::InvalidPlugSymbol(
                        from.clone(),
                    )));
                }
                if b.is_none() {
                    checks.push(Validation::fail(StateViolation::InvalidPlugSymbol(
                        to.clone(),
                    )));
                }
                continue;
            }
        };

        if from_symbol == to_symbol {
            checks.push(Validation::fail(StateViolation::SelfConnection(from_symbol)));
            continue;
        }

        let reciprocal = plugboard
            .connections
            .iter()
            .find(|(key, _)| plug_symbol(key) == Some(to_symbol))
            .and_then(|(_, value)| plug_symbol(value));
        checks.push(require(reciprocal == Some(from_symbol), || {
            StateViolation::NotReciprocal {
                from: from_symbol,
                to: to_symbol,
            }
        }));
    }

    checks
}
