//! Saving and restoring machine state.
//!
//! A [`MachineState`] is a plain serializable record of everything a machine
//! needs to resume: each rotor's wiring, position and step size, the
//! reflector, and the plugboard connections. Records are encoded as JSON.
//!
//! Loading is all or nothing. A record is version-checked, then every entry
//! is validated (all problems are reported together), and only then are the
//! machine's components replaced.

use crate::core::{
    Plugboard, Position, Reflector, ReflectorSpec, Rotor, RotorSpec, Wheel, CUSTOM,
};
use crate::machine::Machine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod error;
mod file;
pub mod validation;

pub use error::PersistenceError;
pub use validation::{validate_state, StateViolation};

/// Version identifier for the record format
pub const SERIALIZATION_VERSION: u32 = 1;

/// Serializable snapshot of a machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineState {
    /// Record format version
    pub serialization_version: u32,

    /// When the record was written to disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,

    /// Rotors, left to right
    pub rotors: Vec<RotorState>,

    /// `None` serializes as `null`
    #[serde(default)]
    pub reflector: Option<ReflectorState>,

    /// `None` serializes as `null`
    #[serde(default)]
    pub plugboard: Option<PlugboardState>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorState {
    /// Catalog identifier or `"CUSTOM"`
    pub kind: String,
    pub position: u8,
    pub step_size: u8,
    /// Wiring sequence, present only for custom rotors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letters: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectorState {
    pub kind: String,
    pub position: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letters: Option<String>,
}

/// Plugboard connections, stored in both directions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlugboardState {
    #[serde(default)]
    pub connections: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct VersionProbe {
    serialization_version: u64,
}

fn custom_letters<W: Wheel>(wheel: &W) -> Option<String> {
    (wheel.kind_name() == CUSTOM).then(|| wheel.letters().as_str().to_string())
}

impl From<&Rotor> for RotorState {
    fn from(rotor: &Rotor) -> Self {
        Self {
            kind: rotor.kind_name().to_string(),
            position: rotor.position(),
            step_size: rotor.step_size(),
            letters: custom_letters(rotor),
        }
    }
}

impl From<&Reflector> for ReflectorState {
    fn from(reflector: &Reflector) -> Self {
        Self {
            kind: reflector.kind_name().to_string(),
            position: reflector.position(),
            letters: custom_letters(reflector),
        }
    }
}

impl From<&Plugboard> for PlugboardState {
    fn from(plugboard: &Plugboard) -> Self {
        Self {
            connections: plugboard
                .connections()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

impl RotorState {
    fn spec(&self) -> RotorSpec {
        match (&self.letters, self.kind.as_str()) {
            (Some(letters), CUSTOM) => RotorSpec::Custom(letters.clone()),
            _ => RotorSpec::parse(&self.kind),
        }
    }

    fn rebuild(&self) -> Result<Rotor, PersistenceError> {
        Ok(Rotor::new(
            self.spec(),
            Position::Index(self.position),
            self.step_size,
        )?)
    }
}

impl ReflectorState {
    fn spec(&self) -> ReflectorSpec {
        match (&self.letters, self.kind.as_str()) {
            (Some(letters), CUSTOM) => ReflectorSpec::Custom(letters.clone()),
            _ => ReflectorSpec::parse(&self.kind),
        }
    }

    fn rebuild(&self) -> Result<Reflector, PersistenceError> {
        Ok(Reflector::new(self.spec(), Position::Index(self.position))?)
    }
}

impl PlugboardState {
    fn rebuild(&self) -> Result<Plugboard, PersistenceError> {
        let mut plugboard = Plugboard::new();
        for (from, to) in &self.connections {
            let (Some(from), Some(to)) = (
                validation::plug_symbol(from),
                validation::plug_symbol(to),
            ) else {
                continue;
            };
            if !plugboard.is_connected(from) {
                plugboard.connect(from, to)?;
            }
        }
        Ok(plugboard)
    }
}

impl MachineState {
    /// Fail with [`PersistenceError::VersionMismatch`] if the record is newer
    /// than this build understands. Older and equal versions load.
    pub fn check_version(&self) -> Result<(), PersistenceError> {
        check_version(u64::from(self.serialization_version))
    }

    /// Version check plus full validation of every entry.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        self.check_version()?;
        let outcome = validate_state(self);
        if outcome.is_failure() {
            return Err(PersistenceError::ValidationFailed(validation::violations(
                &outcome,
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PersistenceError::SerializationFailed(e.to_string()))
    }

    /// Parse a record, rejecting newer versions before the body is read.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let probe: VersionProbe = serde_json::from_str(json)
            .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?;
        check_version(probe.serialization_version)?;

        serde_json::from_str(json)
            .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))
    }
}

fn check_version(found: u64) -> Result<(), PersistenceError> {
    if found > u64::from(SERIALIZATION_VERSION) {
        return Err(PersistenceError::VersionMismatch {
            found,
            supported: SERIALIZATION_VERSION,
        });
    }
    Ok(())
}

impl Machine {
    /// Snapshot the machine's components.
    pub fn machine_state(&self) -> MachineState {
        MachineState {
            serialization_version: SERIALIZATION_VERSION,
            saved_at: None,
            rotors: self.rotors().iter().map(RotorState::from).collect(),
            reflector: self.reflector().map(ReflectorState::from),
            plugboard: self.plugboard().map(PlugboardState::from),
        }
    }

    /// Build a new machine from a record.
    pub fn from_state(state: &MachineState) -> Result<Self, PersistenceError> {
        state.validate()?;

        let rotors = state
            .rotors
            .iter()
            .map(RotorState::rebuild)
            .collect::<Result<Vec<_>, _>>()?;
        let reflector = state
            .reflector
            .as_ref()
            .map(ReflectorState::rebuild)
            .transpose()?;
        let plugboard = state
            .plugboard
            .as_ref()
            .map(PlugboardState::rebuild)
            .transpose()?;

        tracing::debug!(
            "Rebuilt machine from record: {} rotor(s), {} plug pair(s)",
            rotors.len(),
            plugboard.as_ref().map_or(0, Plugboard::len)
        );
        Ok(Self::with_components(rotors, reflector, plugboard))
    }

    /// Replace rotors, reflector and plugboard with those of `state`.
    ///
    /// On error the machine is left untouched.
    pub fn apply_state(&mut self, state: &MachineState) -> Result<(), PersistenceError> {
        *self = Self::from_state(state)?;
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Self::from_state(&MachineState::from_json(json)?)
    }
}
