//! File persistence for machine state.

use super::{MachineState, PersistenceError};
use crate::machine::Machine;
use chrono::Utc;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Sibling path the record is written to before being renamed into place.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_atomically(path: &Path, contents: &str) -> Result<(), PersistenceError> {
    let temp_path = temp_path_for(path);

    let written = fs::write(&temp_path, contents).and_then(|()| fs::rename(&temp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    Ok(())
}

impl Machine {
    /// Write the machine state to `path` as JSON.
    ///
    /// The record is written to a temporary sibling file and renamed over
    /// `path`, so a failed save never leaves a partial record behind.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let mut state = self.machine_state();
        state.saved_at = Some(Utc::now());

        write_atomically(path, &state.to_json()?)?;
        tracing::info!("Saved machine state to {}", path.display());
        Ok(())
    }

    /// Like [`save_to`](Self::save_to), reporting only success or failure.
    ///
    /// The cause of a failure is logged at `warn`.
    pub fn save_machine_state_to(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.save_to(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to save machine state to {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Replace this machine's components with the record stored at `path`.
    ///
    /// Nothing changes unless the whole record loads and validates.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PersistenceError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let json = fs::read_to_string(path)?;
        let state = MachineState::from_json(&json)?;
        self.apply_state(&state)?;

        match state.saved_at {
            Some(saved_at) => tracing::info!(
                "Loaded machine state from {} (saved {})",
                path.display(),
                saved_at.to_rfc3339()
            ),
            None => tracing::info!("Loaded machine state from {}", path.display()),
        }
        Ok(())
    }

    /// Alias of [`load_from`](Self::load_from).
    pub fn load_machine_state_from(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<(), PersistenceError> {
        self.load_from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoint::SERIALIZATION_VERSION;
    use crate::core::Rotor;
    use tempfile::TempDir;

    fn configured_machine() -> Machine {
        let mut machine = Machine::default_machine();
        machine.add_rotor(Rotor::new("QWERTYUIOPLKJHGFDSAZXCVBNM", 0u8, 1).unwrap());
        let plugboard = machine.plugboard_mut().unwrap();
        plugboard.connect('A', 'Q').unwrap();
        plugboard.connect('F', 'P').unwrap();
        machine
    }

    #[test]
    fn save_then_load_restores_components() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("machine.json");
        let machine = configured_machine();

        machine.save_to(&path).unwrap();

        let mut loaded = Machine::empty();
        loaded.load_from(&path).unwrap();
        assert_eq!(loaded.rotors(), machine.rotors());
        assert_eq!(loaded.reflector(), machine.reflector());
        assert_eq!(loaded.plugboard(), machine.plugboard());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("machine.json");

        assert!(Machine::default_machine().save_machine_state_to(&path));
        assert!(path.exists());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn saved_record_is_stamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("machine.json");
        Machine::default_machine().save_to(&path).unwrap();

        let state = MachineState::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(state.saved_at.is_some());
        assert_eq!(state.serialization_version, SERIALIZATION_VERSION);
    }

    #[test]
    fn save_reports_failure_as_false() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("machine.json");

        assert!(!Machine::default_machine().save_machine_state_to(&path));
        assert!(matches!(
            Machine::default_machine().save_to(&path),
            Err(PersistenceError::Io(_))
        ));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nothing-here.json");

        let mut machine = Machine::default_machine();
        let err = machine.load_machine_state_from(&path).unwrap_err();
        assert!(matches!(err, PersistenceError::NotFound { path: ref p } if p == &path));
        assert_eq!(machine, Machine::default_machine());
    }

    #[test]
    fn load_newer_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("future.json");
        let mut state = configured_machine().machine_state();
        state.serialization_version = SERIALIZATION_VERSION + 1;
        fs::write(&path, state.to_json().unwrap()).unwrap();

        let mut machine = Machine::default_machine();
        let err = machine.load_from(&path).unwrap_err();
        assert!(matches!(err, PersistenceError::VersionMismatch { .. }));
        assert_eq!(machine, Machine::default_machine());
    }

    #[test]
    fn load_garbage_fails_to_deserialize() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.json");
        fs::write(&path, "rotors: many").unwrap();

        let mut machine = Machine::empty();
        assert!(matches!(
            machine.load_from(&path),
            Err(PersistenceError::DeserializationFailed(_))
        ));
    }
}
