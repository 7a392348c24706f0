//! Signal path through the machine.

use super::Machine;
use crate::core::EngineError;
use crate::text::{in_blocks_of, BLOCK_SIZE};

impl Machine {
    /// Encipher `text` and group the result in blocks of five.
    ///
    /// Input is uppercased; non-letters pass through without stepping the
    /// rotors, and whitespace is dropped by the grouping. Because the machine
    /// is self-inverse, enciphering the ciphertext from the same starting
    /// positions yields the plaintext.
    ///
    /// # Errors
    ///
    /// [`EngineError::MachineNotReady`] if the machine has no rotors or no
    /// reflector.
    pub fn encipher(&mut self, text: &str) -> Result<String, EngineError> {
        let stream = self.encipher_stream(text)?;
        Ok(in_blocks_of(&stream, BLOCK_SIZE))
    }

    /// Encipher `text` character by character without regrouping it.
    pub fn encipher_stream(&mut self, text: &str) -> Result<String, EngineError> {
        self.check_ready()?;
        Ok(text
            .chars()
            .map(|symbol| self.process(symbol.to_ascii_uppercase()))
            .collect())
    }

    /// Encipher one character and advance the odometer.
    pub fn encipher_char(&mut self, symbol: char) -> Result<char, EngineError> {
        self.check_ready()?;
        Ok(self.process(symbol.to_ascii_uppercase()))
    }

    fn check_ready(&self) -> Result<(), EngineError> {
        if self.rotors.is_empty() {
            return Err(EngineError::MachineNotReady("no rotors loaded"));
        }
        if self.reflector.is_none() {
            return Err(EngineError::MachineNotReady("no reflector loaded"));
        }
        Ok(())
    }

    // The rotors step only when the signal was changed, so symbols the
    // machine passes through (whitespace, digits) leave the odometer alone.
    fn process(&mut self, symbol: char) -> char {
        let enciphered = self.route(symbol);
        if enciphered != symbol {
            self.step_rotors();
        }
        enciphered
    }

    fn route(&self, symbol: char) -> char {
        let mut signal = symbol;

        if let Some(plugboard) = &self.plugboard {
            signal = plugboard.transpose_char(signal);
        }
        for rotor in &self.rotors {
            signal = rotor.forward(signal);
        }
        if let Some(reflector) = &self.reflector {
            signal = reflector.reflect(signal);
        }
        for rotor in self.rotors.iter().rev() {
            signal = rotor.reverse(signal);
        }
        if let Some(plugboard) = &self.plugboard {
            signal = plugboard.transpose_char(signal);
        }

        signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Plugboard, Reflector, ReflectorKind, Rotor, RotorKind};
    use crate::text::strip_whitespace;

    const PLAINTEXT: &str = "the quick brown fox jumped over the lazy dog";

    #[test]
    fn enciphers_known_vector() {
        let mut machine = Machine::default_machine();
        assert_eq!(machine.encipher("THIS IS A TEST").unwrap(), "QCTBG IJSWI H");
    }

    #[test]
    fn encipher_changes_text() {
        let mut machine = Machine::default_machine();
        let ciphertext = machine.encipher(PLAINTEXT).unwrap();
        assert_ne!(strip_whitespace(&ciphertext), strip_whitespace(PLAINTEXT));
    }

    #[test]
    fn deciphers_by_enciphering_again() {
        let mut machine = Machine::default_machine();
        machine.plugboard_mut().unwrap().connect('A', 'Q').unwrap();
        machine.set_rotors("KEY").unwrap();
        let start = machine.clone();

        let ciphertext = machine.encipher(PLAINTEXT).unwrap();

        let mut machine = start;
        let recovered = machine.encipher(&ciphertext).unwrap();
        assert_eq!(
            strip_whitespace(&recovered),
            strip_whitespace(&PLAINTEXT.to_uppercase())
        );
    }

    #[test]
    fn never_enciphers_a_letter_to_itself() {
        let mut machine = Machine::default_machine();
        machine.set_plugboard(None);
        for rotor in machine.rotors_mut() {
            rotor.set_position(0u8).unwrap();
        }

        let plaintext = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".repeat(20);
        let ciphertext = strip_whitespace(&machine.encipher(&plaintext).unwrap());
        for (plain, cipher) in plaintext.chars().zip(ciphertext.chars()) {
            assert_ne!(plain, cipher);
        }
    }

    #[test]
    fn stream_keeps_spacing_and_skips_stepping_on_non_letters() {
        let mut machine = Machine::default_machine();
        let stream = machine.encipher_stream("THIS IS A TEST").unwrap();
        assert_eq!(stream, "QCTB GI J SWIH");
    }

    #[test]
    fn encipher_char_steps_odometer() {
        let mut machine = Machine::default_machine();
        assert_eq!(machine.encipher_char('t').unwrap(), 'Q');
        assert_eq!(machine.rotor_positions(), vec![9, 18, 11]);

        assert_eq!(machine.encipher_char(' ').unwrap(), ' ');
        assert_eq!(machine.rotor_positions(), vec![9, 18, 11]);
    }

    #[test]
    fn identity_reflector_never_steps() {
        let mut machine = Machine::with_components(
            vec![Rotor::from_kind(RotorKind::I)],
            Some(Reflector::from_kind(ReflectorKind::Etw)),
            None,
        );
        assert_eq!(machine.encipher_stream("HELLO").unwrap(), "HELLO");
        assert_eq!(machine.rotor_positions(), vec![0]);
    }

    #[test]
    fn refuses_without_rotors() {
        let mut machine = Machine::empty();
        machine.set_reflector(Some(Reflector::from_kind(ReflectorKind::A)));
        assert_eq!(
            machine.encipher("THIS IS A TEST"),
            Err(EngineError::MachineNotReady("no rotors loaded"))
        );
    }

    #[test]
    fn refuses_without_reflector() {
        let mut machine = Machine::empty();
        machine.add_rotor(Rotor::from_kind(RotorKind::I));
        let err = machine.encipher("THIS IS A TEST").unwrap_err();
        assert!(err.is_not_ready());
        assert_eq!(err.to_string(), "Cannot encipher; no reflector loaded");
        assert!(machine.encipher_char('A').is_err());
    }

    #[test]
    fn plugboard_is_applied_on_both_sides() {
        let mut plain = Machine::default_machine();
        let mut plugged = Machine::default_machine();
        let mut plugboard = Plugboard::new();
        plugboard.connect('T', 'Z').unwrap();
        plugged.set_plugboard(Some(plugboard));

        let a = plain.encipher("T").unwrap();
        let b = plugged.encipher("T").unwrap();
        assert_ne!(a, b);
    }
}
