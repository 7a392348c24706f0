//! Symmetric pairwise letter substitution.

use super::alphabet::alphabet_index;
use super::error::EngineError;
use std::collections::BTreeMap;
use std::fmt;

/// Plugboard wiring. Connections are always stored in both directions.
///
/// All symbols are normalized to uppercase. Only the letters A..Z can be
/// wired; everything else passes through [`Plugboard::transpose`] unchanged.
///
/// # Example
///
/// ```rust
/// use rotor_machine::core::Plugboard;
///
/// let mut plugboard = Plugboard::new();
/// plugboard.connect('A', 'B').unwrap();
/// assert_eq!(plugboard.transpose("ABCDEF"), "BACDEF");
///
/// plugboard.disconnect('B').unwrap();
/// assert_eq!(plugboard.transpose("abcdef"), "ABCDEF");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plugboard {
    connections: BTreeMap<char, char>,
}

impl Plugboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire `from` and `to` together.
    ///
    /// Fails without changing anything if either symbol is already wired,
    /// if the two are the same letter, or if either is not a letter.
    pub fn connect(&mut self, from: char, to: char) -> Result<(), EngineError> {
        let from = normalize(from)?;
        let to = normalize(to)?;

        if self.is_connected(from) {
            return Err(EngineError::PlugboardConflict(format!(
                "{} is already connected",
                from
            )));
        }
        if self.is_connected(to) {
            return Err(EngineError::PlugboardConflict(format!(
                "{} is already connected",
                to
            )));
        }
        if from == to {
            return Err(EngineError::PlugboardConflict(format!(
                "{} cannot be connected to itself",
                from
            )));
        }

        self.connections.insert(from, to);
        self.connections.insert(to, from);
        tracing::debug!("Plugboard connected {} <-> {}", from, to);
        Ok(())
    }

    /// Remove the plug at `symbol`, freeing its partner as well.
    pub fn disconnect(&mut self, symbol: char) -> Result<(), EngineError> {
        let symbol = symbol.to_ascii_uppercase();
        let partner = self
            .connections
            .remove(&symbol)
            .ok_or(EngineError::PlugboardNotConnected(symbol))?;
        self.connections.remove(&partner);
        tracing::debug!("Plugboard disconnected {} <-> {}", symbol, partner);
        Ok(())
    }

    pub fn is_connected(&self, symbol: char) -> bool {
        self.connections.contains_key(&symbol.to_ascii_uppercase())
    }

    /// The letter wired to `symbol`, if any.
    pub fn partner(&self, symbol: char) -> Option<char> {
        self.connections.get(&symbol.to_ascii_uppercase()).copied()
    }

    /// Substitute a single symbol (after uppercasing).
    pub fn transpose_char(&self, symbol: char) -> char {
        let symbol = symbol.to_ascii_uppercase();
        self.connections.get(&symbol).copied().unwrap_or(symbol)
    }

    /// Substitute every character of `text` (after uppercasing).
    pub fn transpose(&self, text: &str) -> String {
        text.chars().map(|c| self.transpose_char(c)).collect()
    }

    /// Every stored direction, ordered by the first symbol.
    pub fn connections(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.connections.iter().map(|(from, to)| (*from, *to))
    }

    /// Number of plugs (each plug joins two letters).
    pub fn len(&self) -> usize {
        self.connections.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

fn normalize(symbol: char) -> Result<char, EngineError> {
    let upper = symbol.to_ascii_uppercase();
    match alphabet_index(upper) {
        Some(_) => Ok(upper),
        None => Err(EngineError::InvalidSymbol(symbol)),
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a plugboard with connections: {{")?;
        for (i, (from, to)) in self.connections().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", from, to)?;
        }
        write!(f, "}}")
    }
}
