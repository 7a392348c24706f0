//! The reference alphabet and validated letter sequences.
//!
//! Every component maps symbols through the canonical index space `A..Z`
//! (0..25). A [`Letters`] value is a sequence of the 26 letters in some
//! order, checked once at construction so the substitution code can index
//! it freely.

use crate::text::is_unique;
use std::fmt;
use thiserror::Error;

/// The canonical alphabet, in index order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols on every rotor, reflector and in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Index of `symbol` in [`ALPHABET`], or `None` for anything that is not `A..Z`.
pub fn alphabet_index(symbol: char) -> Option<usize> {
    if symbol.is_ascii_uppercase() {
        Some((symbol as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Letter of [`ALPHABET`] at `index` (taken modulo 26).
pub fn alphabet_letter(index: usize) -> char {
    (b'A' + (index % ALPHABET_LEN) as u8) as char
}

/// Reason a letter sequence was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LettersError {
    #[error("sequence has {0} symbols, expected 26")]
    WrongLength(usize),

    #[error("sequence contains {0:?}, which is not a letter")]
    NotALetter(char),

    #[error("sequence contains duplicate letter {0}")]
    Duplicate(char),
}

/// A permutation of [`ALPHABET`], stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Letters(String);

impl Letters {
    /// Parse and validate a letter sequence.
    ///
    /// Lowercase input is accepted and normalized. The sequence must hold
    /// exactly 26 letters with no repeats.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rotor_machine::core::Letters;
    ///
    /// let letters = Letters::parse("qwertyuiopasdfghjklzxcvbnm").unwrap();
    /// assert_eq!(letters.as_str(), "QWERTYUIOPASDFGHJKLZXCVBNM");
    /// assert!(Letters::parse("AABCDEFGHIJKLMNOPQRSTUVWXY").is_err());
    /// ```
    pub fn parse(sequence: &str) -> Result<Self, LettersError> {
        let count = sequence.chars().count();
        if count != ALPHABET_LEN {
            return Err(LettersError::WrongLength(count));
        }

        let mut normalized = String::with_capacity(ALPHABET_LEN);
        for symbol in sequence.chars() {
            let upper = symbol.to_ascii_uppercase();
            if alphabet_index(upper).is_none() {
                return Err(LettersError::NotALetter(symbol));
            }
            normalized.push(upper);
        }

        if !is_unique(&normalized) {
            let repeated = normalized
                .char_indices()
                .find(|&(at, c)| normalized[..at].contains(c))
                .map_or('?', |(_, c)| c);
            return Err(LettersError::Duplicate(repeated));
        }

        Ok(Self(normalized))
    }

    /// Wrap a catalog sequence without re-validating it.
    ///
    /// Catalog sequences are checked by the catalog tests.
    pub(crate) fn catalog(sequence: &'static str) -> Self {
        Self(sequence.to_string())
    }

    /// Letter at `index` (taken modulo 26).
    pub fn at(&self, index: usize) -> char {
        self.0.as_bytes()[index % ALPHABET_LEN] as char
    }

    /// Position of `symbol` in the sequence.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.0.chars().position(|c| c == symbol)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
