//! Named rotor and reflector wirings.
//!
//! Each catalog is an explicit two-way table between an identifier such as
//! `ROTOR_I` and its letter sequence. A sequence that matches no entry is
//! reported as [`CUSTOM`].

use super::alphabet::{Letters, LettersError};
use std::fmt::Debug;

/// Kind name reported for any sequence outside the catalogs.
pub const CUSTOM: &str = "CUSTOM";

/// A closed set of named letter sequences.
pub trait CatalogKind: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every entry, in declaration order.
    const ALL: &'static [Self];

    /// Identifier used in persisted records and descriptions.
    fn identifier(self) -> &'static str;

    /// The entry's letter sequence, verbatim.
    fn letters(self) -> &'static str;

    fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.identifier() == identifier)
    }

    /// Reverse lookup by value equality.
    fn from_letters(letters: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.letters() == letters)
    }
}

/// Declare a catalog enum and its [`CatalogKind`] table.
macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($identifier:literal, $letters:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl CatalogKind for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn identifier(self) -> &'static str {
                match self {
                    $(Self::$variant => $identifier),*
                }
            }

            fn letters(self) -> &'static str {
                match self {
                    $(Self::$variant => $letters),*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.identifier())
            }
        }
    };
}

catalog! {
    /// Historical rotor wirings.
    pub enum RotorKind {
        I => ("ROTOR_I", "JGDQOXUSCAMIFRVTPNEWKBLZYH"),
        II => ("ROTOR_II", "NTZPSFBOKMWRCJDIVLAEYUXHGQ"),
        III => ("ROTOR_III", "JVIUBHTCDYAKEQZPOSGXNRMWFL"),
        /// Commercial Enigma D rotors
        IC => ("ROTOR_IC", "DMTWSILRUYQNKFEJCAZBPGXOHV"),
        IIC => ("ROTOR_IIC", "HQZGPJTMOBLNCIFDYAWVEUSRKX"),
        IIIC => ("ROTOR_IIIC", "UQNTLSZFMREHDPXKIBVYGJCWOA"),
        Ukw => ("ROTOR_UKW", "QYHOGNECVPUZTFDJAXWMKISRBL"),
        Etw => ("ROTOR_ETW", "QWERTZUIOASDFGHJKPYXCVBNML"),
    }
}

catalog! {
    /// Historical reflector wirings.
    pub enum ReflectorKind {
        A => ("REFLECTOR_A", "EJMZALYXVBWFCRQUONTSPIKHGD"),
        B => ("REFLECTOR_B", "YRUHQSLDPXNGOKMIEBFZCWVJAT"),
        C => ("REFLECTOR_C", "FVPJIAOYEDRZXWGCTKUQSBNMHL"),
        BThin => ("REFLECTOR_B_THIN", "ENKQAUYWJICOPBLMDXZVFTHRGS"),
        CThin => ("REFLECTOR_C_THIN", "RDOBJNTKVEHMLFCWZAXGYIPSUQ"),
        /// Straight-through wiring
        Etw => ("REFLECTOR_ETW", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
    }
}

/// Wiring selector for a rotor or reflector: a catalog entry or a literal sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelSpec<K> {
    Named(K),
    Custom(String),
}

pub type RotorSpec = WheelSpec<RotorKind>;
pub type ReflectorSpec = WheelSpec<ReflectorKind>;

impl<K: CatalogKind> WheelSpec<K> {
    /// Interpret `value` as a catalog identifier, falling back to a literal sequence.
    pub fn parse(value: &str) -> Self {
        match K::from_identifier(value) {
            Some(kind) => Self::Named(kind),
            None => Self::Custom(value.to_string()),
        }
    }

    /// Resolve the wiring to validated letters.
    pub fn letters(&self) -> Result<Letters, LettersError> {
        match self {
            Self::Named(kind) => Letters::parse(kind.letters()),
            Self::Custom(sequence) => Letters::parse(sequence),
        }
    }

    /// Human-readable label for error messages.
    pub(crate) fn label(&self) -> &str {
        match self {
            Self::Named(kind) => kind.identifier(),
            Self::Custom(sequence) => sequence,
        }
    }
}

impl From<RotorKind> for RotorSpec {
    fn from(kind: RotorKind) -> Self {
        Self::Named(kind)
    }
}

impl From<ReflectorKind> for ReflectorSpec {
    fn from(kind: ReflectorKind) -> Self {
        Self::Named(kind)
    }
}

impl<K: CatalogKind> From<&str> for WheelSpec<K> {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl<K: CatalogKind> From<String> for WheelSpec<K> {
    fn from(value: String) -> Self {
        match K::from_identifier(&value) {
            Some(kind) => Self::Named(kind),
            None => Self::Custom(value),
        }
    }
}

/// Catalog identifier for `letters`, or [`CUSTOM`].
pub fn kind_name<K: CatalogKind>(letters: &Letters) -> &'static str {
    K::from_letters(letters.as_str())
        .map(K::identifier)
        .unwrap_or(CUSTOM)
}
