//! Text helpers for cipher output.
//!
//! Ciphertext is traditionally written in groups of five letters. These
//! functions do that grouping and related whitespace handling.

use std::collections::HashSet;

/// Default group width for ciphertext.
pub const BLOCK_SIZE: usize = 5;

/// Remove every whitespace character.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether no character occurs twice in `text`.
pub fn is_unique(text: &str) -> bool {
    let mut seen = HashSet::new();
    text.chars().all(|c| seen.insert(c))
}

/// Split `text` into chunks of `size` characters, ignoring whitespace.
///
/// The last chunk may be shorter. A `size` of zero is treated as one.
pub fn blocks(text: &str, size: usize) -> Vec<String> {
    let size = size.max(1);
    let stripped: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    stripped
        .chunks(size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Regroup `text` into space-separated chunks of `size` characters.
///
/// # Example
///
/// ```rust
/// use rotor_machine::text::in_blocks_of;
///
/// assert_eq!(in_blocks_of("THIS IS A TEST", 5), "THISI SATES T");
/// ```
pub fn in_blocks_of(text: &str, size: usize) -> String {
    blocks(text, size).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "THIS IS A TEST OF IN BLOCKS OF";

    #[test]
    fn groups_in_fives_by_default_width() {
        assert_eq!(in_blocks_of(TEXT, BLOCK_SIZE), "THISI SATES TOFIN BLOCK SOF");
    }

    #[test]
    fn groups_in_other_widths() {
        assert_eq!(in_blocks_of(TEXT, 6), "THISIS ATESTO FINBLO CKSOF");
    }

    #[test]
    fn returns_chunks() {
        let chunks = blocks(TEXT, 5);
        assert_eq!(chunks, vec!["THISI", "SATES", "TOFIN", "BLOCK", "SOF"]);
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(blocks("   ", 5).is_empty());
        assert_eq!(in_blocks_of("", 5), "");
    }

    #[test]
    fn detects_repeated_characters() {
        assert!(is_unique("QWERTYUIOPLKJHGFDSAZXCVBNM"));
        assert!(is_unique(""));
        assert!(!is_unique("ABCA"));
        assert!(is_unique("aA"));
    }

    #[test]
    fn strips_all_whitespace() {
        assert_eq!(strip_whitespace(" A B\tC\nD "), "ABCD");
    }
}
