//! The base58 symbol table shared by decode and encode.
//!
//! Content identifiers use the 58-character alphabet common to
//! content-addressed storage: digits and ASCII letters minus the visually
//! ambiguous 0, O, I, and l. A symbol's index in the table is its numeric
//! value, so decode and encode stay inverses as long as both read this table.

use lazy_static::lazy_static;

/// The 58 symbols in value order.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The radix of the encoding.
pub const BASE: u32 = ALPHABET.len() as u32;

lazy_static! {
    /// Reverse lookup from ASCII byte to symbol value; -1 marks bytes
    /// outside the alphabet.
    static ref SYMBOL_VALUES: [i8; 128] = {
        let mut table = [-1i8; 128];
        for (value, &byte) in ALPHABET.iter().enumerate() {
            table[byte as usize] = value as i8;
        }
        table
    };
}

/// Returns the numeric value of a symbol, or `None` for any character
/// outside the alphabet.
pub fn symbol_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match SYMBOL_VALUES[c as usize] {
        -1 => None,
        value => Some(value as u8),
    }
}

/// Returns the symbol for a value in `0..BASE`.
///
/// Callers pass base-58 digits, which are below `BASE` by construction.
pub fn symbol(value: u8) -> char {
    ALPHABET[value as usize] as char
}

/// Returns whether a character is a member of the alphabet.
pub fn contains(c: char) -> bool {
    symbol_value(c).is_some()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_alphabet_has_58_unique_symbols() {
        let symbols: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(symbols.len(), 58);
        assert_eq!(BASE, 58);
    }

    #[test]
    fn test_excludes_ambiguous_characters() {
        for c in ['0', 'O', 'I', 'l'] {
            assert!(!contains(c), "{} should not be in the alphabet", c);
            assert_eq!(symbol_value(c), None);
        }
    }

    #[test]
    fn test_symbol_and_value_are_inverses() {
        for (value, &byte) in ALPHABET.iter().enumerate() {
            assert_eq!(symbol_value(byte as char), Some(value as u8));
            assert_eq!(symbol(value as u8), byte as char);
        }
    }

    #[test]
    fn test_known_positions() {
        assert_eq!(symbol_value('1'), Some(0));
        assert_eq!(symbol_value('9'), Some(8));
        assert_eq!(symbol_value('A'), Some(9));
        assert_eq!(symbol_value('Z'), Some(32));
        assert_eq!(symbol_value('a'), Some(33));
        assert_eq!(symbol_value('z'), Some(57));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert_eq!(symbol_value('é'), None);
        assert_eq!(symbol_value('到'), None);
        assert_eq!(symbol_value('\u{0}'), None);
    }
}
