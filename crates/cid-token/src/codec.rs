//! Decode, encode, and decimal parsing for token ids.
//!
//! A content identifier is positional base58: after the fixed `Qm` prefix,
//! each symbol is a digit, most significant first. Decoding accumulates
//! digits into an unbounded integer; encoding is repeated division. Both
//! sides read the same symbol table, which keeps them inverses.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::alphabet::{self, BASE};
use crate::error::InvalidInput;
use crate::limits::IDENTIFIER_PREFIX;

/// The numeric form of a content identifier.
///
/// This is the universal identifier type between the codec and any
/// contract layer; minting and ownership lookups are keyed by it.
/// Arbitrary precision is required: a 44-symbol identifier body exceeds
/// 2^256.
pub type TokenId = BigUint;

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a base58 content identifier into its token id.
///
/// One leading `Qm` prefix is stripped when present; bodies stored without
/// the prefix decode the same way. The prefix alone has an empty body and
/// decodes to zero.
pub fn identifier_to_token_id(identifier: &str) -> Result<TokenId, InvalidInput> {
    if identifier.is_empty() {
        return Err(InvalidInput::EmptyIdentifier);
    }

    let body = identifier
        .strip_prefix(IDENTIFIER_PREFIX)
        .unwrap_or(identifier);

    let mut value = TokenId::zero();
    for c in body.chars() {
        let digit =
            alphabet::symbol_value(c).ok_or(InvalidInput::InvalidIdentifierChar { char: c })?;
        value = value * BASE + digit;
    }
    Ok(value)
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a token id as a prefixed base58 content identifier.
///
/// Zero maps to the prefix plus the first alphabet symbol; the division
/// loop alone would render it as an empty body. Infallible: the id type
/// is non-negative and unbounded by construction.
pub fn token_id_to_identifier(token_id: &TokenId) -> String {
    let mut identifier = String::from(IDENTIFIER_PREFIX);
    if token_id.is_zero() {
        identifier.push(alphabet::symbol(0));
        return identifier;
    }

    let digits = token_id.to_radix_le(BASE);
    identifier.reserve(digits.len());
    for &digit in digits.iter().rev() {
        identifier.push(alphabet::symbol(digit));
    }
    identifier
}

// =============================================================================
// PARSING
// =============================================================================

/// Parses the decimal rendering of a token id.
///
/// Accepts non-negative integers of any size, leading zeros included.
/// Negative, fractional, and non-decimal inputs are rejected.
pub fn parse_token_id(input: &str) -> Result<TokenId, InvalidInput> {
    input
        .parse::<TokenId>()
        .map_err(|_| InvalidInput::InvalidTokenId {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_identifier() {
        let token_id = identifier_to_token_id("QmABC").unwrap();
        // 9*58^2 + 10*58 + 11
        assert_eq!(token_id, TokenId::from(30867u32));
    }

    #[test]
    fn test_decode_accepts_prefixless_body() {
        assert_eq!(
            identifier_to_token_id("ABC").unwrap(),
            identifier_to_token_id("QmABC").unwrap()
        );
    }

    #[test]
    fn test_decode_strips_one_prefix_only() {
        // The remaining "Qm1" decodes as ordinary symbols: 23*58^2 + 44*58 + 0
        let token_id = identifier_to_token_id("QmQm1").unwrap();
        assert_eq!(token_id, TokenId::from(79924u32));
    }

    #[test]
    fn test_decode_prefix_alone_is_zero() {
        assert_eq!(identifier_to_token_id("Qm").unwrap(), TokenId::zero());
        assert_eq!(identifier_to_token_id("Qm1").unwrap(), TokenId::zero());
        assert_eq!(identifier_to_token_id("1").unwrap(), TokenId::zero());
    }

    #[test]
    fn test_decode_empty_is_error() {
        assert_eq!(
            identifier_to_token_id(""),
            Err(InvalidInput::EmptyIdentifier)
        );
    }

    #[test]
    fn test_decode_rejects_ambiguous_characters() {
        for c in ['0', 'O', 'I', 'l'] {
            let input = format!("Qm{}abc", c);
            assert_eq!(
                identifier_to_token_id(&input),
                Err(InvalidInput::InvalidIdentifierChar { char: c })
            );
        }
    }

    #[test]
    fn test_decode_names_first_bad_character() {
        assert_eq!(
            identifier_to_token_id("QmZdD AvqR"),
            Err(InvalidInput::InvalidIdentifierChar { char: ' ' })
        );
    }

    #[test]
    fn test_decode_leading_zero_symbols_carry_no_weight() {
        assert_eq!(
            identifier_to_token_id("Qm11z").unwrap(),
            identifier_to_token_id("Qmz").unwrap()
        );
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(token_id_to_identifier(&TokenId::zero()), "Qm1");
    }

    #[test]
    fn test_encode_small_values() {
        assert_eq!(token_id_to_identifier(&TokenId::from(1u32)), "Qm2");
        assert_eq!(token_id_to_identifier(&TokenId::from(57u32)), "Qmz");
        assert_eq!(token_id_to_identifier(&TokenId::from(58u32)), "Qm21");
        assert_eq!(token_id_to_identifier(&TokenId::from(30867u32)), "QmABC");
    }

    #[test]
    fn test_real_identifier_roundtrip() {
        let identifier = "QmZdDAvqRJxENdcbLERhxBepfTqWM7y1DdDKxKiWTjctRt";
        let token_id = identifier_to_token_id(identifier).unwrap();
        assert_eq!(token_id_to_identifier(&token_id), identifier);
    }

    #[test]
    fn test_decode_matches_decimal_rendering() {
        let token_id =
            identifier_to_token_id("QmXoypizjW3WknFiJnKLwHCnL72vedxjQkDDP1mXWo6uco").unwrap();
        assert_eq!(
            token_id.to_string(),
            "207059589925893219754740926561711862772318032390704808288076586923406693410740"
        );
    }

    #[test]
    fn test_parse_token_id_decimal() {
        assert_eq!(parse_token_id("12345").unwrap(), TokenId::from(12345u32));
        assert_eq!(parse_token_id("007").unwrap(), TokenId::from(7u32));
        assert_eq!(parse_token_id("0").unwrap(), TokenId::zero());
    }

    #[test]
    fn test_parse_token_id_beyond_machine_width() {
        let decimal = "207059589925893219754740926561711862772318032390704808288076586923406693410740";
        let token_id = parse_token_id(decimal).unwrap();
        assert_eq!(token_id.to_string(), decimal);
        assert_eq!(
            token_id_to_identifier(&token_id),
            "QmXoypizjW3WknFiJnKLwHCnL72vedxjQkDDP1mXWo6uco"
        );
    }

    #[test]
    fn test_parse_token_id_rejects_garbage() {
        for input in ["", "-7", "12.5", "0x1F", "seven"] {
            assert_eq!(
                parse_token_id(input),
                Err(InvalidInput::InvalidTokenId {
                    input: input.to_string()
                })
            );
        }
    }
}
