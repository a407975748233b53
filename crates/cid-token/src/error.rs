//! Error types for identifier and token id conversion.

use thiserror::Error;

/// Raised when an input cannot be interpreted as an identifier or token id.
///
/// Conversion failures are deterministic and non-transient: a malformed
/// input never succeeds on retry, so errors propagate to the caller
/// unrecovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The content identifier was empty.
    #[error("content identifier is empty")]
    EmptyIdentifier,

    /// The content identifier contained a character outside the base58
    /// alphabet.
    #[error("invalid character in content identifier: {char}")]
    InvalidIdentifierChar {
        /// The first offending character.
        char: char,
    },

    /// The token id string was not a non-negative decimal integer.
    #[error("invalid token id: {input:?}")]
    InvalidTokenId {
        /// The rejected input.
        input: String,
    },
}
