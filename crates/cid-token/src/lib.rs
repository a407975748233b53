//! Base58 content identifier to token id conversion for NFT marketplaces.
//!
//! This crate converts between the legacy fixed-prefix content identifiers
//! used by content-addressed storage (the `Qm...` base58 form) and the
//! unbounded-precision integers used as on-chain token identifiers, and
//! renders those integers as short display labels.
//!
//! # Overview
//!
//! The conversion is positional base conversion in radix 58:
//! - **Decode**: strip one `Qm` prefix if present, then accumulate each
//!   symbol's value most significant first
//! - **Encode**: repeated division by 58, prefix prepended, with zero mapped
//!   to `Qm1` explicitly
//! - **Format**: collapse large ids to `12.3k` / `4.5M` style labels, or
//!   first and last digits around an ellipsis
//!
//! Token ids are arbitrary precision throughout. A 44-symbol identifier body
//! already exceeds 2^256, so no fixed-width integer type is safe.
//!
//! # Quick Start
//!
//! ```rust
//! use cid_token::{format_token_id, identifier_to_token_id, token_id_to_identifier};
//!
//! // Decode a pinned identifier into the id the contract mints under
//! let token_id =
//!     identifier_to_token_id("QmZdDAvqRJxENdcbLERhxBepfTqWM7y1DdDKxKiWTjctRt").unwrap();
//!
//! // The identifier is recoverable from the id
//! let identifier = token_id_to_identifier(&token_id);
//! assert_eq!(identifier, "QmZdDAvqRJxENdcbLERhxBepfTqWM7y1DdDKxKiWTjctRt");
//!
//! // Large ids collapse to a short display label
//! assert_eq!(format_token_id(&token_id), "2192...5223");
//! ```
//!
//! # Modules
//!
//! - [`codec`]: decode, encode, and decimal parsing for token ids
//! - [`format`]: compact display labels
//! - [`alphabet`]: the shared 58-symbol table
//! - [`directory`]: the minted-token to identifier map
//! - [`pinning`]: upload receipts and gateway URLs
//! - [`error`]: error types
//! - [`limits`]: prefix and display threshold constants
//!
//! # Validation
//!
//! Only alphabet membership is checked when decoding. The codec does not
//! verify that an identifier is a well-formed multihash, and it supports
//! only the fixed-prefix legacy base58 format.

pub mod alphabet;
pub mod codec;
pub mod directory;
pub mod error;
pub mod format;
pub mod limits;
pub mod pinning;

// Re-export commonly used items at crate root
pub use codec::{identifier_to_token_id, parse_token_id, token_id_to_identifier, TokenId};
pub use directory::TokenDirectory;
pub use error::InvalidInput;
pub use format::format_token_id;
pub use pinning::{gateway_url, PinReceipt};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
