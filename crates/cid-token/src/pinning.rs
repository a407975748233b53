//! The upload boundary: pin receipts and gateway URLs.
//!
//! Image uploads are handled by an external pinning endpoint; this module
//! only types its response and derives the public URL. No HTTP happens
//! here.

use serde::{Deserialize, Serialize};

use crate::codec::{identifier_to_token_id, TokenId};
use crate::error::InvalidInput;

/// Response payload of the image upload endpoint.
///
/// The identifier travels under the wire name `ipfsHash`, which is the
/// field the pinning service and the front-end exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinReceipt {
    /// The content identifier the file was pinned under.
    #[serde(rename = "ipfsHash")]
    pub identifier: String,
    /// Public gateway URL serving the pinned content.
    pub url: String,
}

impl PinReceipt {
    /// Builds a receipt for an identifier pinned behind a gateway.
    pub fn new(identifier: &str, gateway: &str) -> Self {
        Self {
            url: gateway_url(gateway, identifier),
            identifier: identifier.to_string(),
        }
    }

    /// The token id for the pinned identifier, as minted by the contract.
    pub fn token_id(&self) -> Result<TokenId, InvalidInput> {
        identifier_to_token_id(&self.identifier)
    }
}

/// Joins a gateway base and an identifier into a public content URL.
///
/// A trailing slash on the gateway base is tolerated.
pub fn gateway_url(gateway: &str, identifier: &str) -> String {
    format!("{}/ipfs/{}", gateway.trim_end_matches('/'), identifier)
}
