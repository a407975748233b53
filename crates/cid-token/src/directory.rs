//! The minted-token to identifier map kept by the marketplace front-end.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::codec::{token_id_to_identifier, TokenId};

/// A map from token ids to the content identifiers they were minted from.
///
/// Keys are the decimal rendering of the id, which is the shape the
/// persisted JSON uses: a bare `{ "<id>": "<identifier>" }` object. Readers
/// that miss re-encode the id instead, see [`TokenDirectory::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDirectory {
    entries: HashMap<String, String>,
}

impl TokenDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the identifier a token id was minted from.
    pub fn record(&mut self, token_id: &TokenId, identifier: &str) {
        self.entries
            .insert(token_id.to_string(), identifier.to_string());
    }

    /// Returns the recorded identifier for a token id, if any.
    pub fn lookup(&self, token_id: &TokenId) -> Option<&str> {
        self.entries
            .get(&token_id.to_string())
            .map(String::as_str)
    }

    /// Returns the identifier for a token id, re-encoding when nothing was
    /// recorded.
    pub fn resolve(&self, token_id: &TokenId) -> String {
        match self.lookup(token_id) {
            Some(identifier) => identifier.to_string(),
            None => token_id_to_identifier(token_id),
        }
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
