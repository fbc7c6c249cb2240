//! Lookup key type.
//!
//! The upstream API addresses users either by screen name or by numeric ID.
//! [`LookupKey`] tags the two spaces so a screen name whose text happens to
//! equal an ID's digits can never collide with that ID in the miss cache.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a user or list owner on the upstream service.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookupKey {
    /// Screen name (handle). Compared case-insensitively by the upstream.
    Name(String),
    /// Numeric account ID.
    Id(u64),
}

impl LookupKey {
    /// Creates a screen-name key.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a numeric-ID key.
    pub fn id(id: u64) -> Self {
        Self::Id(id)
    }

    /// Renders the tagged cache key for this identifier.
    ///
    /// Screen names are trimmed and lowercased, matching the upstream's
    /// case-insensitive handle semantics.
    pub fn cache_key(&self) -> String {
        match self {
            Self::Name(name) => format!("name:{}", name.trim().to_lowercase()),
            Self::Id(id) => format!("id:{id}"),
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "name:{name}"),
            Self::Id(id) => write!(f, "id:{id}"),
        }
    }
}

impl From<&str> for LookupKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<u64> for LookupKey {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}
