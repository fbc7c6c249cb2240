//! Status (post) type.

use serde::{Deserialize, Serialize};

use crate::types::UserProfile;

/// A single post from the upstream service.
///
/// Deserialized straight from the upstream JSON; fields the payload omits
/// fall back to their defaults, and unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// Unique status ID.
    pub id: u64,
    /// The post body.
    #[serde(default)]
    pub text: String,
    /// Creation timestamp, in the upstream's wire format.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Author profile, when the endpoint embeds one.
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// Repost count.
    #[serde(default)]
    pub retweet_count: u64,
    /// Like count.
    #[serde(default)]
    pub favorite_count: u64,
}
