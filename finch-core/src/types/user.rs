//! User profile type.

use serde::{Deserialize, Serialize};

/// A user profile from the upstream service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique account ID.
    pub id: u64,
    /// Screen name (handle), without any leading marker.
    #[serde(default)]
    pub screen_name: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Profile bio, when present.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form location string, when present.
    #[serde(default)]
    pub location: Option<String>,
    /// Avatar URL, when present.
    #[serde(default)]
    pub profile_image_url_https: Option<String>,
    /// Follower count.
    #[serde(default)]
    pub followers_count: u64,
    /// Following count.
    #[serde(default)]
    pub friends_count: u64,
    /// Lifetime post count.
    #[serde(default)]
    pub statuses_count: u64,
    /// Whether the account carries the verified badge.
    #[serde(default)]
    pub verified: bool,
}
