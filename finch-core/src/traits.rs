//! Collaborator traits for finch.
//!
//! These traits define the seams between the facade and its collaborators,
//! enabling alternative implementations and call-counting test doubles.

use async_trait::async_trait;

use crate::error::{Result, UpstreamResult};
use crate::types::{AppSecrets, LookupKey, ResolvedPaging, Status, UserProfile};

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM CLIENT TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface to the upstream social API.
///
/// Each operation accepts a [`LookupKey`], folding the upstream's by-name
/// and by-id endpoint pairs onto one method. Failures carry the upstream
/// taxonomy's numeric code so callers can distinguish a confirmed miss
/// from a transient fault.
///
/// Implementations might use:
/// - A signed HTTP client (production)
/// - A canned-response double (testing)
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Fetches the most recent statuses posted by the user.
    async fn user_timeline(
        &self,
        key: &LookupKey,
        paging: ResolvedPaging,
    ) -> UpstreamResult<Vec<Status>>;

    /// Fetches the user's profile.
    async fn show_user(&self, key: &LookupKey) -> UpstreamResult<UserProfile>;

    /// Fetches the first page (up to 20) of the user's followers.
    async fn followers_list(&self, key: &LookupKey) -> UpstreamResult<Vec<UserProfile>>;

    /// Fetches the first page (up to 20) of members of the owner's list.
    async fn list_members(
        &self,
        owner: &LookupKey,
        slug: &str,
    ) -> UpstreamResult<Vec<UserProfile>>;

    /// Fetches statuses posted to the owner's list.
    async fn list_statuses(
        &self,
        owner: &LookupKey,
        slug: &str,
        paging: ResolvedPaging,
    ) -> UpstreamResult<Vec<Status>>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECRETS STORE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for loading API credentials from the host platform.
///
/// `Ok(None)` means no configuration is installed; individual fields of
/// the returned [`AppSecrets`] may still be absent, in which case client
/// construction decides whether to proceed. The returned secrets are
/// zeroized when dropped, so callers should keep them scoped to
/// initialization.
#[async_trait]
pub trait SecretsStore: Send + Sync {
    /// Loads the credential set, if one is configured.
    async fn load(&self) -> Result<Option<AppSecrets>>;
}
