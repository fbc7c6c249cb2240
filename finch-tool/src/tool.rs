//! The lookup facade.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use tracing::{debug, error, info, warn};

use finch_cache::MissCache;
use finch_client::{ClientConfig, RestClient};
use finch_core::error::{FinchError, Result, UpstreamResult};
use finch_core::traits::{SecretsStore, UpstreamClient};
use finch_core::types::{LookupKey, Paging, Status, UserProfile};

use crate::outcome::{Absence, Lookup};

/// Failure-tolerant lookup facade over the upstream social API.
///
/// The tool starts `Uninitialized`; a single [`init`](Self::init) attempt
/// per process lifetime may move it to `Ready`. A failed attempt leaves it
/// permanently uninitialized, in which case every lookup resolves to
/// [`Absence::NotInitialized`] without touching the cache or the upstream.
///
/// The miss cache is injected at construction and shared; the tool itself
/// is `Send + Sync` and takes no cross-call locks.
pub struct FinchTool {
    cache: Arc<MissCache>,
    client: OnceLock<Arc<dyn UpstreamClient>>,
    init_attempted: AtomicBool,
}

impl FinchTool {
    /// Creates an uninitialized tool sharing the given miss cache.
    pub fn new(cache: Arc<MissCache>) -> Self {
        Self {
            cache,
            client: OnceLock::new(),
            init_attempted: AtomicBool::new(false),
        }
    }

    /// One-time initialization: loads credentials and constructs the
    /// upstream client.
    ///
    /// Credentials are zeroized as soon as this returns, success or
    /// failure. Concurrent or repeated invocations lose the latch and get
    /// [`FinchError::AlreadyInitialized`].
    pub async fn init(&self, secrets_store: &dyn SecretsStore) -> Result<()> {
        self.claim_latch()?;
        debug!("lookup tool starting up");

        let secrets = match secrets_store.load().await {
            Ok(Some(secrets)) => secrets,
            Ok(None) => {
                error!("no credentials configured");
                return Err(FinchError::SecretsUnavailable);
            }
            Err(e) => {
                error!("failed to load credentials: {e}");
                return Err(e);
            }
        };

        let config = ClientConfig::default().with_debug(secrets.debug);
        match RestClient::new(config, &secrets) {
            Ok(client) => self.install(Arc::new(client)),
            Err(e) => {
                error!("failed to construct upstream client: {e}");
                Err(e)
            }
        }
    }

    /// One-time initialization with an already-constructed client.
    ///
    /// Intended for embedding hosts that build their own transport, and
    /// for tests. Subject to the same single-attempt latch as
    /// [`init`](Self::init).
    pub fn init_with_client(&self, client: Arc<dyn UpstreamClient>) -> Result<()> {
        self.claim_latch()?;
        self.install(client)
    }

    fn claim_latch(&self) -> Result<()> {
        if self
            .init_attempted
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("initialization invoked more than once, ignoring");
            return Err(FinchError::AlreadyInitialized);
        }
        Ok(())
    }

    fn install(&self, client: Arc<dyn UpstreamClient>) -> Result<()> {
        self.client
            .set(client)
            .map_err(|_| FinchError::AlreadyInitialized)?;
        info!("lookup tool started up");
        Ok(())
    }

    /// Returns true once initialization has succeeded.
    pub fn ready(&self) -> bool {
        self.client.get().is_some()
    }

    /// Returns the shared upstream client handle, when ready.
    ///
    /// Use with care: calls made through the raw handle bypass the miss
    /// cache.
    pub fn client(&self) -> Option<Arc<dyn UpstreamClient>> {
        if !self.ready() {
            warn!("lookup tool not initialized");
        }
        self.client.get().cloned()
    }

    /// Host shutdown hook. Idempotent; the cache simply ages out.
    pub fn shutdown(&self) {
        info!("lookup tool shutting down");
    }

    /// Common lookup path: init guard, miss-cache check, upstream call,
    /// error translation, and miss poisoning on the not-found code.
    async fn run<T, F, Fut>(&self, key: &LookupKey, op: &'static str, call: F) -> Lookup<T>
    where
        F: FnOnce(Arc<dyn UpstreamClient>) -> Fut,
        Fut: Future<Output = UpstreamResult<T>>,
    {
        let Some(client) = self.client.get().cloned() else {
            warn!(op, "lookup tool not initialized");
            return Err(Absence::NotInitialized);
        };

        let cache_key = key.cache_key();
        if self.cache.get(&cache_key) {
            debug!(op, key = %key, "known miss, skipping upstream call");
            return Err(Absence::KnownMiss);
        }

        match call(client).await {
            Ok(value) => Ok(value),
            Err(err) => {
                error!(op, key = %key, code = err.code, "upstream call failed: {}", err.message);
                if err.is_not_found() {
                    debug!(key = %key, "recording miss");
                    self.cache.put(&cache_key, true);
                }
                Err(Absence::Upstream { code: err.code })
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // TIMELINE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Fetches the user's recent statuses. Unset or zero paging fields
    /// default to page 1, twenty per page.
    pub async fn user_timeline(&self, key: &LookupKey, paging: Paging) -> Lookup<Vec<Status>> {
        let paging = paging.resolve();
        self.run(key, "user_timeline", |client| async move {
            client.user_timeline(key, paging).await
        })
        .await
    }

    /// Timeline lookup by screen name.
    pub async fn user_timeline_by_name(&self, name: &str, paging: Paging) -> Lookup<Vec<Status>> {
        self.user_timeline(&LookupKey::name(name), paging).await
    }

    /// Timeline lookup by numeric ID.
    pub async fn user_timeline_by_id(&self, id: u64, paging: Paging) -> Lookup<Vec<Status>> {
        self.user_timeline(&LookupKey::id(id), paging).await
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // PROFILE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Fetches the user's profile.
    pub async fn show_user(&self, key: &LookupKey) -> Lookup<UserProfile> {
        self.run(key, "show_user", |client| async move {
            client.show_user(key).await
        })
        .await
    }

    /// Profile lookup by screen name.
    pub async fn show_user_by_name(&self, name: &str) -> Lookup<UserProfile> {
        self.show_user(&LookupKey::name(name)).await
    }

    /// Profile lookup by numeric ID.
    pub async fn show_user_by_id(&self, id: u64) -> Lookup<UserProfile> {
        self.show_user(&LookupKey::id(id)).await
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // FOLLOWERS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Fetches up to twenty of the user's followers.
    pub async fn followers_list(&self, key: &LookupKey) -> Lookup<Vec<UserProfile>> {
        self.run(key, "followers_list", |client| async move {
            client.followers_list(key).await
        })
        .await
    }

    /// Follower lookup by screen name.
    pub async fn followers_list_by_name(&self, name: &str) -> Lookup<Vec<UserProfile>> {
        self.followers_list(&LookupKey::name(name)).await
    }

    /// Follower lookup by numeric ID.
    pub async fn followers_list_by_id(&self, id: u64) -> Lookup<Vec<UserProfile>> {
        self.followers_list(&LookupKey::id(id)).await
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LISTS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Fetches up to twenty members of the owner's list.
    pub async fn list_members(&self, owner: &LookupKey, slug: &str) -> Lookup<Vec<UserProfile>> {
        self.run(owner, "list_members", |client| async move {
            client.list_members(owner, slug).await
        })
        .await
    }

    /// List-member lookup by owner screen name.
    pub async fn list_members_by_name(&self, name: &str, slug: &str) -> Lookup<Vec<UserProfile>> {
        self.list_members(&LookupKey::name(name), slug).await
    }

    /// List-member lookup by owner ID.
    pub async fn list_members_by_id(&self, id: u64, slug: &str) -> Lookup<Vec<UserProfile>> {
        self.list_members(&LookupKey::id(id), slug).await
    }

    /// Fetches statuses posted to the owner's list.
    pub async fn list_statuses(
        &self,
        owner: &LookupKey,
        slug: &str,
        paging: Paging,
    ) -> Lookup<Vec<Status>> {
        let paging = paging.resolve();
        self.run(owner, "list_statuses", |client| async move {
            client.list_statuses(owner, slug, paging).await
        })
        .await
    }

    /// List-status lookup by owner screen name.
    pub async fn list_statuses_by_name(
        &self,
        name: &str,
        slug: &str,
        paging: Paging,
    ) -> Lookup<Vec<Status>> {
        self.list_statuses(&LookupKey::name(name), slug, paging)
            .await
    }

    /// List-status lookup by owner ID.
    pub async fn list_statuses_by_id(
        &self,
        id: u64,
        slug: &str,
        paging: Paging,
    ) -> Lookup<Vec<Status>> {
        self.list_statuses(&LookupKey::id(id), slug, paging).await
    }
}
