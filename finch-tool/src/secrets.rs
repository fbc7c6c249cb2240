//! Built-in secrets stores.
//!
//! [`StaticSecrets`] wraps an in-process credential set, for tests and
//! hosts that manage configuration themselves. [`EnvSecrets`] reads the
//! well-known names from the process environment.

use async_trait::async_trait;
use tracing::debug;

use finch_core::constants::{
    SECRET_ACCESS_TOKEN, SECRET_CONSUMER_KEY, SECRET_CONSUMER_SECRET, SECRET_DEBUG,
    SECRET_TOKEN_SECRET,
};
use finch_core::error::Result;
use finch_core::traits::SecretsStore;
use finch_core::types::AppSecrets;

/// Secrets store backed by a value supplied at construction.
pub struct StaticSecrets {
    secrets: Option<AppSecrets>,
}

impl StaticSecrets {
    /// Creates a store that yields the given credential set.
    pub fn new(secrets: AppSecrets) -> Self {
        Self {
            secrets: Some(secrets),
        }
    }

    /// Creates a store with no configuration installed.
    pub fn empty() -> Self {
        Self { secrets: None }
    }
}

#[async_trait]
impl SecretsStore for StaticSecrets {
    async fn load(&self) -> Result<Option<AppSecrets>> {
        Ok(self.secrets.clone())
    }
}

/// Secrets store reading the well-known names from environment variables.
///
/// Yields `None` when no credential variable is set at all; individual
/// variables may still be absent.
pub struct EnvSecrets;

#[async_trait]
impl SecretsStore for EnvSecrets {
    async fn load(&self) -> Result<Option<AppSecrets>> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let secrets = AppSecrets {
            debug: var(SECRET_DEBUG).map(|v| v == "true").unwrap_or(false),
            consumer_key: var(SECRET_CONSUMER_KEY),
            consumer_secret: var(SECRET_CONSUMER_SECRET),
            access_token: var(SECRET_ACCESS_TOKEN),
            token_secret: var(SECRET_TOKEN_SECRET),
        };

        if secrets.consumer_key.is_none()
            && secrets.consumer_secret.is_none()
            && secrets.access_token.is_none()
            && secrets.token_secret.is_none()
        {
            debug!("no credential variables set");
            return Ok(None);
        }
        Ok(Some(secrets))
    }
}
