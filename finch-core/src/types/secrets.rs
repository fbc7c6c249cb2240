//! Credential set for the upstream API.
//!
//! [`AppSecrets`] is sensitive and will be automatically zeroized when
//! dropped; callers should keep it scoped to client construction.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// OAuth credential set loaded from a [`SecretsStore`](crate::SecretsStore).
///
/// Each credential is individually optional; client construction decides
/// which are required. The debug flag only widens logging and is never
/// required.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct AppSecrets {
    /// Enables verbose client logging.
    pub debug: bool,
    /// OAuth consumer key.
    pub consumer_key: Option<String>,
    /// OAuth consumer secret.
    pub consumer_secret: Option<String>,
    /// OAuth access token.
    pub access_token: Option<String>,
    /// OAuth access token secret.
    pub token_secret: Option<String>,
}

impl AppSecrets {
    /// Creates a complete credential set.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            debug: false,
            consumer_key: Some(consumer_key.into()),
            consumer_secret: Some(consumer_secret.into()),
            access_token: Some(access_token.into()),
            token_secret: Some(token_secret.into()),
        }
    }

    /// Enables the debug flag.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Returns true if all four OAuth credentials are present.
    pub fn is_complete(&self) -> bool {
        self.consumer_key.is_some()
            && self.consumer_secret.is_some()
            && self.access_token.is_some()
            && self.token_secret.is_some()
    }
}

impl fmt::Debug for AppSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print credential material
        f.debug_struct("AppSecrets")
            .field("debug", &self.debug)
            .field("consumer_key", &self.consumer_key.as_deref().map(|_| "***"))
            .field(
                "consumer_secret",
                &self.consumer_secret.as_deref().map(|_| "***"),
            )
            .field("access_token", &self.access_token.as_deref().map(|_| "***"))
            .field("token_secret", &self.token_secret.as_deref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete() {
        let secrets = AppSecrets::new("ck", "cs", "at", "ts");
        assert!(secrets.is_complete());
        assert!(!secrets.debug);
    }

    #[test]
    fn test_incomplete() {
        let mut secrets = AppSecrets::default();
        secrets.consumer_key = Some("ck".into());
        assert!(!secrets.is_complete());
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let secrets = AppSecrets::new("very-secret-key", "cs", "at", "ts");
        let rendered = format!("{secrets:?}");
        assert!(!rendered.contains("very-secret-key"));
        assert!(rendered.contains("***"));
    }
}
