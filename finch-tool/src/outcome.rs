//! Typed absence reasons for lookup outcomes.

use thiserror::Error;

/// Outcome of a facade lookup: a value, or a typed reason for its absence.
///
/// Callers should treat `Err` as a normal, expected outcome; the facade
/// has already logged the diagnostics.
pub type Lookup<T> = std::result::Result<T, Absence>;

/// Why a lookup produced no result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Absence {
    /// The tool has not completed initialization; neither the cache nor
    /// the upstream was consulted.
    #[error("lookup tool not initialized")]
    NotInitialized,

    /// The identifier is a cached miss; the upstream was not contacted.
    #[error("identifier is a cached miss")]
    KnownMiss,

    /// The upstream call failed with the given taxonomy code.
    #[error("upstream failure (code {code})")]
    Upstream {
        /// Numeric code from the upstream error taxonomy.
        code: i32,
    },
}

impl Absence {
    /// Returns true if the absence came from the miss cache.
    pub fn is_known_miss(&self) -> bool {
        matches!(self, Self::KnownMiss)
    }
}
