//! Negative-result cache for the finch lookup facade.
//!
//! Bounded in-memory cache with TTL expiration, remembering which
//! identifiers are known not to resolve upstream.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod cache;

pub use cache::{MissCache, MissCacheConfig, MissCacheStats};
