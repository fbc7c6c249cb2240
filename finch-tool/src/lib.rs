//! # Finch Lookup Tool
//!
//! Failure-tolerant lookup facade over the upstream social API, intended
//! to be embedded in a host content platform and called from many
//! concurrent render tasks.
//!
//! Every operation short-circuits against a shared [`MissCache`] of
//! identifiers the upstream has confirmed not to exist, so repeated
//! renders never re-issue doomed API calls inside the caching window.
//! Failures never escape as errors: each lookup resolves to either a
//! value or a typed [`Absence`] reason.
//!
//! ## Example
//!
//! ```rust,ignore
//! let cache = Arc::new(MissCache::new());
//! let tool = FinchTool::new(cache);
//! tool.init(&EnvSecrets).await?;
//!
//! match tool.show_user_by_name("alice").await {
//!     Ok(profile) => render(profile),
//!     Err(absence) => tracing::debug!(%absence, "no result"),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod outcome;
mod secrets;
mod tool;

pub use finch_cache::{MissCache, MissCacheConfig};
pub use outcome::{Absence, Lookup};
pub use secrets::{EnvSecrets, StaticSecrets};
pub use tool::FinchTool;
