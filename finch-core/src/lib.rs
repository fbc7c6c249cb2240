//! # Finch Core
//!
//! Core types, errors, and traits for the finch lookup facade.
//!
//! This crate provides the foundational building blocks used by all other
//! finch crates:
//!
//! - **Types**: Lookup keys, pagination, statuses, profiles, and credentials
//! - **Errors**: Initialization errors plus the structured upstream error
//! - **Constants**: Upstream error codes and pagination defaults
//! - **Traits**: Collaborator interfaces for the upstream client and the
//!   secrets store
//!
//! ## Example
//!
//! ```rust
//! use finch_core::{LookupKey, Paging};
//!
//! let key = LookupKey::name("alice");
//! assert_eq!(key.cache_key(), "name:alice");
//!
//! let paging = Paging::default().resolve();
//! assert_eq!((paging.page, paging.count), (1, 20));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{FinchError, Result, UpstreamError, UpstreamResult};
pub use traits::*;
pub use types::*;
