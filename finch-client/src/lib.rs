//! # Finch REST Client
//!
//! Signed HTTP client for the upstream social API, implementing the
//! [`UpstreamClient`](finch_core::UpstreamClient) collaborator trait.
//! Requests are authenticated with OAuth 1.0a (HMAC-SHA1); failed calls
//! surface the upstream taxonomy's numeric error code so the facade can
//! recognize confirmed misses.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod client;
mod dto;
mod sign;

pub use client::{ClientConfig, RestClient};
