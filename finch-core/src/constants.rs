//! Shared constants for finch.
//!
//! Error codes come from the upstream API's published error taxonomy and
//! must not be changed; pagination and cache defaults are the values the
//! facade falls back to when the caller leaves them unset.

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM ERROR TAXONOMY
// ═══════════════════════════════════════════════════════════════════════════════

/// Upstream error code meaning the queried user or owner does not exist.
///
/// This is the only code that may populate the miss cache; every other
/// code is treated as transient and retried on the next lookup.
pub const NOT_FOUND_CODE: i32 = 34;

/// Synthetic code for failures that never reached the upstream error
/// taxonomy (connect errors, timeouts, undecodable bodies).
pub const TRANSPORT_CODE: i32 = -1;

// ═══════════════════════════════════════════════════════════════════════════════
// PAGINATION DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Page used when the caller passes no page (or page zero).
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller passes no size (or size zero).
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// ═══════════════════════════════════════════════════════════════════════════════
// WELL-KNOWN SECRET NAMES
// ═══════════════════════════════════════════════════════════════════════════════
// The environment-backed secrets store reads credentials under these names.

/// Debug flag ("true"/"false").
pub const SECRET_DEBUG: &str = "FINCH_DEBUG";

/// OAuth consumer key.
pub const SECRET_CONSUMER_KEY: &str = "FINCH_CONSUMER_KEY";

/// OAuth consumer secret.
pub const SECRET_CONSUMER_SECRET: &str = "FINCH_CONSUMER_SECRET";

/// OAuth access token.
pub const SECRET_ACCESS_TOKEN: &str = "FINCH_ACCESS_TOKEN";

/// OAuth access token secret.
pub const SECRET_TOKEN_SECRET: &str = "FINCH_TOKEN_SECRET";

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM ENDPOINT
// ═══════════════════════════════════════════════════════════════════════════════

/// Base URL of the upstream REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com/1.1";
