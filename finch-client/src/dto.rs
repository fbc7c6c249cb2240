//! Wire payloads specific to the upstream API.
//!
//! Timeline endpoints return bare status arrays that deserialize straight
//! into `Vec<Status>`; follower and list-member endpoints wrap their users
//! in an envelope. Error bodies carry the taxonomy code the facade keys on.

use serde::Deserialize;

use finch_core::{UpstreamError, UserProfile};

/// Envelope for cursored user-list endpoints (`followers/list`,
/// `lists/members`).
#[derive(Debug, Deserialize)]
pub(crate) struct UsersEnvelope {
    pub users: Vec<UserProfile>,
}

/// Error body: `{"errors":[{"code":34,"message":"…"}]}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: i32,
    #[serde(default)]
    message: String,
}

/// Decodes a non-success response body into an [`UpstreamError`].
///
/// Falls back to a transport-level error when the body carries no
/// recognizable error payload.
pub(crate) fn decode_error(http_status: u16, body: &str) -> UpstreamError {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(first) = parsed.errors.into_iter().next() {
            return UpstreamError::new(first.code, first.message);
        }
    }
    UpstreamError::transport(format!("HTTP {http_status}"))
}
