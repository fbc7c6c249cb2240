//! OAuth 1.0a request signing (RFC 5849, HMAC-SHA1).
//!
//! Builds the `Authorization` header for upstream API calls: collect the
//! oauth parameters plus the request's query parameters, percent-encode and
//! sort them into the signature base string, and sign it with
//! HMAC-SHA1 keyed by the encoded consumer secret and token secret.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// The four OAuth credential strings, owned by the client for its lifetime.
#[derive(Clone)]
pub(crate) struct OauthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub token_secret: String,
}

impl fmt::Debug for OauthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print credential material
        f.debug_struct("OauthCredentials")
            .field("consumer_key", &"***")
            .field("consumer_secret", &"***")
            .field("access_token", &"***")
            .field("token_secret", &"***")
            .finish()
    }
}

/// Builds the `Authorization` header for a request.
///
/// `base_url` is the request URL without any query string; `query` holds
/// the unencoded query parameters exactly as they will be sent.
pub(crate) fn authorization_header(
    method: &str,
    base_url: &str,
    query: &[(String, String)],
    creds: &OauthCredentials,
) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    header_with(method, base_url, query, creds, &nonce(), timestamp)
}

/// Header construction with an explicit nonce and timestamp.
fn header_with(
    method: &str,
    base_url: &str,
    query: &[(String, String)],
    creds: &OauthCredentials,
    nonce: &str,
    timestamp: u64,
) -> String {
    let oauth_params: Vec<(String, String)> = vec![
        ("oauth_consumer_key".into(), creds.consumer_key.clone()),
        ("oauth_nonce".into(), nonce.to_string()),
        ("oauth_signature_method".into(), "HMAC-SHA1".into()),
        ("oauth_timestamp".into(), timestamp.to_string()),
        ("oauth_token".into(), creds.access_token.clone()),
        ("oauth_version".into(), "1.0".into()),
    ];

    let mut all = oauth_params.clone();
    all.extend_from_slice(query);
    let base = signature_base_string(method, base_url, &all);
    let signature = sign(&base, &creds.consumer_secret, &creds.token_secret);

    let mut header_params = oauth_params;
    header_params.push(("oauth_signature".into(), signature));
    header_params.sort();

    let joined = header_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("OAuth {joined}")
}

/// Builds the signature base string from the full parameter set.
fn signature_base_string(method: &str, base_url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    // Sorted by encoded key, then encoded value
    encoded.sort();

    let joined = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(base_url),
        percent_encode(&joined)
    )
}

/// HMAC-SHA1 over the base string, base64-encoded.
fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
    mac.update(base.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Percent-encodes per RFC 5849 §3.6: only ALPHA, DIGIT, `-`, `.`, `_`,
/// and `~` pass through; everything else becomes uppercase `%XX` bytes.
pub(crate) fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

/// 32-character alphanumeric nonce.
fn nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}
