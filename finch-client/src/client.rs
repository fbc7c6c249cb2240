//! REST client for the upstream social API.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use finch_core::constants::{DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE};
use finch_core::error::{FinchError, Result, UpstreamError, UpstreamResult};
use finch_core::traits::UpstreamClient;
use finch_core::types::{AppSecrets, LookupKey, ResolvedPaging, Status, UserProfile};

use crate::dto;
use crate::sign::{self, OauthCredentials};

/// REST client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the upstream API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Whether to log each request at debug level
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
            timeout_seconds: 30,
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Enables request logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

/// Signed HTTP client implementing [`UpstreamClient`].
///
/// Construction consumes the loaded credentials; the client itself is
/// immutable afterwards and safe to share across tasks.
pub struct RestClient {
    config: ClientConfig,
    http: reqwest::Client,
    creds: OauthCredentials,
}

impl RestClient {
    /// Builds a client from configuration and loaded credentials.
    ///
    /// # Errors
    /// Fails if any of the four OAuth credentials is absent, the base URL
    /// does not parse, or the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig, secrets: &AppSecrets) -> Result<Self> {
        let creds = OauthCredentials {
            consumer_key: secrets
                .consumer_key
                .clone()
                .ok_or(FinchError::MissingCredential("consumer key"))?,
            consumer_secret: secrets
                .consumer_secret
                .clone()
                .ok_or(FinchError::MissingCredential("consumer secret"))?,
            access_token: secrets
                .access_token
                .clone()
                .ok_or(FinchError::MissingCredential("access token"))?,
            token_secret: secrets
                .token_secret
                .clone()
                .ok_or(FinchError::MissingCredential("token secret"))?,
        };

        Url::parse(&config.base_url)
            .map_err(|e| FinchError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| FinchError::ClientConstruction(e.to_string()))?;

        Ok(Self {
            config,
            http,
            creds,
        })
    }

    fn endpoint(&self, path: &str) -> UpstreamResult<Url> {
        let joined = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|e| UpstreamError::transport(format!("{joined}: {e}")))
    }

    /// Issues a signed GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> UpstreamResult<T> {
        let url = self.endpoint(path)?;
        let auth = sign::authorization_header("GET", url.as_str(), &params, &self.creds);

        if self.config.debug {
            debug!(%url, ?params, "issuing upstream request");
        }

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, auth)
            .query(&params)
            .send()
            .await
            .map_err(|e| UpstreamError::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::transport(e.to_string()))?;

        if !status.is_success() {
            return Err(dto::decode_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| UpstreamError::transport(format!("decoding response: {e}")))
    }
}

/// Appends the query parameter for a keyed lookup.
fn push_key_param(
    params: &mut Vec<(String, String)>,
    key: &LookupKey,
    name_param: &str,
    id_param: &str,
) {
    match key {
        LookupKey::Name(name) => params.push((name_param.into(), name.clone())),
        LookupKey::Id(id) => params.push((id_param.into(), id.to_string())),
    }
}

#[async_trait]
impl UpstreamClient for RestClient {
    #[instrument(skip(self))]
    async fn user_timeline(
        &self,
        key: &LookupKey,
        paging: ResolvedPaging,
    ) -> UpstreamResult<Vec<Status>> {
        let mut params = vec![
            ("page".to_string(), paging.page.to_string()),
            ("count".to_string(), paging.count.to_string()),
        ];
        push_key_param(&mut params, key, "screen_name", "user_id");
        self.get_json("statuses/user_timeline.json", params).await
    }

    #[instrument(skip(self))]
    async fn show_user(&self, key: &LookupKey) -> UpstreamResult<UserProfile> {
        let mut params = Vec::new();
        push_key_param(&mut params, key, "screen_name", "user_id");
        self.get_json("users/show.json", params).await
    }

    #[instrument(skip(self))]
    async fn followers_list(&self, key: &LookupKey) -> UpstreamResult<Vec<UserProfile>> {
        let mut params = vec![("count".to_string(), DEFAULT_PAGE_SIZE.to_string())];
        push_key_param(&mut params, key, "screen_name", "user_id");
        let envelope: dto::UsersEnvelope = self.get_json("followers/list.json", params).await?;
        Ok(envelope.users)
    }

    #[instrument(skip(self))]
    async fn list_members(
        &self,
        owner: &LookupKey,
        slug: &str,
    ) -> UpstreamResult<Vec<UserProfile>> {
        let mut params = vec![
            ("slug".to_string(), slug.to_string()),
            ("count".to_string(), DEFAULT_PAGE_SIZE.to_string()),
        ];
        push_key_param(&mut params, owner, "owner_screen_name", "owner_id");
        let envelope: dto::UsersEnvelope = self.get_json("lists/members.json", params).await?;
        Ok(envelope.users)
    }

    #[instrument(skip(self))]
    async fn list_statuses(
        &self,
        owner: &LookupKey,
        slug: &str,
        paging: ResolvedPaging,
    ) -> UpstreamResult<Vec<Status>> {
        let mut params = vec![
            ("slug".to_string(), slug.to_string()),
            ("page".to_string(), paging.page.to_string()),
            ("count".to_string(), paging.count.to_string()),
        ];
        push_key_param(&mut params, owner, "owner_screen_name", "owner_id");
        self.get_json("lists/statuses.json", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_secrets() -> AppSecrets {
        AppSecrets::new("ck", "cs", "at", "ts")
    }

    async fn client_for(server: &MockServer) -> RestClient {
        RestClient::new(ClientConfig::new(server.uri()), &test_secrets()).unwrap()
    }

    #[test]
    fn test_new_requires_all_credentials() {
        let mut incomplete = AppSecrets::default();
        incomplete.consumer_key = Some("ck".into());
        let result = RestClient::new(ClientConfig::default(), &incomplete);
        assert!(matches!(result, Err(FinchError::MissingCredential(_))));
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        let result = RestClient::new(ClientConfig::new("not a url"), &test_secrets());
        assert!(matches!(result, Err(FinchError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_user_timeline_by_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/statuses/user_timeline.json"))
            .and(query_param("screen_name", "alice"))
            .and(query_param("page", "1"))
            .and(query_param("count", "20"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "text": "first"},
                {"id": 2, "text": "second"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let statuses = client
            .user_timeline(&LookupKey::name("alice"), ResolvedPaging::default())
            .await
            .unwrap();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].text, "first");
    }

    #[tokio::test]
    async fn test_show_user_by_id_uses_id_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/show.json"))
            .and(query_param("user_id", "12345"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
                {"id": 12345, "screen_name": "alice"}
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let user = client.show_user(&LookupKey::id(12345)).await.unwrap();
        assert_eq!(user.id, 12345);
    }

    #[tokio::test]
    async fn test_not_found_surfaces_code_34() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/show.json"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!(
                {"errors": [{"code": 34, "message": "Sorry, that page does not exist."}]}
            )))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .show_user(&LookupKey::name("ghost"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_auth_failure_surfaces_other_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/statuses/user_timeline.json"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!(
                {"errors": [{"code": 32, "message": "Could not authenticate you."}]}
            )))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .user_timeline(&LookupKey::name("alice"), ResolvedPaging::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, 32);
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_unrecognized_error_body_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/show.json"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .show_user(&LookupKey::name("alice"))
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_followers_list_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/followers/list.json"))
            .and(query_param("screen_name", "alice"))
            .and(query_param("count", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
                {"users": [{"id": 2, "screen_name": "bob"}], "next_cursor": 0}
            )))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let followers = client
            .followers_list(&LookupKey::name("alice"))
            .await
            .unwrap();
        assert_eq!(followers.len(), 1);
        assert_eq!(followers[0].screen_name, "bob");
    }

    #[tokio::test]
    async fn test_list_members_by_owner_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lists/members.json"))
            .and(query_param("owner_id", "99"))
            .and(query_param("slug", "team"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
                {"users": [{"id": 3, "screen_name": "carol"}]}
            )))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let members = client
            .list_members(&LookupKey::id(99), "team")
            .await
            .unwrap();
        assert_eq!(members[0].screen_name, "carol");
    }

    #[tokio::test]
    async fn test_list_statuses_passes_paging() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lists/statuses.json"))
            .and(query_param("owner_screen_name", "alice"))
            .and(query_param("slug", "team"))
            .and(query_param("page", "2"))
            .and(query_param("count", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 5, "text": "list post"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let statuses = client
            .list_statuses(
                &LookupKey::name("alice"),
                "team",
                ResolvedPaging { page: 2, count: 10 },
            )
            .await
            .unwrap();
        assert_eq!(statuses[0].id, 5);
    }
}
