//! Request execution with tracing instrumentation.
//!
//! [`ApiClient`] is the transport handle shared by every generated resource
//! client. It joins request paths onto a base URL, attaches the bearer token,
//! encodes the query string and JSON body, and hands back the raw
//! [`Response`] for the generated code to interpret.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::{instrument, Span};
use url::Url;

use super::response::Response;
use crate::error::ClientError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: Url,
    timeout: Duration,
    token: Option<String>,
}

impl ApiClientBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token: None,
        }
    }

    /// Sets the request timeout.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = ApiClient::builder(base_url)
    ///     .timeout(Duration::from_secs(60))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the bearer token sent with every request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns [`ClientError::Build`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Build)?;

        Ok(ApiClient {
            client,
            base_url: normalize_base(self.base_url),
            token: self.token,
        })
    }
}

/// Async HTTP transport used by generated resource clients.
///
/// Cloning is cheap: the connection pool is shared between clones, while
/// each clone keeps its own copy of the base URL and token. Generated
/// `Client::new` clones the handle it is given, so later changes to the
/// original do not leak into existing resource clients.
///
/// ## Examples
///
/// ```rust,ignore
/// use crudgen::ApiClient;
/// use url::Url;
///
/// let api = ApiClient::builder(Url::parse("https://controller.example.com/v1/")?)
///     .token("at_1234567890")
///     .build()?;
/// let targets = targets::Client::new(&api);
/// let all = targets.list("global", &[]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Creates a new API client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        Self::builder(base_url).build()
    }

    /// Returns the base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Replaces the bearer token on this handle only.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Returns the bearer token, if one is configured.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Sends one request and returns the raw response.
    ///
    /// `path` is relative to the base URL (`targets/ttcp_1234:add-host-sets`).
    /// Query pairs are encoded in key order. A `body` of `None` sends no
    /// content; `Some` sends the map as a JSON object.
    ///
    /// Non-success statuses are **not** errors here: the body is returned so
    /// the caller can extract an [`crate::ApiError`].
    ///
    /// ## Errors
    ///
    /// - [`ClientError::InvalidUrl`] if `path` cannot be joined onto the base URL
    /// - [`ClientError::Request`] if sending or reading the body fails
    #[instrument(
        name = "api_request",
        skip(self, query, body),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        query: &BTreeMap<String, String>,
        body: Option<&Map<String, Value>>,
    ) -> Result<Response, ClientError> {
        Span::current().record("http.method", method.as_str());

        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ClientError::InvalidUrl {
                operation,
                path: path.to_string(),
                source,
            })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Span::current().record("http.url", url.as_str());

        let mut request = self.client.request(method, url);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Request { operation, source })?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());
        let otel_status = if status.is_success() {
            "OK"
        } else if status.is_server_error() {
            "ERROR"
        } else {
            "UNSET"
        };
        Span::current().record("otel.status_code", otel_status);

        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Request { operation, source })?;

        Ok(Response::new(status.as_u16(), body))
    }
}

/// `Url::join` drops the last path segment unless the base ends in `/`.
fn normalize_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn no_query() -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = ApiClient::new(Url::parse("http://localhost:9200/v1").unwrap()).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:9200/v1/");
    }

    #[test]
    fn clones_carry_independent_tokens() {
        let original = ApiClient::builder(Url::parse("http://localhost/").unwrap())
            .token("first")
            .build()
            .unwrap();
        let mut copy = original.clone();
        copy.set_token("second");
        assert_eq!(original.token(), Some("first"));
        assert_eq!(copy.token(), Some("second"));
    }

    #[tokio::test]
    async fn execute_joins_path_under_base() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/targets/ttcp_1234"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "ttcp_1234"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let base_url = Url::parse(&format!("{}/v1", mock_server.uri())).unwrap();
        let client = ApiClient::new(base_url).unwrap();

        let response = client
            .execute("Read", Method::GET, "targets/ttcp_1234", &no_query(), None)
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn execute_sends_query_body_and_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/targets"))
            .and(query_param("skip_admin_role_creation", "true"))
            .and(header("authorization", "Bearer at_secret"))
            .and(body_json(serde_json::json!({"scope_id": "p_1234", "name": "db"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "ttcp_1"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::builder(Url::parse(&mock_server.uri()).unwrap())
            .token("at_secret")
            .build()
            .unwrap();

        let mut query = no_query();
        query.insert("skip_admin_role_creation".to_string(), "true".to_string());
        let mut body = Map::new();
        body.insert("scope_id".to_string(), Value::from("p_1234"));
        body.insert("name".to_string(), Value::from("db"));

        let response = client
            .execute("Create", Method::POST, "targets", &query, Some(&body))
            .await
            .unwrap();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn error_status_is_returned_not_raised() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/targets/ttcp_missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "status": 404,
                "kind": "NotFound",
                "message": "resource not found"
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();
        let response = client
            .execute("Delete", Method::DELETE, "targets/ttcp_missing", &no_query(), None)
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_request_error() {
        // Port 9 (discard) is never served in the test environment.
        let client = ApiClient::builder(Url::parse("http://127.0.0.1:9/").unwrap())
            .timeout(Duration::from_millis(500))
            .build()
            .unwrap();

        let err = client
            .execute("List", Method::GET, "targets", &no_query(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Request { operation: "List", .. }));
    }
}
