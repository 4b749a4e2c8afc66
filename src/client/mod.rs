//! LaunchDarkly REST request helper
//!
//! Every block funnels its single network call through [`ApiClient::request`]:
//! join the configured base URL with an already-interpolated path, append query
//! parameters, attach the access token, send an optional JSON body, and hand back
//! the decoded response body verbatim. Non-2xx answers become [`ApiError::Api`].
//! Nothing is retried, paginated or cached here.

pub mod error;

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client as HttpClient, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::core::parameter::scalar_to_string;

pub use error::{ApiError, ApiResult};

/// Public LaunchDarkly API origin
pub const DEFAULT_BASE_URL: &str = "https://app.launchdarkly.com";

/// Header selecting a dated LaunchDarkly API version
pub const API_VERSION_HEADER: &str = "LD-API-Version";

const USER_AGENT: &str = concat!("launchdarkly-blocks/", env!("CARGO_PKG_VERSION"));

/// HTTP verbs used by LaunchDarkly endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether inputs for this verb travel in a JSON body
    pub fn sends_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// API key and base URL for one host application instance
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    base_url: Url,
}

impl Credentials {
    /// Validate and wrap an access token and API origin.
    ///
    /// The key must be non-empty and the base URL an absolute http(s) URL. A path
    /// prefix on the base URL (for proxies) is kept.
    pub fn new(api_key: impl Into<String>, base_url: &str) -> ApiResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ApiError::Credentials("API key cannot be empty".into()));
        }

        let base_url = Url::parse(base_url)?;
        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ApiError::Credentials(format!(
                    "Unsupported base URL scheme '{}'",
                    scheme
                )))
            }
        }
        if base_url.host_str().is_none() {
            return Err(ApiError::Credentials("Base URL must include a host".into()));
        }

        Ok(Self { api_key, base_url })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

/// Per-request method, body and query string
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<Value>,
    /// Query parameters in order; array values expand to repeated keys
    pub query: Vec<(String, Value)>,
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            body: None,
            query: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: Value) -> Self {
        self.query.push((name.into(), value));
        self
    }
}

/// Builder for [`ApiClient`]
pub struct ApiClientBuilder {
    credentials: Credentials,
    api_version: Option<String>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Send `LD-API-Version` with every request
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Overall request timeout; unset means the transport default
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> ApiResult<ApiClient> {
        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ApiClient {
            http: builder.build()?,
            credentials: self.credentials,
            api_version: self.api_version,
        })
    }
}

/// Request helper bound to one set of credentials. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    credentials: Credentials,
    api_version: Option<String>,
}

impl ApiClient {
    pub fn new(credentials: Credentials) -> ApiResult<Self> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> ApiClientBuilder {
        ApiClientBuilder {
            credentials,
            api_version: None,
            timeout: None,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Perform one request and decode the response.
    ///
    /// Returns `Ok(None)` for an empty success body (e.g. 204 No Content).
    pub async fn request(&self, path: &str, options: RequestOptions) -> ApiResult<Option<Value>> {
        let url = self.build_url(path, &options.query)?;
        debug!(method = %options.method, url = %url, "Sending LaunchDarkly API request");

        let mut auth = HeaderValue::from_str(self.credentials.api_key())
            .map_err(|e| ApiError::Credentials(format!("API key is not a valid header value: {}", e)))?;
        auth.set_sensitive(true);

        let mut request = self
            .http
            .request(options.method.into(), url)
            .header(AUTHORIZATION, auth);

        if let Some(version) = &self.api_version {
            request = request.header(API_VERSION_HEADER, version);
        }

        // GET never carries a body
        if options.method != HttpMethod::Get {
            if let Some(body) = &options.body {
                request = request.json(body);
            }
        }

        let response = request.send().await?;
        handle_response(options.method, response).await
    }

    /// Join base URL and path, then append the query string
    pub fn build_url(&self, path: &str, query: &[(String, Value)]) -> ApiResult<Url> {
        let base = self.credentials.base_url.as_str().trim_end_matches('/');
        let joined = if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        };
        let mut url = Url::parse(&joined)?;

        let pairs = encode_query(query);
        if !pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (name, value) in &pairs {
                serializer.append_pair(name, value);
            }
        }

        Ok(url)
    }
}

/// One-shot request with a fresh client, for callers that hold only credentials
pub async fn make_api_request(
    credentials: &Credentials,
    path: &str,
    options: RequestOptions,
) -> ApiResult<Option<Value>> {
    ApiClient::new(credentials.clone())?
        .request(path, options)
        .await
}

/// Flatten query parameters into string pairs.
///
/// Arrays become one pair per element, `null`s are skipped and objects are sent
/// as their JSON text.
pub fn encode_query(query: &[(String, Value)]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (name, value) in query {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = query_value_text(item) {
                        pairs.push((name.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = query_value_text(other) {
                    pairs.push((name.clone(), text));
                }
            }
        }
    }
    pairs
}

fn query_value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        scalar => scalar_to_string(scalar),
    }
}

async fn handle_response(method: HttpMethod, response: Response) -> ApiResult<Option<Value>> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        warn!(
            method = %method,
            status = status.as_u16(),
            "LaunchDarkly API request failed"
        );
        return Err(ApiError::Api {
            status: status.as_u16(),
            body: text,
        });
    }

    if text.trim().is_empty() {
        return Ok(None);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(value) => Ok(Some(value)),
        Err(source) => Err(ApiError::Serialization { source, body: text }),
    }
}
