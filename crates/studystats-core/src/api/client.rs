//! ApiClient: thin wrapper over reqwest for experimenting with HTTP APIs.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;

use super::response::ApiResponse;
use crate::error::ApiError;
use crate::storage::ApiConfig;

/// Timeout applied when neither the client nor the request sets one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest slice of an error body kept in [`ApiError::Status`].
const ERROR_BODY_LIMIT: usize = 200;

/// Per-request options. Headers are merged over the client defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub json: Option<Value>,
    pub form: Vec<(String, String)>,
    pub headers: BTreeMap<String, String>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    pub fn form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((key.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Simple HTTP API client bound to one base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    default_timeout: Duration,
    default_headers: BTreeMap<String, String>,
    http_client: Client,
}

impl ApiClient {
    /// Create a client for `base_url`. Trailing slashes are stripped.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            base_url = %base_url,
            default_timeout_secs = DEFAULT_TIMEOUT.as_secs(),
            "initialized API client"
        );

        Ok(Self {
            base_url,
            default_timeout: DEFAULT_TIMEOUT,
            default_headers: BTreeMap::new(),
            http_client: Client::new(),
        })
    }

    /// Create a client from the `[api]` config section.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut client = Self::new(&config.base_url)?
            .with_timeout(Duration::from_secs(config.timeout_secs));
        client.default_headers = config.headers.clone();
        Ok(client)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Use a preconfigured reqwest client (proxies, TLS settings, ...).
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = http_client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Perform a GET request and return decoded JSON or text.
    pub async fn get(&self, path: &str, options: &RequestOptions) -> Result<ApiResponse, ApiError> {
        self.request(Method::GET, path, options).await
    }

    /// Perform a POST request and return decoded JSON or text.
    pub async fn post(&self, path: &str, options: &RequestOptions) -> Result<ApiResponse, ApiError> {
        self.request(Method::POST, path, options).await
    }

    /// Perform a request with any method.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] when the request fails at transport level,
    /// [`ApiError::Status`] on a non-success status code.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.build_url(path);
        let timeout = options.timeout.unwrap_or(self.default_timeout);
        let headers = self.merged_headers(&options.headers)?;

        tracing::info!(method = %method, url = %url, "performing HTTP request");

        let mut builder = self
            .http_client
            .request(method.clone(), &url)
            .headers(headers)
            .timeout(timeout);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = &options.json {
            builder = builder.json(body);
        }
        if !options.form.is_empty() {
            builder = builder.form(&options.form);
        }

        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(source) => {
                tracing::error!(
                    method = %method,
                    url = %url,
                    error = %source,
                    "HTTP request failed at network level"
                );
                return Err(ApiError::Network { url, source });
            }
        };

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();
        let text = resp
            .text()
            .await
            .map_err(|source| ApiError::Network { url: url.clone(), source })?;

        if !status.is_success() {
            tracing::warn!(status_code = status.as_u16(), url = %url, "received non-success status code");
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
                body: text.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        Ok(decode_body(&content_type, text))
    }

    /// Join `path` onto the base URL, adding a leading `/` when missing.
    pub fn build_url(&self, path: &str) -> String {
        if path.is_empty() {
            return self.base_url.clone();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn merged_headers(&self, overrides: &BTreeMap<String, String>) -> Result<HeaderMap, ApiError> {
        let mut map = HeaderMap::new();
        for (name, value) in self.default_headers.iter().chain(overrides.iter()) {
            let invalid = || ApiError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

/// JSON when the content type says so and the body parses, text otherwise.
fn decode_body(content_type: &str, text: String) -> ApiResponse {
    if content_type.contains("application/json") || content_type.contains("+json") {
        match serde_json::from_str(&text) {
            Ok(value) => return ApiResponse::Json(value),
            Err(_) => {
                tracing::debug!("response declared JSON but failed to parse; falling back to text");
            }
        }
    }
    ApiResponse::Text(text)
}
