//! HTTP gateway for Zoho CRM API communication.
//!
//! This module provides the [`HttpClient`] type, which turns a method, a path
//! relative to `/crm/v2/` and an optional JSON body or query into a request,
//! and turns the response into parsed JSON plus rate-limit metadata.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde_json::Value;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{HttpResponse, RateLimitInfo};
use crate::clients::query::build_query;
use crate::clients::transport::{ReqwestTransport, Transport, TransportRequest};
use crate::config::{resolve_base_url, ClientConfig};

/// Path prefix every resource path is rooted at.
pub const API_PATH_PREFIX: &str = "/crm/v2";

/// HTTP gateway for the Zoho CRM API.
///
/// The gateway handles:
/// - URL construction as `{base_url}/crm/v2/{path}`
/// - Header merging: defaults, then extra headers, then the auth header
/// - JSON request bodies and form-encoded query strings
/// - JSON response decoding and `RateLimit-Reset` capture
///
/// It performs no retries and does not follow pagination. By default the
/// status code is not inspected; see [`ClientConfigBuilder::error_on_status`](crate::ClientConfigBuilder::error_on_status).
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` whenever its transport is. The rate-limit
/// snapshot is last-write-wins across concurrent requests.
#[derive(Debug)]
pub struct HttpClient<T = ReqwestTransport> {
    transport: T,
    config: ClientConfig,
    /// Base URI (e.g., `https://accounts.zoho.eu`).
    base_uri: String,
    /// Headers sent with every request, auth header included.
    default_headers: HashMap<String, String>,
    rate_limit: RwLock<RateLimitInfo>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl<T: Transport> HttpClient<T> {
    /// Creates a gateway for the given configuration and transport.
    #[must_use]
    pub fn new(config: ClientConfig, transport: T) -> Self {
        let base_uri = config.base_url().to_string();
        let default_headers = Self::build_default_headers(&config);

        Self {
            transport,
            config,
            base_uri,
            default_headers,
            rate_limit: RwLock::new(RateLimitInfo::default()),
        }
    }

    /// Merges default, extra and auth headers; later entries win.
    fn build_default_headers(config: &ClientConfig) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        insert_header(&mut headers, "Accept", "application/json");
        insert_header(&mut headers, "Content-Type", "application/json");
        for (key, value) in config.extra_headers() {
            insert_header(&mut headers, key, value);
        }
        insert_header(
            &mut headers,
            "Authorization",
            &config.access_token().authorization_header(),
        );
        headers
    }

    /// Returns the configuration this gateway was built from.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Replaces the transport.
    pub fn set_transport(&mut self, transport: T) {
        self.transport = transport;
    }

    /// Replaces the base URI, bypassing the region mapping.
    ///
    /// An empty string re-derives the URI from the configured region.
    pub fn set_base_uri(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.base_uri = resolve_base_url(self.config.region().code(), Some(url.as_str()));
        tracing::debug!("Zoho CRM base URL set to {}", self.base_uri);
    }

    /// Returns the rate-limit snapshot from the most recent response.
    #[must_use]
    pub fn rate_limit_details(&self) -> RateLimitInfo {
        *self
            .rate_limit
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Builds the absolute URL for a request.
    fn url_for(&self, request: &HttpRequest) -> String {
        let mut url = format!("{}{}/{}", self.base_uri, API_PATH_PREFIX, request.path);
        if let Some(Value::Object(params)) = &request.query {
            let query = build_query(params);
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }
        }
        url
    }

    /// Sends a request and returns the full response.
    ///
    /// The rate-limit snapshot is updated before the body is decoded, so it
    /// reflects the latest response even when decoding fails.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The body cannot be serialized (`Encode`)
    /// - The transport fails (`Network` or `Transport`)
    /// - The response body is not JSON (`Decode`)
    /// - The status is non-2xx and `error_on_status` is enabled (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);
        let body = request
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(HttpError::Encode)?;

        tracing::debug!("Sending {} request to {}", request.http_method, url);

        let raw = self
            .transport
            .send(TransportRequest {
                method: request.http_method,
                url,
                headers: self.default_headers.clone(),
                body,
            })
            .await?;

        let code = raw.status;
        tracing::debug!(
            "Received {} response ({} bytes) for {}",
            code,
            raw.body.len(),
            request.path
        );

        let rate_limit = RateLimitInfo::from_headers(&raw.headers);
        *self
            .rate_limit
            .write()
            .unwrap_or_else(PoisonError::into_inner) = rate_limit;

        let body = if raw.body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&raw.body).map_err(|source| {
                tracing::warn!(
                    "Response from {} with status {} is not valid JSON",
                    request.path,
                    code
                );
                HttpError::Decode { code, source }
            })?
        };

        let response = HttpResponse::new(code, raw.headers, body);

        if self.config.error_on_status() && !response.is_ok() {
            return Err(HttpError::Response(response.to_error()));
        }

        Ok(response)
    }

    async fn send_json(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: Option<Value>,
    ) -> Result<Value, HttpError> {
        let request = HttpRequest {
            http_method: method,
            path: path.to_string(),
            body,
            query,
        };
        Ok(self.request(request).await?.body)
    }

    /// Sends a GET request, appending `query` as a query string.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(&self, path: &str, query: Option<Value>) -> Result<Value, HttpError> {
        self.send_json(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, HttpError> {
        self.send_json(HttpMethod::Post, path, Some(body), None).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn put(&self, path: &str, body: Value) -> Result<Value, HttpError> {
        self.send_json(HttpMethod::Put, path, Some(body), None).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn patch(&self, path: &str, body: Value) -> Result<Value, HttpError> {
        self.send_json(HttpMethod::Patch, path, Some(body), None).await
    }

    /// Sends a DELETE request, with a JSON body only when one is given.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete(&self, path: &str, body: Option<Value>) -> Result<Value, HttpError> {
        self.send_json(HttpMethod::Delete, path, body, None).await
    }
}

/// Inserts a header, replacing any existing header with the same name in
/// any letter case.
fn insert_header(headers: &mut HashMap<String, String>, key: &str, value: &str) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
    headers.insert(key.to_string(), value.to_string());
}
