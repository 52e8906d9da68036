//! Pluggable transport for sending requests.
//!
//! [`HttpClient`](crate::clients::HttpClient) builds the URL, headers and
//! body of a request and hands the result to a [`Transport`]. The default
//! [`ReqwestTransport`] sends it with `reqwest`; tests and applications with
//! their own HTTP stack can supply another implementation.

use std::collections::HashMap;
use std::future::Future;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpMethod;

/// A fully resolved request, ready to go on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL, query string included.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Serialized request body, if any.
    pub body: Option<String>,
}

/// A raw response as returned by a [`Transport`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The full response body.
    pub body: Vec<u8>,
}

/// Capability to send a request and read back the full response.
///
/// Implementations must not treat non-2xx statuses as errors; status
/// handling is the client's job. Timeouts and connection pooling belong to
/// the implementation.
///
/// # Example
///
/// ```rust
/// use std::future::Future;
/// use zoho_crm::clients::{HttpError, Transport, TransportRequest, TransportResponse};
///
/// struct Canned;
///
/// impl Transport for Canned {
///     fn send(
///         &self,
///         _request: TransportRequest,
///     ) -> impl Future<Output = Result<TransportResponse, HttpError>> + Send {
///         async {
///             Ok(TransportResponse {
///                 status: 200,
///                 body: br#"{"data":[]}"#.to_vec(),
///                 ..TransportResponse::default()
///             })
///         }
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends the request and returns the response once its body is read.
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, HttpError>> + Send;
}

/// [`Transport`] backed by a `reqwest::Client` using rustls.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest::Client`, e.g. one with a custom timeout.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Parses response headers into a lowercase-keyed map.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, HttpError>> + Send {
        async move {
            let mut req_builder = self
                .client
                .request(Self::method(request.method), &request.url);

            for (key, value) in &request.headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(body) = request.body {
                req_builder = req_builder.body(body);
            }

            let res = req_builder.send().await?;
            let status = res.status().as_u16();
            let headers = Self::parse_response_headers(res.headers());
            let body = res.bytes().await?.to_vec();

            Ok(TransportResponse {
                status,
                headers,
                body,
            })
        }
    }
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};
