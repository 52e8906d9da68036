//! HTTP-specific error types for the Zoho CRM client.
//!
//! - [`HttpResponseError`]: non-2xx responses, only raised when the client is
//!   configured with `error_on_status(true)`
//! - [`InvalidHttpRequestError`]: a request rejected before it is sent
//! - [`HttpError`]: unified error type for everything on the wire
//!
//! # Example
//!
//! ```rust,ignore
//! use zoho_crm::HttpError;
//!
//! match client.records().get("Leads", "4150868000001234567").await {
//!     Ok(body) => println!("{body}"),
//!     Err(HttpError::Decode { code, source }) => {
//!         println!("Status {code} returned a non-JSON body: {source}");
//!     }
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(other) => println!("Request failed: {other}"),
//! }
//! ```

use thiserror::Error;

/// Error returned for a non-successful HTTP status.
///
/// The Zoho API reports failures as a JSON body such as
/// `{"code":"INVALID_TOKEN","details":{},"message":"invalid oauth token","status":"error"}`.
/// `message` and `api_code` are lifted from that body when present.
///
/// # Example
///
/// ```rust
/// use zoho_crm::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: "invalid oauth token".to_string(),
///     api_code: Some("INVALID_TOKEN".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 401: invalid oauth token");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The API's error message, or the serialized body when it has none.
    pub message: String,
    /// The API's error code (e.g. `INVALID_TOKEN`), if the body carried one.
    pub api_code: Option<String>,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// Query parameters must be a JSON object.
    #[error("Query parameters must be a JSON object, got {kind}.")]
    InvalidQuery {
        /// The JSON kind that was provided instead.
        kind: &'static str,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response, when status classification is enabled.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error from the reqwest transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("Transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// The response body was not valid JSON.
    #[error("Failed to decode response body (status {code}) as JSON: {source}")]
    Decode {
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized.
    #[error("Failed to encode request body as JSON: {0}")]
    Encode(#[source] serde_json::Error),
}

impl HttpError {
    /// Wraps an arbitrary error raised by a custom [`Transport`](crate::clients::Transport).
    pub fn transport(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(error.into())
    }
}
