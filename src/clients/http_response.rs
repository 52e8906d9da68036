//! HTTP response types for the Zoho CRM client.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimitInfo`]
//! snapshot parsed from its headers.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::errors::HttpResponseError;

/// Name of the header carrying the rate-limit reset time, lowercased.
pub const RATE_LIMIT_RESET_HEADER: &str = "ratelimit-reset";

/// Rate limit information parsed from the `RateLimit-Reset` header.
///
/// The client keeps the snapshot from the most recent response only. Under
/// concurrent use it may come from a different in-flight request than the
/// caller's own, so treat it as informational.
///
/// # Example
///
/// ```rust
/// use zoho_crm::RateLimitInfo;
///
/// let info = RateLimitInfo::parse(Some("1700000000"));
/// assert_eq!(info.reset_at, Some(1_700_000_000));
///
/// assert_eq!(RateLimitInfo::parse(None).reset_at, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitInfo {
    /// When the request quota replenishes, in epoch seconds.
    pub reset_at: Option<i64>,
}

impl RateLimitInfo {
    /// Parses the header value. Absent or non-integer values yield `None`.
    #[must_use]
    pub fn parse(header_value: Option<&str>) -> Self {
        Self {
            reset_at: header_value.and_then(|value| value.trim().parse().ok()),
        }
    }

    /// Reads the snapshot from a lowercase-keyed header map.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Self {
        Self::parse(
            headers
                .get(RATE_LIMIT_RESET_HEADER)
                .and_then(|values| values.first())
                .map(String::as_str),
        )
    }

    /// Returns the reset time as a UTC timestamp, if present and in range.
    #[must_use]
    pub fn reset_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.reset_at
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    }
}

/// A response from the Zoho CRM API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body; `Null` when the body was empty.
    pub body: Value,
    /// Rate limit snapshot taken from this response's headers.
    pub rate_limit: RateLimitInfo,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate-limit header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        let rate_limit = RateLimitInfo::from_headers(&headers);

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Builds the error describing a non-2xx response.
    ///
    /// Zoho error bodies carry `code` and `message` fields; when `message`
    /// is missing the whole body is used instead.
    #[must_use]
    pub fn to_error(&self) -> HttpResponseError {
        let message = self
            .body
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| self.body.to_string(), str::to_string);
        let api_code = self
            .body
            .get("code")
            .and_then(Value::as_str)
            .map(str::to_string);

        HttpResponseError {
            code: self.code,
            message,
            api_code,
        }
    }
}
