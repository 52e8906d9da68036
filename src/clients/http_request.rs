//! HTTP request types for the Zoho CRM client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests against the `/crm/v2/` API root.

use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Zoho CRM API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving records.
    Get,
    /// HTTP POST method for creating records and invoking actions.
    Post,
    /// HTTP PUT method for updating records.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing records.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to be sent to the Zoho CRM API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use zoho_crm::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "Leads")
///     .query(json!({"fields": "Email", "per_page": 50}))
///     .build()
///     .unwrap();
///
/// let request = HttpRequest::builder(HttpMethod::Post, "Leads")
///     .body(json!({"data": [{"Last_Name": "Smith"}]}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to `/crm/v2/` (e.g. `Leads/123/Notes`).
    pub path: String,
    /// The JSON body, if any.
    pub body: Option<Value>,
    /// Query parameters; must be a JSON object when present.
    pub query: Option<Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// Module names, ids and payload shapes are not checked; the API
    /// reports those itself.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidQuery`] if `query` is present
    /// but is neither an object nor `null`.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match &self.query {
            None | Some(Value::Null | Value::Object(_)) => Ok(()),
            Some(other) => Err(InvalidHttpRequestError::InvalidQuery {
                kind: json_kind(other),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<Value>,
    query: Option<Value>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn query(mut self, query: impl Into<Value>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if !matches!(self.query, Some(Value::Object(_))) {
            self.query = Some(Value::Object(serde_json::Map::new()));
        }
        if let Some(Value::Object(map)) = self.query.as_mut() {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_creates_bodyless_get() {
        let request = HttpRequest::builder(HttpMethod::Get, "Leads/42")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "Leads/42");
        assert!(request.body.is_none());
        assert!(request.query.is_none());
    }

    #[test]
    fn test_builder_allows_post_with_empty_object() {
        let request = HttpRequest::builder(HttpMethod::Post, "Leads/42/actions/convert")
            .body(json!({}))
            .build()
            .unwrap();

        assert_eq!(request.body, Some(json!({})));
    }

    #[test]
    fn test_query_param_accumulates_into_object() {
        let request = HttpRequest::builder(HttpMethod::Get, "Leads")
            .query_param("page", 2)
            .query_param("fields", "Email")
            .build()
            .unwrap();

        assert_eq!(request.query, Some(json!({"page": 2, "fields": "Email"})));
    }

    #[test]
    fn test_verify_rejects_non_object_query() {
        let result = HttpRequest::builder(HttpMethod::Get, "Leads")
            .query(json!(["fields", "Email"]))
            .build();

        assert_eq!(
            result,
            Err(InvalidHttpRequestError::InvalidQuery { kind: "array" })
        );
    }

    #[test]
    fn test_verify_accepts_null_query() {
        let request = HttpRequest::builder(HttpMethod::Get, "Notes")
            .query(Value::Null)
            .build();

        assert!(request.is_ok());
    }
}
