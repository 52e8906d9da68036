//! The Zoho CRM client.
//!
//! [`ZohoClient`] owns the HTTP gateway and hands out the resource views
//! ([`Records`], [`Notes`]) that map CRM verbs onto it.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{
    has_more, next_page, HttpClient, HttpError, RateLimitInfo, ReqwestTransport, Transport,
};
use crate::config::{AccessToken, ClientConfig};
use crate::error::Error;
use crate::resources::{Notes, Records};

/// Client for the Zoho CRM v2 REST API.
///
/// # Thread Safety
///
/// `ZohoClient` is `Send + Sync` with the default transport and can be
/// shared across tasks behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use std::collections::HashMap;
/// use serde_json::json;
/// use zoho_crm::ZohoClient;
///
/// let client = ZohoClient::new("1000.abc.def", "EU", HashMap::new())?;
///
/// let leads = client
///     .records()
///     .list("Leads", Some(json!({"fields": "Email,Last_Name", "per_page": 50})))
///     .await?;
///
/// if zoho_crm::has_more(&leads) {
///     println!("next page: {}", zoho_crm::next_page(&leads));
/// }
/// ```
#[derive(Debug)]
pub struct ZohoClient<T = ReqwestTransport> {
    http: HttpClient<T>,
}

// Verify ZohoClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZohoClient>();
};

impl ZohoClient<ReqwestTransport> {
    /// Creates a client from an access token, a region code and extra headers.
    ///
    /// Unknown region codes select the US data center.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the token is empty, or [`Error::Http`] if
    /// the HTTP transport cannot be initialized.
    pub fn new(
        access_token: impl Into<String>,
        region_code: &str,
        extra_headers: HashMap<String, String>,
    ) -> Result<Self, Error> {
        let config = ClientConfig::builder()
            .access_token(AccessToken::new(access_token)?)
            .region_code(region_code)
            .extra_headers(extra_headers)
            .build()?;
        Self::with_config(config)
    }

    /// Creates a client from a prepared configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP transport cannot be initialized.
    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(config, ReqwestTransport::new()?))
    }
}

impl<T: Transport> ZohoClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            http: HttpClient::new(config, transport),
        }
    }

    /// Record operations (`Leads`, `Contacts`, `Deals`, ...).
    #[must_use]
    pub const fn records(&self) -> Records<'_, T> {
        Records::new(&self.http)
    }

    /// Notes attached to records.
    #[must_use]
    pub const fn notes(&self) -> Notes<'_, T> {
        Notes::new(&self.http)
    }

    /// Returns the underlying HTTP gateway.
    #[must_use]
    pub const fn http(&self) -> &HttpClient<T> {
        &self.http
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http.base_uri()
    }

    /// Overrides the base URL. An empty string restores the region's host.
    ///
    /// Only the client is affected; [`ClientConfig::base_url`] keeps the
    /// value it was built with.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.http.set_base_uri(url);
    }

    /// Replaces the HTTP transport.
    pub fn set_transport(&mut self, transport: T) {
        self.http.set_transport(transport);
    }

    /// Returns the rate-limit snapshot from the most recent response.
    #[must_use]
    pub fn rate_limit_details(&self) -> RateLimitInfo {
        self.http.rate_limit_details()
    }

    /// Returns whether `response` reports more pages.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn has_more(&self, response: &Value) -> bool {
        has_more(response)
    }

    /// Returns the next page marker of `response`, `1` when absent.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn next_page(&self, response: &Value) -> Value {
        next_page(response)
    }

    /// Sends a GET request to `{base_url}/crm/v2/{path}`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(&self, path: &str, query: Option<Value>) -> Result<Value, HttpError> {
        self.http.get(path, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, HttpError> {
        self.http.post(path, body).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn put(&self, path: &str, body: Value) -> Result<Value, HttpError> {
        self.http.put(path, body).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn patch(&self, path: &str, body: Value) -> Result<Value, HttpError> {
        self.http.patch(path, body).await
    }

    /// Sends a DELETE request, with a body only when one is given.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete(&self, path: &str, body: Option<Value>) -> Result<Value, HttpError> {
        self.http.delete(path, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Region;
    use serde_json::json;

    #[test]
    fn test_new_resolves_region() {
        let client = ZohoClient::new("token", "AU", HashMap::new()).unwrap();
        assert_eq!(client.config().region(), Region::Au);
        assert_eq!(client.base_url(), "https://accounts.zoho.com.au");
    }

    #[test]
    fn test_new_defaults_unknown_region_to_us() {
        let client = ZohoClient::new("token", "ZZ", HashMap::new()).unwrap();
        assert_eq!(client.base_url(), "https://accounts.zoho.com");
    }

    #[test]
    fn test_new_rejects_empty_token() {
        let result = ZohoClient::new("", "US", HashMap::new());
        assert!(matches!(
            result,
            Err(Error::Config(crate::ConfigError::EmptyAccessToken))
        ));
    }

    #[test]
    fn test_set_base_url_overrides_and_restores() {
        let mut client = ZohoClient::new("token", "EU", HashMap::new()).unwrap();

        client.set_base_url("https://sandbox.zohoapis.eu");
        assert_eq!(client.base_url(), "https://sandbox.zohoapis.eu");

        client.set_base_url("");
        assert_eq!(client.base_url(), "https://accounts.zoho.eu");
    }

    #[test]
    fn test_set_base_url_leaves_config_untouched() {
        let mut client = ZohoClient::new("token", "IN", HashMap::new()).unwrap();

        client.set_base_url("https://sandbox.zohoapis.in");

        assert_eq!(client.base_url(), "https://sandbox.zohoapis.in");
        assert_eq!(client.config().base_url(), "https://accounts.zoho.in");
    }

    #[test]
    fn test_pagination_helpers_delegate() {
        let client = ZohoClient::new("token", "US", HashMap::new()).unwrap();
        let page = json!({"pagination": {"more": true, "next": 2}});

        assert!(client.has_more(&page));
        assert_eq!(client.next_page(&page), json!(2));
        assert_eq!(client.next_page(&json!({})), json!(1));
    }

    #[test]
    fn test_rate_limit_starts_empty() {
        let client = ZohoClient::new("token", "US", HashMap::new()).unwrap();
        assert_eq!(client.rate_limit_details(), RateLimitInfo { reset_at: None });
    }
}
