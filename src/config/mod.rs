//! Configuration types for the Zoho CRM client.
//!
//! - [`ClientConfig`]: the settings a client is built from
//! - [`ClientConfigBuilder`]: a builder for [`ClientConfig`]
//! - [`AccessToken`]: a validated, debug-masked OAuth access token
//! - [`Region`]: the Zoho data center to talk to
//!
//! # Example
//!
//! ```rust
//! use zoho_crm::{AccessToken, ClientConfig, Region};
//!
//! let config = ClientConfig::builder()
//!     .access_token(AccessToken::new("1000.abc.def").unwrap())
//!     .region(Region::Eu)
//!     .extra_header("X-Request-Source", "billing-sync")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://accounts.zoho.eu");
//! ```

mod newtypes;
mod region;

pub use newtypes::AccessToken;
pub use region::{resolve_base_url, Region};

use std::collections::HashMap;

use crate::error::ConfigError;

/// Configuration for a Zoho CRM client.
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`. It is immutable once built;
/// the client itself offers a setter for the base URL.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    access_token: AccessToken,
    region: Region,
    base_url: String,
    extra_headers: HashMap<String, String>,
    error_on_status: bool,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the data-center region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns the base URL resolved when the config was built: the
    /// builder override if one was set, otherwise the region's host.
    ///
    /// [`ZohoClient::set_base_url`](crate::ZohoClient::set_base_url) does not
    /// change this value; use [`ZohoClient::base_url`](crate::ZohoClient::base_url)
    /// for the URL requests currently go to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the extra headers sent with every request.
    #[must_use]
    pub const fn extra_headers(&self) -> &HashMap<String, String> {
        &self.extra_headers
    }

    /// Returns whether non-2xx responses are turned into errors.
    #[must_use]
    pub const fn error_on_status(&self) -> bool {
        self.error_on_status
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// `access_token` is required.
///
/// # Defaults
///
/// - `region`: [`Region::Us`]
/// - `base_url`: the region's host
/// - `extra_headers`: empty
/// - `error_on_status`: `false`, so response bodies are returned whatever
///   the HTTP status
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    access_token: Option<AccessToken>,
    region: Option<Region>,
    base_url: Option<String>,
    extra_headers: HashMap<String, String>,
    error_on_status: Option<bool>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the data-center region.
    #[must_use]
    pub const fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Sets the region from a two-letter code; unknown codes select the US.
    #[must_use]
    pub fn region_code(mut self, code: &str) -> Self {
        self.region = Some(Region::from_code(code));
        self
    }

    /// Overrides the base URL, bypassing the region mapping.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Adds a header sent with every request.
    ///
    /// An `Authorization` header added here is always replaced by the
    /// token's own header.
    #[must_use]
    pub fn extra_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(key.into(), value.into());
        self
    }

    /// Sets all extra headers at once, replacing any added before.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = headers;
        self
    }

    /// Turns non-2xx responses into [`HttpError::Response`](crate::clients::HttpError::Response).
    #[must_use]
    pub const fn error_on_status(mut self, enabled: bool) -> Self {
        self.error_on_status = Some(enabled);
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` was not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;
        let region = self.region.unwrap_or_default();
        let base_url = resolve_base_url(region.code(), self.base_url.as_deref());

        Ok(ClientConfig {
            access_token,
            region,
            base_url,
            extra_headers: self.extra_headers,
            error_on_status: self.error_on_status.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("test-token").unwrap()
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = ClientConfig::builder().region(Region::Eu).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfig::builder().access_token(token()).build().unwrap();

        assert_eq!(config.region(), Region::Us);
        assert_eq!(config.base_url(), "https://accounts.zoho.com");
        assert!(config.extra_headers().is_empty());
        assert!(!config.error_on_status());
    }

    #[test]
    fn test_region_code_derives_base_url() {
        let config = ClientConfig::builder()
            .access_token(token())
            .region_code("CN")
            .build()
            .unwrap();

        assert_eq!(config.region(), Region::Cn);
        assert_eq!(config.base_url(), "https://accounts.zoho.com.cn");
    }

    #[test]
    fn test_unknown_region_code_is_not_an_error() {
        let config = ClientConfig::builder()
            .access_token(token())
            .region_code("MARS")
            .build()
            .unwrap();

        assert_eq!(config.region(), Region::Us);
    }

    #[test]
    fn test_base_url_override_bypasses_region() {
        let config = ClientConfig::builder()
            .access_token(token())
            .region(Region::Au)
            .base_url("http://127.0.0.1:9000")
            .build()
            .unwrap();

        assert_eq!(config.region(), Region::Au);
        assert_eq!(config.base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_extra_headers_accumulate() {
        let config = ClientConfig::builder()
            .access_token(token())
            .extra_header("X-One", "1")
            .extra_header("X-Two", "2")
            .build()
            .unwrap();

        assert_eq!(config.extra_headers().len(), 2);
        assert_eq!(config.extra_headers().get("X-Two"), Some(&"2".to_string()));
    }
}
