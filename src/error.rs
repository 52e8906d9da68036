//! Error types for the Zoho CRM client.
//!
//! [`ConfigError`] covers configuration and validation failures. HTTP-level
//! failures live in [`crate::clients::HttpError`]. Constructors that can fail
//! on either return the crate-level [`Error`].
//!
//! # Example
//!
//! ```rust
//! use zoho_crm::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur while building a client configuration.
///
/// An unrecognized region code is deliberately absent here: it falls back
/// to the US data center instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Zoho OAuth access token.")]
    EmptyAccessToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Crate-level error returned by client constructors.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP layer could not be set up or a request failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}
