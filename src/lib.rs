//! # Zoho CRM Rust Client
//!
//! A thin async client for the Zoho CRM v2 REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Region-based host selection via [`Region`], with a US fallback
//! - Bearer authentication with a caller-supplied [`AccessToken`]
//! - Record operations via [`ZohoClient::records`] and notes via [`ZohoClient::notes`]
//! - Rate-limit reset tracking via [`ZohoClient::rate_limit_details`]
//! - A pluggable [`Transport`](clients::Transport), `reqwest` by default
//!
//! Responses are returned as [`serde_json::Value`]: CRM modules carry
//! arbitrary, account-specific fields, so no per-module schemas are modeled.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use serde_json::json;
//! use zoho_crm::ZohoClient;
//!
//! let client = ZohoClient::new("1000.abc.def", "US", HashMap::new())?;
//!
//! // Insert a lead
//! let created = client
//!     .records()
//!     .create("Leads", json!({"data": [{"Last_Name": "Smith"}]}))
//!     .await?;
//!
//! // Page through contacts
//! let mut page = json!(1);
//! loop {
//!     let response = client
//!         .records()
//!         .list("Contacts", Some(json!({"page": page, "per_page": 200})))
//!         .await?;
//!     if !zoho_crm::has_more(&response) {
//!         break;
//!     }
//!     page = zoho_crm::next_page(&response);
//! }
//!
//! println!("quota resets at {:?}", client.rate_limit_details().reset_at);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use zoho_crm::{AccessToken, ClientConfig, Region};
//!
//! let config = ClientConfig::builder()
//!     .access_token(AccessToken::new("1000.abc.def").unwrap())
//!     .region(Region::In)
//!     .extra_header("X-Integration", "erp-sync")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://accounts.zoho.in");
//! ```
//!
//! ## Error Handling
//!
//! Errors are never retried or swallowed. By default the HTTP status is not
//! inspected: the parsed body is returned for any status and the Zoho API
//! reports failures inside it (`"status": "error"`). Set
//! [`ClientConfigBuilder::error_on_status`] to get
//! [`HttpError::Response`](clients::HttpError::Response) for non-2xx
//! responses instead. A body that is not JSON is always an error.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Explicit transport**: the HTTP stack is injected, never discovered
//! - **Thread-safe**: the client is `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use client::ZohoClient;
pub use config::{resolve_base_url, AccessToken, ClientConfig, ClientConfigBuilder, Region};
pub use error::{ConfigError, Error};
pub use resources::{Notes, Records};

// Re-export HTTP types
pub use clients::{
    has_more, next_page, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, RateLimitInfo, ReqwestTransport,
    Transport, TransportRequest, TransportResponse,
};
