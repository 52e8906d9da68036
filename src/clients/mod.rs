//! HTTP layer for Zoho CRM API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: the gateway that builds, sends and decodes requests
//! - [`HttpRequest`]: a request relative to the `/crm/v2/` root
//! - [`HttpResponse`]: status, headers and parsed JSON body
//! - [`RateLimitInfo`]: the `RateLimit-Reset` snapshot
//! - [`Transport`]: the pluggable send capability, with [`ReqwestTransport`]
//!   as the default
//! - [`has_more`] and [`next_page`]: pagination readers
//!
//! # Example
//!
//! ```rust,ignore
//! use zoho_crm::clients::{HttpClient, HttpMethod, HttpRequest, ReqwestTransport};
//! use zoho_crm::{AccessToken, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .access_token(AccessToken::new("1000.abc.def").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(config, ReqwestTransport::new()?);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "Leads")
//!     .query_param("fields", "Email")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! println!("{} {}", response.code, response.body);
//! ```
//!
//! # Status Codes
//!
//! The gateway returns the parsed body whatever the HTTP status, and the
//! Zoho API describes failures inside that body. Enable
//! `error_on_status` on the configuration to turn non-2xx responses into
//! [`HttpError::Response`] instead.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod pagination;
mod query;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_PATH_PREFIX};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimitInfo, RATE_LIMIT_RESET_HEADER};
pub use pagination::{has_more, next_page};
pub use query::build_query;
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
