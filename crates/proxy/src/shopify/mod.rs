//! Shopify Admin API query layer.
//!
//! Every proxied endpoint resolves to one or two calls made through
//! [`ShopifyClient`]. The client is stateless apart from its HTTP connection
//! pool: the store, API version and access token travel with each call in a
//! request-scoped [`ShopContext`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_proxy::shopify::{ShopContext, ShopifyClient};
//!
//! let client = ShopifyClient::new(&config.shopify)?;
//! let ctx = ShopContext::new(store, token, api_version);
//!
//! let orders = client.find_orders_by_number(&ctx, Some("1001")).await?;
//! ```

mod client;
pub mod search;
pub mod types;

pub use client::{ACCESS_TOKEN_HEADER, ShopContext, ShopifyClient, queries};
pub use search::ProductSearch;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when querying the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// Caller-supplied search parameters are missing or contradictory.
    ///
    /// Raised before any request is sent.
    #[error("{0}")]
    InvalidParameter(String),

    /// HTTP request failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Access token was rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// Response body did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Treat empty and whitespace-only parameters as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
