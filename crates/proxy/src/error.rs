//! Unified error handling with Sentry integration.
//!
//! Route handlers return `Result<T, AppError>`. Caller mistakes become 400s
//! carrying the detail; upstream failures become a generic 500 while the
//! detail goes to the logs and Sentry only.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::shopify::ShopifyError;

/// What an endpoint was fetching when an upstream call failed.
///
/// Only used to word the generic error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Order,
    Customer,
    Products,
}

impl Resource {
    /// Noun used in client-facing error messages.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Customer => "customer",
            Self::Products => "products",
        }
    }
}

/// Application-level error type for the proxy.
#[derive(Debug, Error)]
pub enum AppError {
    /// The access token header is absent or blank.
    #[error("Missing X-Shopify-Access-Token header.")]
    MissingCredential,

    /// A request parameter is missing or malformed.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No customer is registered with the given email.
    #[error("Customer not found.")]
    CustomerNotFound,

    /// Shopify API operation failed.
    #[error("Shopify error while retrieving {}: {source}", .resource.noun())]
    Upstream {
        /// What was being fetched.
        resource: Resource,
        /// Underlying failure, never shown to the caller.
        source: ShopifyError,
    },
}

impl AppError {
    /// Classify a query layer error for an endpoint fetching `resource`.
    ///
    /// Parameter problems keep their detail; everything else is an
    /// upstream failure.
    #[must_use]
    pub fn from_shopify(resource: Resource, err: ShopifyError) -> Self {
        match err {
            ShopifyError::InvalidParameter(detail) => Self::InvalidParameter(detail),
            source => Self::Upstream { resource, source },
        }
    }

    /// Closure form of [`AppError::from_shopify`] for `map_err`.
    pub fn retrieving(resource: Resource) -> impl FnOnce(ShopifyError) -> Self {
        move |err| Self::from_shopify(resource, err)
    }

    /// HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredential | Self::InvalidParameter(_) | Self::CustomerNotFound => {
                StatusCode::BAD_REQUEST
            }
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidParameter(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture upstream failures to Sentry
        if let Self::Upstream { resource, source } = &self {
            let event_id = sentry::capture_error(source);
            tracing::error!(
                error = %source,
                resource = resource.noun(),
                sentry_event_id = %event_id,
                "Upstream request failed"
            );
        } else {
            tracing::info!(error = %self, "Rejected request");
        }

        // Don't expose upstream error details to clients
        let message = match &self {
            Self::Upstream { resource, .. } => format!(
                "An error occurred while retrieving {}.",
                resource.noun()
            ),
            _ => self.to_string(),
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
