//! HTTP route handlers for the proxy.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                                 - Health check
//!
//! # Shopify (X-Shopify-Access-Token required)
//! GET  /shopify/order-by-number                          - Most recent order by number
//! GET  /shopify/order-by-confirmation-number-and-email   - Customer order by confirmation number
//! GET  /shopify/products                                 - Product search (id, or title then description)
//!
//! # Shopify (no credential)
//! GET  /shopify/get-product-url                          - Public product page URL
//! ```

pub mod orders;
pub mod products;

use std::time::Duration;

use axum::{Router, http::Request, routing::get};
use serde::Serialize;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Create the Shopify routes router.
pub fn shopify_routes() -> Router<AppState> {
    Router::new()
        .route("/order-by-number", get(orders::order_by_number))
        .route(
            "/order-by-confirmation-number-and-email",
            get(orders::order_by_confirmation_number_and_email),
        )
        .route("/products", get(products::products))
        .route("/get-product-url", get(products::product_url))
}

/// Create all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .nest("/shopify", shopify_routes())
}

/// Build the complete application: routes, request IDs and request tracing.
///
/// Sentry layers are added by the binary on top of this.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri().path(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                        request_id = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    tracing::info!("Service up.");
    "Ok."
}

/// Either a record or the placeholder message sent when nothing matched.
///
/// Soft misses are 200s so agents can read the message as data.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Found<T> {
    Record(T),
    Missing(&'static str),
}

impl<T> Found<T> {
    /// Wrap `value`, or fall back to `message` when there is none.
    pub fn or_message(value: Option<T>, message: &'static str) -> Self {
        value.map_or(Self::Missing(message), Self::Record)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_found_serializes_untagged() {
        let found = Found::or_message(Some(json!({ "id": "1" })), "No orders found.");
        assert_eq!(serde_json::to_value(found).ok(), Some(json!({ "id": "1" })));

        let missing = Found::<serde_json::Value>::or_message(None, "No orders found.");
        assert_eq!(
            serde_json::to_value(missing).ok(),
            Some(json!("No orders found."))
        );
    }
}
