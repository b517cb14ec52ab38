//! HTTP middleware stack for the proxy.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//!
//! The access token is not a layer: handlers that call Shopify take the
//! [`ShopifyAccessToken`] extractor, so the product URL builder and the
//! health check stay open. Query strings go through [`Params`] so malformed
//! ones get the same JSON error body as every other rejection.

pub mod access_token;
pub mod params;
pub mod request_id;

pub use access_token::ShopifyAccessToken;
pub use params::Params;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
