//! Shopify Proxy Core - Request-scoped types.
//!
//! This crate provides the values that flow through a single proxied request:
//! - which storefront to talk to ([`StoreName`])
//! - which Admin API version to use ([`ApiVersion`])
//! - the caller-supplied credential ([`AccessToken`])
//! - opaque Shopify identifiers and search filter strings
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every value
//! here is created per request and dropped when the response is sent.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
