//! Shopify agent proxy library.
//!
//! Translates simple REST calls from internal agents into Shopify Admin
//! GraphQL queries. Exposed as a library so the router can be driven
//! end-to-end from tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shopify;
pub mod state;
