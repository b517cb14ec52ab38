//! Domain types for records returned by the Shopify Admin API.
//!
//! These types mirror the selection sets in the query documents, using the
//! upstream camelCase names (and the aliases the documents declare) so the
//! JSON handed back to callers keeps the shape Shopify returned. Every field
//! is optional because Shopify returns `null` for anything it cannot resolve.

mod common;
mod order;
mod product;

pub use common::*;
pub use order::*;
pub use product::*;
