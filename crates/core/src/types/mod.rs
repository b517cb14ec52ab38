//! Core types for the Shopify proxy.
//!
//! This module provides type-safe wrappers for the request-scoped values
//! that select and authorize an upstream call.

pub mod api_version;
pub mod credential;
pub mod id;
pub mod search;
pub mod store;

pub use api_version::{ApiVersion, ApiVersionError, DEFAULT_API_VERSION};
pub use credential::AccessToken;
pub use id::*;
pub use search::SearchFilter;
pub use store::{StoreName, StoreNameError};
