//! Application state shared across handlers.

use std::sync::Arc;

use shopify_proxy_core::{AccessToken, ApiVersion, StoreName};

use crate::config::ProxyConfig;
use crate::error::AppError;
use crate::shopify::{ShopContext, ShopifyClient, ShopifyError, non_blank};

/// Application state shared across all handlers.
///
/// Holds only immutable configuration and the Shopify client, whose HTTP
/// connection pool is the one resource requests share. Cheaply cloneable
/// via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ProxyConfig,
    shopify: ShopifyClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the Shopify HTTP client cannot be built.
    pub fn new(config: ProxyConfig) -> Result<Self, ShopifyError> {
        let shopify = ShopifyClient::new(&config.shopify)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, shopify }),
        })
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &ProxyConfig {
        &self.inner.config
    }

    /// Get a reference to the Shopify Admin API client.
    #[must_use]
    pub fn shopify(&self) -> &ShopifyClient {
        &self.inner.shopify
    }

    /// Build the request-scoped shop context from caller parameters.
    ///
    /// A missing `store_name` falls back to the configured default store and
    /// a missing `api_version` to the configured default version.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidParameter` if no store can be determined or
    /// either value is malformed.
    pub fn shop_context(
        &self,
        token: AccessToken,
        store_name: Option<&str>,
        api_version: Option<&str>,
    ) -> Result<ShopContext, AppError> {
        let shopify_config = &self.config().shopify;

        let store = match non_blank(store_name) {
            Some(name) => StoreName::parse(name)
                .map_err(|e| AppError::InvalidParameter(format!("store_name: {e}.")))?,
            None => shopify_config.default_store.clone().ok_or_else(|| {
                AppError::InvalidParameter("store_name must be provided.".to_string())
            })?,
        };

        let api_version = match non_blank(api_version) {
            Some(version) => ApiVersion::parse(version)
                .map_err(|e| AppError::InvalidParameter(format!("api_version: {e}.")))?,
            None => shopify_config.api_version.clone(),
        };

        Ok(ShopContext::new(store, token, api_version))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ShopifyConfig;

    fn state(default_store: Option<&str>) -> AppState {
        let mut config = ProxyConfig::from_lookup(|_| None).unwrap();
        config.shopify = ShopifyConfig {
            default_store: default_store.map(|s| StoreName::parse(s).unwrap()),
            ..ShopifyConfig::default()
        };
        AppState::new(config).unwrap()
    }

    fn token() -> AccessToken {
        AccessToken::parse("shpat_test").unwrap()
    }

    #[test]
    fn test_explicit_store_and_version() {
        let ctx = state(None)
            .shop_context(token(), Some("acme"), Some("2024-10"))
            .unwrap();
        assert_eq!(ctx.store.as_str(), "acme");
        assert_eq!(ctx.api_version.as_str(), "2024-10");
    }

    #[test]
    fn test_falls_back_to_defaults() {
        let ctx = state(Some("fallback"))
            .shop_context(token(), None, Some(""))
            .unwrap();
        assert_eq!(ctx.store.as_str(), "fallback");
        assert_eq!(ctx.api_version.as_str(), "2025-04");
    }

    #[test]
    fn test_missing_store_without_default() {
        let err = state(None).shop_context(token(), None, None).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidParameter(ref d) if d == "store_name must be provided.")
        );
    }

    #[test]
    fn test_malformed_values_are_invalid_parameters() {
        let state = state(Some("acme"));
        assert!(matches!(
            state.shop_context(token(), Some("evil.com/"), None),
            Err(AppError::InvalidParameter(_))
        ));
        assert!(matches!(
            state.shop_context(token(), None, Some("../oauth")),
            Err(AppError::InvalidParameter(_))
        ));
    }
}
