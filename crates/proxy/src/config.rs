//! Proxy configuration loaded from environment variables.
//!
//! Every variable is optional; with none set the proxy listens on
//! `0.0.0.0:8080` and talks to `https://{store}.myshopify.com`.
//!
//! # Environment Variables
//!
//! - `PROXY_HOST` - Bind address (default: 0.0.0.0)
//! - `PROXY_PORT` - Listen port (default: 8080)
//! - `LOG_FORMAT` - `json` for structured logs, anything else for text
//! - `SHOPIFY_DEFAULT_STORE` - Store used when a request omits `store_name`
//! - `SHOPIFY_API_VERSION` - Default Admin API version (default: 2025-04)
//! - `SHOPIFY_API_BASE_URL` - Replaces the `https://{store}.myshopify.com` origin
//! - `SHOPIFY_TIMEOUT_SECS` - Upstream request timeout (default: 15)
//! - `SHOPIFY_ORDERS_PAGE_SIZE` - Orders per query (default: 50)
//! - `SHOPIFY_PRODUCTS_PAGE_SIZE` - Products per query (default: 20)
//! - `SHOPIFY_NESTED_PAGE_SIZE` - Variants, fulfillments, returns and refund
//!   line items per record (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 0.0)

use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use shopify_proxy_core::{ApiVersion, StoreName};
use thiserror::Error;
use url::Url;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Proxy application configuration.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Emit JSON logs instead of human-readable text
    pub json_logs: bool,
    /// Shopify Admin API configuration
    pub shopify: ShopifyConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Shopify Admin API configuration.
///
/// Holds no credentials: access tokens arrive with each request.
#[derive(Debug, Clone)]
pub struct ShopifyConfig {
    /// Store used when a request does not name one
    pub default_store: Option<StoreName>,
    /// API version used when a request does not name one
    pub api_version: ApiVersion,
    /// Origin replacing `https://{store}.myshopify.com` (mock servers, egress proxies)
    pub base_url: Option<Url>,
    /// Timeout for each upstream request
    pub timeout: Duration,
    /// Page sizes passed to every query
    pub page_sizes: PageSizes,
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            default_store: None,
            api_version: ApiVersion::default(),
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_sizes: PageSizes::default(),
        }
    }
}

/// Upstream pagination caps.
///
/// The proxy never pages past the first page; these bound how much of each
/// connection a single query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizes {
    /// Orders returned by an order search or customer order list
    pub orders: i64,
    /// Products returned by a product search
    pub products: i64,
    /// Entries of nested connections (variants, fulfillments, returns, refund line items)
    pub nested: i64,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            orders: 50,
            products: 20,
            nested: 10,
        }
    }
}

impl ProxyConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be
    /// parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(&lookup);

        let host = env.parse_or("PROXY_HOST", DEFAULT_HOST)?;
        let port = env.parse_or("PROXY_PORT", DEFAULT_PORT)?;
        let json_logs = env
            .optional("LOG_FORMAT")
            .is_some_and(|format| format.eq_ignore_ascii_case("json"));

        let shopify = ShopifyConfig::from_env(&env)?;

        let sentry_dsn = env.optional("SENTRY_DSN");
        let sentry_environment = env.optional("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = env.parse_or("SENTRY_SAMPLE_RATE", 1.0)?;
        let sentry_traces_sample_rate = env.parse_or("SENTRY_TRACES_SAMPLE_RATE", 0.0)?;

        Ok(Self {
            host,
            port,
            json_logs,
            shopify,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ShopifyConfig {
    fn from_env(env: &Env<'_>) -> Result<Self, ConfigError> {
        let default_store = env
            .optional("SHOPIFY_DEFAULT_STORE")
            .map(|s| StoreName::parse(&s))
            .transpose()
            .map_err(invalid("SHOPIFY_DEFAULT_STORE"))?;
        let api_version = ApiVersion::or_default(env.optional("SHOPIFY_API_VERSION").as_deref())
            .map_err(invalid("SHOPIFY_API_VERSION"))?;
        let base_url = env
            .optional("SHOPIFY_API_BASE_URL")
            .map(|s| Url::parse(&s))
            .transpose()
            .map_err(invalid("SHOPIFY_API_BASE_URL"))?;
        let timeout = Duration::from_secs(env.parse_or("SHOPIFY_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?);

        let defaults = PageSizes::default();
        let page_sizes = PageSizes {
            orders: env.page_size("SHOPIFY_ORDERS_PAGE_SIZE", defaults.orders)?,
            products: env.page_size("SHOPIFY_PRODUCTS_PAGE_SIZE", defaults.products)?,
            nested: env.page_size("SHOPIFY_NESTED_PAGE_SIZE", defaults.nested)?,
        };

        Ok(Self {
            default_store,
            api_version,
            base_url,
            timeout,
            page_sizes,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Largest `first:` argument Shopify accepts on a connection.
const MAX_PAGE_SIZE: i64 = 250;

/// Variable lookup with parsing helpers.
struct Env<'a>(&'a dyn Fn(&str) -> Option<String>);

impl Env<'_> {
    /// Get an optional variable, treating empty values as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.optional(key)
            .map_or(Ok(default), |v| v.trim().parse().map_err(invalid(key)))
    }

    /// Parse a page size, which must be between 1 and 250.
    fn page_size(&self, key: &str, default: i64) -> Result<i64, ConfigError> {
        let size = self.parse_or(key, default)?;
        if (1..=MAX_PAGE_SIZE).contains(&size) {
            Ok(size)
        } else {
            Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("must be between 1 and {MAX_PAGE_SIZE} (got {size})"),
            ))
        }
    }
}

fn invalid<E: Display>(key: &str) -> impl FnOnce(E) -> ConfigError + '_ {
    move |e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ProxyConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ProxyConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(!config.json_logs);
        assert!(config.shopify.default_store.is_none());
        assert_eq!(config.shopify.api_version.as_str(), "2025-04");
        assert!(config.shopify.base_url.is_none());
        assert_eq!(config.shopify.timeout, Duration::from_secs(15));
        assert_eq!(config.shopify.page_sizes, PageSizes::default());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_default_page_sizes() {
        let sizes = PageSizes::default();
        assert_eq!(sizes.orders, 50);
        assert_eq!(sizes.products, 20);
        assert_eq!(sizes.nested, 10);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PROXY_HOST", "127.0.0.1"),
            ("PROXY_PORT", "9090"),
            ("LOG_FORMAT", "JSON"),
            ("SHOPIFY_DEFAULT_STORE", "acme.myshopify.com"),
            ("SHOPIFY_API_VERSION", "2026-01"),
            ("SHOPIFY_API_BASE_URL", "http://localhost:4000"),
            ("SHOPIFY_TIMEOUT_SECS", "30"),
            ("SHOPIFY_ORDERS_PAGE_SIZE", "5"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
        assert!(config.json_logs);
        assert_eq!(config.shopify.default_store.unwrap().as_str(), "acme");
        assert_eq!(config.shopify.api_version.as_str(), "2026-01");
        assert_eq!(
            config.shopify.base_url.unwrap().as_str(),
            "http://localhost:4000/"
        );
        assert_eq!(config.shopify.timeout, Duration::from_secs(30));
        assert_eq!(config.shopify.page_sizes.orders, 5);
        assert_eq!(config.shopify.page_sizes.products, 20);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = load(&[("PROXY_PORT", ""), ("SHOPIFY_DEFAULT_STORE", " ")]).unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.shopify.default_store.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("PROXY_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "PROXY_PORT"));
    }

    #[test]
    fn test_invalid_store() {
        let err = load(&[("SHOPIFY_DEFAULT_STORE", "evil.com/")]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "SHOPIFY_DEFAULT_STORE")
        );
    }

    #[test]
    fn test_page_size_out_of_range() {
        assert!(load(&[("SHOPIFY_NESTED_PAGE_SIZE", "0")]).is_err());
        assert!(load(&[("SHOPIFY_PRODUCTS_PAGE_SIZE", "251")]).is_err());
    }
}
