//! Shopify Admin API GraphQL client.
//!
//! The caller supplies the store and access token on every request, so the
//! client itself only owns the shared HTTP connection pool, the configured
//! page sizes, and an optional origin override.

use std::sync::Arc;

use graphql_client::GraphQLQuery;
use serde::{Deserialize, de::DeserializeOwned};
use shopify_proxy_core::{AccessToken, ApiVersion, StoreName};
use url::Url;

use crate::config::{PageSizes, ShopifyConfig};

use super::{GraphQLError, ShopifyError, non_blank};

mod customers;
mod orders;
mod products;
pub mod queries;

/// Header carrying the Admin API access token, both inbound and outbound.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Longest slice of an error response body kept for logging.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Request-scoped target of an Admin API call.
///
/// Built by the router from the inbound request and dropped with it.
#[derive(Debug, Clone)]
pub struct ShopContext {
    /// Storefront whose Admin API is called.
    pub store: StoreName,
    /// Caller-supplied access token, forwarded unchanged.
    pub token: AccessToken,
    /// Admin API version segment of the endpoint path.
    pub api_version: ApiVersion,
}

impl ShopContext {
    /// Create a new shop context.
    #[must_use]
    pub const fn new(store: StoreName, token: AccessToken, api_version: ApiVersion) -> Self {
        Self {
            store,
            token,
            api_version,
        }
    }
}

/// Shopify Admin API GraphQL client.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct ShopifyClient {
    inner: Arc<ShopifyClientInner>,
}

struct ShopifyClientInner {
    client: reqwest::Client,
    base_url: Option<Url>,
    page_sizes: PageSizes,
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
    #[serde(default)]
    path: Vec<serde_json::Value>,
}

impl ShopifyClient {
    /// Create a new Admin API client.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::Http` if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn new(config: &ShopifyConfig) -> Result<Self, ShopifyError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("shopify-proxy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(ShopifyClientInner {
                client,
                base_url: config.base_url.clone(),
                page_sizes: config.page_sizes,
            }),
        })
    }

    /// Page sizes baked into every query.
    #[must_use]
    pub fn page_sizes(&self) -> PageSizes {
        self.inner.page_sizes
    }

    /// GraphQL endpoint for the given shop.
    ///
    /// `https://{store}.myshopify.com/admin/api/{version}/graphql.json`, or
    /// the same path under the configured origin override.
    #[must_use]
    pub fn endpoint(&self, ctx: &ShopContext) -> String {
        let origin = self.inner.base_url.as_ref().map_or_else(
            || format!("https://{}", ctx.store.host()),
            |base| base.as_str().trim_end_matches('/').to_string(),
        );
        format!("{origin}/admin/api/{}/graphql.json", ctx.api_version)
    }

    // =========================================================================
    // GraphQL Execution
    // =========================================================================

    /// Execute a GraphQL query against the shop in `ctx`.
    async fn execute<Q: GraphQLQuery>(
        &self,
        ctx: &ShopContext,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, ShopifyError>
    where
        Q::ResponseData: DeserializeOwned,
    {
        let endpoint = self.endpoint(ctx);
        let body = Q::build_query(variables);

        tracing::debug!(
            endpoint = %endpoint,
            operation = body.operation_name,
            "Sending Admin API request"
        );

        let response = self
            .inner
            .client
            .post(&endpoint)
            .header(ACCESS_TOKEN_HEADER, ctx.token.expose())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(ShopifyError::RateLimited(retry_after));
        }

        // Check for unauthorized
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ShopifyError::Unauthorized(
                "Invalid or expired access token".to_string(),
            ));
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ShopifyError::Status {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let bytes = response.bytes().await?;
        let graphql_response: GraphQLResponse<Q::ResponseData> = serde_json::from_slice(&bytes)?;

        // Check for GraphQL errors
        if let Some(errors) = graphql_response.errors
            && !errors.is_empty()
        {
            let converted_errors: Vec<GraphQLError> = errors
                .into_iter()
                .map(|e| GraphQLError {
                    message: e.message,
                    path: e.path,
                })
                .collect();
            return Err(ShopifyError::GraphQL(converted_errors));
        }

        graphql_response.data.ok_or_else(|| {
            ShopifyError::GraphQL(vec![GraphQLError {
                message: "No data in response".to_string(),
                path: vec![],
            }])
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ctx(store: &str, version: &str) -> ShopContext {
        ShopContext::new(
            StoreName::parse(store).unwrap(),
            AccessToken::parse("shpat_test").unwrap(),
            ApiVersion::parse(version).unwrap(),
        )
    }

    #[test]
    fn test_endpoint_uses_store_subdomain() {
        let client = ShopifyClient::new(&ShopifyConfig::default()).unwrap();
        assert_eq!(
            client.endpoint(&ctx("acme", "2025-04")),
            "https://acme.myshopify.com/admin/api/2025-04/graphql.json"
        );
    }

    #[test]
    fn test_endpoint_honours_origin_override() {
        let config = ShopifyConfig {
            base_url: Some(Url::parse("http://127.0.0.1:9999/").unwrap()),
            ..ShopifyConfig::default()
        };
        let client = ShopifyClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(&ctx("acme", "2024-10")),
            "http://127.0.0.1:9999/admin/api/2024-10/graphql.json"
        );
    }
}
