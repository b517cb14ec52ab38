//! Integration test harness for the Shopify agent proxy.
//!
//! Each test gets its own [`TestApp`]: a `wiremock` server standing in for
//! the Admin API and the full router pointed at it through
//! `SHOPIFY_API_BASE_URL`. Requests are driven in-process with
//! `tower::ServiceExt::oneshot`, so no port is bound for the proxy.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopify-proxy-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shopify_proxy::{config::ProxyConfig, routes, shopify::ShopifyClient, state::AppState};
use tower::ServiceExt;
use wiremock::{
    MockBuilder, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

/// Store configured as the default in every test app.
pub const TEST_STORE: &str = "acme";

/// Access token sent by the test caller.
pub const TEST_TOKEN: &str = "shpat_test_token";

/// GraphQL path the proxy posts to with the default API version.
pub const GRAPHQL_PATH: &str = "/admin/api/2025-04/graphql.json";

/// Router under test plus the mocked Admin API behind it.
pub struct TestApp {
    pub upstream: MockServer,
    pub state: AppState,
    router: Router,
}

impl TestApp {
    /// Start a mock Admin API and build the router against it.
    pub async fn start() -> Self {
        Self::start_with(&[]).await
    }

    /// Like [`TestApp::start`], with extra environment variables.
    pub async fn start_with(overrides: &[(&str, &str)]) -> Self {
        let upstream = MockServer::start().await;
        let state = state_with(&upstream.uri(), overrides);
        let router = routes::app(state.clone());

        Self {
            upstream,
            state,
            router,
        }
    }

    /// Shopify client wired to the mock.
    #[must_use]
    pub fn shopify(&self) -> &ShopifyClient {
        self.state.shopify()
    }

    /// `GET uri` with the test access token.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(uri, Some(TEST_TOKEN)).await
    }

    /// `GET uri` without any access token header.
    pub async fn get_anonymous(&self, uri: &str) -> TestResponse {
        self.send(uri, None).await
    }

    async fn send(&self, uri: &str, token: Option<&str>) -> TestResponse {
        let mut request = Request::get(uri);
        if let Some(token) = token {
            request = request.header("X-Shopify-Access-Token", token);
        }

        let response = self
            .router
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Build application state whose upstream origin is `base_url`.
#[must_use]
pub fn state_for(base_url: &str) -> AppState {
    state_with(base_url, &[])
}

/// Build application state against `base_url` with extra environment
/// variables, which win over the test defaults.
#[must_use]
pub fn state_with(base_url: &str, overrides: &[(&str, &str)]) -> AppState {
    let config = ProxyConfig::from_lookup(|key| {
        overrides
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| (*value).to_string())
            .or_else(|| match key {
                "SHOPIFY_API_BASE_URL" => Some(base_url.to_string()),
                "SHOPIFY_DEFAULT_STORE" => Some(TEST_STORE.to_string()),
                _ => None,
            })
    })
    .unwrap();

    AppState::new(config).unwrap()
}

/// A buffered router response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Parse the body as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    /// The body as UTF-8 text.
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }
}

/// Match a GraphQL POST for the named operation carrying the test token.
#[must_use]
pub fn graphql(operation: &str) -> MockBuilder {
    wiremock::Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("X-Shopify-Access-Token", TEST_TOKEN))
        .and(body_string_contains(format!(
            "\"operationName\":\"{operation}\""
        )))
}

/// A successful GraphQL response wrapping `data`.
#[must_use]
pub fn data(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

/// An order node as the Admin API returns it.
#[must_use]
pub fn order(id: u64, number: &str, confirmation_number: &str) -> Value {
    json!({
        "id": format!("gid://shopify/Order/{id}"),
        "orderNumber": number,
        "confirmationNumber": confirmation_number,
        "displayFinancialStatus": "PAID",
        "displayFulfillmentStatus": "FULFILLED",
        "currentTotalPriceSet": {
            "presentmentMoney": { "amount": "42.00", "currencyCode": "USD" }
        },
        "fulfillments": [],
        "refunds": [],
        "returns": { "nodes": [] }
    })
}

/// A product edge as the Admin API returns it.
#[must_use]
pub fn product_edge(id: u64, title: &str) -> Value {
    json!({
        "node": {
            "id": format!("gid://shopify/Product/{id}"),
            "title": title,
            "description": format!("{title} in organic cotton"),
            "status": "ACTIVE",
            "variants": {
                "edges": [{
                    "node": {
                        "displayName": format!("{title} - Default"),
                        "price": "25.00",
                        "availableForSale": true,
                        "OutOfStockOrderingPolicy": "DENY"
                    }
                }]
            }
        }
    })
}
