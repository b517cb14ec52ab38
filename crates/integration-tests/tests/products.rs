//! Product endpoints against a mocked Admin API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use serde_json::json;
use shopify_proxy_integration_tests::{TestApp, data, graphql, product_edge};
use wiremock::matchers::body_string_contains;

fn no_products() -> wiremock::ResponseTemplate {
    data(json!({ "products": { "edges": [] } }))
}

#[tokio::test]
async fn test_products_by_id_never_falls_back() {
    let app = TestApp::start().await;

    graphql("GetProducts")
        .and(body_string_contains("\"query\":\"id:8123\""))
        .respond_with(no_products())
        .expect(1)
        .mount(&app.upstream)
        .await;

    graphql("GetProducts")
        .and(body_string_contains("description:"))
        .respond_with(no_products())
        .expect(0)
        .mount(&app.upstream)
        .await;

    let response = app
        .get("/shopify/products?product_id=8123&product_name=polo")
        .await;

    assert_eq!(response.status, 200);
    assert_eq!(response.json(), json!({ "products": "No products found." }));
}

#[tokio::test]
async fn test_products_by_id_returns_edges() {
    let app = TestApp::start().await;

    graphql("GetProducts")
        .and(body_string_contains("\"query\":\"id:8123\""))
        .respond_with(data(json!({
            "products": { "edges": [product_edge(8123, "Polo")] }
        })))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app.get("/shopify/products?product_id=8123").await;

    assert_eq!(response.status, 200);
    let body = response.json();
    let products = body["products"].as_array().cloned().unwrap_or_default();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["node"]["title"], "Polo");
    assert_eq!(
        products[0]["node"]["variants"]["edges"][0]["node"]["OutOfStockOrderingPolicy"],
        "DENY"
    );
}

#[tokio::test]
async fn test_products_title_match_skips_description() {
    let app = TestApp::start().await;

    graphql("GetProducts")
        .and(body_string_contains("title:*polo*"))
        .respond_with(data(json!({
            "products": { "edges": [product_edge(1, "Polo"), product_edge(2, "Polo Kids")] }
        })))
        .expect(1)
        .mount(&app.upstream)
        .await;

    graphql("GetProducts")
        .and(body_string_contains("description:*polo*"))
        .respond_with(no_products())
        .expect(0)
        .mount(&app.upstream)
        .await;

    let response = app.get("/shopify/products?product_name=polo").await;

    assert_eq!(response.status, 200);
    assert_eq!(response.json()["products"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_products_empty_title_falls_back_to_description_once() {
    let app = TestApp::start().await;

    graphql("GetProducts")
        .and(body_string_contains("title:*linen*"))
        .respond_with(no_products())
        .expect(1)
        .mount(&app.upstream)
        .await;

    graphql("GetProducts")
        .and(body_string_contains("description:*linen*"))
        .respond_with(data(json!({
            "products": { "edges": [product_edge(5, "Summer Shirt")] }
        })))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app.get("/shopify/products?product_name=linen").await;

    assert_eq!(response.status, 200);
    assert_eq!(
        response.json()["products"][0]["node"]["id"],
        "gid://shopify/Product/5"
    );
}

#[tokio::test]
async fn test_products_both_strategies_empty() {
    let app = TestApp::start().await;

    graphql("GetProducts")
        .respond_with(no_products())
        .expect(2)
        .mount(&app.upstream)
        .await;

    let response = app.get("/shopify/products?product_name=nothing").await;

    assert_eq!(response.status, 200);
    assert_eq!(response.json(), json!({ "products": "No products found." }));
}

#[tokio::test]
async fn test_products_requires_id_or_name() {
    let app = TestApp::start().await;

    graphql("GetProducts")
        .respond_with(no_products())
        .expect(0)
        .mount(&app.upstream)
        .await;

    let response = app.get("/shopify/products").await;

    assert_eq!(response.status, 400);
    assert_eq!(
        response.json(),
        json!({ "error": "Invalid parameter: product_name or product_id must be provided." })
    );
}

// ============================================================================
// Product URL builder
// ============================================================================

#[tokio::test]
async fn test_product_url_needs_no_token_or_upstream() {
    let app = TestApp::start().await;

    wiremock::Mock::given(wiremock::matchers::any())
        .respond_with(no_products())
        .expect(0)
        .mount(&app.upstream)
        .await;

    let response = app
        .get_anonymous("/shopify/get-product-url?store_name=acme&product_handle=polo-shirt-1")
        .await;

    assert_eq!(response.status, 200);
    assert_eq!(
        response.json(),
        json!({ "product_url": "https://acme.myshopify.com/products/polo-shirt-1" })
    );
}

#[tokio::test]
async fn test_product_url_requires_both_parameters() {
    let app = TestApp::start().await;

    for uri in [
        "/shopify/get-product-url?store_name=acme",
        "/shopify/get-product-url?product_handle=polo",
        "/shopify/get-product-url",
    ] {
        let response = app.get_anonymous(uri).await;
        assert_eq!(response.status, 400, "{uri}");
    }
}
