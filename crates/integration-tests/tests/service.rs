//! Cross-cutting behavior: health, credentials, request IDs, upstream failures.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::time::Duration;

use serde_json::json;
use shopify_proxy::middleware::REQUEST_ID_HEADER;
use shopify_proxy_integration_tests::{TestApp, data, graphql};
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::any};

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::start().await;

    let response = app.get_anonymous("/").await;

    assert_eq!(response.status, 200);
    assert_eq!(response.text(), "Ok.");
}

#[tokio::test]
async fn test_missing_token_makes_no_upstream_call() {
    let app = TestApp::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.upstream)
        .await;

    for uri in [
        "/shopify/order-by-number?order_number=1001",
        "/shopify/order-by-confirmation-number-and-email?email=a%40b.c&confirmation_number=X",
        "/shopify/products?product_name=polo",
    ] {
        let response = app.get_anonymous(uri).await;
        assert_eq!(response.status, 400, "{uri}");
        assert_eq!(
            response.json(),
            json!({ "error": "Missing X-Shopify-Access-Token header." })
        );
    }
}

#[tokio::test]
async fn test_every_response_has_request_id() {
    let app = TestApp::start().await;

    let ok = app.get_anonymous("/").await;
    assert!(ok.headers.contains_key(REQUEST_ID_HEADER));

    let rejected = app.get_anonymous("/shopify/products").await;
    assert!(rejected.headers.contains_key(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn test_upstream_error_is_generic() {
    let app = TestApp::start().await;

    graphql("GetOrders")
        .respond_with(ResponseTemplate::new(500).set_body_string("stack trace: secret internals"))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app.get("/shopify/order-by-number?order_number=1001").await;

    assert_eq!(response.status, 500);
    assert_eq!(
        response.json(),
        json!({ "error": "An error occurred while retrieving order." })
    );
    assert!(!response.text().contains("secret"));
}

#[tokio::test]
async fn test_graphql_errors_are_upstream_failures() {
    let app = TestApp::start().await;

    graphql("GetProducts")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "Throttled" }]
        })))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app.get("/shopify/products?product_id=1").await;

    assert_eq!(response.status, 500);
    assert_eq!(
        response.json(),
        json!({ "error": "An error occurred while retrieving products." })
    );
}

#[tokio::test]
async fn test_unexpected_shape_is_upstream_failure() {
    let app = TestApp::start().await;

    graphql("GetOrders")
        .respond_with(data(json!({ "orders": "not an object" })))
        .mount(&app.upstream)
        .await;

    let response = app.get("/shopify/order-by-number?order_number=1001").await;

    assert_eq!(response.status, 500);
}

#[tokio::test]
async fn test_unreachable_upstream_is_generic_failure() {
    let unreachable = {
        let server = MockServer::start().await;
        server.uri()
    };
    let router = shopify_proxy::routes::app(shopify_proxy_integration_tests::state_for(&unreachable));

    let request = axum::http::Request::get("/shopify/products?product_name=polo")
        .header("X-Shopify-Access-Token", "shpat_x")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(router, request).await.unwrap();

    assert_eq!(response.status(), 500);
    let body = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&body).unwrap(),
        json!({ "error": "An error occurred while retrieving products." })
    );
}

#[tokio::test]
async fn test_upstream_timeout_is_generic_failure() {
    let app = TestApp::start_with(&[("SHOPIFY_TIMEOUT_SECS", "1")]).await;

    graphql("GetOrders")
        .respond_with(
            data(json!({ "orders": { "nodes": [] } })).set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app.get("/shopify/order-by-number?order_number=1001").await;

    assert_eq!(response.status, 500);
    assert_eq!(
        response.json(),
        json!({ "error": "An error occurred while retrieving order." })
    );
}

#[tokio::test]
async fn test_malformed_query_string_is_json_invalid_parameter() {
    let app = TestApp::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.upstream)
        .await;

    for uri in [
        "/shopify/order-by-number?order_number=1001&order_number=1002",
        "/shopify/products?product_id=1&product_id=2",
        "/shopify/get-product-url?store_name=acme&store_name=other&product_handle=polo",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status, 400, "{uri}");
        assert_eq!(
            response.headers["content-type"], "application/json",
            "{uri}"
        );
        let error = response.json()["error"].as_str().unwrap().to_string();
        assert!(error.starts_with("Invalid parameter: "), "{uri}: {error}");
    }
}

#[tokio::test]
async fn test_repeated_requests_return_identical_json() {
    let app = TestApp::start().await;

    graphql("GetOrders")
        .respond_with(data(json!({ "orders": { "nodes": [] } })))
        .expect(2)
        .mount(&app.upstream)
        .await;

    let first = app.get("/shopify/order-by-number?order_number=1").await;
    let second = app.get("/shopify/order-by-number?order_number=1").await;

    assert_eq!(first.json(), second.json());
}
