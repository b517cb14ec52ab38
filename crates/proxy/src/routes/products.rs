//! Product route handlers.

use axum::{
    Json,
    extract::State,
};
use serde::{Deserialize, Serialize};
use shopify_proxy_core::StoreName;
use tracing::instrument;
use url::Url;

use super::Found;
use crate::error::{AppError, Resource, Result};
use crate::middleware::{Params, ShopifyAccessToken};
use crate::shopify::{ProductEdge, ProductSearch, non_blank};
use crate::state::AppState;

/// Query parameters for the product search endpoint.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub store_name: Option<String>,
    pub api_version: Option<String>,
}

/// Response body for the product search endpoint.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Found<Vec<ProductEdge>>,
}

/// Query parameters for the product URL builder.
#[derive(Debug, Deserialize)]
pub struct ProductUrlQuery {
    pub store_name: Option<String>,
    pub product_handle: Option<String>,
}

/// Response body for the product URL builder.
#[derive(Debug, Serialize)]
pub struct ProductUrlResponse {
    pub product_url: String,
}

/// Search products by ID, or by name with a description fallback.
#[instrument(skip_all)]
pub async fn products(
    State(state): State<AppState>,
    ShopifyAccessToken(token): ShopifyAccessToken,
    Params(query): Params<ProductQuery>,
) -> Result<Json<ProductsResponse>> {
    let chain = ProductSearch::chain(query.product_id.as_deref(), query.product_name.as_deref())
        .map_err(AppError::retrieving(Resource::Products))?;

    let ctx = state.shop_context(
        token,
        query.store_name.as_deref(),
        query.api_version.as_deref(),
    )?;

    let products = state
        .shopify()
        .search_products(&ctx, &chain)
        .await
        .map_err(AppError::retrieving(Resource::Products))?;

    let products = (!products.is_empty()).then_some(products);

    Ok(Json(ProductsResponse {
        products: Found::or_message(products, "No products found."),
    }))
}

/// Build the public storefront URL for a product handle.
///
/// Makes no upstream call and needs no credential.
pub async fn product_url(
    Params(query): Params<ProductUrlQuery>,
) -> Result<Json<ProductUrlResponse>> {
    let (Some(store_name), Some(handle)) = (
        non_blank(query.store_name.as_deref()),
        non_blank(query.product_handle.as_deref()),
    ) else {
        return Err(AppError::InvalidParameter(
            "store_name and product_handle must both be provided.".to_string(),
        ));
    };

    let product_url = build_product_url(store_name, handle)?;

    Ok(Json(ProductUrlResponse {
        product_url: product_url.to_string(),
    }))
}

fn build_product_url(store_name: &str, handle: &str) -> Result<Url> {
    let store = StoreName::parse(store_name)
        .map_err(|e| AppError::InvalidParameter(format!("store_name: {e}.")))?;

    let mut url = Url::parse(&format!("https://{}", store.host()))
        .map_err(|e| AppError::InvalidParameter(format!("store_name: {e}.")))?;

    // Percent-encodes the handle so it stays a single path segment
    url.path_segments_mut()
        .map_err(|()| AppError::InvalidParameter("store_name: not a base URL.".to_string()))?
        .extend(["products", handle]);

    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_product_url() {
        let url = build_product_url("acme", "polo-shirt-1").unwrap();
        assert_eq!(url.as_str(), "https://acme.myshopify.com/products/polo-shirt-1");
    }

    #[test]
    fn test_build_product_url_normalises_store() {
        let url = build_product_url("Acme.myshopify.com", "polo").unwrap();
        assert_eq!(url.as_str(), "https://acme.myshopify.com/products/polo");
    }

    #[test]
    fn test_build_product_url_encodes_handle() {
        let url = build_product_url("acme", "a/b?c").unwrap();
        assert_eq!(url.as_str(), "https://acme.myshopify.com/products/a%2Fb%3Fc");
    }

    #[test]
    fn test_build_product_url_rejects_bad_store() {
        assert!(matches!(
            build_product_url("evil.com/x", "polo"),
            Err(AppError::InvalidParameter(_))
        ));
    }
}
