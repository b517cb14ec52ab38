//! Order route handlers.

use axum::{
    Json,
    extract::State,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::Found;
use crate::error::{AppError, Resource, Result};
use crate::middleware::{Params, ShopifyAccessToken};
use crate::shopify::{OrderRecord, non_blank};
use crate::state::AppState;

/// Query parameters for the order-by-number endpoint.
#[derive(Debug, Deserialize)]
pub struct OrderNumberQuery {
    pub order_number: Option<String>,
    pub store_name: Option<String>,
    pub api_version: Option<String>,
}

/// Query parameters for the confirmation-number endpoint.
#[derive(Debug, Deserialize)]
pub struct ConfirmationQuery {
    pub confirmation_number: Option<String>,
    pub email: Option<String>,
    pub store_name: Option<String>,
    pub api_version: Option<String>,
}

/// Response body for both order endpoints.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order: Found<OrderRecord>,
}

/// Look up an order by its number, e.g. `1001`.
///
/// Several orders can share a name; the most recent one wins.
#[instrument(skip_all)]
pub async fn order_by_number(
    State(state): State<AppState>,
    ShopifyAccessToken(token): ShopifyAccessToken,
    Params(query): Params<OrderNumberQuery>,
) -> Result<Json<OrderResponse>> {
    let ctx = state.shop_context(
        token,
        query.store_name.as_deref(),
        query.api_version.as_deref(),
    )?;

    let orders = state
        .shopify()
        .find_orders_by_number(&ctx, query.order_number.as_deref())
        .await
        .map_err(AppError::retrieving(Resource::Order))?;

    Ok(Json(OrderResponse {
        order: Found::or_message(orders.into_iter().next(), "No orders found."),
    }))
}

/// Look up a customer's order by confirmation number.
///
/// The customer is resolved from `email` first; their orders are then
/// scanned for the first order whose confirmation number equals the
/// untrimmed `confirmation_number`.
#[instrument(skip_all)]
pub async fn order_by_confirmation_number_and_email(
    State(state): State<AppState>,
    ShopifyAccessToken(token): ShopifyAccessToken,
    Params(query): Params<ConfirmationQuery>,
) -> Result<Json<OrderResponse>> {
    // Matched exactly as sent; trimming only decides whether it was given
    let confirmation_number = query
        .confirmation_number
        .as_deref()
        .filter(|value| !value.trim().is_empty());

    let (Some(email), Some(confirmation_number)) =
        (non_blank(query.email.as_deref()), confirmation_number)
    else {
        return Err(AppError::InvalidParameter(
            "email and confirmation_number must both be provided.".to_string(),
        ));
    };

    let ctx = state.shop_context(
        token,
        query.store_name.as_deref(),
        query.api_version.as_deref(),
    )?;
    let shopify = state.shopify();

    let customer_id = shopify
        .find_customer_id_by_email(&ctx, Some(email))
        .await
        .map_err(AppError::retrieving(Resource::Customer))?
        .ok_or(AppError::CustomerNotFound)?;

    let order = shopify
        .find_orders_for_customer(&ctx, customer_id.as_str())
        .await
        .map_err(AppError::retrieving(Resource::Order))?
        .into_iter()
        .find(|order| order.has_confirmation_number(confirmation_number));

    Ok(Json(OrderResponse {
        order: Found::or_message(order, "Order not found."),
    }))
}
