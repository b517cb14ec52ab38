//! Order lookups for the Admin API.

use shopify_proxy_core::{CustomerId, SearchFilter};
use tracing::instrument;

use super::{
    ShopContext, ShopifyClient, non_blank,
    queries::{GetCustomerOrders, GetOrders, get_customer_orders, get_orders},
};
use crate::shopify::{ShopifyError, types::OrderRecord};

impl ShopifyClient {
    /// Find orders by order number, newest first.
    ///
    /// # Arguments
    ///
    /// * `order_number` - Customer-facing order number (e.g. `1001`)
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::InvalidParameter` if `order_number` is missing
    /// or blank, before any request is sent. Returns an upstream error if the
    /// API request fails or returns an error response.
    #[instrument(skip(self, ctx), fields(store = %ctx.store))]
    pub async fn find_orders_by_number(
        &self,
        ctx: &ShopContext,
        order_number: Option<&str>,
    ) -> Result<Vec<OrderRecord>, ShopifyError> {
        let order_number = non_blank(order_number).ok_or_else(|| {
            ShopifyError::InvalidParameter("order_number must be provided.".to_string())
        })?;

        self.search_orders(ctx, SearchFilter::order_name(order_number))
            .await
    }

    /// Find orders placed with an email address, newest first.
    ///
    /// The confirmation number is required but not sent upstream: Shopify's
    /// order search cannot filter on it, so callers match it against the
    /// returned orders themselves.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::InvalidParameter` unless both `email` and
    /// `confirmation_number` are non-blank. Returns an upstream error if the
    /// API request fails or returns an error response.
    #[instrument(skip_all, fields(store = %ctx.store))]
    pub async fn find_orders_by_email(
        &self,
        ctx: &ShopContext,
        email: Option<&str>,
        confirmation_number: Option<&str>,
    ) -> Result<Vec<OrderRecord>, ShopifyError> {
        let (Some(email), Some(_)) = (non_blank(email), non_blank(confirmation_number)) else {
            return Err(ShopifyError::InvalidParameter(
                "email and confirmation_number must both be provided.".to_string(),
            ));
        };

        self.search_orders(ctx, SearchFilter::email(email)).await
    }

    /// Get the orders of one customer, newest first.
    ///
    /// Returns an empty list if the customer does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::InvalidParameter` if `customer_id` is blank.
    /// Returns an upstream error if the API request fails or returns an
    /// error response.
    #[instrument(skip(self, ctx), fields(store = %ctx.store))]
    pub async fn find_orders_for_customer(
        &self,
        ctx: &ShopContext,
        customer_id: &str,
    ) -> Result<Vec<OrderRecord>, ShopifyError> {
        let customer_id = CustomerId::parse(customer_id).ok_or_else(|| {
            ShopifyError::InvalidParameter("customer_id must be provided.".to_string())
        })?;

        let page_sizes = self.page_sizes();
        let variables = get_customer_orders::Variables {
            id: customer_id.into_inner(),
            num_orders: page_sizes.orders,
            num_nested: page_sizes.nested,
        };

        let response = self.execute::<GetCustomerOrders>(ctx, variables).await?;

        Ok(response
            .customer
            .map(|customer| customer.orders.into_nodes())
            .unwrap_or_default())
    }

    async fn search_orders(
        &self,
        ctx: &ShopContext,
        query: SearchFilter,
    ) -> Result<Vec<OrderRecord>, ShopifyError> {
        let page_sizes = self.page_sizes();
        let variables = get_orders::Variables {
            query,
            num_orders: page_sizes.orders,
            num_nested: page_sizes.nested,
        };

        let response = self.execute::<GetOrders>(ctx, variables).await?;

        Ok(response.orders.into_nodes())
    }
}
