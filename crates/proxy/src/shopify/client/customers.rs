//! Customer lookups for the Admin API.

use shopify_proxy_core::{CustomerId, SearchFilter};
use tracing::instrument;

use super::{
    ShopContext, ShopifyClient, non_blank,
    queries::{FindCustomer, find_customer},
};
use crate::shopify::ShopifyError;

impl ShopifyClient {
    /// Resolve the ID of the first customer registered with `email`.
    ///
    /// Returns `Ok(None)` when no customer matches; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::InvalidParameter` if `email` is missing or
    /// blank. Returns an upstream error if the API request fails or returns
    /// an error response.
    #[instrument(skip_all, fields(store = %ctx.store))]
    pub async fn find_customer_id_by_email(
        &self,
        ctx: &ShopContext,
        email: Option<&str>,
    ) -> Result<Option<CustomerId>, ShopifyError> {
        let email = non_blank(email)
            .ok_or_else(|| ShopifyError::InvalidParameter("email must be provided.".to_string()))?;

        let variables = find_customer::Variables {
            query: SearchFilter::email(email),
        };

        let response = self.execute::<FindCustomer>(ctx, variables).await?;

        Ok(response
            .customers
            .into_nodes()
            .into_iter()
            .next()
            .and_then(|customer| CustomerId::parse(&customer.id)))
    }
}
