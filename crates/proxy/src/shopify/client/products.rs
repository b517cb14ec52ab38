//! Product search for the Admin API.

use tracing::instrument;

use super::{
    ShopContext, ShopifyClient,
    queries::{GetProducts, get_products},
};
use crate::shopify::{ShopifyError, search::ProductSearch, types::ProductEdge};

impl ShopifyClient {
    /// Search products with a single strategy.
    ///
    /// Exactly one of the parameters is used, in priority order
    /// `product_id`, `product_name` (title substring), `description`
    /// (description substring).
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::InvalidParameter` if no parameter is given.
    /// Returns an upstream error if the API request fails or returns an
    /// error response.
    #[instrument(skip(self, ctx), fields(store = %ctx.store))]
    pub async fn find_products(
        &self,
        ctx: &ShopContext,
        product_id: Option<&str>,
        product_name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Vec<ProductEdge>, ShopifyError> {
        let search = ProductSearch::select(product_id, product_name, description)?;
        self.run_product_search(ctx, &search).await
    }

    /// Run a chain of product searches, stopping at the first non-empty
    /// result.
    ///
    /// Returns an empty list if every strategy came back empty.
    ///
    /// # Errors
    ///
    /// Returns the first upstream error encountered; later strategies are
    /// not attempted.
    #[instrument(skip_all, fields(store = %ctx.store, strategies = chain.len()))]
    pub async fn search_products(
        &self,
        ctx: &ShopContext,
        chain: &[ProductSearch],
    ) -> Result<Vec<ProductEdge>, ShopifyError> {
        for search in chain {
            let products = self.run_product_search(ctx, search).await?;
            if !products.is_empty() {
                tracing::debug!(
                    strategy = search.label(),
                    count = products.len(),
                    "Product search matched"
                );
                return Ok(products);
            }
            tracing::debug!(strategy = search.label(), "Product search empty");
        }
        Ok(Vec::new())
    }

    async fn run_product_search(
        &self,
        ctx: &ShopContext,
        search: &ProductSearch,
    ) -> Result<Vec<ProductEdge>, ShopifyError> {
        let page_sizes = self.page_sizes();
        let variables = get_products::Variables {
            query: search.filter(),
            num_products: page_sizes.products,
            num_nested: page_sizes.nested,
        };

        let response = self.execute::<GetProducts>(ctx, variables).await?;

        Ok(response.products.into_edges())
    }
}
