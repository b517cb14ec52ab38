//! Product search strategies.
//!
//! A product lookup is an ordered chain of [`ProductSearch`] strategies.
//! The client runs them in order and stops at the first one that returns
//! any products; results from different strategies are never merged.

use shopify_proxy_core::{ProductId, SearchFilter};

use super::{ShopifyError, non_blank};

/// One way of searching the product catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSearch {
    /// Exact product ID.
    ById(ProductId),
    /// Substring match on the product title.
    ByTitle(String),
    /// Substring match on the product description.
    ByDescription(String),
}

impl ProductSearch {
    /// Pick the single strategy for the given parameters.
    ///
    /// Priority is `product_id`, then `product_name`, then `description`.
    /// Blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::InvalidParameter` if no parameter is given.
    pub fn select(
        product_id: Option<&str>,
        product_name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Self, ShopifyError> {
        if let Some(id) = product_id.and_then(ProductId::parse) {
            return Ok(Self::ById(id));
        }
        if let Some(name) = non_blank(product_name) {
            return Ok(Self::ByTitle(name.to_string()));
        }
        if let Some(description) = non_blank(description) {
            return Ok(Self::ByDescription(description.to_string()));
        }
        Err(ShopifyError::InvalidParameter(
            "product_name or product_id must be provided.".to_string(),
        ))
    }

    /// Build the fallback chain for a caller's product lookup.
    ///
    /// An ID lookup never falls back. A name lookup searches titles first
    /// and, only if that finds nothing, descriptions for the same term.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::InvalidParameter` if neither parameter is given.
    pub fn chain(
        product_id: Option<&str>,
        product_name: Option<&str>,
    ) -> Result<Vec<Self>, ShopifyError> {
        match Self::select(product_id, product_name, None)? {
            Self::ByTitle(term) => Ok(vec![
                Self::ByTitle(term.clone()),
                Self::ByDescription(term),
            ]),
            other => Ok(vec![other]),
        }
    }

    /// The search filter sent upstream for this strategy.
    #[must_use]
    pub fn filter(&self) -> SearchFilter {
        match self {
            Self::ById(id) => SearchFilter::id(id.as_str()),
            Self::ByTitle(term) => SearchFilter::title_contains(term),
            Self::ByDescription(term) => SearchFilter::description_contains(term),
        }
    }

    /// Short label used in logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ById(_) => "id",
            Self::ByTitle(_) => "title",
            Self::ByDescription(_) => "description",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_select_priority() {
        assert!(matches!(
            ProductSearch::select(Some("1"), Some("polo"), Some("cotton")).unwrap(),
            ProductSearch::ById(_)
        ));
        assert_eq!(
            ProductSearch::select(None, Some("polo"), Some("cotton")).unwrap(),
            ProductSearch::ByTitle("polo".to_string())
        );
        assert_eq!(
            ProductSearch::select(None, None, Some("cotton")).unwrap(),
            ProductSearch::ByDescription("cotton".to_string())
        );
    }

    #[test]
    fn test_select_blank_counts_as_absent() {
        assert_eq!(
            ProductSearch::select(Some(" "), Some("polo"), None).unwrap(),
            ProductSearch::ByTitle("polo".to_string())
        );
    }

    #[test]
    fn test_select_requires_a_parameter() {
        let err = ProductSearch::select(None, Some(""), None).unwrap_err();
        assert!(matches!(err, ShopifyError::InvalidParameter(_)));
    }

    #[test]
    fn test_chain_by_id_has_no_fallback() {
        let chain = ProductSearch::chain(Some("8123"), Some("polo")).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].filter().as_str(), "id:8123");
    }

    #[test]
    fn test_chain_by_name_falls_back_to_description() {
        let chain = ProductSearch::chain(None, Some("polo")).unwrap();
        let filters: Vec<String> = chain.iter().map(|s| s.filter().to_string()).collect();
        assert_eq!(filters, vec!["title:*polo*", "description:*polo*"]);
    }
}
