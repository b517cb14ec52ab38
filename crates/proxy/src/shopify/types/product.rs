//! Product domain types.

use serde::{Deserialize, Serialize};

use super::common::{Edge, EdgeList, Money};

/// A product search result, as the `edges` entry of a products connection.
pub type ProductEdge = Edge<ProductRecord>;

/// A product as returned by the product search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Plain-text description (HTML stripped by Shopify).
    pub description: Option<String>,
    pub category: Option<ProductCategory>,
    pub feedback: Option<ProductFeedback>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
    pub total_inventory: Option<i64>,
    pub vendor: Option<String>,
    pub has_only_default_variant: Option<bool>,
    pub price_range_v2: Option<PriceRange>,
    /// First page of variants; the page size is fixed by the query.
    pub variants: Option<EdgeList<VariantRecord>>,
}

/// Standard product taxonomy category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub full_name: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
}

/// Aggregated app feedback for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFeedback {
    pub summary: Option<String>,
}

/// Lowest and highest variant price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub max_variant_price: Option<Money>,
    pub min_variant_price: Option<Money>,
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRecord {
    pub display_name: Option<String>,
    pub title: Option<String>,
    /// Price as a decimal string.
    pub price: Option<String>,
    pub available_for_sale: Option<bool>,
    /// Alias for `inventoryPolicy` (`DENY` or `CONTINUE`).
    #[serde(rename = "OutOfStockOrderingPolicy")]
    pub out_of_stock_ordering_policy: Option<String>,
}
