//! Common domain types shared across orders and products.

use serde::{Deserialize, Serialize};

// =============================================================================
// Money Types
// =============================================================================

/// Monetary amount with currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: Option<String>,
    /// ISO 4217 currency code.
    pub currency_code: Option<String>,
}

/// Amount in both shop and presentment currency.
///
/// Only the presentment (customer-facing) side is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyBag {
    pub presentment_money: Option<Money>,
}

// =============================================================================
// Connection Types
// =============================================================================

/// A simple connection exposing its items as `nodes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeList<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T> NodeList<T> {
    /// Consume the connection and return its nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<T> {
        self.nodes
    }
}

/// A cursor-paginated edge wrapping a single node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// A cursor-paginated connection exposing its items as `edges`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeList<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

impl<T> Default for EdgeList<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<T> EdgeList<T> {
    /// Consume the connection and return its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<T>> {
        self.edges
    }
}
