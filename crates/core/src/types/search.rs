//! Shopify search filter strings.
//!
//! Admin API connections accept a `query` argument written in Shopify's
//! search syntax (`name:1001`, `title:*shirt*`). [`SearchFilter`] builds the
//! handful of filters the proxy sends so the syntax lives in one place.

use core::fmt;

use serde::Serialize;

/// A search filter passed as the `query` variable of a connection field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchFilter(String);

impl SearchFilter {
    /// Match orders by their name (the customer-facing order number).
    #[must_use]
    pub fn order_name(order_number: &str) -> Self {
        Self(format!("name:{order_number}"))
    }

    /// Match orders or customers by email address.
    #[must_use]
    pub fn email(email: &str) -> Self {
        Self(format!("email:{email}"))
    }

    /// Match a resource by its ID.
    #[must_use]
    pub fn id(id: &str) -> Self {
        Self(format!("id:{id}"))
    }

    /// Match products whose title contains `term`.
    #[must_use]
    pub fn title_contains(term: &str) -> Self {
        Self(format!("title:*{term}*"))
    }

    /// Match products whose description contains `term`.
    #[must_use]
    pub fn description_contains(term: &str) -> Self {
        Self(format!("description:*{term}*"))
    }

    /// Returns the filter as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_filters() {
        assert_eq!(SearchFilter::order_name("1001").as_str(), "name:1001");
        assert_eq!(
            SearchFilter::email("jo@example.com").as_str(),
            "email:jo@example.com"
        );
    }

    #[test]
    fn test_product_filters_use_wildcards() {
        assert_eq!(SearchFilter::id("8123").as_str(), "id:8123");
        assert_eq!(
            SearchFilter::title_contains("polo").as_str(),
            "title:*polo*"
        );
        assert_eq!(
            SearchFilter::description_contains("cotton").as_str(),
            "description:*cotton*"
        );
    }
}
