//! GraphQL documents and operation types for the Shopify Admin API.
//!
//! The documents are fixed; everything that varies per call (the search
//! filter, the customer ID, and every page size) is passed as a variable.
//! Each operation implements [`GraphQLQuery`] by hand so the documents can
//! share fragments without a checked-in schema.

use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};
use shopify_proxy_core::SearchFilter;

use crate::shopify::types::{EdgeList, NodeList, OrderRecord, ProductRecord};

// =============================================================================
// Fragments
// =============================================================================

macro_rules! order_fragments {
    () => {
        r"
fragment Money on MoneyBag {
  presentmentMoney {
    amount
    currencyCode
  }
}

fragment Return on Return {
  name
  id
  status
  decline {
    note
    reason
  }
  totalQuantity
  returnLineItems(first: $numNested) {
    nodes {
      id
      quantity
      refundableQuantity
      refundedQuantity
      returnReason
      returnReasonNote
    }
  }
}

fragment Order on Order {
  id
  orderNumber: name
  confirmationNumber
  displayFulfillmentStatus
  displayFinancialStatus
  fullyPaid
  createdAt
  requiresShipping
  processedAt
  updatedAt
  cancelReason
  closed
  confirmed
  currencyCode
  note
  totalWeightGrams: totalWeight
  currentTotalPriceSet { ...Money }
  currentShippingPriceSet { ...Money }
  shippingLine {
    title
    carrierIdentifier
    code
    currentDiscountedPriceSet { ...Money }
    deliveryCategory
  }
  fulfillments(first: $numNested) {
    createdAt
    deliveredAt
    displayStatus
    estimatedDeliveryAt
    inTransitAt
    name
    status
    requiresShipping
    trackingInfo {
      company
      number
      url
    }
  }
  refundable
  refunds {
    return { ...Return }
    refundLineItems(first: $numNested) {
      nodes {
        id
        quantity
        priceSet { ...Money }
        subtotalSet { ...Money }
        totalTaxSet { ...Money }
      }
    }
    createdAt
    note
    id
  }
  returns(first: $numNested) {
    nodes { ...Return }
  }
}
"
    };
}

// =============================================================================
// Documents
// =============================================================================

/// Orders matching a search filter, newest first.
pub const GET_ORDERS_DOCUMENT: &str = concat!(
    order_fragments!(),
    r"
query GetOrders($query: String!, $numOrders: Int!, $numNested: Int!) {
  orders(first: $numOrders, query: $query, sortKey: CREATED_AT, reverse: true) {
    nodes { ...Order }
  }
}
"
);

/// Orders placed by one customer, newest first.
pub const GET_CUSTOMER_ORDERS_DOCUMENT: &str = concat!(
    order_fragments!(),
    r"
query GetCustomerOrders($id: ID!, $numOrders: Int!, $numNested: Int!) {
  customer(id: $id) {
    orders(first: $numOrders, sortKey: CREATED_AT, reverse: true) {
      nodes { ...Order }
    }
  }
}
"
);

/// The first customer matching a search filter.
pub const FIND_CUSTOMER_DOCUMENT: &str = r"
query FindCustomer($query: String!) {
  customers(first: 1, query: $query) {
    nodes {
      id
    }
  }
}
";

/// Products matching a search filter, with their first variants.
pub const GET_PRODUCTS_DOCUMENT: &str = r"
fragment Money on MoneyV2 {
  amount
  currencyCode
}

query GetProducts($query: String!, $numProducts: Int!, $numNested: Int!) {
  products(query: $query, first: $numProducts) {
    edges {
      node {
        id
        title
        description
        category {
          fullName
          name
          id
        }
        feedback {
          summary
        }
        status
        tags
        totalInventory
        vendor
        hasOnlyDefaultVariant
        priceRangeV2 {
          maxVariantPrice { ...Money }
          minVariantPrice { ...Money }
        }
        variants(first: $numNested) {
          edges {
            node {
              displayName
              title
              price
              availableForSale
              OutOfStockOrderingPolicy: inventoryPolicy
            }
          }
        }
      }
    }
  }
}
";

// =============================================================================
// Operations
// =============================================================================

pub struct GetOrders;

pub mod get_orders {
    use super::{Deserialize, NodeList, OrderRecord, SearchFilter, Serialize};

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub query: SearchFilter,
        pub num_orders: i64,
        pub num_nested: i64,
    }

    #[derive(Debug, Deserialize)]
    pub struct ResponseData {
        pub orders: NodeList<OrderRecord>,
    }
}

impl GraphQLQuery for GetOrders {
    type Variables = get_orders::Variables;
    type ResponseData = get_orders::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GET_ORDERS_DOCUMENT,
            operation_name: "GetOrders",
        }
    }
}

pub struct GetCustomerOrders;

pub mod get_customer_orders {
    use super::{Deserialize, NodeList, OrderRecord, Serialize};

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub id: String,
        pub num_orders: i64,
        pub num_nested: i64,
    }

    #[derive(Debug, Deserialize)]
    pub struct ResponseData {
        pub customer: Option<Customer>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Customer {
        pub orders: NodeList<OrderRecord>,
    }
}

impl GraphQLQuery for GetCustomerOrders {
    type Variables = get_customer_orders::Variables;
    type ResponseData = get_customer_orders::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GET_CUSTOMER_ORDERS_DOCUMENT,
            operation_name: "GetCustomerOrders",
        }
    }
}

pub struct FindCustomer;

pub mod find_customer {
    use super::{Deserialize, NodeList, SearchFilter, Serialize};

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub query: SearchFilter,
    }

    #[derive(Debug, Deserialize)]
    pub struct ResponseData {
        pub customers: NodeList<CustomerNode>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CustomerNode {
        pub id: String,
    }
}

impl GraphQLQuery for FindCustomer {
    type Variables = find_customer::Variables;
    type ResponseData = find_customer::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: FIND_CUSTOMER_DOCUMENT,
            operation_name: "FindCustomer",
        }
    }
}

pub struct GetProducts;

pub mod get_products {
    use super::{Deserialize, EdgeList, ProductRecord, SearchFilter, Serialize};

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub query: SearchFilter,
        pub num_products: i64,
        pub num_nested: i64,
    }

    #[derive(Debug, Deserialize)]
    pub struct ResponseData {
        pub products: EdgeList<ProductRecord>,
    }
}

impl GraphQLQuery for GetProducts {
    type Variables = get_products::Variables;
    type ResponseData = get_products::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GET_PRODUCTS_DOCUMENT,
            operation_name: "GetProducts",
        }
    }
}
