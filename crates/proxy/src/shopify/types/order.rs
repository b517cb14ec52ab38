//! Order domain types.

use serde::{Deserialize, Serialize};

use super::common::{MoneyBag, NodeList};

/// A single order as returned by the order queries.
///
/// `orderNumber` and `totalWeightGrams` are aliases declared in the query
/// document for Shopify's `name` and `totalWeight` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: Option<String>,
    /// Customer-facing order number, e.g. `#1001`.
    pub order_number: Option<String>,
    /// Randomly generated confirmation code shown to the buyer.
    ///
    /// Not unique across orders.
    pub confirmation_number: Option<String>,
    pub display_fulfillment_status: Option<String>,
    pub display_financial_status: Option<String>,
    pub fully_paid: Option<bool>,
    pub created_at: Option<String>,
    pub requires_shipping: Option<bool>,
    pub processed_at: Option<String>,
    pub updated_at: Option<String>,
    pub cancel_reason: Option<String>,
    pub closed: Option<bool>,
    pub confirmed: Option<bool>,
    pub currency_code: Option<String>,
    pub note: Option<String>,
    /// Total weight in grams, as an unsigned 64-bit integer string.
    pub total_weight_grams: Option<String>,
    pub current_total_price_set: Option<MoneyBag>,
    pub current_shipping_price_set: Option<MoneyBag>,
    pub shipping_line: Option<ShippingLine>,
    pub fulfillments: Option<Vec<Fulfillment>>,
    pub refundable: Option<bool>,
    pub refunds: Option<Vec<Refund>>,
    pub returns: Option<NodeList<Return>>,
}

impl OrderRecord {
    /// Whether this order carries exactly the given confirmation number.
    #[must_use]
    pub fn has_confirmation_number(&self, confirmation_number: &str) -> bool {
        self.confirmation_number.as_deref() == Some(confirmation_number)
    }
}

/// Shipping method chosen at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingLine {
    pub title: Option<String>,
    pub carrier_identifier: Option<String>,
    pub code: Option<String>,
    pub current_discounted_price_set: Option<MoneyBag>,
    pub delivery_category: Option<String>,
}

/// A shipment of some or all of an order's items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fulfillment {
    pub created_at: Option<String>,
    pub delivered_at: Option<String>,
    pub display_status: Option<String>,
    pub estimated_delivery_at: Option<String>,
    pub in_transit_at: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub requires_shipping: Option<bool>,
    pub tracking_info: Option<Vec<TrackingInfo>>,
}

/// Carrier tracking details for a fulfillment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingInfo {
    pub company: Option<String>,
    pub number: Option<String>,
    pub url: Option<String>,
}

/// A refund issued against an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    /// The return this refund settles, if any.
    #[serde(rename = "return")]
    pub return_record: Option<Return>,
    pub refund_line_items: Option<NodeList<RefundLineItem>>,
    pub created_at: Option<String>,
    pub note: Option<String>,
    pub id: Option<String>,
}

/// A refunded line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundLineItem {
    pub id: Option<String>,
    pub quantity: Option<i64>,
    pub price_set: Option<MoneyBag>,
    pub subtotal_set: Option<MoneyBag>,
    pub total_tax_set: Option<MoneyBag>,
}

/// A customer return request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Return {
    pub name: Option<String>,
    pub id: Option<String>,
    pub status: Option<String>,
    pub decline: Option<ReturnDecline>,
    pub total_quantity: Option<i64>,
    pub return_line_items: Option<NodeList<ReturnLineItem>>,
}

/// Why a return request was declined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnDecline {
    pub note: Option<String>,
    pub reason: Option<String>,
}

/// A line item included in a return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLineItem {
    pub id: Option<String>,
    pub quantity: Option<i64>,
    pub refundable_quantity: Option<i64>,
    pub refunded_quantity: Option<i64>,
    pub return_reason: Option<String>,
    pub return_reason_note: Option<String>,
}
