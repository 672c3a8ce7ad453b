//! Orders and order search results.
//!
//! These are read-only projections of vendor order data. Money amounts are
//! decimals in the order currency.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::contact::{Address, Contact};
use super::timestamp;
use crate::xml::XmlResource;

/// A completed or pending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Vendor order reference.
    pub reference: String,
    /// Vendor order status token (`completed`, `canceled`, ...).
    pub status: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub status_changed: Option<DateTime<Utc>>,
    /// Whether the order was placed in test mode.
    #[serde(default)]
    pub test: bool,
    #[serde(default, with = "timestamp::option")]
    pub due: Option<DateTime<Utc>>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
    pub referrer: Option<String>,
    pub origin_ip: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub total: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub tax: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub shipping: Option<Decimal>,
    pub source_name: Option<String>,
    pub source_key: Option<String>,
    pub source_campaign: Option<String>,
    pub customer: Option<Contact>,
    pub purchaser: Option<Contact>,
    pub address: Option<Address>,
    #[serde(default)]
    pub order_items: OrderItems,
    pub payment: Option<Payment>,
}

impl Order {
    /// Line items of the order.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.order_items.items
    }

    /// References of subscriptions created by this order.
    pub fn subscription_references(&self) -> impl Iterator<Item = &str> {
        self.items()
            .iter()
            .filter_map(|item| item.subscription_reference.as_deref())
            .filter(|reference| !reference.is_empty())
    }
}

impl XmlResource for Order {
    const ROOT: &'static str = "order";
}

/// Wrapper for the `<orderItems>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItems {
    #[serde(rename = "orderItem", default)]
    pub items: Vec<OrderItem>,
}

/// A single line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_display: Option<String>,
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    /// Set when the item started a subscription.
    pub subscription_reference: Option<String>,
}

/// Payment attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub status: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub status_changed: Option<DateTime<Utc>>,
    pub method_type: Option<String>,
    pub declined_reason: Option<String>,
    pub currency: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub total: Option<Decimal>,
}

/// Orders matching a search query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderSearchResult {
    #[serde(rename = "order", default)]
    pub orders: Vec<Order>,
}

impl OrderSearchResult {
    /// Number of matching orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no order matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterate over the matching orders.
    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }
}

impl IntoIterator for OrderSearchResult {
    type Item = Order;
    type IntoIter = std::vec::IntoIter<Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderSearchResult {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

impl XmlResource for OrderSearchResult {
    const ROOT: &'static str = "orders";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;
    use crate::xml::from_xml;

    const ORDER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<order>
  <reference>ACME100815-1234-56789</reference>
  <status>completed</status>
  <statusChanged>2010-08-15T10:30:00.000Z</statusChanged>
  <test>true</test>
  <due>2010-08-15T10:30:00.000Z</due>
  <currency>USD</currency>
  <originIp>10.0.0.1</originIp>
  <total>29.90</total>
  <tax>0.00</tax>
  <shipping>0.00</shipping>
  <customer>
    <firstName>Ada</firstName>
    <lastName>Lovelace</lastName>
    <email>ada@example.com</email>
  </customer>
  <address>
    <addressLine1>1 Main St</addressLine1>
    <country>US</country>
  </address>
  <orderItems>
    <orderItem>
      <productDisplay>Widget Pro</productDisplay>
      <productName>widget-pro</productName>
      <quantity>2</quantity>
      <subscriptionReference>ACME100815-1234-11111S</subscriptionReference>
    </orderItem>
    <orderItem>
      <productDisplay>Manual</productDisplay>
      <productName>manual</productName>
      <quantity>1</quantity>
    </orderItem>
  </orderItems>
  <payment>
    <status>completed</status>
    <methodType>creditcard</methodType>
    <currency>USD</currency>
    <total>29.90</total>
  </payment>
</order>"#;

    #[test]
    fn test_order_from_xml() {
        let order: Order = from_xml(ORDER_XML).unwrap();
        assert_eq!(order.reference, "ACME100815-1234-56789");
        assert_eq!(order.status.as_deref(), Some("completed"));
        assert!(order.test);
        assert_eq!(
            order.status_changed,
            Some(Utc.with_ymd_and_hms(2010, 8, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(order.total, Some(Decimal::from_str("29.90").unwrap()));
        assert_eq!(
            order.customer.as_ref().and_then(|c| c.email.as_deref()),
            Some("ada@example.com")
        );
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.items().first().unwrap().quantity, 2);
        assert_eq!(
            order.subscription_references().collect::<Vec<_>>(),
            vec!["ACME100815-1234-11111S"]
        );
        assert_eq!(
            order.payment.as_ref().and_then(|p| p.method_type.as_deref()),
            Some("creditcard")
        );
    }

    #[test]
    fn test_order_money_amounts() {
        let order: Order = from_xml(ORDER_XML).unwrap();
        let zero = Decimal::from_str("0.00").unwrap();
        assert_eq!(order.tax, Some(zero));
        assert_eq!(order.shipping, Some(zero));
        assert_eq!(
            order.payment.and_then(|p| p.total),
            Some(Decimal::from_str("29.90").unwrap())
        );

        let order: Order = from_xml(
            "<order><reference>R1</reference><total>1234.5</total>\
             <payment><status>declined</status></payment></order>",
        )
        .unwrap();
        assert_eq!(order.total, Some(Decimal::from_str("1234.5").unwrap()));
        assert_eq!(order.tax, None);
        assert_eq!(order.payment.and_then(|p| p.total), None);
    }

    #[test]
    fn test_search_result_with_amounts() {
        let result: OrderSearchResult = from_xml(
            "<orders><order><reference>R1</reference><total>10.00</total></order>\
             <order><reference>R2</reference><total>5.50</total></order></orders>",
        )
        .unwrap();
        let totals: Vec<_> = result.iter().filter_map(|o| o.total).collect();
        assert_eq!(
            totals,
            vec![
                Decimal::from_str("10.00").unwrap(),
                Decimal::from_str("5.50").unwrap()
            ]
        );
    }

    #[test]
    fn test_order_minimal() {
        let order: Order = from_xml("<order><reference>R1</reference></order>").unwrap();
        assert_eq!(order.reference, "R1");
        assert!(!order.test);
        assert!(order.items().is_empty());
        assert!(order.payment.is_none());
    }

    #[test]
    fn test_search_result_from_xml() {
        let result: OrderSearchResult = from_xml(
            "<orders><order><reference>R1</reference></order>\
             <order><reference>R2</reference></order></orders>",
        )
        .unwrap();
        assert_eq!(result.len(), 2);
        let references: Vec<&str> = result.iter().map(|o| o.reference.as_str()).collect();
        assert_eq!(references, vec!["R1", "R2"]);
    }

    #[test]
    fn test_search_result_empty() {
        let result: OrderSearchResult = from_xml("<orders></orders>").unwrap();
        assert!(result.is_empty());
    }
}
