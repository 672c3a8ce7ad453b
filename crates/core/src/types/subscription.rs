//! Subscriptions and subscription updates.
//!
//! [`Subscription`] is read from the vendor and never submitted.
//! [`SubscriptionUpdate`] is the write-only payload of an update call; both
//! use the `<subscription>` root element.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::Contact;
use super::status::{SubscriptionStatus, SubscriptionStatusReason};
use super::timestamp;
use crate::xml::XmlResource;

/// A customer subscription as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub status: SubscriptionStatus,
    #[serde(default, with = "timestamp::option")]
    pub status_changed: Option<DateTime<Utc>>,
    /// Raw reason token; see [`Subscription::reason`].
    pub status_reason: Option<String>,
    #[serde(default)]
    pub cancelable: bool,
    /// Unique subscription reference, used as the lookup key.
    pub reference: String,
    #[serde(default)]
    pub test: bool,
    pub referrer: Option<String>,
    pub source_name: Option<String>,
    pub source_key: Option<String>,
    pub source_campaign: Option<String>,
    pub customer: Option<Contact>,
    /// Customer self-service page for this subscription.
    pub customer_url: Option<String>,
    pub product_name: Option<String>,
    pub tags: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    pub coupon: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub next_period_date: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub end: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Typed status reason, if the vendor reported a known one.
    #[must_use]
    pub fn reason(&self) -> Option<SubscriptionStatusReason> {
        self.status_reason.as_deref()?.trim().parse().ok()
    }

    /// Whether the subscription is currently active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, SubscriptionStatus::Active)
    }
}

impl XmlResource for Subscription {
    const ROOT: &'static str = "subscription";
}

/// Changes to apply to a subscription.
///
/// Every field is optional; unset fields are left out of the request so the
/// vendor keeps their current values.
///
/// ## Examples
///
/// ```
/// use fastspring_core::{SubscriptionUpdate, xml::to_xml};
///
/// let update = SubscriptionUpdate::new().with_quantity(3).with_proration(true);
/// assert_eq!(
///     to_xml(&update).unwrap(),
///     "<subscription><quantity>3</quantity><proration>true</proration></subscription>"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Product to switch the subscription to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    #[serde(
        rename = "discount-duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount_duration: Option<String>,
    /// Charge or credit the partial period on a product or quantity change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proration: Option<bool>,
}

impl SubscriptionUpdate {
    /// Create an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub fn with_product_path(mut self, product_path: impl Into<String>) -> Self {
        self.product_path = Some(product_path.into());
        self
    }

    #[must_use]
    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    #[must_use]
    pub fn with_coupon(mut self, coupon: impl Into<String>) -> Self {
        self.coupon = Some(coupon.into());
        self
    }

    #[must_use]
    pub fn with_discount_duration(mut self, discount_duration: impl Into<String>) -> Self {
        self.discount_duration = Some(discount_duration.into());
        self
    }

    #[must_use]
    pub const fn with_proration(mut self, proration: bool) -> Self {
        self.proration = Some(proration);
        self
    }

    /// Whether the update carries no changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.company.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.product_path.is_none()
            && self.quantity.is_none()
            && self.tags.is_none()
            && self.coupon.is_none()
            && self.discount_duration.is_none()
            && self.proration.is_none()
    }
}

impl XmlResource for SubscriptionUpdate {
    const ROOT: &'static str = "subscription";
}
