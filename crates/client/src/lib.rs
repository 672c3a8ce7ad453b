//! FastSpring Client - Async client for the company store API.
//!
//! Wraps the company-scoped XML API at
//! `https://api.fastspring.com/company/{company}`: coupon generation, order
//! lookup and search, and subscription reads, updates and cancellation.
//!
//! # Quick Start
//!
//! ```ignore
//! use fastspring_client::{StoreClient, StoreConfig, SubscriptionUpdate};
//!
//! let config = StoreConfig::from_env()?;
//! let client = StoreClient::from_config(&config)?;
//!
//! let subscription = client.get_subscription("ACME100815-1234-11111S").await?;
//! println!("{} is {}", subscription.reference, subscription.status);
//!
//! let update = SubscriptionUpdate::new().with_quantity(3).with_proration(true);
//! client.update_subscription(&subscription.reference, &update).await?;
//! ```
//!
//! # Errors
//!
//! Empty arguments fail with [`StoreError::InvalidArgument`] before any
//! request is sent. Failed updates and cancellations map the vendor's status
//! codes to specific [`StoreError`] variants; every status error keeps the
//! response body, see [`StoreError::response_body`].

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
pub mod config;
mod coupons;
pub mod error;
mod orders;
mod subscriptions;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::StoreClient;
pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport};

pub use fastspring_core::{
    Address, Contact, Coupon, CredentialError, Order, OrderItem, OrderSearchResult, Payment,
    StoreCredential, Subscription, SubscriptionStatus, SubscriptionStatusReason,
    SubscriptionUpdate,
};
