//! Store resource types.
//!
//! Every resource maps to a single XML element named after it. Field names
//! follow the vendor's camelCase element names.

pub mod contact;
pub mod coupon;
pub mod credential;
pub mod order;
pub mod status;
pub mod subscription;
pub mod timestamp;

pub use contact::{Address, Contact};
pub use coupon::Coupon;
pub use credential::{CredentialError, StoreCredential};
pub use order::{Order, OrderItem, OrderItems, OrderSearchResult, Payment};
pub use status::{SubscriptionStatus, SubscriptionStatusReason};
pub use subscription::{Subscription, SubscriptionUpdate};
pub use timestamp::TimestampError;
