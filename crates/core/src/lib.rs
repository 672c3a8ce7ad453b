//! FastSpring Core - Data model for the company store API.
//!
//! This crate provides the resources exchanged with the store:
//! - Coupons generated from a prefix
//! - Orders and order search results
//! - Subscriptions and subscription updates
//!
//! # Architecture
//!
//! The core crate contains only types and the XML codec - no I/O, no HTTP
//! clients. The `fastspring-client` crate builds on it.
//!
//! # Modules
//!
//! - [`types`] - Resource schemas, status enums and the store credential
//! - [`xml`] - Root-element aware XML serialization

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod xml;

pub use types::*;
pub use xml::{XmlError, XmlResource};
