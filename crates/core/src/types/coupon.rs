//! Generated coupon.

use serde::{Deserialize, Serialize};

use crate::xml::XmlResource;

/// A coupon code produced by the generate-coupon call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// The generated discount code.
    pub code: String,
}

impl XmlResource for Coupon {
    const ROOT: &'static str = "coupon";
}
