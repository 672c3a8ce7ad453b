//! Subscription lifecycle enums.

use serde::{Deserialize, Serialize};

/// Subscription status.
///
/// Serialized as the lowercase vendor tokens `active` and `inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
}

impl SubscriptionStatus {
    /// The vendor token for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!("invalid subscription status: {s}")),
        }
    }
}

/// Cause of the most recent subscription status change.
///
/// Serialized as hyphenated vendor tokens (`canceled-non-payment`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubscriptionStatusReason {
    /// Canceled because a renewal payment failed.
    CanceledNonPayment,
    /// Ran to the end of its configured term.
    Completed,
    /// Canceled by the customer or the store.
    Canceled,
}

impl SubscriptionStatusReason {
    /// The vendor token for this reason.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CanceledNonPayment => "canceled-non-payment",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for SubscriptionStatusReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubscriptionStatusReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canceled-non-payment" => Ok(Self::CanceledNonPayment),
            "completed" => Ok(Self::Completed),
            "canceled" => Ok(Self::Canceled),
            _ => Err(format!("invalid subscription status reason: {s}")),
        }
    }
}
