//! Subscription operations.
//!
//! Reads return the vendor's [`Subscription`]; updates and cancellations
//! report success for any 2xx status and map failures to the specific
//! [`StoreError`] variants for 400, 403, 412, 422 and 500.

use fastspring_core::{Subscription, SubscriptionUpdate};
use reqwest::Method;
use tracing::instrument;

use crate::client::{StoreClient, require};
use crate::error::StoreError;
use crate::transport::Transport;

impl<T: Transport> StoreClient<T> {
    /// Get a subscription by reference.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidArgument` if `reference` is empty, or an
    /// error if the subscription is not found or the request fails.
    #[instrument(skip(self))]
    pub async fn get_subscription(&self, reference: &str) -> Result<Subscription, StoreError> {
        require("reference", reference)?;
        self.fetch(Method::GET, &format!("/subscription/{reference}"))
            .await
    }

    /// Apply changes to a subscription.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidArgument` if `reference` is empty. A
    /// rejected change maps to `InvalidRequest` (400), `UncancelNotPossible`
    /// (403), `PreconditionFailed` (412), `UnknownProductPath` (422),
    /// `ServerError` (500) or `Api` for other statuses.
    #[instrument(skip(self, update))]
    pub async fn update_subscription(
        &self,
        reference: &str,
        update: &SubscriptionUpdate,
    ) -> Result<(), StoreError> {
        require("reference", reference)?;
        let body = Self::body(update)?;
        self.submit(Method::PUT, &format!("/subscription/{reference}"), Some(body))
            .await
    }

    /// Cancel a subscription.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidArgument` if `reference` is empty, or the
    /// mapped status error if the vendor refuses the cancellation.
    #[instrument(skip(self))]
    pub async fn cancel_subscription(&self, reference: &str) -> Result<(), StoreError> {
        require("reference", reference)?;
        self.submit(Method::DELETE, &format!("/subscription/{reference}"), None)
            .await
    }
}
