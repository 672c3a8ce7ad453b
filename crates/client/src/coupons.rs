//! Coupon operations.

use fastspring_core::Coupon;
use reqwest::Method;
use tracing::instrument;

use crate::client::{StoreClient, require};
use crate::error::StoreError;
use crate::transport::Transport;

impl<T: Transport> StoreClient<T> {
    /// Generate a new coupon code from a coupon prefix.
    ///
    /// The prefix is inserted into the path verbatim.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidArgument` if `prefix` is empty, or an
    /// error if the request fails or the response is not a coupon.
    #[instrument(skip(self))]
    pub async fn generate_coupon(&self, prefix: &str) -> Result<Coupon, StoreError> {
        require("prefix", prefix)?;
        self.fetch(Method::POST, &format!("/coupon/{prefix}/generate"))
            .await
    }
}
