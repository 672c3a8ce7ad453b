//! Order lookup and search.

use fastspring_core::{Order, OrderSearchResult};
use reqwest::Method;
use tracing::instrument;

use crate::client::{StoreClient, require};
use crate::error::StoreError;
use crate::transport::Transport;

impl<T: Transport> StoreClient<T> {
    /// Get a single order by reference.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidArgument` if `reference` is empty, or an
    /// error if the order is not found or the request fails.
    #[instrument(skip(self))]
    pub async fn get_order(&self, reference: &str) -> Result<Order, StoreError> {
        require("reference", reference)?;
        self.fetch(Method::GET, &format!("/order/{reference}")).await
    }

    /// Search orders.
    ///
    /// The query is percent-encoded into the `query` parameter.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidArgument` if `query` is empty, or an
    /// error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_orders(&self, query: &str) -> Result<OrderSearchResult, StoreError> {
        require("query", query)?;
        let path = format!("/orders/search?query={}", urlencoding::encode(query));
        self.fetch(Method::GET, &path).await
    }
}
