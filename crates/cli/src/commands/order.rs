//! Order commands.

use fastspring_client::StoreClient;

use super::{CommandError, print_json};

/// Print a single order.
pub async fn get(client: &StoreClient, reference: &str) -> Result<(), CommandError> {
    let order = client.get_order(reference).await?;
    print_json(&order)
}

/// Print all orders matching a query.
pub async fn search(client: &StoreClient, query: &str) -> Result<(), CommandError> {
    let result = client.get_orders(query).await?;
    tracing::info!(matches = result.len(), "Order search complete");
    print_json(&result.orders)
}
