//! Coupon commands.

use fastspring_client::StoreClient;

use super::{CommandError, print_json};

/// Generate a coupon and print it.
pub async fn generate(client: &StoreClient, prefix: &str) -> Result<(), CommandError> {
    let coupon = client.generate_coupon(prefix).await?;
    tracing::info!(prefix, code = %coupon.code, "Coupon generated");
    print_json(&coupon)
}
