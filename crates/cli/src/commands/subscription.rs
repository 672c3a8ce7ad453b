//! Subscription commands.

use clap::Args;
use fastspring_client::{StoreClient, SubscriptionUpdate};

use super::{CommandError, print_json};

/// Fields that can be changed with `subscription update`.
#[derive(Debug, Default, Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone_number: Option<String>,
    /// Product to switch to (e.g. `/widget-pro`)
    #[arg(long)]
    pub product_path: Option<String>,
    #[arg(long)]
    pub quantity: Option<u32>,
    #[arg(long)]
    pub tags: Option<String>,
    #[arg(long)]
    pub coupon: Option<String>,
    #[arg(long)]
    pub discount_duration: Option<String>,
    /// Prorate the change (`true` or `false`)
    #[arg(long)]
    pub proration: Option<bool>,
}

impl From<UpdateArgs> for SubscriptionUpdate {
    fn from(args: UpdateArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            company: args.company,
            email: args.email,
            phone_number: args.phone_number,
            product_path: args.product_path,
            quantity: args.quantity,
            tags: args.tags,
            coupon: args.coupon,
            discount_duration: args.discount_duration,
            proration: args.proration,
        }
    }
}

/// Print a single subscription.
pub async fn get(client: &StoreClient, reference: &str) -> Result<(), CommandError> {
    let subscription = client.get_subscription(reference).await?;
    print_json(&subscription)
}

/// Apply changes to a subscription.
pub async fn update(
    client: &StoreClient,
    reference: &str,
    changes: UpdateArgs,
) -> Result<(), CommandError> {
    let update = SubscriptionUpdate::from(changes);
    if update.is_empty() {
        tracing::warn!(reference, "No changes given, sending empty update");
    }

    client.update_subscription(reference, &update).await?;
    tracing::info!(reference, "Subscription updated");
    Ok(())
}

/// Cancel a subscription.
pub async fn cancel(client: &StoreClient, reference: &str) -> Result<(), CommandError> {
    client.cancel_subscription(reference).await?;
    tracing::info!(reference, "Subscription canceled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_args_into_update() {
        let args = UpdateArgs {
            product_path: Some("/widget-pro".to_string()),
            quantity: Some(2),
            ..UpdateArgs::default()
        };

        let update = SubscriptionUpdate::from(args);
        assert_eq!(
            update,
            SubscriptionUpdate::new()
                .with_product_path("/widget-pro")
                .with_quantity(2)
        );
    }

    #[test]
    fn test_empty_args_make_empty_update() {
        assert!(SubscriptionUpdate::from(UpdateArgs::default()).is_empty());
    }
}
