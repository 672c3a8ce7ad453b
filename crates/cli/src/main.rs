//! FastSpring CLI - Command-line access to a company store.
//!
//! # Usage
//!
//! ```bash
//! # Generate a coupon code from a prefix
//! fs-cli coupon generate SPRING
//!
//! # Look up and search orders
//! fs-cli order get ACME100815-1234-56789
//! fs-cli order search "ada@example.com"
//!
//! # Manage subscriptions
//! fs-cli subscription get ACME100815-1234-11111S
//! fs-cli subscription update ACME100815-1234-11111S --quantity 3 --proration true
//! fs-cli subscription cancel ACME100815-1234-11111S
//! ```
//!
//! # Environment Variables
//!
//! - `FASTSPRING_COMPANY` - Company identifier
//! - `FASTSPRING_USERNAME` - API user name
//! - `FASTSPRING_PASSWORD` - API user password
//! - `FASTSPRING_API_URL` - API host (optional)
//! - `RUST_LOG` - Log filter (default: `fastspring_cli=info,fastspring_client=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use fastspring_client::{StoreClient, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::CommandError;
use commands::subscription::UpdateArgs;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "fastspring_cli=info,fastspring_client=info";

#[derive(Parser)]
#[command(name = "fs-cli")]
#[command(author, version, about = "FastSpring company store CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage coupons
    Coupon {
        #[command(subcommand)]
        action: CouponAction,
    },
    /// Look up orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Manage subscriptions
    Subscription {
        #[command(subcommand)]
        action: SubscriptionAction,
    },
}

#[derive(Subcommand)]
enum CouponAction {
    /// Generate a coupon code from a coupon prefix
    Generate {
        /// Coupon prefix configured in the store
        prefix: String,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Get an order by reference
    Get {
        /// Order reference
        reference: String,
    },
    /// Search orders
    Search {
        /// Search query (email, name, reference, ...)
        query: String,
    },
}

#[derive(Subcommand)]
enum SubscriptionAction {
    /// Get a subscription by reference
    Get {
        /// Subscription reference
        reference: String,
    },
    /// Update a subscription
    Update {
        /// Subscription reference
        reference: String,

        #[command(flatten)]
        changes: UpdateArgs,
    },
    /// Cancel a subscription
    Cancel {
        /// Subscription reference
        reference: String,
    },
}

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let config = StoreConfig::from_env()?;
    let client = StoreClient::from_config(&config)?;
    tracing::debug!(company = %client.company(), "Store client ready");

    match cli.command {
        Commands::Coupon { action } => match action {
            CouponAction::Generate { prefix } => {
                commands::coupon::generate(&client, &prefix).await?;
            }
        },
        Commands::Order { action } => match action {
            OrderAction::Get { reference } => commands::order::get(&client, &reference).await?,
            OrderAction::Search { query } => commands::order::search(&client, &query).await?,
        },
        Commands::Subscription { action } => match action {
            SubscriptionAction::Get { reference } => {
                commands::subscription::get(&client, &reference).await?;
            }
            SubscriptionAction::Update { reference, changes } => {
                commands::subscription::update(&client, &reference, changes).await?;
            }
            SubscriptionAction::Cancel { reference } => {
                commands::subscription::cancel(&client, &reference).await?;
            }
        },
    }
    Ok(())
}
