//! Command implementations.
//!
//! Each command calls one store operation and prints the result as pretty
//! JSON on stdout. Logs go to stderr.

pub mod coupon;
pub mod order;
pub mod subscription;

use fastspring_client::{ConfigError, StoreError};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The store call failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The result could not be rendered.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Print a result as pretty JSON.
#[allow(clippy::print_stdout)]
fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
