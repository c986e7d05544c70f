//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `swaption` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing pipeline rejected the inputs
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Result could not be serialised
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
