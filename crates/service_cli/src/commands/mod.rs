//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod curve;
pub mod price;

use clap::ValueEnum;

/// Output format shared by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
