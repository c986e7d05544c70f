//! Analytical pricing formulas for European swaptions.
//!
//! This module provides closed-form solutions:
//! - Black '76 model for lognormal forward swap rates
//! - Standard normal CDF built on the error function

pub mod black76;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black76::{black76_swaption_price, Black76};
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
