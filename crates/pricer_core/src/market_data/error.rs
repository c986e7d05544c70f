//! Market data error types.
//!
//! This module provides structured error handling for yield curve
//! construction and evaluation.

use crate::types::PricingError;
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `InvalidCurveParameter`: Non-positive decay constant (`tau1`, `tau2`)
///   or evaluation time (`t`), or a non-finite curve input
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidCurveParameter { name: "tau1", value: -1.0 };
/// assert!(format!("{}", err).contains("tau1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Curve parameter or evaluation time outside its domain.
    #[error("Invalid curve parameter: {name} = {value}")]
    InvalidCurveParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The invalid value
        value: f64,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::InvalidCurveParameter { name, value } => {
                PricingError::InvalidCurveParameter(format!("{} = {}", name, value))
            }
        }
    }
}
