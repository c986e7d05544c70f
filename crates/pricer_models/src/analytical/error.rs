//! Error types for analytical pricing operations.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidInputDomain`: Forward, strike, volatility or maturity that is
///   non-positive or non-finite, which would otherwise feed a logarithm of a
///   non-positive number or a division by zero
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidInputDomain { name: "volatility", value: 0.0 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Formula input outside its domain.
    #[error("Invalid input domain: {name} = {value} (must be positive and finite)")]
    InvalidInputDomain {
        /// Name of the offending input
        name: &'static str,
        /// The invalid value
        value: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidInputDomain { name, value } => PricingError::InvalidInputDomain(
                format!("{} = {} (must be positive and finite)", name, value),
            ),
        }
    }
}
