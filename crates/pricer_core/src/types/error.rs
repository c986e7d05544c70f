//! Error types for structured error handling.
//!
//! This module provides `PricingError`, the umbrella error taxonomy that
//! every layer-specific error converts into before it reaches the service
//! layer.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every variant is a precondition violation detected before a formula is
/// evaluated, so a pricing call never returns a silent NaN or infinity.
///
/// # Variants
/// - `InvalidCurveParameter`: Non-positive decay constant or evaluation time
/// - `DivisionByZero`: Fixed-leg present value of zero in the forward swap rate
/// - `InvalidInputDomain`: Non-positive forward, strike, volatility or maturity
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::DivisionByZero("fixed leg PV is zero".to_string());
/// assert_eq!(format!("{}", err), "Division by zero: fixed leg PV is zero");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid yield curve parameter or evaluation time.
    #[error("Invalid curve parameter: {0}")]
    InvalidCurveParameter(String),

    /// A denominator evaluated to zero.
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Input outside the domain of a pricing formula.
    #[error("Invalid input domain: {0}")]
    InvalidInputDomain(String),
}
