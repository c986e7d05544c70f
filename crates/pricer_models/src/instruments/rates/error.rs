//! Error types for swap valuation.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Swap valuation errors.
///
/// # Variants
/// - `InvalidPeriods`: Swap with no payment periods
/// - `DivisionByZero`: Zero denominator when forming a rate from leg PVs
/// - `Curve`: Yield curve evaluation failed
///
/// # Examples
/// ```
/// use pricer_models::instruments::rates::SwapError;
///
/// let err = SwapError::DivisionByZero { context: "fixed leg PV" };
/// assert_eq!(format!("{}", err), "Division by zero: fixed leg PV is zero");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SwapError {
    /// Swap maturity of zero periods.
    #[error("Invalid swap maturity: {periods} periods (must be at least 1)")]
    InvalidPeriods {
        /// The invalid period count
        periods: u32,
    },

    /// Denominator of a leg ratio evaluated to zero.
    #[error("Division by zero: {context} is zero")]
    DivisionByZero {
        /// Which quantity was zero
        context: &'static str,
    },

    /// Curve evaluation error.
    #[error(transparent)]
    Curve(#[from] MarketDataError),
}

impl From<SwapError> for PricingError {
    fn from(err: SwapError) -> Self {
        match err {
            SwapError::InvalidPeriods { periods } => PricingError::InvalidInputDomain(format!(
                "swap maturity = {} periods (must be at least 1)",
                periods
            )),
            SwapError::DivisionByZero { context } => {
                PricingError::DivisionByZero(format!("{} is zero", context))
            }
            SwapError::Curve(inner) => inner.into(),
        }
    }
}
