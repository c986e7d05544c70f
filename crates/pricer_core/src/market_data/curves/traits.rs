//! Yield curve trait definition.

use super::discount::discount_factor_from_rate;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic yield curve trait for zero rate and discount factor calculations.
///
/// All implementations must be generic over `T: Float` so the same curve
/// serves `f64` and `f32` callers.
///
/// # Contract
///
/// - `zero_rate(t)` returns the continuously compounded zero rate r(t)
/// - `discount_factor(t)` returns the discount factor D(t) = exp(-r(t) * t)
///
/// # Invariants
///
/// - D(t) > 0 for all t > 0
/// - D(t) <= 1 whenever r(t) >= 0; negative rates give D(t) > 1
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{SvenssonCurve, SvenssonParams, YieldCurve};
///
/// let params = SvenssonParams::new(0.03_f64, 0.0, 0.0, 0.0, 1.0, 1.0);
/// let curve = SvenssonCurve::new(params).unwrap();
///
/// let rate = curve.zero_rate(2.0).unwrap();
/// assert!((rate - 0.03).abs() < 1e-15);
///
/// let df = curve.discount_factor(2.0).unwrap();
/// assert!((df - (-0.06_f64).exp()).abs() < 1e-15);
/// ```
pub trait YieldCurve<T: Float> {
    /// Return the continuously compounded zero (spot) rate for maturity `t`.
    ///
    /// # Arguments
    ///
    /// * `t` - Time to maturity in years (must be > 0)
    ///
    /// # Returns
    ///
    /// * `Ok(r(t))` - Zero rate at time t
    /// * `Err(MarketDataError::InvalidCurveParameter)` - If t <= 0
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the discount factor for maturity `t`.
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// D(t) = exp(-r(t) * t)
    /// ```
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        let rate = self.zero_rate(t)?;
        Ok(discount_factor_from_rate(rate, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Constant-rate curve for exercising the default method
    struct MockCurve {
        rate: f64,
    }

    impl YieldCurve<f64> for MockCurve {
        fn zero_rate(&self, t: f64) -> Result<f64, MarketDataError> {
            if t <= 0.0 {
                return Err(MarketDataError::InvalidCurveParameter { name: "t", value: t });
            }
            Ok(self.rate)
        }
    }

    #[test]
    fn test_default_discount_factor() {
        let curve = MockCurve { rate: 0.05 };
        let df = curve.discount_factor(1.0).unwrap();
        assert!((df - (-0.05_f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_default_discount_factor_propagates_error() {
        let curve = MockCurve { rate: 0.05 };
        match curve.discount_factor(0.0).unwrap_err() {
            MarketDataError::InvalidCurveParameter { name, value } => {
                assert_eq!(name, "t");
                assert_eq!(value, 0.0);
            }
        }
    }
}
