//! Svensson parametric spot-rate curve.
//!
//! The Svensson model extends Nelson-Siegel with a second hump term:
//!
//! ```text
//! r(t) = β₀ + β₁·g(t/τ₁)
//!           + β₂·(g(t/τ₁) − e^(−t/τ₁))
//!           + β₃·(g(t/τ₂) − e^(−t/τ₂))
//!
//! g(x) = (1 − e^(−x)) / x
//! ```
//!
//! r(t) is the continuously compounded spot (zero) rate for horizon t.
//! The decay constants τ₁, τ₂ and the horizon t appear as divisors and
//! must be strictly positive.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape parameters of a Svensson curve.
///
/// Betas may take any sign, so negative spot rates are representable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SvenssonParams<T> {
    /// Long-term level β₀
    pub beta0: T,
    /// Short-term slope β₁
    pub beta1: T,
    /// First hump β₂
    pub beta2: T,
    /// Second hump β₃
    pub beta3: T,
    /// First decay constant τ₁ (years)
    pub tau1: T,
    /// Second decay constant τ₂ (years)
    pub tau2: T,
}

impl<T: Float> SvenssonParams<T> {
    /// Construct a parameter set from its six components.
    ///
    /// No validation happens here; [`SvenssonCurve::new`] and
    /// [`spot_rate`] reject non-positive decay constants.
    pub fn new(beta0: T, beta1: T, beta2: T, beta3: T, tau1: T, tau2: T) -> Self {
        Self {
            beta0,
            beta1,
            beta2,
            beta3,
            tau1,
            tau2,
        }
    }

    /// Check that both decay constants are strictly positive and finite.
    pub fn validate(&self) -> Result<(), MarketDataError> {
        for (name, value) in [("tau1", self.tau1), ("tau2", self.tau2)] {
            if !(value > T::zero()) || !value.is_finite() {
                return Err(MarketDataError::InvalidCurveParameter {
                    name,
                    value: value.to_f64().unwrap_or(0.0),
                });
            }
        }
        Ok(())
    }
}

/// (1 − e^(−x)) / x
#[inline]
fn loading<T: Float>(x: T) -> T {
    (T::one() - (-x).exp()) / x
}

/// Evaluate the Svensson spot rate at horizon `t`.
///
/// # Errors
///
/// `MarketDataError::InvalidCurveParameter` if `t <= 0`, `tau1 <= 0` or
/// `tau2 <= 0`. The formula is never evaluated on invalid input.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{spot_rate, SvenssonParams};
///
/// let params = SvenssonParams::new(0.02_f64, -0.01, 0.03, -0.02, 2.0, 10.0);
/// let r = spot_rate(1.0, &params).unwrap();
/// assert!((r - 0.016607085788026756).abs() < 1e-12);
///
/// assert!(spot_rate(0.0, &params).is_err());
/// ```
pub fn spot_rate<T: Float>(t: T, params: &SvenssonParams<T>) -> Result<T, MarketDataError> {
    params.validate()?;
    if !(t > T::zero()) {
        return Err(MarketDataError::InvalidCurveParameter {
            name: "t",
            value: t.to_f64().unwrap_or(0.0),
        });
    }

    let x1 = t / params.tau1;
    let x2 = t / params.tau2;
    let g1 = loading(x1);
    let g2 = loading(x2);

    Ok(params.beta0
        + params.beta1 * g1
        + params.beta2 * (g1 - (-x1).exp())
        + params.beta3 * (g2 - (-x2).exp()))
}

/// Svensson yield curve.
///
/// Holds a validated [`SvenssonParams`] set; construction fails if either
/// decay constant is non-positive, so evaluation only checks the horizon.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{SvenssonCurve, SvenssonParams, YieldCurve};
///
/// let params = SvenssonParams::new(0.045_f64, -0.02, 0.01, -0.005, 2.0, 8.0);
/// let curve = SvenssonCurve::new(params).unwrap();
///
/// let r5 = curve.zero_rate(5.0).unwrap();
/// let df5 = curve.discount_factor(5.0).unwrap();
/// assert!((df5 - (-r5 * 5.0).exp()).abs() < 1e-15);
///
/// let bad = SvenssonParams::new(0.045_f64, -0.02, 0.01, -0.005, 0.0, 8.0);
/// assert!(SvenssonCurve::new(bad).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvenssonCurve<T: Float> {
    params: SvenssonParams<T>,
}

impl<T: Float> SvenssonCurve<T> {
    /// Construct a curve, validating the decay constants.
    pub fn new(params: SvenssonParams<T>) -> Result<Self, MarketDataError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Return the instantaneous forward rate at horizon `t`.
    ///
    /// ```text
    /// f(t) = β₀ + β₁·e^(−x₁) + β₂·x₁·e^(−x₁) + β₃·x₂·e^(−x₂),  xᵢ = t/τᵢ
    /// ```
    ///
    /// Unlike the spot rate this is well defined at `t = 0`
    /// (`f(0) = β₀ + β₁`); negative horizons are rejected.
    pub fn instantaneous_forward(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() || t.is_nan() {
            return Err(MarketDataError::InvalidCurveParameter {
                name: "t",
                value: t.to_f64().unwrap_or(0.0),
            });
        }
        let p = &self.params;
        let x1 = t / p.tau1;
        let x2 = t / p.tau2;
        let e1 = (-x1).exp();
        let e2 = (-x2).exp();
        Ok(p.beta0 + p.beta1 * e1 + p.beta2 * x1 * e1 + p.beta3 * x2 * e2)
    }
}

impl<T: Float> YieldCurve<T> for SvenssonCurve<T> {
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        spot_rate(t, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn reference_params() -> SvenssonParams<f64> {
        SvenssonParams::new(0.02, -0.01, 0.03, -0.02, 2.0, 10.0)
    }

    // ========================================
    // Spot Rate Tests
    // ========================================

    #[test]
    fn test_spot_rate_reference_values() {
        let params = reference_params();
        let expected = [
            (1.0, 0.016607085788026756),
            (2.0, 0.019853718310785702),
            (3.0, 0.021201938852650256),
            (4.0, 0.02150899189303025),
            (5.0, 0.02127260963504985),
        ];
        for (t, r) in expected {
            assert_relative_eq!(spot_rate(t, &params).unwrap(), r, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_spot_rate_matches_closed_form() {
        let p = reference_params();
        let t = 7.5_f64;
        let g = |x: f64| (1.0 - (-x).exp()) / x;
        let expected = p.beta0
            + p.beta1 * g(t / p.tau1)
            + p.beta2 * (g(t / p.tau1) - (-t / p.tau1).exp())
            + p.beta3 * (g(t / p.tau2) - (-t / p.tau2).exp());
        assert_relative_eq!(spot_rate(t, &p).unwrap(), expected, max_relative = 1e-14);
    }

    #[test]
    fn test_spot_rate_long_end_tends_to_beta0() {
        let params = reference_params();
        let r = spot_rate(10_000.0, &params).unwrap();
        assert_relative_eq!(r, params.beta0, epsilon = 1e-4);
    }

    #[test]
    fn test_spot_rate_flat_curve() {
        let params = SvenssonParams::new(0.0_f64, 0.0, 0.0, 0.0, 1.5, 3.0);
        for t in 1..=30 {
            assert_eq!(spot_rate(t as f64, &params).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_spot_rate_rejects_zero_time() {
        let result = spot_rate(0.0, &reference_params());
        assert_eq!(
            result.unwrap_err(),
            MarketDataError::InvalidCurveParameter {
                name: "t",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_spot_rate_rejects_negative_time() {
        assert!(spot_rate(-1.0, &reference_params()).is_err());
    }

    #[test]
    fn test_spot_rate_rejects_nan_time() {
        assert!(spot_rate(f64::NAN, &reference_params()).is_err());
    }

    #[test]
    fn test_spot_rate_rejects_non_positive_tau() {
        let mut params = reference_params();
        params.tau1 = 0.0;
        match spot_rate(1.0, &params).unwrap_err() {
            MarketDataError::InvalidCurveParameter { name, .. } => assert_eq!(name, "tau1"),
        }

        let mut params = reference_params();
        params.tau2 = -2.0;
        match spot_rate(1.0, &params).unwrap_err() {
            MarketDataError::InvalidCurveParameter { name, value } => {
                assert_eq!(name, "tau2");
                assert_eq!(value, -2.0);
            }
        }
    }

    #[test]
    fn test_spot_rate_f32_compatibility() {
        let params = SvenssonParams::new(0.02_f32, -0.01, 0.03, -0.02, 2.0, 10.0);
        let r = spot_rate(1.0_f32, &params).unwrap();
        assert!((r - 0.016607086).abs() < 1e-6);
    }

    // ========================================
    // Curve Tests
    // ========================================

    #[test]
    fn test_curve_rejects_invalid_tau() {
        let params = SvenssonParams::new(0.02_f64, -0.01, 0.03, -0.02, 2.0, 0.0);
        assert!(SvenssonCurve::new(params).is_err());

        let params = SvenssonParams::new(0.02_f64, -0.01, 0.03, -0.02, f64::INFINITY, 1.0);
        assert!(SvenssonCurve::new(params).is_err());
    }

    #[test]
    fn test_curve_zero_rate_delegates_to_spot_rate() {
        let params = reference_params();
        let curve = SvenssonCurve::new(params).unwrap();
        for t in [0.25, 1.0, 3.0, 12.0] {
            assert_eq!(curve.zero_rate(t).unwrap(), spot_rate(t, &params).unwrap());
        }
    }

    #[test]
    fn test_curve_discount_factor() {
        let curve = SvenssonCurve::new(reference_params()).unwrap();
        assert_relative_eq!(
            curve.discount_factor(1.0).unwrap(),
            0.9835300516605915,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            curve.discount_factor(5.0).unwrap(),
            0.8990981728653665,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_curve_discount_factor_at_zero_is_error() {
        let curve = SvenssonCurve::new(reference_params()).unwrap();
        assert!(curve.discount_factor(0.0).is_err());
    }

    #[test]
    fn test_instantaneous_forward_at_zero() {
        let curve = SvenssonCurve::new(reference_params()).unwrap();
        assert_relative_eq!(curve.instantaneous_forward(0.0).unwrap(), 0.01, epsilon = 1e-15);
    }

    #[test]
    fn test_instantaneous_forward_consistent_with_spot() {
        // f(t) = d/dt [t·r(t)]
        let curve = SvenssonCurve::new(reference_params()).unwrap();
        let h = 1e-5;
        for t in [0.5, 1.0, 2.0, 5.0, 10.0] {
            let up = (t + h) * curve.zero_rate(t + h).unwrap();
            let down = (t - h) * curve.zero_rate(t - h).unwrap();
            let numerical = (up - down) / (2.0 * h);
            assert_relative_eq!(
                curve.instantaneous_forward(t).unwrap(),
                numerical,
                epsilon = 1e-8
            );
        }
    }

    #[test]
    fn test_instantaneous_forward_rejects_negative_time() {
        let curve = SvenssonCurve::new(reference_params()).unwrap();
        assert!(curve.instantaneous_forward(-0.5).is_err());
    }

    // ========================================
    // Property-based Tests
    // ========================================

    fn params_strategy() -> impl Strategy<Value = SvenssonParams<f64>> {
        (
            -0.05..0.10_f64,
            -0.05..0.05_f64,
            -0.05..0.05_f64,
            -0.05..0.05_f64,
            0.1..20.0_f64,
            0.1..30.0_f64,
        )
            .prop_map(|(b0, b1, b2, b3, t1, t2)| SvenssonParams::new(b0, b1, b2, b3, t1, t2))
    }

    proptest! {
        #[test]
        fn prop_discount_factor_bounds(params in params_strategy(), t in 0.01..30.0_f64) {
            let curve = SvenssonCurve::new(params).unwrap();
            let r = curve.zero_rate(t).unwrap();
            let df = curve.discount_factor(t).unwrap();
            prop_assume!((r * t).abs() > 1e-12);

            if r >= 0.0 {
                prop_assert!(df > 0.0 && df <= 1.0);
            } else {
                prop_assert!(df > 1.0);
            }
        }

        #[test]
        fn prop_spot_rate_is_finite(params in params_strategy(), t in 0.01..100.0_f64) {
            prop_assert!(spot_rate(t, &params).unwrap().is_finite());
        }
    }
}
