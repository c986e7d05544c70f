//! Swap leg valuation on annual periods.
//!
//! Cash flows fall at whole-year times `t = 1, 2, ..., M` and are discounted
//! with the spot rate of the supplied curve at each payment time.
//!
//! # Floating leg convention
//!
//! The floating leg is valued as a leg paying a coupon of `1.0` per period,
//! i.e. `Σ notional · D(t)`. This is a simplified model rather than the
//! textbook `notional · (1 − D(M))` par-floater value, and the forward swap
//! rate and swaption premium are defined relative to it.

use num_traits::Float;
use pricer_core::market_data::curves::YieldCurve;
use tracing::trace;

use super::error::SwapError;

/// Present value of a leg paying `notional · coupon` at `t = 1..=periods`.
///
/// ```text
/// PV = Σₜ notional · coupon · exp(−r(t)·t)
/// ```
///
/// # Errors
///
/// - `SwapError::InvalidPeriods` if `periods == 0`
/// - `SwapError::Curve` if the curve cannot be evaluated
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::curves::{SvenssonCurve, SvenssonParams};
/// use pricer_models::instruments::rates::leg_pv;
///
/// let flat = SvenssonCurve::new(SvenssonParams::new(0.0, 0.0, 0.0, 0.0, 1.0, 1.0)).unwrap();
/// // Zero rates: every period pays its undiscounted coupon
/// assert_eq!(leg_pv(100.0, 0.05, 4, &flat).unwrap(), 20.0);
/// ```
pub fn leg_pv<T, C>(notional: T, coupon: T, periods: u32, curve: &C) -> Result<T, SwapError>
where
    T: Float,
    C: YieldCurve<T>,
{
    if periods == 0 {
        return Err(SwapError::InvalidPeriods { periods });
    }

    let mut pv = T::zero();
    let mut t = T::zero();
    for period in 1..=periods {
        t = t + T::one();
        let df = curve.discount_factor(t)?;
        trace!(period, df = ?df.to_f64(), "discounted leg cash flow");
        pv = pv + notional * coupon * df;
    }
    Ok(pv)
}

/// Forward swap rate: floating-leg PV over the fixed-leg PV at unit coupon.
///
/// Both legs share the discounting of [`leg_pv`], so under this model the
/// ratio is `1` for any curve with a non-zero annuity.
///
/// # Errors
///
/// - `SwapError::DivisionByZero` if the unit-coupon fixed-leg PV is zero
///   (for instance a zero notional)
/// - Any error of [`leg_pv`]
pub fn forward_swap_rate<T, C>(notional: T, periods: u32, curve: &C) -> Result<T, SwapError>
where
    T: Float,
    C: YieldCurve<T>,
{
    let fixed_pv = leg_pv(notional, T::one(), periods, curve)?;
    let floating_pv = leg_pv(notional, T::one(), periods, curve)?;
    if fixed_pv == T::zero() {
        return Err(SwapError::DivisionByZero {
            context: "fixed leg PV at unit coupon",
        });
    }
    Ok(floating_pv / fixed_pv)
}

/// Swap on annual periods with a fixed leg and a floating leg.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::curves::{SvenssonCurve, SvenssonParams};
/// use pricer_models::instruments::rates::SwapSpec;
///
/// let curve = SvenssonCurve::new(SvenssonParams::new(0.03, 0.0, 0.0, 0.0, 1.0, 1.0)).unwrap();
/// let swap: SwapSpec<f64> = SwapSpec::new(1_000_000.0, 5, 0.03);
///
/// let fixed = swap.fixed_leg_pv(&curve).unwrap();
/// let annuity = swap.annuity(&curve).unwrap();
/// assert!((fixed - 1_000_000.0 * 0.03 * annuity).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapSpec<T: Float> {
    notional: T,
    maturity_periods: u32,
    fixed_rate: T,
}

impl<T: Float> SwapSpec<T> {
    /// Create a swap specification.
    ///
    /// # Arguments
    ///
    /// * `notional` - Notional amount
    /// * `maturity_periods` - Number of annual periods (at least 1 to be valued)
    /// * `fixed_rate` - Fixed coupon rate
    pub fn new(notional: T, maturity_periods: u32, fixed_rate: T) -> Self {
        Self {
            notional,
            maturity_periods,
            fixed_rate,
        }
    }

    /// Returns the notional amount.
    #[inline]
    pub fn notional(&self) -> T {
        self.notional
    }

    /// Returns the number of annual periods.
    #[inline]
    pub fn maturity_periods(&self) -> u32 {
        self.maturity_periods
    }

    /// Returns the fixed coupon rate.
    #[inline]
    pub fn fixed_rate(&self) -> T {
        self.fixed_rate
    }

    /// PV of the fixed leg at the swap's fixed rate.
    pub fn fixed_leg_pv<C: YieldCurve<T>>(&self, curve: &C) -> Result<T, SwapError> {
        leg_pv(self.notional, self.fixed_rate, self.maturity_periods, curve)
    }

    /// PV of the fixed leg at a unit coupon.
    pub fn unit_fixed_leg_pv<C: YieldCurve<T>>(&self, curve: &C) -> Result<T, SwapError> {
        leg_pv(self.notional, T::one(), self.maturity_periods, curve)
    }

    /// PV of the floating leg (coupon `1.0` per period, see module docs).
    pub fn floating_leg_pv<C: YieldCurve<T>>(&self, curve: &C) -> Result<T, SwapError> {
        leg_pv(self.notional, T::one(), self.maturity_periods, curve)
    }

    /// Unit-notional annuity `Σ D(t)`.
    pub fn annuity<C: YieldCurve<T>>(&self, curve: &C) -> Result<T, SwapError> {
        leg_pv(T::one(), T::one(), self.maturity_periods, curve)
    }

    /// Forward swap rate for this swap's notional and maturity.
    pub fn forward_swap_rate<C: YieldCurve<T>>(&self, curve: &C) -> Result<T, SwapError> {
        forward_swap_rate(self.notional, self.maturity_periods, curve)
    }

    /// NPV from the payer's side: floating leg received, fixed leg paid.
    pub fn npv<C: YieldCurve<T>>(&self, curve: &C) -> Result<T, SwapError> {
        Ok(self.floating_leg_pv(curve)? - self.fixed_leg_pv(curve)?)
    }
}
