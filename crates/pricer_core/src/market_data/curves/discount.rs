//! Continuous-compounding discount factor.

use num_traits::Float;

/// Return the discount factor `exp(-rate * t)`.
///
/// No domain checks are made: a negative rate yields a factor above one,
/// which is a valid outcome of a curve with negative spot rates.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::discount_factor_from_rate;
///
/// let df = discount_factor_from_rate(0.05_f64, 1.0);
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// assert!(discount_factor_from_rate(-0.01_f64, 2.0) > 1.0);
/// ```
#[inline]
pub fn discount_factor_from_rate<T: Float>(rate: T, t: T) -> T {
    (-rate * t).exp()
}
