//! Standard normal distribution functions.
//!
//! `norm_cdf` is evaluated through the full-precision error function from
//! `statrs`, so prices agree with a direct `erf` evaluation to machine
//! precision.

use statrs::function::erf::erf;
use std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) · (1 + erf(x / √2))
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0), 0.5);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-14);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}
