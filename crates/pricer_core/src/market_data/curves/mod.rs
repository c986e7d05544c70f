//! Curve abstractions for interest rate calculations.
//!
//! This module provides:
//! - [`YieldCurve`]: Generic trait for zero rate and discount factor calculations
//! - [`SvenssonCurve`]: Six-parameter Svensson (extended Nelson-Siegel) spot-rate curve
//! - [`SvenssonParams`]: The shape parameters of a Svensson curve
//! - [`discount_factor_from_rate`]: Continuous-compounding discount factor

mod discount;
mod svensson;
mod traits;

pub use discount::discount_factor_from_rate;
pub use svensson::{spot_rate, SvenssonCurve, SvenssonParams};
pub use traits::YieldCurve;
