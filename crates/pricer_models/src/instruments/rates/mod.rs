//! Interest rate derivative instruments.
//!
//! This module provides:
//! - [`SwapSpec`]: Annual-period swap with fixed and floating leg valuation
//! - [`leg_pv`]: Present value of a leg paying `notional · coupon` each period
//! - [`forward_swap_rate`]: Floating-leg PV over unit-coupon fixed-leg PV
//! - [`Swaption`] and [`SwaptionType`]: Option on a swap
//! - [`pricing`]: End-to-end swaption valuation
//!
//! # Examples
//!
//! ```
//! use pricer_core::market_data::curves::{SvenssonCurve, SvenssonParams};
//! use pricer_models::instruments::rates::SwapSpec;
//!
//! let curve = SvenssonCurve::new(SvenssonParams::new(0.02, -0.01, 0.03, -0.02, 2.0, 10.0)).unwrap();
//! let swap = SwapSpec::new(1_000_000.0, 5, 0.05);
//!
//! let fixed = swap.fixed_leg_pv(&curve).unwrap();
//! let floating = swap.floating_leg_pv(&curve).unwrap();
//! assert!(floating > fixed);
//! ```

mod error;
pub mod pricing;
mod swap;
mod swaption;

pub use error::SwapError;
pub use pricing::{price_swaption, SwaptionValuation};
pub use swap::{forward_swap_rate, leg_pv, SwapSpec};
pub use swaption::{Swaption, SwaptionType};
