//! Market data structures for swaption pricing.
//!
//! # Architecture
//!
//! All curves are generic over `T: Float` so the same code serves `f64`
//! and `f32` callers.
//!
//! # Components
//!
//! - [`curves`]: Yield curve trait, Svensson curve and discounting
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{SvenssonCurve, SvenssonParams, YieldCurve};
//!
//! // Flat zero curve: every beta is zero
//! let params = SvenssonParams::new(0.0_f64, 0.0, 0.0, 0.0, 1.0, 1.0);
//! let curve = SvenssonCurve::new(params).unwrap();
//! assert_eq!(curve.discount_factor(5.0).unwrap(), 1.0);
//! ```

pub mod curves;
pub mod error;

// Re-export commonly used types
pub use curves::{discount_factor_from_rate, SvenssonCurve, SvenssonParams, YieldCurve};
pub use error::MarketDataError;
