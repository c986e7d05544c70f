//! # pricer_core: Yield Curve Foundation for Swaption Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - The [`YieldCurve`](market_data::curves::YieldCurve) trait for zero rates
//!   and discount factors (`market_data::curves`)
//! - The Svensson parametric spot-rate curve (`market_data::curves::svensson`)
//! - Continuous-compounding discount factors (`market_data::curves::discount`)
//! - Error types: `PricingError` (`types::error`), `MarketDataError`
//!   (`market_data::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::curves::{SvenssonCurve, SvenssonParams, YieldCurve};
//!
//! let params = SvenssonParams::new(0.02_f64, -0.01, 0.03, -0.02, 2.0, 10.0);
//! let curve = SvenssonCurve::new(params).unwrap();
//!
//! let r = curve.zero_rate(1.0).unwrap();
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - (-r).exp()).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for curve parameters

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
