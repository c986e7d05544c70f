//! Financial instrument definitions.
//!
//! - [`rates`]: Interest rate swaps and swaptions

pub mod rates;
