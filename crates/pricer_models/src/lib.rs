//! # Pricer Models (L2: Business Logic)
//!
//! Swap valuation and analytical swaption pricing on top of the
//! `pricer_core` yield curves.
//!
//! This crate provides:
//! - Swap leg present values and the forward swap rate (`instruments::rates`)
//! - Swaption definitions and the end-to-end pricing pipeline
//! - The Black '76 formula and the standard normal CDF (`analytical`)
//!
//! ## Pipeline
//!
//! ```text
//! Svensson spot rate -> discount factor -> leg PVs -> forward swap rate -> Black '76
//! ```
//!
//! Every stage is a pure function of its inputs and returns a typed error
//! instead of a non-finite number when a precondition fails.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
