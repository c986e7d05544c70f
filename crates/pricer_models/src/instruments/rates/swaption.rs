//! Swaption (option on interest rate swap) definition.
//!
//! # Types
//!
//! - **Payer Swaption**: Right to enter a payer swap (pay fixed, receive floating)
//! - **Receiver Swaption**: Right to enter a receiver swap (receive fixed, pay floating)
//!
//! # Example
//!
//! ```
//! use pricer_models::instruments::rates::{Swaption, SwaptionType};
//!
//! let swaption = Swaption::new(1_000_000.0, 0.05, 2.0, SwaptionType::Payer);
//! assert_eq!(swaption.swaption_type(), SwaptionType::Payer);
//! assert_eq!(swaption.swaption_type().to_string(), "Payer");
//! ```

use num_traits::Float;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Swaption type (payer or receiver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SwaptionType {
    /// Right to enter a payer swap (pay fixed, receive floating).
    #[default]
    Payer,
    /// Right to enter a receiver swap (receive fixed, pay floating).
    Receiver,
}

impl fmt::Display for SwaptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwaptionType::Payer => write!(f, "Payer"),
            SwaptionType::Receiver => write!(f, "Receiver"),
        }
    }
}

/// European swaption on an annual-period swap.
///
/// The underlying swap is described separately by
/// [`SwapSpec`](super::SwapSpec); the swaption carries only the option terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swaption<T: Float> {
    /// Notional used to scale the premium.
    notional: T,
    /// Strike rate.
    strike: T,
    /// Time to expiry in years.
    expiry_time: T,
    /// Swaption type (payer or receiver).
    swaption_type: SwaptionType,
}

impl<T: Float> Swaption<T> {
    /// Create a new swaption.
    ///
    /// # Arguments
    ///
    /// * `notional` - Notional amount
    /// * `strike` - Strike rate
    /// * `expiry_time` - Option maturity in years
    /// * `swaption_type` - Payer or receiver
    pub fn new(notional: T, strike: T, expiry_time: T, swaption_type: SwaptionType) -> Self {
        Self {
            notional,
            strike,
            expiry_time,
            swaption_type,
        }
    }

    /// Returns the notional amount.
    #[inline]
    pub fn notional(&self) -> T {
        self.notional
    }

    /// Returns the strike rate.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry_time
    }

    /// Returns the swaption type.
    #[inline]
    pub fn swaption_type(&self) -> SwaptionType {
        self.swaption_type
    }
}
