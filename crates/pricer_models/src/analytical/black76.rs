//! Black '76 pricing for European swaptions.
//!
//! ## Mathematical Formulas
//!
//! ```text
//! d1 = [ln(F/K) + ½σ²T] / (σ√T)
//! d2 = d1 − σ√T
//!
//! Payer    = N_ · (F·N(d1) − K·N(d2))
//! Receiver = N_ · (K·(1 − N(d2)) − F·(1 − N(d1)))
//! ```
//!
//! Where F is the forward swap rate, K the strike, T the option maturity,
//! σ the lognormal volatility and N_ the notional.
//!
//! ## Notional scaling
//!
//! The premium is scaled by the notional directly. Market convention
//! multiplies by the swap annuity (PVBP) instead; the notional form is kept
//! so results line up with the reference scenario, and callers that need
//! the annuity-scaled premium can rescale with
//! [`SwapSpec::annuity`](crate::instruments::rates::SwapSpec::annuity).

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::rates::SwaptionType;

/// Reject non-positive or non-finite inputs before they reach `ln` or `sqrt`.
fn check_positive(name: &'static str, value: f64) -> Result<(), AnalyticalError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(AnalyticalError::InvalidInputDomain { name, value })
    }
}

/// Black '76 model for a lognormal forward swap rate.
///
/// # Examples
/// ```
/// use pricer_models::analytical::Black76;
///
/// let model = Black76::new(0.035, 0.25).unwrap();
/// let payer = model.price_payer(1_000_000.0, 0.03, 1.0).unwrap();
/// let receiver = model.price_receiver(1_000_000.0, 0.03, 1.0).unwrap();
///
/// // Payer - receiver = N · (F - K)
/// assert!((payer - receiver - 1_000_000.0 * 0.005).abs() < 1e-6);
///
/// assert!(Black76::new(0.035, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Black76 {
    forward: f64,
    volatility: f64,
}

impl Black76 {
    /// Creates a new Black '76 model.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidInputDomain` if `forward` or `volatility` is
    /// not strictly positive and finite.
    pub fn new(forward: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        check_positive("forward", forward)?;
        check_positive("volatility", volatility)?;
        Ok(Self {
            forward,
            volatility,
        })
    }

    /// Computes (d1, d2) for a strike and option maturity.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidInputDomain` if `strike` or `expiry` is not
    /// strictly positive and finite.
    pub fn d1_d2(&self, strike: f64, expiry: f64) -> Result<(f64, f64), AnalyticalError> {
        check_positive("strike", strike)?;
        check_positive("expiry", expiry)?;

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let d1 = ((self.forward / strike).ln()
            + 0.5 * self.volatility * self.volatility * expiry)
            / vol_sqrt_t;
        Ok((d1, d1 - vol_sqrt_t))
    }

    /// Payer swaption premium: `notional · (F·N(d1) − K·N(d2))`.
    pub fn price_payer(
        &self,
        notional: f64,
        strike: f64,
        expiry: f64,
    ) -> Result<f64, AnalyticalError> {
        check_positive("notional", notional)?;
        let (d1, d2) = self.d1_d2(strike, expiry)?;
        Ok(notional * (self.forward * norm_cdf(d1) - strike * norm_cdf(d2)))
    }

    /// Receiver swaption premium: `notional · (K·(1 − N(d2)) − F·(1 − N(d1)))`.
    pub fn price_receiver(
        &self,
        notional: f64,
        strike: f64,
        expiry: f64,
    ) -> Result<f64, AnalyticalError> {
        check_positive("notional", notional)?;
        let (d1, d2) = self.d1_d2(strike, expiry)?;
        Ok(notional * (strike * (1.0 - norm_cdf(d2)) - self.forward * (1.0 - norm_cdf(d1))))
    }

    /// Premium for the given swaption direction.
    pub fn price(
        &self,
        notional: f64,
        strike: f64,
        expiry: f64,
        swaption_type: SwaptionType,
    ) -> Result<f64, AnalyticalError> {
        match swaption_type {
            SwaptionType::Payer => self.price_payer(notional, strike, expiry),
            SwaptionType::Receiver => self.price_receiver(notional, strike, expiry),
        }
    }
}

/// Price a European swaption with Black '76.
///
/// All of `notional`, `forward`, `strike`, `expiry` and `volatility` must be strictly
/// positive and finite; otherwise `InvalidInputDomain` is returned and the
/// formula is not evaluated.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black76_swaption_price;
/// use pricer_models::instruments::rates::SwaptionType;
///
/// let premium =
///     black76_swaption_price(1_000_000.0, 0.03, 0.035, 1.0, 0.25, SwaptionType::Payer).unwrap();
/// assert!((premium - 6324.261989470538).abs() < 1e-6);
///
/// assert!(black76_swaption_price(1_000_000.0, 0.03, 0.035, 1.0, 0.0, SwaptionType::Payer).is_err());
/// ```
pub fn black76_swaption_price(
    notional: f64,
    strike: f64,
    forward: f64,
    expiry: f64,
    volatility: f64,
    swaption_type: SwaptionType,
) -> Result<f64, AnalyticalError> {
    Black76::new(forward, volatility)?.price(notional, strike, expiry, swaption_type)
}
