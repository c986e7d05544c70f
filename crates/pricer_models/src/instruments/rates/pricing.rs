//! End-to-end swaption valuation.
//!
//! Runs the full pipeline for one swaption:
//!
//! 1. Value the floating leg and the unit-coupon fixed leg on the curve
//! 2. Form the forward swap rate as their ratio
//! 3. Price the option with Black '76 on that forward
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{SvenssonCurve, SvenssonParams};
//! use pricer_models::instruments::rates::{price_swaption, SwapSpec, Swaption, SwaptionType};
//!
//! let curve = SvenssonCurve::new(SvenssonParams::new(0.02, -0.01, 0.03, -0.02, 2.0, 10.0)).unwrap();
//! let swap = SwapSpec::new(1_000_000.0, 5, 0.05);
//! let swaption = Swaption::new(1_000_000.0, 0.05, 2.0, SwaptionType::Payer);
//!
//! let valuation = price_swaption(&swaption, &swap, &curve, 0.2).unwrap();
//! assert!((valuation.forward_rate - 1.0).abs() < 1e-12);
//! assert!((valuation.premium - 950_000.0).abs() < 1e-3);
//! ```

use pricer_core::market_data::curves::YieldCurve;
use pricer_core::types::PricingError;
use tracing::{debug, instrument};

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{SwapSpec, Swaption, SwaptionType};
use crate::analytical::Black76;

/// Result of a swaption valuation, with the intermediate leg values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SwaptionValuation {
    /// Payer or receiver.
    pub swaption_type: SwaptionType,
    /// Strike rate.
    pub strike: f64,
    /// PV of the fixed leg at the swap's fixed rate.
    pub fixed_leg_pv: f64,
    /// PV of the floating leg.
    pub floating_leg_pv: f64,
    /// PV of the fixed leg at a unit coupon.
    pub unit_fixed_leg_pv: f64,
    /// Unit-notional annuity `Σ D(t)`.
    pub annuity: f64,
    /// Payer-side NPV of the underlying swap.
    pub swap_npv: f64,
    /// Forward swap rate (floating over unit-coupon fixed PV).
    pub forward_rate: f64,
    /// Option premium in notional currency units.
    pub premium: f64,
}

/// Price a European swaption on a Svensson (or any) yield curve.
///
/// # Arguments
///
/// * `swaption` - Option terms (notional, strike, expiry, direction)
/// * `swap` - Underlying swap (notional and number of annual periods)
/// * `curve` - Discounting curve
/// * `volatility` - Lognormal volatility of the forward swap rate
///
/// # Errors
///
/// - `PricingError::InvalidCurveParameter` if the curve cannot be evaluated
/// - `PricingError::DivisionByZero` if the unit-coupon fixed leg PV is zero
/// - `PricingError::InvalidInputDomain` for zero swap periods or a
///   non-positive notional, forward, strike, expiry or volatility
#[instrument(level = "debug", skip(curve))]
pub fn price_swaption<C>(
    swaption: &Swaption<f64>,
    swap: &SwapSpec<f64>,
    curve: &C,
    volatility: f64,
) -> Result<SwaptionValuation, PricingError>
where
    C: YieldCurve<f64>,
{
    let forward_rate = swap.forward_swap_rate(curve)?;
    let fixed_leg_pv = swap.fixed_leg_pv(curve)?;
    let floating_leg_pv = swap.floating_leg_pv(curve)?;
    let unit_fixed_leg_pv = swap.unit_fixed_leg_pv(curve)?;
    let annuity = swap.annuity(curve)?;
    let swap_npv = swap.npv(curve)?;

    debug!(
        fixed_leg_pv,
        floating_leg_pv, annuity, swap_npv, forward_rate, "Computed forward swap rate"
    );

    let premium = Black76::new(forward_rate, volatility)?.price(
        swaption.notional(),
        swaption.strike(),
        swaption.expiry(),
        swaption.swaption_type(),
    )?;

    debug!(premium, swaption_type = %swaption.swaption_type(), "Calculated swaption premium");

    Ok(SwaptionValuation {
        swaption_type: swaption.swaption_type(),
        strike: swaption.strike(),
        fixed_leg_pv,
        floating_leg_pv,
        unit_fixed_leg_pv,
        annuity,
        swap_npv,
        forward_rate,
        premium,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::curves::{SvenssonCurve, SvenssonParams};

    fn reference_curve() -> SvenssonCurve<f64> {
        SvenssonCurve::new(SvenssonParams::new(0.02, -0.01, 0.03, -0.02, 2.0, 10.0)).unwrap()
    }

    fn reference_swap() -> SwapSpec<f64> {
        SwapSpec::new(1_000_000.0, 5, 0.05)
    }

    #[test]
    fn test_price_swaption_reference_payer() {
        let swaption = Swaption::new(1_000_000.0, 0.05, 2.0, SwaptionType::Payer);
        let valuation =
            price_swaption(&swaption, &reference_swap(), &reference_curve(), 0.2).unwrap();

        assert_relative_eq!(valuation.forward_rate, 1.0, max_relative = 1e-9);
        assert_relative_eq!(valuation.premium, 950_000.0, max_relative = 1e-9);
        assert_relative_eq!(
            valuation.unit_fixed_leg_pv,
            4699634.843235701,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            valuation.fixed_leg_pv,
            0.05 * 4699634.843235701,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            valuation.swap_npv,
            0.95 * 4699634.843235701,
            max_relative = 1e-12
        );
        assert_eq!(valuation.swaption_type, SwaptionType::Payer);
    }

    #[test]
    fn test_forward_rate_matches_swap_forward_rate() {
        let curve = reference_curve();
        let swap = SwapSpec::new(250_000.0, 7, 0.03);
        let swaption = Swaption::new(250_000.0, 0.03, 1.0, SwaptionType::Payer);
        let valuation = price_swaption(&swaption, &swap, &curve, 0.2).unwrap();

        assert_eq!(valuation.forward_rate, swap.forward_swap_rate(&curve).unwrap());
        assert_eq!(
            valuation.forward_rate,
            valuation.floating_leg_pv / valuation.unit_fixed_leg_pv
        );
    }

    #[test]
    fn test_negative_notional_is_invalid_input_domain() {
        let swaption = Swaption::new(-1_000_000.0, 0.05, 2.0, SwaptionType::Payer);
        let swap = SwapSpec::new(-1_000_000.0, 5, 0.05);
        let result = price_swaption(&swaption, &swap, &reference_curve(), 0.2);
        match result {
            Err(PricingError::InvalidInputDomain(msg)) => assert!(msg.starts_with("notional")),
            other => panic!("Expected InvalidInputDomain, got {:?}", other),
        }
    }

    #[test]
    fn test_price_swaption_reference_receiver() {
        let swaption = Swaption::new(1_000_000.0, 0.05, 2.0, SwaptionType::Receiver);
        let valuation =
            price_swaption(&swaption, &reference_swap(), &reference_curve(), 0.2).unwrap();
        assert!(valuation.premium.abs() < 1e-6);
    }

    #[test]
    fn test_payer_receiver_parity() {
        let curve = reference_curve();
        let swap = reference_swap();
        let strike = 0.5;

        let payer = Swaption::new(1_000_000.0, strike, 2.0, SwaptionType::Payer);
        let receiver = Swaption::new(1_000_000.0, strike, 2.0, SwaptionType::Receiver);

        let payer_val = price_swaption(&payer, &swap, &curve, 0.2).unwrap();
        let receiver_val = price_swaption(&receiver, &swap, &curve, 0.2).unwrap();

        assert_relative_eq!(payer_val.premium, 500462.7251198077, max_relative = 1e-9);
        assert_relative_eq!(receiver_val.premium, 462.725119807661, max_relative = 1e-6);

        let parity = 1_000_000.0 * (payer_val.forward_rate - strike);
        assert_relative_eq!(
            payer_val.premium - receiver_val.premium,
            parity,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_zero_volatility_is_invalid_input_domain() {
        let swaption = Swaption::new(1_000_000.0, 0.05, 2.0, SwaptionType::Payer);
        let result = price_swaption(&swaption, &reference_swap(), &reference_curve(), 0.0);
        assert!(matches!(result, Err(PricingError::InvalidInputDomain(_))));
    }

    #[test]
    fn test_zero_expiry_is_invalid_input_domain() {
        let swaption = Swaption::new(1_000_000.0, 0.05, 0.0, SwaptionType::Payer);
        let result = price_swaption(&swaption, &reference_swap(), &reference_curve(), 0.2);
        assert!(matches!(result, Err(PricingError::InvalidInputDomain(_))));
    }

    #[test]
    fn test_zero_notional_is_division_by_zero() {
        let swaption = Swaption::new(1_000_000.0, 0.05, 2.0, SwaptionType::Payer);
        let swap = SwapSpec::new(0.0, 5, 0.05);
        let result = price_swaption(&swaption, &swap, &reference_curve(), 0.2);
        assert!(matches!(result, Err(PricingError::DivisionByZero(_))));
    }

    #[test]
    fn test_zero_periods_is_invalid_input_domain() {
        let swaption = Swaption::new(1_000_000.0, 0.05, 2.0, SwaptionType::Payer);
        let swap = SwapSpec::new(1_000_000.0, 0, 0.05);
        let result = price_swaption(&swaption, &swap, &reference_curve(), 0.2);
        assert!(matches!(result, Err(PricingError::InvalidInputDomain(_))));
    }
}
