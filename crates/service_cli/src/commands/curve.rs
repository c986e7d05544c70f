//! Curve command implementation
//!
//! Tabulates the configured Svensson curve at annual tenors.

use pricer_core::market_data::curves::{SvenssonCurve, YieldCurve};
use pricer_core::types::PricingError;
use pricer_models::instruments::rates::SwapError;
use serde::Serialize;

use super::OutputFormat;
use crate::config::PricingConfig;
use crate::error::Result;

/// One row of the curve table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Tenor in years
    pub t: f64,
    /// Continuously compounded spot rate
    pub spot_rate: f64,
    /// Discount factor
    pub discount_factor: f64,
    /// Instantaneous forward rate
    pub forward_rate: f64,
}

/// Run the curve command
pub fn run(config: &PricingConfig, format: OutputFormat) -> Result<()> {
    let points = tabulate(config)?;
    println!("{}", render(&points, format)?);
    Ok(())
}

/// Evaluate the curve at `t = 1..=periods`; zero periods is rejected.
pub fn tabulate(config: &PricingConfig) -> Result<Vec<CurvePoint>> {
    let periods = config.swap.periods;
    if periods == 0 {
        return Err(PricingError::from(SwapError::InvalidPeriods { periods }).into());
    }
    let curve = SvenssonCurve::new(config.curve.params()).map_err(PricingError::from)?;
    (1..=periods)
        .map(|period| {
            let t = f64::from(period);
            let point = CurvePoint {
                t,
                spot_rate: curve.zero_rate(t).map_err(PricingError::from)?,
                discount_factor: curve.discount_factor(t).map_err(PricingError::from)?,
                forward_rate: curve.instantaneous_forward(t).map_err(PricingError::from)?,
            };
            Ok(point)
        })
        .collect()
}

/// Format a curve table for stdout.
pub fn render(points: &[CurvePoint], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = format!(
                "{:>6}  {:>12}  {:>12}  {:>12}",
                "t", "spot", "discount", "forward"
            );
            for p in points {
                out.push_str(&format!(
                    "\n{:>6.2}  {:>12.8}  {:>12.8}  {:>12.8}",
                    p.t, p.spot_rate, p.discount_factor, p.forward_rate
                ));
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(points)?),
    }
}
