//! Price command implementation
//!
//! Prices one European swaption on the configured Svensson curve.

use pricer_core::market_data::curves::SvenssonCurve;
use pricer_core::types::PricingError;
use pricer_models::instruments::rates::{price_swaption, SwaptionValuation};
use tracing::info;

use super::OutputFormat;
use crate::config::PricingConfig;
use crate::error::Result;

/// Run the price command
pub fn run(config: &PricingConfig, format: OutputFormat) -> Result<()> {
    let valuation = value(config)?;
    info!(premium = valuation.premium, "Pricing complete");
    println!("{}", render(&valuation, format)?);
    Ok(())
}

/// Value the configured swaption.
pub fn value(config: &PricingConfig) -> Result<SwaptionValuation> {
    let curve = SvenssonCurve::new(config.curve.params()).map_err(PricingError::from)?;
    let valuation = price_swaption(
        &config.swaption(),
        &config.swap(),
        &curve,
        config.swaption.volatility,
    )?;
    Ok(valuation)
}

/// Format a valuation for stdout.
pub fn render(valuation: &SwaptionValuation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "The price of the swaption is: ${:.2}",
            valuation.premium
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(valuation)?),
    }
}
