//! Pricing configuration management.
//!
//! Loads the swaption scenario from an optional TOML file and layers CLI
//! overrides on top. Every field defaults to the reference scenario, so a
//! missing file or a partial file is valid.
//!
//! ```toml
//! [swaption]
//! notional = 1000000.0
//! strike = 0.05
//! expiry = 2.0
//! volatility = 0.2
//! swaption_type = "payer"
//!
//! [swap]
//! periods = 5
//!
//! [curve]
//! beta0 = 0.02
//! beta1 = -0.01
//! beta2 = 0.03
//! beta3 = -0.02
//! tau1 = 2.0
//! tau2 = 10.0
//! ```

use pricer_core::market_data::curves::SvenssonParams;
use pricer_models::instruments::rates::{SwapSpec, Swaption, SwaptionType};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path of the file
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this schema
    #[error("Failed to parse config file {path}: {message}")]
    Parse {
        /// Path of the file
        path: PathBuf,
        /// Parser message
        message: String,
    },
}

/// Option terms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwaptionSection {
    /// Notional amount (also the swap notional)
    pub notional: f64,
    /// Strike rate (also the swap fixed rate)
    pub strike: f64,
    /// Option maturity in years
    pub expiry: f64,
    /// Lognormal volatility of the forward swap rate
    pub volatility: f64,
    /// Payer or receiver
    pub swaption_type: SwaptionType,
}

impl Default for SwaptionSection {
    fn default() -> Self {
        Self {
            notional: 1_000_000.0,
            strike: 0.05,
            expiry: 2.0,
            volatility: 0.2,
            swaption_type: SwaptionType::Payer,
        }
    }
}

/// Underlying swap terms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwapSection {
    /// Number of annual periods
    pub periods: u32,
}

impl Default for SwapSection {
    fn default() -> Self {
        Self { periods: 5 }
    }
}

/// Svensson curve parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurveSection {
    /// Long-term level
    pub beta0: f64,
    /// Short-term slope
    pub beta1: f64,
    /// First hump
    pub beta2: f64,
    /// Second hump
    pub beta3: f64,
    /// First decay constant
    pub tau1: f64,
    /// Second decay constant
    pub tau2: f64,
}

impl Default for CurveSection {
    fn default() -> Self {
        Self {
            beta0: 0.02,
            beta1: -0.01,
            beta2: 0.03,
            beta3: -0.02,
            tau1: 2.0,
            tau2: 10.0,
        }
    }
}

impl CurveSection {
    /// Convert to curve parameters.
    pub fn params(&self) -> SvenssonParams<f64> {
        SvenssonParams::new(
            self.beta0, self.beta1, self.beta2, self.beta3, self.tau1, self.tau2,
        )
    }
}

/// Full pricing configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Option terms
    pub swaption: SwaptionSection,
    /// Underlying swap terms
    pub swap: SwapSection,
    /// Curve parameters
    pub curve: CurveSection,
}

/// Per-field overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct ScenarioOverrides {
    /// Notional override
    pub notional: Option<f64>,
    /// Strike override
    pub strike: Option<f64>,
    /// Option maturity override
    pub expiry: Option<f64>,
    /// Volatility override
    pub volatility: Option<f64>,
    /// Direction override
    pub swaption_type: Option<SwaptionType>,
    /// Swap periods override
    pub swap_periods: Option<u32>,
    /// beta0 override
    pub beta0: Option<f64>,
    /// beta1 override
    pub beta1: Option<f64>,
    /// beta2 override
    pub beta2: Option<f64>,
    /// beta3 override
    pub beta3: Option<f64>,
    /// tau1 override
    pub tau1: Option<f64>,
    /// tau2 override
    pub tau2: Option<f64>,
}

impl PricingConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from `path` if given, otherwise use the reference scenario
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Merge with CLI overrides (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &ScenarioOverrides) {
        let s = &mut self.swaption;
        s.notional = cli.notional.unwrap_or(s.notional);
        s.strike = cli.strike.unwrap_or(s.strike);
        s.expiry = cli.expiry.unwrap_or(s.expiry);
        s.volatility = cli.volatility.unwrap_or(s.volatility);
        s.swaption_type = cli.swaption_type.unwrap_or(s.swaption_type);

        self.swap.periods = cli.swap_periods.unwrap_or(self.swap.periods);

        let c = &mut self.curve;
        c.beta0 = cli.beta0.unwrap_or(c.beta0);
        c.beta1 = cli.beta1.unwrap_or(c.beta1);
        c.beta2 = cli.beta2.unwrap_or(c.beta2);
        c.beta3 = cli.beta3.unwrap_or(c.beta3);
        c.tau1 = cli.tau1.unwrap_or(c.tau1);
        c.tau2 = cli.tau2.unwrap_or(c.tau2);
    }

    /// The swaption described by this configuration.
    pub fn swaption(&self) -> Swaption<f64> {
        let s = &self.swaption;
        Swaption::new(s.notional, s.strike, s.expiry, s.swaption_type)
    }

    /// The underlying swap; the strike doubles as its fixed rate.
    pub fn swap(&self) -> SwapSpec<f64> {
        SwapSpec::new(self.swaption.notional, self.swap.periods, self.swaption.strike)
    }
}
