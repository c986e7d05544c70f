//! Swaption CLI - European swaption pricing on a Svensson yield curve
//!
//! # Commands
//!
//! - `swaption` / `swaption price` - Price the configured swaption
//! - `swaption curve` - Tabulate spot rates, discount factors and forwards
//!
//! # Architecture
//!
//! As part of the service layer, this crate wires configuration, logging
//! and output formatting around `pricer_core` and `pricer_models`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use pricer_models::instruments::rates::SwaptionType;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use error::Result;

use commands::OutputFormat;
use config::{PricingConfig, ScenarioOverrides};

/// Environment variable holding the log filter directive
const LOG_ENV: &str = "SWAPTION_LOG";

/// European swaption pricer (Svensson curve, Black '76)
#[derive(Parser)]
#[command(name = "swaption")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "SWAPTION_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the swaption (default)
    Price(CommandArgs),

    /// Tabulate the yield curve at annual tenors
    Curve(CommandArgs),
}

#[derive(Args, Debug, Default)]
struct CommandArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Scenario overrides; unset flags fall back to the configuration file.
#[derive(Args, Debug, Default)]
struct ScenarioArgs {
    /// Notional amount
    #[arg(long)]
    notional: Option<f64>,

    /// Strike rate (also the swap fixed rate)
    #[arg(long)]
    strike: Option<f64>,

    /// Option maturity in years
    #[arg(long)]
    expiry: Option<f64>,

    /// Lognormal volatility of the forward swap rate
    #[arg(long)]
    volatility: Option<f64>,

    /// Price a payer swaption
    #[arg(long, conflicts_with = "receiver")]
    payer: bool,

    /// Price a receiver swaption
    #[arg(long)]
    receiver: bool,

    /// Number of annual swap periods
    #[arg(long)]
    swap_periods: Option<u32>,

    /// Curve level β₀
    #[arg(long, allow_hyphen_values = true)]
    beta0: Option<f64>,

    /// Curve slope β₁
    #[arg(long, allow_hyphen_values = true)]
    beta1: Option<f64>,

    /// Curve first hump β₂
    #[arg(long, allow_hyphen_values = true)]
    beta2: Option<f64>,

    /// Curve second hump β₃
    #[arg(long, allow_hyphen_values = true)]
    beta3: Option<f64>,

    /// First decay constant τ₁
    #[arg(long, allow_hyphen_values = true)]
    tau1: Option<f64>,

    /// Second decay constant τ₂
    #[arg(long, allow_hyphen_values = true)]
    tau2: Option<f64>,
}

impl From<&ScenarioArgs> for ScenarioOverrides {
    fn from(args: &ScenarioArgs) -> Self {
        let swaption_type = if args.receiver {
            Some(SwaptionType::Receiver)
        } else if args.payer {
            Some(SwaptionType::Payer)
        } else {
            None
        };
        Self {
            notional: args.notional,
            strike: args.strike,
            expiry: args.expiry,
            volatility: args.volatility,
            swaption_type,
            swap_periods: args.swap_periods,
            beta0: args.beta0,
            beta1: args.beta1,
            beta2: args.beta2,
            beta3: args.beta3,
            tau1: args.tau1,
            tau2: args.tau2,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Price(CommandArgs::default()));

    let mut config = PricingConfig::load(cli.config.as_deref())?;
    debug!(config_file = ?cli.config, "Loaded configuration");

    match command {
        Commands::Price(args) => {
            config.merge_with_cli(&ScenarioOverrides::from(&args.scenario));
            commands::price::run(&config, args.format)
        }
        Commands::Curve(args) => {
            config.merge_with_cli(&ScenarioOverrides::from(&args.scenario));
            commands::curve::run(&config, args.format)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
