//! Command-line front end.
//!
//! ```text
//! bs-pricer <STOCK_PRICE> <STRIKE_PRICE> <DAYS_TO_EXPIRATION> <VOLATILITY_PCT> <RISK_FREE_RATE_PCT>
//! ```
//!
//! Exactly five positional values. Wrong counts print the usage line to
//! stderr and exit with status 1 without pricing anything.
//!
//! Positionals accept leading hyphens, so `-1` and `-abc` are values handed
//! to the number parser. Defined flags (`--strict`, `--config`, `-v`, `-h`,
//! `-V`) keep their meaning anywhere on the line. A bare `--` ends flag
//! parsing and is never itself a value.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use crate::error::PricerError;
use crate::inputs::config::{ParsePolicy, PricerConfig};
use crate::inputs::parse::parse_number;
use crate::inputs::types::{MarketQuote, OptionValues};
use crate::price_quote;

pub const BANNER: &str = "Options pricing calculator based on the Black-Scholes Model.";

#[derive(Parser, Debug)]
#[command(
    name = "bs-pricer",
    version,
    about = "Price European call and put options with the Black-Scholes model"
)]
pub struct Cli {
    /// Stock price ($)
    #[arg(value_name = "STOCK_PRICE", allow_hyphen_values = true)]
    pub stock_price: String,

    /// Strike price ($)
    #[arg(value_name = "STRIKE_PRICE", allow_hyphen_values = true)]
    pub strike_price: String,

    /// Days to expiration (days)
    #[arg(value_name = "DAYS_TO_EXPIRATION", allow_hyphen_values = true)]
    pub days_to_expiration: String,

    /// Volatility (%)
    #[arg(value_name = "VOLATILITY_PCT", allow_hyphen_values = true)]
    pub volatility: String,

    /// Risk-free rate of interest (%)
    #[arg(value_name = "RISK_FREE_RATE_PCT", allow_hyphen_values = true)]
    pub risk_free_rate: String,

    /// Reject arguments that are not numbers instead of reading them as 0
    #[arg(long)]
    pub strict: bool,

    /// TOML configuration file
    #[arg(long, value_name = "PATH", env = "BS_PRICER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug detail to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Configuration from `--config` (or defaults), with `--strict` applied on top.
    pub fn resolve_config(&self) -> Result<PricerConfig> {
        let mut config = match &self.config {
            Some(path) => PricerConfig::from_file(path)?,
            None => PricerConfig::default(),
        };
        if self.strict {
            config.parse_policy = ParsePolicy::Strict;
        }
        Ok(config)
    }

    pub fn quote(&self, policy: ParsePolicy) -> Result<MarketQuote, PricerError> {
        Ok(MarketQuote::new(
            parse_number("stock price", &self.stock_price, policy)?,
            parse_number("strike price", &self.strike_price, policy)?,
            parse_number("days to expiration", &self.days_to_expiration, policy)?,
            parse_number("volatility", &self.volatility, policy)?,
            parse_number("risk-free rate", &self.risk_free_rate, policy)?,
        ))
    }
}

/// Write the input echo and the two option values.
pub fn write_report(
    out: &mut impl Write,
    quote: &MarketQuote,
    values: &OptionValues,
    config: &PricerConfig,
) -> std::io::Result<()> {
    if config.echo_inputs {
        // Shortest round-trip `Display`, not C++ `cout`'s 6 significant digits
        // (1234567 echoes as `1234567`, not `1.23457e+06`).
        writeln!(out, "Stock Price: ${}", quote.stock_price)?;
        writeln!(out, "Strike Price: ${}", quote.strike_price)?;
        writeln!(out, "Days to Expiration: {} days", quote.days_to_expiration)?;
        writeln!(out, "Volatility: {}%", quote.volatility_pct)?;
        writeln!(out, "Risk-Free Rate of Interest: {}%", quote.risk_free_rate_pct)?;
        writeln!(out)?;
    }

    let prec = config.decimal_places;
    writeln!(out, "Call Option Value: ${:.prec$}", values.call)?;
    writeln!(out, "Put Option Value: ${:.prec$}", values.put)?;
    Ok(())
}

/// Price the parsed command line and write the report.
pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.resolve_config()?;
    debug!(?config, "resolved configuration");

    let quote = cli.quote(config.parse_policy)?;
    let values = price_quote(&quote);

    write_report(out, &quote, &values, &config)?;
    Ok(())
}

/// Run the CLI on an already attempted parse and return the exit status.
pub fn run(
    parsed: Result<Cli, clap::Error>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    let _ = writeln!(out, "{BANNER}");

    let cli = match parsed {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(out, "{e}");
            return 0;
        }
        Err(e) => {
            let usage = PricerError::usage(e.to_string());
            debug!(detail = %e, "argument parsing failed");
            let _ = writeln!(err, "{usage}");
            return 1;
        }
    };

    let _ = writeln!(out);

    match execute(&cli, out) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {e:#}");
            1
        }
    }
}

/// Parse `args` (program name first) and run.
pub fn run_from<I, T>(args: I, out: &mut impl Write, err: &mut impl Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run(Cli::try_parse_from(args), out, err)
}
