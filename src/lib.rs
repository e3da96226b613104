//! # bs-pricer: Closed-Form European Option Pricing
//!
//! `bs-pricer` prices European call and put options with the Black-Scholes formula.
//! Every output is a deterministic closed-form function of five scalars: spot price,
//! strike price, time to expiration, volatility and risk-free rate. There is no state,
//! no caching and no iteration, so every function here is safe to call from any
//! number of threads at once.
//!
//! ## Units
//!
//! Quotes are entered the way people speak about them ([`MarketQuote`]): prices in
//! currency, time in calendar days, volatility and rate in percent. The model works in
//! years and decimal fractions ([`BlackScholesInputs`]). [`MarketQuote::to_model_inputs`]
//! is the single place the conversion happens; the pricing functions never rescale.
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricer::{price_quote, MarketQuote};
//!
//! // $100 spot, $100 strike, one year, 20% vol, 5% rate
//! let quote = MarketQuote::new(100.0, 100.0, 365.0, 20.0, 5.0);
//! let values = price_quote(&quote);
//!
//! assert!((values.call - 10.45).abs() < 0.01);
//! assert!((values.put - 5.57).abs() < 0.01);
//! ```
//!
//! Working directly in model units:
//!
//! ```rust
//! use bs_pricer::{bs_call_price, bs_put_price};
//!
//! let call = bs_call_price(50.0, 55.0, 0.5, 0.3, 0.03);
//! let put = bs_put_price(50.0, 55.0, 0.5, 0.3, 0.03);
//! assert_eq!(put, call + 55.0 * (-0.03_f64 * 0.5).exp() - 50.0);
//! ```
//!
//! ## Domain
//!
//! The formulas need `T > 0` and `σ > 0`. Inputs outside that range are not rejected
//! or clamped: the IEEE-754 infinities and NaNs produced by the division are returned
//! as-is.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod cli;
pub mod error;
pub mod inputs;
pub mod models;

// ================================================================================================
// IMPORTS
// ================================================================================================

use tracing::{debug, warn};

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricerError, PricerResult};
pub use inputs::{
    config::{ParsePolicy, PricerConfig},
    types::{BlackScholesInputs, MarketQuote, OptionValues, DAYS_PER_YEAR},
};
pub use models::{
    bs::{bs_call_price, bs_put_price, norm_cdf},
    utils::price_option,
    OptionType,
};

/// Convert a user-unit quote to model units and price both legs.
///
/// A quote with non-positive time or volatility is still priced; the result will
/// carry whatever non-finite values the formula produces, and a warning is logged.
///
/// # Example
///
/// ```rust
/// use bs_pricer::{price_quote, MarketQuote};
///
/// let values = price_quote(&MarketQuote::new(50.0, 55.0, 182.5, 30.0, 3.0));
/// assert!(values.call > 0.0 && values.put > values.call);
/// ```
pub fn price_quote(quote: &MarketQuote) -> OptionValues {
    let inputs = quote.to_model_inputs();
    debug!(
        spot = inputs.spot,
        strike = inputs.strike,
        years_to_exp = inputs.years_to_exp,
        volatility = inputs.volatility,
        rate = inputs.rate,
        "pricing in model units"
    );

    if !inputs.is_in_domain() {
        warn!(
            years_to_exp = inputs.years_to_exp,
            volatility = inputs.volatility,
            "time to expiration and volatility must be positive; result may be non-finite"
        );
    }

    inputs.values()
}
