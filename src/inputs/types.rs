use crate::models::bs::{bs_call_price, bs_put_price};

/// Calendar days per year used to turn days-to-expiration into years.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Divisor that turns a percentage into a decimal fraction.
pub const PERCENT: f64 = 100.0;

/// A quote as a user enters it: prices in currency units, time in days,
/// volatility and rate in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketQuote {
    /// Spot price of the underlying ($)
    pub stock_price: f64,
    /// Exercise price ($)
    pub strike_price: f64,
    /// Calendar days until expiration
    pub days_to_expiration: f64,
    /// Annualized volatility in percent (e.g. 20 for 20%)
    pub volatility_pct: f64,
    /// Continuously compounded annual risk-free rate in percent
    pub risk_free_rate_pct: f64,
}

impl MarketQuote {
    pub fn new(
        stock_price: f64,
        strike_price: f64,
        days_to_expiration: f64,
        volatility_pct: f64,
        risk_free_rate_pct: f64,
    ) -> Self {
        Self {
            stock_price,
            strike_price,
            days_to_expiration,
            volatility_pct,
            risk_free_rate_pct,
        }
    }

    /// Convert to model units. This is the only place days and percentages
    /// are rescaled.
    pub fn to_model_inputs(&self) -> BlackScholesInputs {
        BlackScholesInputs {
            spot: self.stock_price,
            strike: self.strike_price,
            years_to_exp: self.days_to_expiration / DAYS_PER_YEAR,
            volatility: self.volatility_pct / PERCENT,
            rate: self.risk_free_rate_pct / PERCENT,
        }
    }
}

impl From<&MarketQuote> for BlackScholesInputs {
    fn from(quote: &MarketQuote) -> Self {
        quote.to_model_inputs()
    }
}

impl From<MarketQuote> for BlackScholesInputs {
    fn from(quote: MarketQuote) -> Self {
        quote.to_model_inputs()
    }
}

/// Inputs to the closed-form model: time in years, volatility and rate as
/// decimal fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesInputs {
    pub spot: f64,
    pub strike: f64,
    pub years_to_exp: f64,
    pub volatility: f64,
    pub rate: f64,
}

impl BlackScholesInputs {
    pub fn new(spot: f64, strike: f64, years_to_exp: f64, volatility: f64, rate: f64) -> Self {
        Self {
            spot,
            strike,
            years_to_exp,
            volatility,
            rate,
        }
    }

    /// True when T > 0 and σ > 0. Pricing does not consult this; outside the
    /// domain the formulas yield inf/NaN.
    pub fn is_in_domain(&self) -> bool {
        self.years_to_exp > 0.0 && self.volatility > 0.0
    }

    pub fn call_price(&self) -> f64 {
        bs_call_price(
            self.spot,
            self.strike,
            self.years_to_exp,
            self.volatility,
            self.rate,
        )
    }

    pub fn put_price(&self) -> f64 {
        bs_put_price(
            self.spot,
            self.strike,
            self.years_to_exp,
            self.volatility,
            self.rate,
        )
    }

    pub fn values(&self) -> OptionValues {
        OptionValues {
            call: self.call_price(),
            put: self.put_price(),
        }
    }
}

/// Call and put values for the same contract terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionValues {
    pub call: f64,
    pub put: f64,
}
