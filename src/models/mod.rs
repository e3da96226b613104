pub mod bs;

use std::fmt;
use std::str::FromStr;

use crate::error::PricerError;

/// Exercise right of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    Call,
    Put,
}

impl FromStr for OptionType {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricerError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.write_str("call"),
            OptionType::Put => f.write_str("put"),
        }
    }
}

/// Utility functions for option pricing
pub mod utils {
    use super::bs::{bs_call_price, bs_put_price};
    use super::OptionType;
    use crate::inputs::types::BlackScholesInputs;

    /// Price one leg from inputs that are already in model units.
    pub fn price_option(option_type: OptionType, inputs: &BlackScholesInputs) -> f64 {
        let BlackScholesInputs {
            spot,
            strike,
            years_to_exp,
            volatility,
            rate,
        } = *inputs;

        match option_type {
            OptionType::Call => bs_call_price(spot, strike, years_to_exp, volatility, rate),
            OptionType::Put => bs_put_price(spot, strike, years_to_exp, volatility, rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type_parsing() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);
        assert!("straddle".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_option_type_display_round_trips() {
        for ot in [OptionType::Call, OptionType::Put] {
            assert_eq!(ot.to_string().parse::<OptionType>().unwrap(), ot);
        }
    }
}
