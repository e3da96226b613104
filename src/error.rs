//! Error types for bs-pricer

use thiserror::Error;

/// Usage line shown whenever the argument count is wrong.
pub const USAGE: &str = "Error: Input [Stock Price ($)] [Strike Price ($)] \
[Days to Expiration (days)] [Volatility (%)] [Risk-Free Rate of Interest (%)]";

#[derive(Error, Debug)]
pub enum PricerError {
    /// Wrong number of positional arguments. Carries the parser's detail.
    #[error("{}", USAGE)]
    Usage(String),

    /// An argument that is not a number, reported only under strict parsing.
    #[error("Malformed numeric input for {name}: {value:?}")]
    MalformedNumericInput { name: &'static str, value: String },

    #[error("Invalid option type: {0}")]
    InvalidOptionType(String),
}

pub type PricerResult<T> = Result<T, PricerError>;

impl PricerError {
    pub fn usage(detail: impl Into<String>) -> Self {
        Self::Usage(detail.into())
    }
}
