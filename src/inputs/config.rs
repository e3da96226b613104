use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// How argument strings that are not numbers are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// strtod-style: use the longest numeric prefix, 0.0 when there is none.
    #[default]
    Lenient,
    /// Reject anything that is not a complete, finite number
    /// (`nan`, `inf` and overflowing literals included).
    Strict,
}

/// Front-end configuration. Pricing itself has no tunables.
#[derive(Debug, Clone, Deserialize)]
pub struct PricerConfig {
    #[serde(default)]
    pub parse_policy: ParsePolicy,

    /// Digits after the decimal point for option values
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,

    /// Whether to print the parsed inputs before the option values
    #[serde(default = "default_echo_inputs")]
    pub echo_inputs: bool,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            parse_policy: ParsePolicy::default(),
            decimal_places: default_decimal_places(),
            echo_inputs: default_echo_inputs(),
        }
    }
}

impl PricerConfig {
    /// Reject malformed numbers instead of coercing them to zero
    pub fn strict() -> Self {
        Self {
            parse_policy: ParsePolicy::Strict,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("Failed to parse pricer configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }
}

fn default_decimal_places() -> usize {
    2
}

fn default_echo_inputs() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = PricerConfig::from_toml_str("").unwrap();
        assert_eq!(config.parse_policy, ParsePolicy::Lenient);
        assert_eq!(config.decimal_places, 2);
        assert!(config.echo_inputs);
    }

    #[test]
    fn test_toml_overrides() {
        let config = PricerConfig::from_toml_str(
            "parse_policy = \"strict\"\ndecimal_places = 4\necho_inputs = false\n",
        )
        .unwrap();
        assert_eq!(config.parse_policy, ParsePolicy::Strict);
        assert_eq!(config.decimal_places, 4);
        assert!(!config.echo_inputs);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!(PricerConfig::from_toml_str("parse_policy = \"fuzzy\"").is_err());
    }
}
