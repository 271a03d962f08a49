//! Advisor Configuration

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{AdvisorError, Result};

/// Annual risk-free rate (percent) used for the Sharpe ratio
pub const DEFAULT_RISK_FREE_RATE: Decimal = dec!(2.5);

/// Accepted risk-free rates (percent)
pub const MIN_RISK_FREE_RATE: Decimal = dec!(-100);
pub const MAX_RISK_FREE_RATE: Decimal = dec!(1000);

/// Longest projection horizon offered to users
pub const DEFAULT_MAX_HORIZON_YEARS: u32 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Risk-free rate in percent
    pub risk_free_rate: Decimal,

    /// Upper bound for projection horizons, in years
    pub max_horizon_years: u32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            max_horizon_years: DEFAULT_MAX_HORIZON_YEARS,
        }
    }
}

impl AdvisorConfig {
    /// Read overrides from `ADVISOR_RISK_FREE_RATE` and `ADVISOR_MAX_HORIZON_YEARS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("ADVISOR_RISK_FREE_RATE") {
            config.risk_free_rate = Decimal::from_str(raw.trim()).map_err(|e| {
                AdvisorError::Config(format!("ADVISOR_RISK_FREE_RATE={raw:?}: {e}"))
            })?;
            if !(MIN_RISK_FREE_RATE..=MAX_RISK_FREE_RATE).contains(&config.risk_free_rate) {
                return Err(AdvisorError::Config(format!(
                    "ADVISOR_RISK_FREE_RATE={raw:?}: must be between {MIN_RISK_FREE_RATE} and {MAX_RISK_FREE_RATE}"
                )));
            }
        }

        if let Some(raw) = lookup("ADVISOR_MAX_HORIZON_YEARS") {
            config.max_horizon_years = raw.trim().parse().map_err(|e| {
                AdvisorError::Config(format!("ADVISOR_MAX_HORIZON_YEARS={raw:?}: {e}"))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AdvisorConfig::default());
        assert_eq!(config.risk_free_rate, dec!(2.5));
        assert_eq!(config.max_horizon_years, 30);
    }

    #[test]
    fn test_overrides() {
        let config = AdvisorConfig::from_lookup(|key| match key {
            "ADVISOR_RISK_FREE_RATE" => Some("4.25".into()),
            "ADVISOR_MAX_HORIZON_YEARS" => Some(" 40 ".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.risk_free_rate, dec!(4.25));
        assert_eq!(config.max_horizon_years, 40);
    }

    #[test]
    fn test_bad_value() {
        let err = AdvisorConfig::from_lookup(|key| {
            (key == "ADVISOR_RISK_FREE_RATE").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, AdvisorError::Config(_)));
    }

    #[test]
    fn test_risk_free_rate_bounds() {
        let with_rate = |rate: &'static str| {
            AdvisorConfig::from_lookup(move |key| {
                (key == "ADVISOR_RISK_FREE_RATE").then(|| rate.to_string())
            })
        };

        assert!(matches!(
            with_rate("79228162514264337593543950335"),
            Err(AdvisorError::Config(_))
        ));
        assert!(matches!(with_rate("-100.5"), Err(AdvisorError::Config(_))));
        assert_eq!(with_rate("1000").unwrap().risk_free_rate, dec!(1000));
        assert_eq!(with_rate("-100").unwrap().risk_free_rate, dec!(-100));
    }
}
