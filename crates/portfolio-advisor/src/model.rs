//! Domain Models
//!
//! The fixed asset-class catalog and the risk tiers.
//! Uses `rust_decimal` for all percentages and money - never use f64 for money!

use std::borrow::Cow;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// An asset class with static return/risk assumptions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetClass {
    /// Display name (e.g., "US Stocks")
    pub name: Cow<'static, str>,

    /// Weight in the baseline allocation (percentage)
    pub base_weight_percent: Decimal,

    /// Assumed annual return (percentage)
    pub expected_return_percent: Decimal,

    /// Assumed annual volatility (percentage)
    pub risk_percent: Decimal,
}

impl AssetClass {
    /// Create a custom asset class
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        expected_return_percent: Decimal,
        risk_percent: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            base_weight_percent: Decimal::ZERO,
            expected_return_percent,
            risk_percent,
        }
    }

    const fn catalog(
        name: &'static str,
        base_weight_percent: Decimal,
        expected_return_percent: Decimal,
        risk_percent: Decimal,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            base_weight_percent,
            expected_return_percent,
            risk_percent,
        }
    }
}

pub const US_STOCKS: AssetClass = AssetClass::catalog("US Stocks", dec!(40), dec!(10.5), dec!(16));
pub const INTERNATIONAL_STOCKS: AssetClass =
    AssetClass::catalog("International Stocks", dec!(20), dec!(9.8), dec!(18));
pub const BONDS: AssetClass = AssetClass::catalog("Bonds", dec!(25), dec!(4.2), dec!(4));
pub const REAL_ESTATE: AssetClass = AssetClass::catalog("Real Estate", dec!(10), dec!(8.5), dec!(14));
pub const COMMODITIES: AssetClass = AssetClass::catalog("Commodities", dec!(5), dec!(6.8), dec!(22));

/// The catalog, in allocation order
pub static ASSET_CATALOG: [AssetClass; 5] = [
    US_STOCKS,
    INTERNATIONAL_STOCKS,
    BONDS,
    REAL_ESTATE,
    COMMODITIES,
];

/// Risk tier derived from a 1-10 tolerance score
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    /// Scores 1-3
    Conservative,
    /// Scores 4-7
    Moderate,
    /// Scores 8-10
    Aggressive,
}

impl RiskTier {
    pub const ALL: [Self; 3] = [Self::Conservative, Self::Moderate, Self::Aggressive];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Moderate => "Moderate",
            Self::Aggressive => "Aggressive",
        }
    }

    /// Inclusive score range mapped to this tier
    pub const fn score_range(self) -> (u8, u8) {
        match self {
            Self::Conservative => (1, 3),
            Self::Moderate => (4, 7),
            Self::Aggressive => (8, 10),
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
