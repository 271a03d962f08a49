//! Allocation Selection
//!
//! Each risk tier maps to one fixed weight vector over the asset catalog.
//! The mapping is a step function of the risk score: moving from 3 to 4 or
//! from 7 to 8 switches the whole vector at once. There is no interpolation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};
use crate::model::{ASSET_CATALOG, AssetClass, BONDS, INTERNATIONAL_STOCKS, RiskTier, US_STOCKS};

/// Weights over `ASSET_CATALOG`, in catalog order
pub const fn tier_weights(tier: RiskTier) -> [Decimal; 5] {
    match tier {
        RiskTier::Conservative => [dec!(20), dec!(10), dec!(60), dec!(5), dec!(5)],
        RiskTier::Moderate => [dec!(35), dec!(25), dec!(30), dec!(7), dec!(3)],
        RiskTier::Aggressive => [dec!(50), dec!(30), dec!(10), dec!(7), dec!(3)],
    }
}

/// Bound on per-class return and risk assumptions (percentage).
/// Keeps every metric product well inside `Decimal` range.
const MAX_ASSUMPTION_PERCENT: Decimal = dec!(1000);

fn assumptions_in_range(asset: &AssetClass) -> bool {
    (dec!(-100)..=MAX_ASSUMPTION_PERCENT).contains(&asset.expected_return_percent)
        && (Decimal::ZERO..=MAX_ASSUMPTION_PERCENT).contains(&asset.risk_percent)
}

/// One asset class and its share of the portfolio
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub asset: AssetClass,

    /// Share of the portfolio (percentage)
    pub weight_percent: Decimal,
}

/// Dollar amount assigned to an asset class
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub asset: String,
    pub weight_percent: Decimal,
    /// `None` when the share is not representable
    pub amount: Option<Decimal>,
}

/// Weights grouped by broad asset type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMix {
    /// US and international stocks
    pub equities: Decimal,
    pub bonds: Decimal,
    /// Real estate, commodities and anything else
    pub alternatives: Decimal,
}

/// An ordered allocation whose weights sum to exactly 100
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AllocationEntry>", into = "Vec<AllocationEntry>")]
pub struct AllocationPlan {
    entries: Vec<AllocationEntry>,
}

impl AllocationPlan {
    /// Build a custom plan.
    ///
    /// Weights must be non-negative and sum to exactly 100.
    pub fn new(entries: Vec<AllocationEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(AdvisorError::InvalidAllocation("plan has no entries".into()));
        }

        if let Some(entry) = entries.iter().find(|e| e.weight_percent < Decimal::ZERO) {
            return Err(AdvisorError::InvalidAllocation(format!(
                "{} has negative weight {}",
                entry.asset.name, entry.weight_percent
            )));
        }

        if let Some(entry) = entries.iter().find(|e| !assumptions_in_range(&e.asset)) {
            return Err(AdvisorError::InvalidAllocation(format!(
                "{} has out-of-range assumptions (return {}%, risk {}%)",
                entry.asset.name, entry.asset.expected_return_percent, entry.asset.risk_percent
            )));
        }

        let total: Decimal = entries.iter().map(|e| e.weight_percent).sum();
        if total != dec!(100) {
            return Err(AdvisorError::InvalidAllocation(format!(
                "weights sum to {total}, expected 100"
            )));
        }

        Ok(Self { entries })
    }

    /// The recommended plan for a tier
    pub fn for_tier(tier: RiskTier) -> Self {
        Self::from_weights(tier_weights(tier))
    }

    /// The catalog's base weights (40/20/25/10/5)
    pub fn baseline() -> Self {
        Self::from_weights(ASSET_CATALOG.clone().map(|a| a.base_weight_percent))
    }

    fn from_weights(weights: [Decimal; 5]) -> Self {
        let entries = ASSET_CATALOG
            .iter()
            .zip(weights)
            .map(|(asset, weight_percent)| AllocationEntry {
                asset: asset.clone(),
                weight_percent,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    pub fn total_weight(&self) -> Decimal {
        self.entries.iter().map(|e| e.weight_percent).sum()
    }

    /// Weight of an asset class by name
    pub fn weight_of(&self, name: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|e| e.asset.name == name)
            .map(|e| e.weight_percent)
    }

    /// Split an investment amount across the plan.
    ///
    /// The weight is scaled to a fraction first so the product never
    /// exceeds `amount`.
    pub fn holdings(&self, amount: Decimal) -> Vec<Holding> {
        self.entries
            .iter()
            .map(|e| Holding {
                asset: e.asset.name.to_string(),
                weight_percent: e.weight_percent,
                amount: e
                    .weight_percent
                    .checked_div(dec!(100))
                    .and_then(|share| amount.checked_mul(share)),
            })
            .collect()
    }

    /// Group weights into equities, bonds and alternatives
    pub fn asset_mix(&self) -> AssetMix {
        let mut mix = AssetMix {
            equities: Decimal::ZERO,
            bonds: Decimal::ZERO,
            alternatives: Decimal::ZERO,
        };

        for entry in &self.entries {
            let name = &*entry.asset.name;
            if name == US_STOCKS.name || name == INTERNATIONAL_STOCKS.name {
                mix.equities += entry.weight_percent;
            } else if name == BONDS.name {
                mix.bonds += entry.weight_percent;
            } else {
                mix.alternatives += entry.weight_percent;
            }
        }

        mix
    }
}

impl TryFrom<Vec<AllocationEntry>> for AllocationPlan {
    type Error = AdvisorError;

    fn try_from(entries: Vec<AllocationEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<AllocationPlan> for Vec<AllocationEntry> {
    fn from(plan: AllocationPlan) -> Self {
        plan.entries
    }
}

/// Select the allocation for a tier
pub fn select_allocation(tier: RiskTier) -> AllocationPlan {
    AllocationPlan::for_tier(tier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::classify_risk;

    #[test]
    fn test_every_tier_sums_to_100() {
        for tier in RiskTier::ALL {
            let plan = select_allocation(tier);
            assert_eq!(plan.total_weight(), dec!(100), "{tier}");
            assert_eq!(plan.entries().len(), ASSET_CATALOG.len());
        }
        assert_eq!(AllocationPlan::baseline().total_weight(), dec!(100));
    }

    #[test]
    fn test_tier_tables() {
        let conservative = select_allocation(RiskTier::Conservative);
        assert_eq!(conservative.weight_of("Bonds"), Some(dec!(60)));
        assert_eq!(conservative.weight_of("US Stocks"), Some(dec!(20)));

        let aggressive = select_allocation(RiskTier::Aggressive);
        assert_eq!(aggressive.weight_of("US Stocks"), Some(dec!(50)));
        assert_eq!(aggressive.weight_of("Bonds"), Some(dec!(10)));
        assert_eq!(aggressive.weight_of("Crypto"), None);
    }

    #[test]
    fn test_step_discontinuity_at_tier_boundaries() {
        // Adjacent scores on either side of a boundary give different plans...
        assert_ne!(
            select_allocation(classify_risk(3)),
            select_allocation(classify_risk(4))
        );
        assert_ne!(
            select_allocation(classify_risk(7)),
            select_allocation(classify_risk(8))
        );
        // ...while scores inside a tier give identical plans
        assert_eq!(
            select_allocation(classify_risk(4)),
            select_allocation(classify_risk(7))
        );

        let bonds_at_3 = select_allocation(classify_risk(3)).weight_of("Bonds").unwrap();
        let bonds_at_4 = select_allocation(classify_risk(4)).weight_of("Bonds").unwrap();
        assert_eq!(bonds_at_3 - bonds_at_4, dec!(30));
    }

    #[test]
    fn test_holdings_split_amount() {
        let plan = select_allocation(RiskTier::Moderate);
        let holdings = plan.holdings(dec!(50000));

        assert_eq!(holdings[0].asset, "US Stocks");
        assert_eq!(holdings[0].amount, Some(dec!(17500)));
        let total: Decimal = holdings.iter().filter_map(|h| h.amount).sum();
        assert_eq!(total, dec!(50000));
    }

    #[test]
    fn test_holdings_near_decimal_max() {
        let holdings = select_allocation(RiskTier::Moderate).holdings(Decimal::MAX);
        assert!(holdings.iter().all(|h| h.amount.is_some()));

        let amount = dec!(6000000000000000000000000000);
        let holdings = select_allocation(RiskTier::Aggressive).holdings(amount);
        assert_eq!(holdings[0].amount, Some(dec!(3000000000000000000000000000)));
        let total: Decimal = holdings.iter().filter_map(|h| h.amount).sum();
        assert_eq!(total, amount);
    }

    #[test]
    fn test_asset_mix() {
        let mix = select_allocation(RiskTier::Aggressive).asset_mix();
        assert_eq!(mix.equities, dec!(80));
        assert_eq!(mix.bonds, dec!(10));
        assert_eq!(mix.alternatives, dec!(10));
    }

    #[test]
    fn test_custom_plan_validation() {
        let cash = AssetClass::new("Cash", dec!(2.5), Decimal::ZERO);

        let ok = AllocationPlan::new(vec![AllocationEntry {
            asset: cash.clone(),
            weight_percent: dec!(100),
        }]);
        assert!(ok.is_ok());

        let short = AllocationPlan::new(vec![AllocationEntry {
            asset: cash.clone(),
            weight_percent: dec!(90),
        }]);
        assert!(matches!(short, Err(AdvisorError::InvalidAllocation(_))));

        let negative = AllocationPlan::new(vec![
            AllocationEntry { asset: cash.clone(), weight_percent: dec!(110) },
            AllocationEntry { asset: cash, weight_percent: dec!(-10) },
        ]);
        assert!(matches!(negative, Err(AdvisorError::InvalidAllocation(_))));

        assert!(AllocationPlan::new(Vec::new()).is_err());

        let wild = AllocationPlan::new(vec![AllocationEntry {
            asset: AssetClass::new("Lottery", dec!(5000), dec!(90)),
            weight_percent: dec!(100),
        }]);
        assert!(matches!(wild, Err(AdvisorError::InvalidAllocation(_))));
    }

    #[test]
    fn test_deserialize_validates_weights() {
        let plan = select_allocation(RiskTier::Conservative);
        let json = serde_json::to_string(&plan).unwrap();
        let back: AllocationPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);

        let bad = r#"[{"asset":{"name":"Cash","base_weight_percent":"0","expected_return_percent":"2","risk_percent":"0"},"weight_percent":"50"}]"#;
        assert!(serde_json::from_str::<AllocationPlan>(bad).is_err());
    }
}
