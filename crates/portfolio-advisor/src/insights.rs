//! Dashboard Insights
//!
//! Narrative insights and alerts shown next to a recommendation.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::analytics::PortfolioMetrics;
use crate::model::RiskTier;
use crate::profile::{EmergencyFundStatus, FinancialProfile};
use crate::strategy::{AllocationPlan, classify_risk};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub impact: Impact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
}

/// A packaged fund offered alongside the computed plan
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundSuggestion {
    pub name: String,
    pub description: String,
    pub stocks_percent: u8,
    pub bonds_percent: u8,
    /// Typical annual return range (percentage)
    pub expected_return_low_percent: u8,
    pub expected_return_high_percent: u8,
    pub risk: RiskTier,
    /// Fit score out of 100
    pub score: u8,
}

/// Investment amount as a percentage of annual income.
///
/// `None` without income or when the ratio is not representable.
pub fn investment_ratio_percent(profile: &FinancialProfile) -> Option<Decimal> {
    profile
        .investment_amount
        .checked_div(profile.annual_income)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
}

/// Fund suggestions, best fit first.
///
/// Only the index fund tracks the risk score; its cut-offs (4 and 7) are
/// not the tier boundaries.
pub fn fund_suggestions(risk_score: i32) -> Vec<FundSuggestion> {
    let (stocks, bonds, low, high) = match risk_score {
        ..=4 => (30, 70, 6, 8),
        5..=7 => (50, 50, 8, 10),
        _ => (80, 20, 10, 12),
    };

    vec![
        FundSuggestion {
            name: "Diversified Index Fund Portfolio".into(),
            description: "Broad market exposure with low fees".into(),
            stocks_percent: stocks,
            bonds_percent: bonds,
            expected_return_low_percent: low,
            expected_return_high_percent: high,
            risk: classify_risk(risk_score),
            score: 95,
        },
        FundSuggestion {
            name: "Target-Date Fund".into(),
            description: "Automatically adjusts allocation as you age".into(),
            stocks_percent: 90,
            bonds_percent: 10,
            expected_return_low_percent: 9,
            expected_return_high_percent: 11,
            risk: RiskTier::Moderate,
            score: 88,
        },
        FundSuggestion {
            name: "ESG Focused Portfolio".into(),
            description: "Socially responsible investing approach".into(),
            stocks_percent: 60,
            bonds_percent: 40,
            expected_return_low_percent: 7,
            expected_return_high_percent: 9,
            risk: RiskTier::Moderate,
            score: 82,
        },
    ]
}

/// Key insights for a recommendation
pub fn key_insights(tier: RiskTier, plan: &AllocationPlan, metrics: &PortfolioMetrics) -> Vec<Insight> {
    let mix = plan.asset_mix();
    let expected = metrics
        .expected_return_percent
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);

    vec![
        Insight {
            title: "Portfolio Recommendation".into(),
            description: format!(
                "Based on your {} risk profile, we recommend {}% stocks, {}% bonds and {}% real assets.",
                tier.label().to_lowercase(),
                mix.equities.normalize(),
                mix.bonds.normalize(),
                mix.alternatives.normalize(),
            ),
            impact: Impact::High,
        },
        Insight {
            title: "Expected Returns".into(),
            description: format!(
                "Your portfolio targets about {expected}% a year, based on long-run average returns for each asset class."
            ),
            impact: Impact::Medium,
        },
        Insight {
            title: "Risk Management".into(),
            description: "Diversification across asset classes and regular rebalancing will help manage volatility.".into(),
            impact: Impact::High,
        },
        Insight {
            title: "Tax Optimization".into(),
            description: "Consider tax-advantaged accounts and tax-efficient fund selections to maximize after-tax returns.".into(),
            impact: Impact::Medium,
        },
    ]
}

/// Alerts for a profile
pub fn alerts(profile: &FinancialProfile) -> Vec<Alert> {
    let emergency = if profile.emergency_fund == Some(EmergencyFundStatus::None) {
        Alert {
            level: AlertLevel::Warning,
            title: "Emergency Fund".into(),
            message: "Build emergency fund before investing".into(),
        }
    } else {
        Alert {
            level: AlertLevel::Info,
            title: "Emergency Fund".into(),
            message: "Emergency fund status looks good".into(),
        }
    };

    vec![
        Alert {
            level: AlertLevel::Info,
            title: "Portfolio Rebalancing".into(),
            message: "Consider rebalancing your portfolio quarterly".into(),
        },
        emergency,
    ]
}
