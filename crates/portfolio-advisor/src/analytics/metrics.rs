//! Portfolio Metrics
//!
//! Expected return, risk and Sharpe ratio for an allocation plan.
//!
//! Risk is `sqrt(Σ (w_i/100)² · σ_i²)`. This treats every pair of asset
//! classes as uncorrelated, so it is not a covariance-based portfolio
//! variance; it understates risk for positively correlated classes.
//! Supplying a covariance matrix would be a contract change, not a fix.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::strategy::AllocationPlan;

/// Metrics for one allocation plan, at full precision
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Weighted expected annual return (percentage)
    pub expected_return_percent: Decimal,

    /// Zero-correlation volatility estimate (percentage)
    pub risk_percent: Decimal,

    /// `(expected return - risk-free rate) / risk`; `None` when risk is zero
    /// or the ratio is not representable
    pub sharpe_ratio: Option<Decimal>,

    /// Risk-free rate used for the Sharpe ratio (percentage)
    pub risk_free_rate: Decimal,
}

impl PortfolioMetrics {
    /// Copy rounded for display: percentages to 1 dp, Sharpe ratio to 2 dp.
    ///
    /// Never feed the rounded copy back into projections.
    pub fn rounded(&self) -> Self {
        let round = |value: Decimal, dp: u32| {
            value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        };

        Self {
            expected_return_percent: round(self.expected_return_percent, 1),
            risk_percent: round(self.risk_percent, 1),
            sharpe_ratio: self.sharpe_ratio.map(|s| round(s, 2)),
            risk_free_rate: self.risk_free_rate,
        }
    }
}

impl std::fmt::Display for PortfolioMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = self.rounded();
        write!(
            f,
            "Expected return {}% | Risk {}% | Sharpe ",
            shown.expected_return_percent, shown.risk_percent
        )?;
        match shown.sharpe_ratio {
            Some(sharpe) => write!(f, "{sharpe}"),
            None => write!(f, "n/a"),
        }
    }
}

/// Compute metrics for a plan
pub fn compute_metrics(plan: &AllocationPlan, risk_free_rate: Decimal) -> PortfolioMetrics {
    let mut expected_return = Decimal::ZERO;
    let mut variance = Decimal::ZERO;

    for entry in plan.entries() {
        let weight = entry.weight_percent / dec!(100);
        expected_return += weight * entry.asset.expected_return_percent;

        let weighted_risk = weight * entry.asset.risk_percent;
        variance += weighted_risk * weighted_risk;
    }

    // Sum of squares, so sqrt always succeeds
    let risk = variance.sqrt().unwrap_or(Decimal::ZERO);

    let sharpe_ratio = if risk.is_zero() {
        tracing::debug!("portfolio risk is zero, Sharpe ratio undefined");
        None
    } else {
        expected_return
            .checked_sub(risk_free_rate)
            .and_then(|excess| excess.checked_div(risk))
    };

    PortfolioMetrics {
        expected_return_percent: expected_return,
        risk_percent: risk,
        sharpe_ratio,
        risk_free_rate,
    }
}
