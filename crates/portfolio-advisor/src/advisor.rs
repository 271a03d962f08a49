//! Advisory Pipeline
//!
//! classify → select → metrics → projection, run once per request.
//! Inputs are validated before anything is computed; computation anomalies
//! come back as `None` values plus warnings so the pipeline always finishes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::{PortfolioMetrics, Projection, compute_metrics};
use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, Result};
use crate::insights::{self, Alert, FundSuggestion, Insight};
use crate::model::RiskTier;
use crate::profile::{FinancialProfile, TimeHorizon};
use crate::strategy::{AllocationPlan, Holding, RiskAssessment, select_allocation};

/// Non-fatal conditions noticed while building a result
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdvisoryWarning {
    /// Risk tolerance was outside 1-10 and was clamped
    RiskToleranceClamped { submitted: i32, applied: i32 },

    /// The projected value could not be represented
    ProjectionUnavailable { horizon_years: u32 },

    /// One or more holding amounts could not be represented
    HoldingsUnavailable,

    /// Investment amount relative to income could not be represented
    InvestmentRatioUnavailable,

    /// The chosen horizon category and the projection years disagree.
    /// Both are used as given.
    HorizonMismatch { category: TimeHorizon, years: u32 },
}

/// Allocation, metrics and projection for one set of inputs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioRecommendation {
    pub risk: RiskAssessment,
    pub plan: AllocationPlan,
    pub metrics: PortfolioMetrics,
    pub projection: Projection,
    pub holdings: Vec<Holding>,
    pub warnings: Vec<AdvisoryWarning>,
}

impl PortfolioRecommendation {
    pub const fn tier(&self) -> RiskTier {
        self.risk.tier
    }
}

/// Headline figures for the summary cards
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub investment_amount: Decimal,
    pub risk_profile: String,
    pub time_horizon: String,
    pub primary_goal: String,
}

/// Full dashboard result for a submitted profile
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub summary: ProfileSummary,
    pub recommendation: PortfolioRecommendation,
    pub investment_ratio_percent: Option<Decimal>,
    pub insights: Vec<Insight>,
    pub fund_suggestions: Vec<FundSuggestion>,
    pub alerts: Vec<Alert>,
    pub warnings: Vec<AdvisoryWarning>,
}

/// Stateless advisor; safe to share across threads
#[derive(Clone, Debug, Default)]
pub struct PortfolioAdvisor {
    config: AdvisorConfig,
}

impl PortfolioAdvisor {
    pub const fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Recommend an allocation for an amount, risk score and horizon
    pub fn recommend(
        &self,
        investment_amount: Decimal,
        risk_score: i32,
        horizon_years: u32,
    ) -> Result<PortfolioRecommendation> {
        if investment_amount < Decimal::ZERO {
            return Err(AdvisorError::validation("investment_amount", "must not be negative"));
        }
        if horizon_years > self.config.max_horizon_years {
            return Err(AdvisorError::validation(
                "horizon_years",
                format!("must be at most {}", self.config.max_horizon_years),
            ));
        }

        let mut warnings = Vec::new();

        let risk = RiskAssessment::new(risk_score);
        if risk.was_clamped() {
            warnings.push(AdvisoryWarning::RiskToleranceClamped {
                submitted: risk.submitted,
                applied: risk.applied,
            });
        }

        let plan = select_allocation(risk.tier);
        let metrics = compute_metrics(&plan, self.config.risk_free_rate);
        let projection = Projection::compute(
            investment_amount,
            metrics.expected_return_percent,
            horizon_years,
        )?;
        if projection.projected_value.is_none() {
            warnings.push(AdvisoryWarning::ProjectionUnavailable { horizon_years });
        }

        let holdings = plan.holdings(investment_amount);
        if holdings.iter().any(|h| h.amount.is_none()) {
            tracing::warn!(%investment_amount, "holding amounts unavailable");
            warnings.push(AdvisoryWarning::HoldingsUnavailable);
        }

        tracing::debug!(
            tier = %risk.tier,
            expected_return = %metrics.expected_return_percent,
            risk = %metrics.risk_percent,
            horizon_years,
            "built recommendation"
        );

        Ok(PortfolioRecommendation {
            risk,
            holdings,
            plan,
            metrics,
            projection,
            warnings,
        })
    }

    /// Build the dashboard report for a validated profile.
    ///
    /// `horizon_years` is the projection length and is independent of the
    /// profile's horizon category.
    pub fn analyze(&self, profile: &FinancialProfile, horizon_years: u32) -> Result<AdvisoryReport> {
        let recommendation = self.recommend(
            profile.investment_amount,
            profile.risk_tolerance,
            horizon_years,
        )?;

        let mut warnings = recommendation.warnings.clone();
        if let Some(category) = profile.time_horizon
            && !category.contains_years(horizon_years)
        {
            tracing::info!(?category, horizon_years, "horizon category and years disagree");
            warnings.push(AdvisoryWarning::HorizonMismatch {
                category,
                years: horizon_years,
            });
        }

        let investment_ratio_percent = insights::investment_ratio_percent(profile);
        if investment_ratio_percent.is_none() && !profile.annual_income.is_zero() {
            tracing::warn!(
                investment_amount = %profile.investment_amount,
                annual_income = %profile.annual_income,
                "investment ratio unavailable"
            );
            warnings.push(AdvisoryWarning::InvestmentRatioUnavailable);
        }

        let summary = ProfileSummary {
            investment_amount: profile.investment_amount,
            risk_profile: recommendation.tier().label().into(),
            time_horizon: profile
                .time_horizon
                .map_or("Not specified", TimeHorizon::label)
                .into(),
            primary_goal: profile.primary_goal(),
        };

        Ok(AdvisoryReport {
            summary,
            investment_ratio_percent,
            insights: insights::key_insights(
                recommendation.tier(),
                &recommendation.plan,
                &recommendation.metrics,
            ),
            fund_suggestions: insights::fund_suggestions(recommendation.risk.applied),
            alerts: insights::alerts(profile),
            recommendation,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::project_value;
    use crate::profile::ProfileSubmission;
    use rust_decimal_macros::dec;

    fn profile(risk: i32, horizon: &str) -> FinancialProfile {
        FinancialProfile::try_from(ProfileSubmission {
            age: Some("40".into()),
            annual_income: Some("100000".into()),
            investment_amount: Some("50000".into()),
            time_horizon: Some(horizon.into()),
            risk_tolerance: Some(risk),
            goals: "Retirement".into(),
            emergency_fund: Some("none".into()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_recommend_pipeline() {
        let advisor = PortfolioAdvisor::default();
        let rec = advisor.recommend(dec!(50000), 6, 10).unwrap();

        assert_eq!(rec.tier(), RiskTier::Moderate);
        assert_eq!(rec.plan, select_allocation(RiskTier::Moderate));
        assert_eq!(rec.metrics.expected_return_percent, dec!(8.184));
        assert!(rec.warnings.is_empty());

        // Projection uses the full-precision return, not the display value
        let expected = project_value(dec!(50000), dec!(8.184), 10).unwrap();
        assert_eq!(rec.projection.projected_value, Some(expected));
        assert_ne!(
            rec.projection.projected_value,
            Some(project_value(dec!(50000), dec!(8.2), 10).unwrap())
        );

        let total: Decimal = rec.holdings.iter().filter_map(|h| h.amount).sum();
        assert_eq!(total, dec!(50000));
    }

    #[test]
    fn test_clamped_risk_warns() {
        let advisor = PortfolioAdvisor::default();
        let rec = advisor.recommend(dec!(1000), 42, 5).unwrap();
        assert_eq!(rec.tier(), RiskTier::Aggressive);
        assert_eq!(
            rec.warnings,
            [AdvisoryWarning::RiskToleranceClamped { submitted: 42, applied: 10 }]
        );
    }

    #[test]
    fn test_invalid_inputs_rejected_before_computation() {
        let advisor = PortfolioAdvisor::default();
        let err = advisor.recommend(dec!(-5), 5, 5).unwrap_err();
        assert_eq!(err.field(), Some("investment_amount"));

        let err = advisor.recommend(dec!(5), 5, 31).unwrap_err();
        assert_eq!(err.field(), Some("horizon_years"));
    }

    #[test]
    fn test_zero_horizon() {
        let rec = PortfolioAdvisor::default().recommend(dec!(1000), 2, 0).unwrap();
        assert_eq!(rec.projection.projected_value, Some(dec!(1000)));
    }

    #[test]
    fn test_custom_risk_free_rate() {
        let advisor = PortfolioAdvisor::new(AdvisorConfig {
            risk_free_rate: dec!(8.184),
            ..AdvisorConfig::default()
        });
        let rec = advisor.recommend(dec!(1000), 5, 5).unwrap();
        assert_eq!(rec.metrics.sharpe_ratio, Some(Decimal::ZERO));
    }

    #[test]
    fn test_analyze_report() {
        let advisor = PortfolioAdvisor::default();
        let report = advisor.analyze(&profile(2, "long"), 20).unwrap();

        assert_eq!(report.summary.risk_profile, "Conservative");
        assert_eq!(report.summary.time_horizon, "Long-term (7+ years)");
        assert_eq!(report.summary.primary_goal, "Retirement");
        assert_eq!(report.investment_ratio_percent, Some(dec!(50)));
        assert_eq!(report.insights.len(), 4);
        assert_eq!(report.alerts[1].message, "Build emergency fund before investing");
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_horizon_mismatch_is_reported_not_reconciled() {
        let advisor = PortfolioAdvisor::default();
        let report = advisor.analyze(&profile(5, "short"), 25).unwrap();

        assert_eq!(report.recommendation.projection.horizon_years, 25);
        assert_eq!(
            report.warnings,
            [AdvisoryWarning::HorizonMismatch { category: TimeHorizon::Short, years: 25 }]
        );
    }

    fn extreme_profile(income: &str, amount: &str) -> FinancialProfile {
        FinancialProfile::try_from(ProfileSubmission {
            age: Some("50".into()),
            annual_income: Some(income.into()),
            investment_amount: Some(amount.into()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_huge_amount_completes_without_projection() {
        let amount = dec!(6000000000000000000000000000);
        let rec = PortfolioAdvisor::default().recommend(amount, 9, 30).unwrap();

        assert_eq!(rec.projection.projected_value, None);
        assert_eq!(rec.projection.gain(), None);
        assert_eq!(
            rec.warnings,
            [AdvisoryWarning::ProjectionUnavailable { horizon_years: 30 }]
        );

        assert!(rec.holdings.iter().all(|h| h.amount.is_some()));
        let total: Decimal = rec.holdings.iter().filter_map(|h| h.amount).sum();
        assert_eq!(total, amount);
    }

    #[test]
    fn test_max_amount_at_zero_horizon() {
        let rec = PortfolioAdvisor::default().recommend(Decimal::MAX, 5, 0).unwrap();
        assert_eq!(rec.projection.projected_value, Some(Decimal::MAX));
        assert!(rec.warnings.is_empty());
    }

    #[test]
    fn test_unrepresentable_ratio_is_reported() {
        let advisor = PortfolioAdvisor::default();

        // Division overflows
        let report = advisor
            .analyze(&extreme_profile("0.0000001", "100000000000000000000000000"), 5)
            .unwrap();
        assert_eq!(report.investment_ratio_percent, None);
        assert_eq!(report.warnings, [AdvisoryWarning::InvestmentRatioUnavailable]);

        // Scaling to a percentage overflows
        let report = advisor
            .analyze(&extreme_profile("1", "1000000000000000000000000000"), 5)
            .unwrap();
        assert_eq!(report.investment_ratio_percent, None);
        assert!(report.warnings.contains(&AdvisoryWarning::InvestmentRatioUnavailable));

        // No income is not an anomaly
        let report = advisor.analyze(&extreme_profile("0", "1000"), 5).unwrap();
        assert_eq!(report.investment_ratio_percent, None);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_report_fund_suggestions_follow_applied_risk() {
        let advisor = PortfolioAdvisor::default();
        let report = advisor.analyze(&profile(15, "long"), 20).unwrap();

        assert_eq!(report.fund_suggestions.len(), 3);
        assert_eq!(report.fund_suggestions[0].stocks_percent, 80);
        assert_eq!(report.fund_suggestions[0].risk, RiskTier::Aggressive);
    }
}
