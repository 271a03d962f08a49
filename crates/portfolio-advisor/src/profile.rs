//! Financial Profile
//!
//! The raw form submission and its validated, immutable counterpart.
//! Required numeric fields are never coerced: a missing or non-numeric
//! value is a `Validation` error naming the field.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// Default risk tolerance when the form leaves the slider untouched
pub const DEFAULT_RISK_TOLERANCE: i32 = 5;

/// A form value that may arrive as text or as a JSON number
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(serde_json::Number),
    Text(String),
}

impl FormValue {
    fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Profile exactly as submitted by the form
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSubmission {
    pub age: Option<FormValue>,
    pub annual_income: Option<FormValue>,
    pub investment_amount: Option<FormValue>,
    pub time_horizon: Option<String>,
    pub risk_tolerance: Option<i32>,
    pub goals: String,
    pub experience: Option<String>,
    pub emergency_fund: Option<String>,
    pub debt_status: Option<String>,
    pub current_portfolio: String,
}

/// Categorical investment horizon chosen on the form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeHorizon {
    Short,
    Medium,
    Long,
}

impl TimeHorizon {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "Short-term (1-3 years)",
            Self::Medium => "Medium-term (3-7 years)",
            Self::Long => "Long-term (7+ years)",
        }
    }

    /// Year range the category describes; `None` upper bound is open
    pub const fn year_range(self) -> (u32, Option<u32>) {
        match self {
            Self::Short => (1, Some(3)),
            Self::Medium => (3, Some(7)),
            Self::Long => (7, None),
        }
    }

    pub fn contains_years(self, years: u32) -> bool {
        let (low, high) = self.year_range();
        years >= low && high.is_none_or(|high| years <= high)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmergencyFundStatus {
    None,
    Partial,
    Adequate,
    Excellent,
}

impl EmergencyFundStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No emergency fund",
            Self::Partial => "Partial (1-3 months)",
            Self::Adequate => "Adequate (3-6 months)",
            Self::Excellent => "Excellent (6+ months)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    None,
    Low,
    Moderate,
    High,
}

impl DebtStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No debt",
            Self::Low => "Low debt (manageable)",
            Self::Moderate => "Moderate debt",
            Self::High => "High debt (concerning)",
        }
    }
}

/// Validated profile. Built once per submission and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub age: u32,
    pub annual_income: Decimal,
    pub investment_amount: Decimal,
    pub time_horizon: Option<TimeHorizon>,
    /// As submitted; may lie outside 1-10
    pub risk_tolerance: i32,
    pub goals: String,
    pub experience: Option<Experience>,
    pub emergency_fund: Option<EmergencyFundStatus>,
    pub debt_status: Option<DebtStatus>,
    pub current_portfolio: String,
}

impl FinancialProfile {
    /// First listed goal, shortened for summary cards
    pub fn primary_goal(&self) -> String {
        let first = self.goals.split(',').next().unwrap_or_default().trim();
        if first.is_empty() {
            return "Wealth Building".into();
        }

        if first.chars().count() > 20 {
            let short: String = first.chars().take(20).collect();
            format!("{}...", short.trim_end())
        } else {
            first.to_string()
        }
    }
}

impl TryFrom<ProfileSubmission> for FinancialProfile {
    type Error = AdvisorError;

    fn try_from(form: ProfileSubmission) -> Result<Self> {
        let age = parse_whole("age", form.age.as_ref())?;
        let annual_income = parse_amount("annual_income", form.annual_income.as_ref())?;
        let investment_amount = parse_amount("investment_amount", form.investment_amount.as_ref())?;

        Ok(Self {
            age,
            annual_income,
            investment_amount,
            time_horizon: parse_choice(
                "time_horizon",
                form.time_horizon.as_deref(),
                &[
                    ("short", TimeHorizon::Short),
                    ("medium", TimeHorizon::Medium),
                    ("long", TimeHorizon::Long),
                ],
            )?,
            risk_tolerance: form.risk_tolerance.unwrap_or(DEFAULT_RISK_TOLERANCE),
            goals: form.goals.trim().to_string(),
            experience: parse_choice(
                "experience",
                form.experience.as_deref(),
                &[
                    ("beginner", Experience::Beginner),
                    ("intermediate", Experience::Intermediate),
                    ("advanced", Experience::Advanced),
                ],
            )?,
            emergency_fund: parse_choice(
                "emergency_fund",
                form.emergency_fund.as_deref(),
                &[
                    ("none", EmergencyFundStatus::None),
                    ("partial", EmergencyFundStatus::Partial),
                    ("adequate", EmergencyFundStatus::Adequate),
                    ("excellent", EmergencyFundStatus::Excellent),
                ],
            )?,
            debt_status: parse_choice(
                "debt_status",
                form.debt_status.as_deref(),
                &[
                    ("none", DebtStatus::None),
                    ("low", DebtStatus::Low),
                    ("moderate", DebtStatus::Moderate),
                    ("high", DebtStatus::High),
                ],
            )?,
            current_portfolio: form.current_portfolio,
        })
    }
}

fn required_text(field: &'static str, value: Option<&FormValue>) -> Result<String> {
    value
        .map(FormValue::as_text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AdvisorError::validation(field, "is required"))
}

fn parse_amount(field: &'static str, value: Option<&FormValue>) -> Result<Decimal> {
    let text = required_text(field, value)?;
    let amount = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| AdvisorError::validation(field, "must be a number"))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AdvisorError::validation(field, "must not be negative"));
    }
    Ok(amount)
}

fn parse_whole(field: &'static str, value: Option<&FormValue>) -> Result<u32> {
    let amount = parse_amount(field, value)?;
    if !amount.fract().is_zero() {
        return Err(AdvisorError::validation(field, "must be a whole number"));
    }
    amount
        .to_u32()
        .ok_or_else(|| AdvisorError::validation(field, "is too large"))
}

fn parse_choice<T: Copy>(
    field: &'static str,
    value: Option<&str>,
    choices: &[(&str, T)],
) -> Result<Option<T>> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let wanted = raw.to_lowercase();

    choices
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, choice)| Some(*choice))
        .ok_or_else(|| {
            let names: Vec<_> = choices.iter().map(|(name, _)| *name).collect();
            AdvisorError::validation(field, format!("must be one of {}", names.join(", ")))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn submission() -> ProfileSubmission {
        ProfileSubmission {
            age: Some("35".into()),
            annual_income: Some("85000".into()),
            investment_amount: Some("25000".into()),
            time_horizon: Some("long".into()),
            risk_tolerance: Some(6),
            goals: "Retirement, house deposit".into(),
            experience: Some("intermediate".into()),
            emergency_fund: Some("adequate".into()),
            debt_status: Some("low".into()),
            current_portfolio: String::new(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let profile = FinancialProfile::try_from(submission()).unwrap();
        assert_eq!(profile.age, 35);
        assert_eq!(profile.annual_income, dec!(85000));
        assert_eq!(profile.investment_amount, dec!(25000));
        assert_eq!(profile.time_horizon, Some(TimeHorizon::Long));
        assert_eq!(profile.experience, Some(Experience::Intermediate));
        assert_eq!(profile.emergency_fund, Some(EmergencyFundStatus::Adequate));
        assert_eq!(profile.debt_status, Some(DebtStatus::Low));
        assert_eq!(profile.primary_goal(), "Retirement");
    }

    #[test]
    fn test_missing_required_fields() {
        for field in ["age", "annual_income", "investment_amount"] {
            let mut form = submission();
            match field {
                "age" => form.age = None,
                "annual_income" => form.annual_income = Some("   ".into()),
                _ => form.investment_amount = None,
            }
            let err = FinancialProfile::try_from(form).unwrap_err();
            assert_eq!(err.field(), Some(field));
            assert!(err.to_string().contains("is required"), "{err}");
        }
    }

    #[test]
    fn test_non_numeric_not_coerced() {
        let mut form = submission();
        form.annual_income = Some("lots".into());
        let err = FinancialProfile::try_from(form).unwrap_err();
        assert_eq!(err.field(), Some("annual_income"));
        assert!(err.to_string().contains("must be a number"));
    }

    #[test]
    fn test_negative_and_fractional() {
        let mut form = submission();
        form.investment_amount = Some("-500".into());
        let err = FinancialProfile::try_from(form).unwrap_err();
        assert_eq!(err.field(), Some("investment_amount"));

        let mut form = submission();
        form.age = Some("35.5".into());
        let err = FinancialProfile::try_from(form).unwrap_err();
        assert!(err.to_string().contains("whole number"));
    }

    #[test]
    fn test_json_numbers_accepted() {
        let json = serde_json::json!({
            "age": 42,
            "annual_income": 120000.50,
            "investment_amount": "10000",
            "risk_tolerance": 9
        });
        let form: ProfileSubmission = serde_json::from_value(json).unwrap();
        let profile = FinancialProfile::try_from(form).unwrap();
        assert_eq!(profile.age, 42);
        assert_eq!(profile.annual_income, dec!(120000.5));
        assert_eq!(profile.risk_tolerance, 9);
        assert_eq!(profile.time_horizon, None);
    }

    #[test]
    fn test_choice_fields() {
        let mut form = submission();
        form.time_horizon = Some(" ".into());
        form.risk_tolerance = None;
        let profile = FinancialProfile::try_from(form).unwrap();
        assert_eq!(profile.time_horizon, None);
        assert_eq!(profile.risk_tolerance, DEFAULT_RISK_TOLERANCE);

        let mut form = submission();
        form.debt_status = Some("enormous".into());
        let err = FinancialProfile::try_from(form).unwrap_err();
        assert_eq!(err.field(), Some("debt_status"));
        assert!(err.to_string().contains("none, low, moderate, high"));
    }

    #[test]
    fn test_primary_goal() {
        let mut profile = FinancialProfile::try_from(submission()).unwrap();
        profile.goals = "Save for my children's university education, travel".into();
        assert_eq!(profile.primary_goal(), "Save for my children...");

        profile.goals = "  ".into();
        assert_eq!(profile.primary_goal(), "Wealth Building");
    }

    #[test]
    fn test_horizon_ranges() {
        assert!(TimeHorizon::Short.contains_years(2));
        assert!(!TimeHorizon::Short.contains_years(10));
        assert!(TimeHorizon::Medium.contains_years(3));
        assert!(TimeHorizon::Long.contains_years(30));
        assert!(!TimeHorizon::Long.contains_years(5));
    }
}
