//! Value Projection
//!
//! Compounds an investment at a fixed annual rate:
//! `amount * (1 + rate/100)^years`.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// Compounded future value.
///
/// `years == 0` returns `amount` unchanged. Negative amounts and rates
/// below -100% are rejected; overflow is a `Computation` error.
pub fn project_value(amount: Decimal, expected_return_percent: Decimal, years: u32) -> Result<Decimal> {
    if amount < Decimal::ZERO {
        return Err(AdvisorError::validation("investment_amount", "must not be negative"));
    }
    if expected_return_percent < dec!(-100) {
        return Err(AdvisorError::validation(
            "expected_return_percent",
            "must not be below -100",
        ));
    }

    let growth = Decimal::ONE + expected_return_percent / dec!(100);
    growth
        .checked_powi(i64::from(years))
        .and_then(|factor| amount.checked_mul(factor))
        .ok_or_else(|| {
            AdvisorError::Computation(format!(
                "{amount} at {expected_return_percent}% over {years} years exceeds representable range"
            ))
        })
}

/// A projection with its inputs. `projected_value` is `None` when the
/// result is not representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub principal: Decimal,
    pub annual_return_percent: Decimal,
    pub horizon_years: u32,
    pub projected_value: Option<Decimal>,
}

impl Projection {
    /// Project, recovering overflow as a missing value.
    ///
    /// Invalid inputs are still errors.
    pub fn compute(principal: Decimal, annual_return_percent: Decimal, horizon_years: u32) -> Result<Self> {
        let projected_value = match project_value(principal, annual_return_percent, horizon_years) {
            Ok(value) => Some(value),
            Err(AdvisorError::Computation(reason)) => {
                tracing::warn!(%reason, "projection unavailable");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            principal,
            annual_return_percent,
            horizon_years,
            projected_value,
        })
    }

    /// Growth over the principal
    pub fn gain(&self) -> Option<Decimal> {
        self.projected_value.map(|value| value - self.principal)
    }
}
