//! Risk Tier Classification
//!
//! Maps a 1-10 risk tolerance score to a tier. Out-of-range scores are
//! clamped to the nearest bound and reported, never rejected.

use serde::{Deserialize, Serialize};

use crate::model::RiskTier;

pub const MIN_RISK_SCORE: i32 = 1;
pub const MAX_RISK_SCORE: i32 = 10;

/// A submitted risk score and the in-range value actually used
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Score as submitted
    pub submitted: i32,

    /// Score after clamping to 1-10
    pub applied: i32,

    /// Resulting tier
    pub tier: RiskTier,
}

impl RiskAssessment {
    pub fn new(score: i32) -> Self {
        let applied = score.clamp(MIN_RISK_SCORE, MAX_RISK_SCORE);
        if applied != score {
            tracing::warn!(submitted = score, applied, "risk tolerance outside 1-10, clamped");
        }

        let tier = match applied {
            ..=3 => RiskTier::Conservative,
            4..=7 => RiskTier::Moderate,
            _ => RiskTier::Aggressive,
        };

        Self {
            submitted: score,
            applied,
            tier,
        }
    }

    pub const fn was_clamped(&self) -> bool {
        self.submitted != self.applied
    }
}

/// Classify a risk tolerance score
pub fn classify_risk(score: i32) -> RiskTier {
    RiskAssessment::new(score).tier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        for score in 1..=3 {
            assert_eq!(classify_risk(score), RiskTier::Conservative, "score {score}");
        }
        for score in 4..=7 {
            assert_eq!(classify_risk(score), RiskTier::Moderate, "score {score}");
        }
        for score in 8..=10 {
            assert_eq!(classify_risk(score), RiskTier::Aggressive, "score {score}");
        }
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert_eq!(classify_risk(0), RiskTier::Conservative);
        assert_eq!(classify_risk(-40), RiskTier::Conservative);
        assert_eq!(classify_risk(11), RiskTier::Aggressive);
        assert_eq!(classify_risk(i32::MAX), RiskTier::Aggressive);

        let low = RiskAssessment::new(-2);
        assert!(low.was_clamped());
        assert_eq!(low.applied, 1);

        let high = RiskAssessment::new(15);
        assert_eq!(high.applied, 10);
        assert_eq!(high.submitted, 15);
    }

    #[test]
    fn test_in_range_not_clamped() {
        let assessment = RiskAssessment::new(6);
        assert!(!assessment.was_clamped());
        assert_eq!(assessment.tier, RiskTier::Moderate);
    }
}
