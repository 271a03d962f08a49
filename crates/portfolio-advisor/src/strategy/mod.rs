//! Allocation Strategy
//!
//! Risk classification and the tier-to-allocation lookup.

mod allocation;
mod risk_tier;

pub use allocation::{
    AllocationEntry, AllocationPlan, AssetMix, Holding, select_allocation, tier_weights,
};
pub use risk_tier::{MAX_RISK_SCORE, MIN_RISK_SCORE, RiskAssessment, classify_risk};
