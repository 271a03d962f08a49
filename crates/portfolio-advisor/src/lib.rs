//! # portfolio-advisor
//!
//! Rule-based investment guidance: a fixed asset-allocation table keyed by
//! risk tier, simple portfolio metrics, a compounded value projection and a
//! keyword-driven advisory chat.
//!
//! ## Pipeline
//!
//! ```text
//!  risk score ──▶ classify_risk ──▶ select_allocation ──▶ compute_metrics ──▶ project_value
//!   (1-10)         Conservative      5 weights, Σ=100      return / risk /      amount·(1+r)^n
//!                  Moderate                                Sharpe
//!                  Aggressive
//! ```
//!
//! ## Allocation table
//!
//! ```text
//! ┌───────────────┬───────────┬──────────┬────────────┐
//! │ Asset class   │ Conserv.  │ Moderate │ Aggressive │
//! ├───────────────┼───────────┼──────────┼────────────┤
//! │ US Stocks     │    20%    │   35%    │    50%     │
//! │ Intl Stocks   │    10%    │   25%    │    30%     │
//! │ Bonds         │    60%    │   30%    │    10%     │
//! │ Real Estate   │     5%    │    7%    │     7%     │
//! │ Commodities   │     5%    │    3%    │     3%     │
//! └───────────────┴───────────┴──────────┴────────────┘
//! ```
//!
//! Everything here is a pure function of its inputs. Nothing is fetched,
//! learned or persisted; the chat transcript belongs to the caller's
//! `ChatSession`.

pub mod advisor;
pub mod analytics;
pub mod chat;
pub mod config;
pub mod error;
pub mod insights;
pub mod model;
pub mod profile;
pub mod strategy;

pub use advisor::{AdvisoryReport, AdvisoryWarning, PortfolioAdvisor, PortfolioRecommendation};
pub use analytics::{PortfolioMetrics, Projection, compute_metrics, project_value};
pub use chat::{ADVISORY_RESPONDER, Intent, respond_to_message};
pub use config::AdvisorConfig;
pub use error::{AdvisorError, Result};
pub use insights::FundSuggestion;
pub use model::{ASSET_CATALOG, AssetClass, RiskTier};
pub use profile::{FinancialProfile, ProfileSubmission};
pub use strategy::{AllocationPlan, RiskAssessment, classify_risk, select_allocation};
