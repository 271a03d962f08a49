//! Portfolio Analytics
//!
//! Metrics derived from an allocation plan and the compounded projection.

mod metrics;
mod projection;

pub use metrics::{PortfolioMetrics, compute_metrics};
pub use projection::{Projection, project_value};
