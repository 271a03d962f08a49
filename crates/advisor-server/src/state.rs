//! Application State

use std::sync::Arc;

use advisor_core::{DEFAULT_SESSION_CAPACITY, MemorySessionStore};
use portfolio_advisor::PortfolioAdvisor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Stateless allocation pipeline
    pub advisor: Arc<PortfolioAdvisor>,

    /// Chat sessions (in memory only, bounded)
    pub sessions: Arc<MemorySessionStore>,
}

impl AppState {
    pub fn new(advisor: PortfolioAdvisor) -> Self {
        Self::with_session_capacity(advisor, DEFAULT_SESSION_CAPACITY)
    }

    /// State whose session store keeps at most `capacity` chats
    pub fn with_session_capacity(advisor: PortfolioAdvisor, capacity: usize) -> Self {
        Self {
            advisor: Arc::new(advisor),
            sessions: Arc::new(MemorySessionStore::with_capacity(capacity)),
        }
    }
}
