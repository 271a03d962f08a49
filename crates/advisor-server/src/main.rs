//! Portfolio advisor HTTP server
//!
//! Axum-based host exposing the allocation pipeline and the advisory chat
//! as JSON endpoints.

mod handlers;
mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_advisor::{AdvisorConfig, PortfolioAdvisor};

use advisor_core::DEFAULT_SESSION_CAPACITY;

use crate::handlers::{
    analyze_handler, chat_handler, delete_session_handler, health_check, recommend_handler,
    suggestions_handler, transcript_handler,
};
use crate::state::AppState;

/// Build the router (shared with handler tests)
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/recommend", post(recommend_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/chat/suggestions", get(suggestions_handler))
        .route(
            "/api/chat/{id}",
            get(transcript_handler).delete(delete_session_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AdvisorConfig::from_env()?;
    tracing::info!(
        risk_free_rate = %config.risk_free_rate,
        max_horizon_years = config.max_horizon_years,
        "advisor configured"
    );

    let max_sessions = match std::env::var("MAX_CHAT_SESSIONS") {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("MAX_CHAT_SESSIONS={raw:?}: {e}"))?,
        Err(_) => DEFAULT_SESSION_CAPACITY,
    };

    let state = AppState::with_session_capacity(PortfolioAdvisor::new(config), max_sessions);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("portfolio advisor listening on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health               - Health check");
    tracing::info!("  POST /api/recommend        - Allocation, metrics, projection");
    tracing::info!("  POST /api/analyze          - Full profile report");
    tracing::info!("  POST /api/chat             - Send chat message");
    tracing::info!("  GET  /api/chat/suggestions - Quick suggestions");
    tracing::info!("  GET  /api/chat/{{id}}        - Session transcript");
    tracing::info!("  DEL  /api/chat/{{id}}        - Discard session");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
