//! HTTP Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use advisor_core::{ChatError, ChatMessage, SessionId, SessionStore};
use portfolio_advisor::{
    AdvisorError, AdvisoryReport, FinancialProfile, PortfolioRecommendation, ProfileSubmission,
    chat::{self, ADVISORY_RESPONDER, QUICK_SUGGESTIONS},
};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub investment_amount: Decimal,
    pub risk_tolerance: i32,
    pub horizon_years: u32,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub profile: ProfileSubmission,
    pub horizon_years: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: ChatMessage,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub session_id: String,
    pub title: String,
    pub messages: Vec<ChatMessage>,
    pub suggestions: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<&'static str>,
}

// ============================================================================
// Error Mapping
// ============================================================================

fn advisor_error(err: &AdvisorError) -> ApiError {
    let (status, code) = match err {
        AdvisorError::Validation { .. } | AdvisorError::InvalidAllocation(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR")
        }
        AdvisorError::Computation(_) | AdvisorError::Config(_) => {
            tracing::error!("Advisor error: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "ADVISOR_ERROR")
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
            field: err.field(),
        }),
    )
}

fn chat_error(err: &ChatError) -> ApiError {
    let (status, code) = match err {
        ChatError::EmptyMessage => (StatusCode::BAD_REQUEST, "EMPTY_MESSAGE"),
        ChatError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND"),
        ChatError::Session(_) => {
            tracing::error!("Chat error: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "SESSION_ERROR")
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
            field: None,
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Allocation, metrics and projection for amount/risk/horizon
pub async fn recommend_handler(
    State(state): State<AppState>,
    Json(payload): Json<RecommendRequest>,
) -> Result<Json<PortfolioRecommendation>, ApiError> {
    state
        .advisor
        .recommend(payload.investment_amount, payload.risk_tolerance, payload.horizon_years)
        .map(Json)
        .map_err(|e| advisor_error(&e))
}

/// Full report for a submitted profile
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AdvisoryReport>, ApiError> {
    let profile = FinancialProfile::try_from(payload.profile).map_err(|e| {
        tracing::debug!("Rejected profile: {}", e);
        advisor_error(&e)
    })?;

    state
        .advisor
        .analyze(&profile, payload.horizon_years)
        .map(Json)
        .map_err(|e| advisor_error(&e))
}

/// Send a chat message, opening a greeted session when none is given
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if payload.message.trim().is_empty() {
        return Err(chat_error(&ChatError::EmptyMessage));
    }

    let (session_id, reply) = match payload.session_id {
        Some(id) => {
            let id = SessionId::from_string(id);
            let reply = state
                .sessions
                .modify(&id, |session| {
                    session.exchange(&ADVISORY_RESPONDER, &payload.message).cloned()
                })
                .map_err(|e| chat_error(&e))?;
            (id, reply)
        }
        None => {
            let mut session = chat::new_session();
            let reply = session
                .exchange(&ADVISORY_RESPONDER, &payload.message)
                .cloned()
                .map_err(|e| chat_error(&e))?;
            state.sessions.save(&session).map_err(|e| chat_error(&e))?;
            tracing::info!(session = %session.id, "opened chat session");
            (session.id, reply)
        }
    };

    Ok(Json(ChatResponse {
        session_id: session_id.to_string(),
        reply,
    }))
}

/// Transcript of a session
pub async fn transcript_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let id = SessionId::from_string(id);
    let session = state
        .sessions
        .load(&id)
        .map_err(|e| chat_error(&e))?
        .ok_or_else(|| chat_error(&ChatError::SessionNotFound(id.to_string())))?;

    Ok(Json(TranscriptResponse {
        session_id: session.id.to_string(),
        title: session.title(),
        suggestions: chat::suggestions_for(&session).to_vec(),
        messages: session.transcript.messages().to_vec(),
    }))
}

/// Discard a session
pub async fn delete_session_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = SessionId::from_string(id);
    if state.sessions.delete(&id).map_err(|e| chat_error(&e))? {
        tracing::info!(session = %id, "closed chat session");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(chat_error(&ChatError::SessionNotFound(id.to_string())))
    }
}

/// Quick suggestions for a fresh chat
pub async fn suggestions_handler() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: QUICK_SUGGESTIONS.to_vec(),
    })
}
