use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::domain::SessionId;
use crate::presentation::state::{AppState, SessionState};

use super::ApiError;

#[derive(Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
}

pub(super) async fn load_session(
    state: &AppState,
    raw_id: &str,
) -> Result<Arc<Mutex<SessionState>>, ApiError> {
    let id: SessionId = raw_id.parse().map_err(|_| ApiError::SessionNotFound)?;
    state.sessions.get(id).await.ok_or(ApiError::SessionNotFound)
}

/// Opens a guest session: consultations only, no follow-ups or reports.
pub async fn create_session_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let id = state.sessions.create(SessionState::default()).await;
    tracing::info!(session_id = %id, "Guest session created");
    (
        StatusCode::CREATED,
        Json(SessionCreatedResponse {
            session_id: id.to_string(),
        }),
    )
}

/// Logs out and forgets the session's consultation.
pub async fn delete_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: SessionId = session_id.parse().map_err(|_| ApiError::SessionNotFound)?;
    if state.sessions.remove(id).await {
        tracing::info!(session_id = %id, "Session closed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound)
    }
}
