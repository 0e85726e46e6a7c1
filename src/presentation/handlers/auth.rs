use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::services::render_history;
use crate::domain::{PatientProfile, ReportRecord};
use crate::presentation::state::{AppState, SessionState, SignedInUser};

use super::ApiError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub verify_password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub profile: PatientProfile,
    pub message: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub session_id: String,
    pub profile: PatientProfile,
    pub reports: Vec<ReportRecord>,
    pub history_html: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let profile = state
        .accounts
        .register(
            &request.name,
            &request.email,
            &request.password,
            &request.verify_password,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            profile,
            message: "Account registered, Login to continue.".to_string(),
        }),
    ))
}

#[tracing::instrument(skip(state, request))]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let outcome = state
        .accounts
        .login(&request.email, &request.password)
        .await?;

    let session_id = state
        .sessions
        .create(SessionState::for_user(SignedInUser {
            profile: outcome.profile.clone(),
        }))
        .await;

    tracing::info!(session_id = %session_id, "Signed-in session created");

    Ok(Json(LoginResponse {
        session_id: session_id.to_string(),
        history_html: render_history(&outcome.history),
        profile: outcome.profile,
        reports: outcome.history,
    }))
}
