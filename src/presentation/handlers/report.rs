use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::application::services::render_history;
use crate::domain::ReportRecord;
use crate::presentation::state::AppState;

use super::ApiError;
use super::sessions::load_session;

#[derive(Serialize)]
pub struct ReportResponse {
    pub generated: bool,
    pub html: String,
    pub download_link: String,
}

#[derive(Serialize)]
pub struct ReportHistoryResponse {
    pub reports: Vec<ReportRecord>,
    pub html: String,
}

/// Report generation degrades to the failure fragment instead of an error
/// status, so the client always has something to render.
#[tracing::instrument(skip(state))]
pub async fn generate_report_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    let session = load_session(&state, &session_id).await?;
    let session = session.lock().await;

    let user = session.user.as_ref().ok_or(ApiError::LoginRequired)?;
    let transcript = session
        .transcript
        .as_ref()
        .ok_or(ApiError::NoConsultation)?;

    let report = state
        .reports
        .generate_report(
            transcript,
            &user.profile.name,
            &user.profile.email,
            session.report_image.as_ref(),
        )
        .await;

    Ok(Json(ReportResponse {
        generated: !report.is_failure(),
        html: report.html,
        download_link: report.download_link,
    }))
}

#[tracing::instrument(skip(state))]
pub async fn report_history_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ReportHistoryResponse>, ApiError> {
    let session = load_session(&state, &session_id).await?;
    let email = {
        let session = session.lock().await;
        let user = session.user.as_ref().ok_or(ApiError::LoginRequired)?;
        user.profile.email.clone()
    };

    let reports = state.accounts.report_history(&email).await?;

    Ok(Json(ReportHistoryResponse {
        html: render_history(&reports),
        reports,
    }))
}
