use axum::Json;
use axum::extract::{Multipart, Path, State};
use serde::Serialize;

use crate::domain::DisplayImage;
use crate::presentation::state::AppState;

use super::ApiError;
use super::multipart_input::{discard_attachments, read_multimodal_input};
use super::sessions::load_session;

#[derive(Serialize)]
pub struct ConsultationResponse {
    pub transcribed_text: String,
    pub display_image: Option<DisplayImage>,
    pub response_text: String,
    /// `data:audio/mpeg;base64,...`
    pub audio: String,
}

/// Starts a consultation: normalize, present, diagnose. The session's
/// previous consultation is replaced only when every stage succeeds.
#[tracing::instrument(skip(state, multipart))]
pub async fn consultation_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    multipart: Multipart,
) -> Result<Json<ConsultationResponse>, ApiError> {
    let session = load_session(&state, &session_id).await?;
    let input = read_multimodal_input(state.attachments.as_ref(), multipart).await?;

    let mut session = session.lock().await;

    let normalized = state.normalizer.normalize(&input).await;
    discard_attachments(state.attachments.as_ref(), &input).await;
    let query = normalized?;
    let presented = state.presenter.present(&query)?;
    let diagnosis = state
        .diagnosis
        .diagnose(&query.transcribed_text, presented.report_image.as_ref())
        .await?;

    session.reset_consultation();
    session.transcript = Some(diagnosis.seed_transcript);
    session.report_image = presented.report_image;

    Ok(Json(ConsultationResponse {
        transcribed_text: query.transcribed_text,
        display_image: presented.display_image,
        response_text: diagnosis.response_text,
        audio: diagnosis.audio.to_data_uri(),
    }))
}
