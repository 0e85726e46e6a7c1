use axum::Json;
use axum::extract::{Multipart, Path, State};
use serde::Serialize;

use crate::application::services::FollowUpOutcome;
use crate::domain::ConversationTurn;
use crate::presentation::state::AppState;

use super::ApiError;
use super::multipart_input::{discard_attachments, read_multimodal_input};
use super::sessions::load_session;

#[derive(Serialize)]
pub struct FollowUpResponse {
    pub reply: String,
    pub outcome: &'static str,
    pub history: Vec<ConversationTurn>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn followup_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    multipart: Multipart,
) -> Result<Json<FollowUpResponse>, ApiError> {
    let session = load_session(&state, &session_id).await?;
    let mut session = session.lock().await;

    if session.user.is_none() {
        return Err(ApiError::LoginRequired);
    }
    let Some(transcript) = session.transcript.as_ref() else {
        return Err(ApiError::NoConsultation);
    };

    let input = read_multimodal_input(state.attachments.as_ref(), multipart).await?;
    let advanced = state.followup.advance(&input, transcript).await;
    discard_attachments(state.attachments.as_ref(), &input).await;
    let follow_up = advanced?;

    let outcome = match follow_up.outcome {
        FollowUpOutcome::Answered => "answered",
        FollowUpOutcome::Clarification => "clarification",
    };
    let history = follow_up.transcript.turns().to_vec();
    session.transcript = Some(follow_up.transcript);

    Ok(Json(FollowUpResponse {
        reply: follow_up.reply,
        outcome,
        history,
    }))
}
