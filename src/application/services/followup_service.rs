use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::{
    AttachmentStore, AttachmentStoreError, LlmClient, TranscriptionEngine,
};
use crate::domain::{ConversationTurn, MultimodalInput, Transcript};
use crate::infrastructure::observability::sanitize_for_log;

use super::{Collaborators, PipelineError, PipelineModels};

pub const AUDIO_NOT_FOUND_MESSAGE: &str = "Audio file not found. Please try again.";
pub const TRANSCRIPTION_FAILED_MESSAGE: &str = "Error transcribing audio. Please try again.";
pub const UNCLEAR_INPUT_MESSAGE: &str =
    "I couldn't understand your input. Could you please try again?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpOutcome {
    Answered,
    /// Input was unusable; the transcript came back untouched.
    Clarification,
}

#[derive(Debug, Clone)]
pub struct FollowUp {
    pub transcript: Transcript,
    pub reply: String,
    pub outcome: FollowUpOutcome,
}

impl FollowUp {
    fn clarification(transcript: &Transcript, message: &str) -> Self {
        Self {
            transcript: transcript.clone(),
            reply: message.to_string(),
            outcome: FollowUpOutcome::Clarification,
        }
    }
}

/// Continues a consultation turn by turn with full-history context.
pub struct FollowUpService {
    transcription: Arc<dyn TranscriptionEngine>,
    attachments: Arc<dyn AttachmentStore>,
    llm: Arc<dyn LlmClient>,
    chat_model: String,
}

impl FollowUpService {
    pub fn new(collaborators: &Collaborators, models: &PipelineModels) -> Self {
        Self {
            transcription: Arc::clone(&collaborators.transcription),
            attachments: Arc::clone(&collaborators.attachments),
            llm: Arc::clone(&collaborators.llm),
            chat_model: models.analysis.clone(),
        }
    }

    #[instrument(skip(self, input, transcript), fields(turns = transcript.len()))]
    pub async fn advance(
        &self,
        input: &MultimodalInput,
        transcript: &Transcript,
    ) -> Result<FollowUp, PipelineError> {
        let user_query = match self.extract_query(input).await {
            Ok(query) => query,
            Err(PipelineError::RecoverableInput(message)) => {
                tracing::warn!(reason = %message, "Follow-up input unusable");
                return Ok(FollowUp::clarification(transcript, &message));
            }
            Err(e) => return Err(e),
        };

        if user_query.is_empty() {
            return Ok(FollowUp::clarification(transcript, UNCLEAR_INPUT_MESSAGE));
        }

        tracing::debug!(query = %sanitize_for_log(&user_query), "Follow-up query");

        let mut updated = transcript.clone();
        updated.push(ConversationTurn::user(user_query));

        let reply = self
            .llm
            .chat(&self.chat_model, updated.turns())
            .await
            .map_err(|e| PipelineError::unavailable("text generation", e))?
            .trim()
            .to_string();

        updated.push(ConversationTurn::assistant(reply.clone()));

        Ok(FollowUp {
            transcript: updated,
            reply,
            outcome: FollowUpOutcome::Answered,
        })
    }

    async fn extract_query(&self, input: &MultimodalInput) -> Result<String, PipelineError> {
        if let Some(text) = input.inline_text() {
            return Ok(text.to_string());
        }

        let Some(audio) = input.first_audio() else {
            return Ok(String::new());
        };

        let data = self.attachments.read(audio).await.map_err(|e| match e {
            AttachmentStoreError::NotFound(_) => {
                PipelineError::RecoverableInput(AUDIO_NOT_FOUND_MESSAGE.to_string())
            }
            AttachmentStoreError::Storage(_) => {
                PipelineError::RecoverableInput(TRANSCRIPTION_FAILED_MESSAGE.to_string())
            }
        })?;

        match self.transcription.transcribe(&data, &audio.file_name).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "Follow-up transcription failed");
                Err(PipelineError::RecoverableInput(
                    TRANSCRIPTION_FAILED_MESSAGE.to_string(),
                ))
            }
        }
    }
}
