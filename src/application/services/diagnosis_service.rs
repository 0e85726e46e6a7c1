use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::{LlmClient, SpeechSynthesizer};
use crate::domain::{AudioArtifact, ReportImage, Transcript};

use super::prompts::{DIAGNOSIS_SYSTEM_PROMPT, UNCLEAR_SPEECH_MESSAGE};
use super::{Collaborators, PipelineError, PipelineModels};

#[derive(Debug, Clone)]
pub struct Diagnosis {
    pub audio: AudioArtifact,
    pub response_text: String,
    pub seed_transcript: Transcript,
}

/// Produces the spoken first answer of a consultation.
pub struct DiagnosisService {
    llm: Arc<dyn LlmClient>,
    speech: Arc<dyn SpeechSynthesizer>,
    analysis_model: String,
}

impl DiagnosisService {
    pub fn new(collaborators: &Collaborators, models: &PipelineModels) -> Self {
        Self {
            llm: Arc::clone(&collaborators.llm),
            speech: Arc::clone(&collaborators.speech),
            analysis_model: models.analysis.clone(),
        }
    }

    #[instrument(skip(self, transcribed_text, image), fields(with_image = image.is_some()))]
    pub async fn diagnose(
        &self,
        transcribed_text: &str,
        image: Option<&ReportImage>,
    ) -> Result<Diagnosis, PipelineError> {
        let user_text = match transcribed_text.trim() {
            "" => UNCLEAR_SPEECH_MESSAGE,
            text => text,
        };
        let prompt = format!("{}{}", DIAGNOSIS_SYSTEM_PROMPT, user_text);

        let response_text = self
            .llm
            .analyze(&self.analysis_model, &prompt, image)
            .await
            .map_err(|e| PipelineError::unavailable("analysis", e))?;

        let audio = self
            .speech
            .synthesize(&response_text)
            .await
            .map_err(|e| PipelineError::unavailable("speech synthesis", e))?;

        tracing::info!(
            chars = response_text.len(),
            audio_bytes = audio.data.len(),
            "Diagnosis generated"
        );

        Ok(Diagnosis {
            audio,
            seed_transcript: Transcript::seeded(response_text.clone()),
            response_text,
        })
    }
}
