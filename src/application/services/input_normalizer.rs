use std::sync::Arc;

use rand::Rng;
use tracing::instrument;

use crate::application::ports::{
    AttachmentStore, ImageCodec, ImageGenerator, LlmClient, TranscriptionEngine,
};
use crate::domain::{Attachment, AttachmentKind, CanonicalQuery, EncodedImage, MultimodalInput};
use crate::infrastructure::observability::sanitize_for_log;

use super::prompts::IMAGE_PROMPT_SUFFIX;
use super::{Collaborators, PipelineError, PipelineModels};

const MAX_IMAGE_SEED: u32 = 999_999;

/// Reduces one user turn to a [`CanonicalQuery`].
pub struct InputNormalizer {
    transcription: Arc<dyn TranscriptionEngine>,
    attachments: Arc<dyn AttachmentStore>,
    image_codec: Arc<dyn ImageCodec>,
    llm: Arc<dyn LlmClient>,
    image_generator: Arc<dyn ImageGenerator>,
    image_prompt_model: String,
}

impl InputNormalizer {
    pub fn new(collaborators: &Collaborators, models: &PipelineModels) -> Self {
        Self {
            transcription: Arc::clone(&collaborators.transcription),
            attachments: Arc::clone(&collaborators.attachments),
            image_codec: Arc::clone(&collaborators.image_codec),
            llm: Arc::clone(&collaborators.llm),
            image_generator: Arc::clone(&collaborators.image_generator),
            image_prompt_model: models.image_prompt.clone(),
        }
    }

    #[instrument(skip(self, input), fields(attachments = input.attachments().len()))]
    pub async fn normalize(&self, input: &MultimodalInput) -> Result<CanonicalQuery, PipelineError> {
        let mut transcribed_text = input.inline_text().unwrap_or_default().to_string();
        let mut encoded_image = None;
        let mut audio_consulted = false;

        for attachment in input.attachments() {
            match attachment.kind() {
                AttachmentKind::Audio if !audio_consulted && transcribed_text.is_empty() => {
                    audio_consulted = true;
                    transcribed_text = self.transcribe(attachment).await?;
                }
                AttachmentKind::Image if encoded_image.is_none() => {
                    encoded_image = Some(self.encode(attachment).await?);
                }
                _ => {}
            }
        }

        let image_reference = if encoded_image.is_none() && !transcribed_text.is_empty() {
            Some(self.illustrate(&transcribed_text).await?)
        } else {
            None
        };

        tracing::debug!(
            text = %sanitize_for_log(&transcribed_text),
            uploaded_image = encoded_image.is_some(),
            generated_image = image_reference.is_some(),
            "Input normalized"
        );

        Ok(CanonicalQuery {
            transcribed_text,
            encoded_image,
            image_reference,
        })
    }

    async fn transcribe(&self, attachment: &Attachment) -> Result<String, PipelineError> {
        let audio = self
            .attachments
            .read(attachment)
            .await
            .map_err(|e| PipelineError::unavailable("attachment store", e))?;

        let text = self
            .transcription
            .transcribe(&audio, &attachment.file_name)
            .await
            .map_err(|e| PipelineError::unavailable("transcription", e))?;

        Ok(text.trim().to_string())
    }

    async fn encode(&self, attachment: &Attachment) -> Result<EncodedImage, PipelineError> {
        let bytes = self
            .attachments
            .read(attachment)
            .await
            .map_err(|e| PipelineError::unavailable("attachment store", e))?;

        self.image_codec
            .encode(&bytes)
            .map_err(|e| PipelineError::unavailable("image encoding", e))
    }

    async fn illustrate(&self, text: &str) -> Result<String, PipelineError> {
        let request = format!("{}{}", text, IMAGE_PROMPT_SUFFIX);
        let prompt = self
            .llm
            .complete(&self.image_prompt_model, &request)
            .await
            .map_err(|e| PipelineError::unavailable("image prompt generation", e))?;

        let seed = rand::thread_rng().gen_range(0..=MAX_IMAGE_SEED);
        self.image_generator
            .image_url(prompt.trim(), seed)
            .map_err(|e| PipelineError::unavailable("image generation", e))
    }
}
