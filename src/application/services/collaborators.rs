use std::sync::Arc;

use crate::application::ports::{
    AttachmentStore, AuthProvider, ImageCodec, ImageFetcher, ImageGenerator, LlmClient,
    PatientRepository, PdfRenderer, SpeechSynthesizer, TranscriptionEngine,
};

/// Every external capability the pipeline talks to, built once at startup.
#[derive(Clone)]
pub struct Collaborators {
    pub transcription: Arc<dyn TranscriptionEngine>,
    pub llm: Arc<dyn LlmClient>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    pub image_codec: Arc<dyn ImageCodec>,
    pub image_generator: Arc<dyn ImageGenerator>,
    pub image_fetcher: Arc<dyn ImageFetcher>,
    pub pdf_renderer: Arc<dyn PdfRenderer>,
    pub patients: Arc<dyn PatientRepository>,
    pub auth: Arc<dyn AuthProvider>,
    pub attachments: Arc<dyn AttachmentStore>,
}

/// Model identifiers for the text-producing calls.
#[derive(Debug, Clone)]
pub struct PipelineModels {
    pub analysis: String,
    pub image_prompt: String,
}

impl Default for PipelineModels {
    fn default() -> Self {
        Self {
            analysis: "meta-llama/llama-4-maverick-17b-128e-instruct".to_string(),
            image_prompt: "compound-beta-mini".to_string(),
        }
    }
}
