mod attachment_store;
mod auth_provider;
mod image_codec;
mod image_fetcher;
mod image_generator;
mod llm_client;
mod patient_repository;
mod pdf_renderer;
mod repository_error;
mod speech_synthesizer;
mod transcription_engine;

pub use attachment_store::{AttachmentStore, AttachmentStoreError};
pub use auth_provider::{AuthError, AuthProvider, AuthSession};
pub use image_codec::{DecodedImage, ImageCodec, ImageCodecError};
pub use image_fetcher::{ImageFetchError, ImageFetcher};
pub use image_generator::{ImageGenerator, ImageGeneratorError};
pub use llm_client::{LlmClient, LlmClientError};
pub use patient_repository::PatientRepository;
pub use pdf_renderer::{PdfRenderError, PdfRenderer, ReportPayload};
pub use repository_error::RepositoryError;
pub use speech_synthesizer::{SpeechSynthesisError, SpeechSynthesizer};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
