use async_trait::async_trait;

use crate::domain::AudioArtifact;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<AudioArtifact, SpeechSynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechSynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("empty audio returned")]
    EmptyAudio,
}
