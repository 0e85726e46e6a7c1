use async_trait::async_trait;

use crate::domain::{ConversationTurn, ReportImage};

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single-turn request carrying a text prompt and, optionally, one image.
    async fn analyze(
        &self,
        model: &str,
        prompt: &str,
        image: Option<&ReportImage>,
    ) -> Result<String, LlmClientError>;

    /// Multi-turn text completion over the given history.
    async fn chat(&self, model: &str, messages: &[ConversationTurn])
    -> Result<String, LlmClientError>;

    async fn complete(&self, model: &str, prompt: &str) -> Result<String, LlmClientError> {
        self.chat(model, &[ConversationTurn::user(prompt)]).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
