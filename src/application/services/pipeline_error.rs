use std::fmt::Display;

use crate::application::ports::{PdfRenderError, RepositoryError};

pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Sorry, our AI service is temporarily unavailable.";

/// Failure kinds a pipeline stage can surface to its caller.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("recoverable input: {0}")]
    RecoverableInput(String),
    #[error("{stage} unavailable: {reason}")]
    ServiceUnavailable { stage: &'static str, reason: String },
    #[error("report schema: {0}")]
    Schema(String),
    #[error("pdf render: {0}")]
    Render(#[from] PdfRenderError),
    #[error("persistence: {0}")]
    Persistence(#[from] RepositoryError),
}

impl PipelineError {
    pub fn unavailable(stage: &'static str, reason: impl Display) -> Self {
        PipelineError::ServiceUnavailable {
            stage,
            reason: reason.to_string(),
        }
    }

    /// Text safe to show to the user.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::RecoverableInput(message) => message.clone(),
            PipelineError::ServiceUnavailable { .. } => SERVICE_UNAVAILABLE_MESSAGE.to_string(),
            PipelineError::Schema(_)
            | PipelineError::Render(_)
            | PipelineError::Persistence(_) => {
                "Error generating report. Please try again later.".to_string()
            }
        }
    }
}
