use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{AccountError, PipelineError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("session not found")]
    SessionNotFound,
    #[error("login required")]
    LoginRequired,
    #[error("no consultation in progress")]
    NoConsultation,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Account(#[from] AccountError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound => StatusCode::NOT_FOUND,
            ApiError::LoginRequired => StatusCode::UNAUTHORIZED,
            ApiError::NoConsultation => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Pipeline(e) => match e {
                PipelineError::RecoverableInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
                PipelineError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Account(e) => match e {
                AccountError::PasswordMismatch => StatusCode::BAD_REQUEST,
                AccountError::EmailExists => StatusCode::CONFLICT,
                AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AccountError::ProfileMissing => StatusCode::NOT_FOUND,
                AccountError::RegistrationFailed(_) | AccountError::LoginFailed(_) => {
                    StatusCode::BAD_GATEWAY
                }
                AccountError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn user_message(&self) -> String {
        match self {
            ApiError::SessionNotFound => "Session not found. Please start again.".to_string(),
            ApiError::LoginRequired => "Please log in to continue.".to_string(),
            ApiError::NoConsultation => {
                "Please describe your condition before asking follow-up questions.".to_string()
            }
            ApiError::BadRequest(message) => message.clone(),
            ApiError::Pipeline(e) => e.user_message(),
            ApiError::Account(AccountError::Storage(_)) => {
                "Something went wrong. Please try again.".to_string()
            }
            ApiError::Account(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.user_message(),
            }),
        )
            .into_response()
    }
}
