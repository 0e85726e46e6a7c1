use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Provider-side account id.
    pub local_id: String,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("email already registered")]
    EmailExists,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("provider rejected request: {0}")]
    Rejected(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
