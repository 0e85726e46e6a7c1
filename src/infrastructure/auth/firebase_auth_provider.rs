use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AuthError, AuthProvider, AuthSession};

/// Email/password accounts through the Firebase Identity Toolkit REST API.
pub struct FirebaseAuthProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Maps Identity Toolkit error codes; messages may carry a ` : detail` suffix.
fn classify(message: &str) -> AuthError {
    let code = message.split(':').next().unwrap_or(message).trim();
    match code {
        "EMAIL_EXISTS" => AuthError::EmailExists,
        "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" | "INVALID_LOGIN_CREDENTIALS" => {
            AuthError::InvalidCredentials
        }
        _ => AuthError::Rejected(message.to_string()),
    }
}

impl FirebaseAuthProvider {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://identitytoolkit.googleapis.com/v1".to_string()),
        }
    }

    async fn call(
        &self,
        action: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let url = format!("{}/accounts:{}", self.base_url.trim_end_matches('/'), action);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&CredentialsRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| AuthError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => classify(&envelope.error.message),
                Err(_) => AuthError::ApiRequestFailed(format!("HTTP {}: {}", status, body)),
            });
        }

        let account: AccountResponse = response
            .json()
            .await
            .map_err(|e| AuthError::ApiRequestFailed(format!("body: {}", e)))?;

        Ok(AuthSession {
            local_id: account.local_id,
        })
    }
}

#[async_trait]
impl AuthProvider for FirebaseAuthProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        self.call("signUp", email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        self.call("signInWithPassword", email, password).await
    }
}
