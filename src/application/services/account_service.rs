use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::{AuthError, AuthProvider, PatientRepository, RepositoryError};
use crate::domain::{MAX_RETAINED_REPORTS, PatientProfile, ReportRecord, UserKey};

pub const NO_REPORTS_HTML: &str = "<p>No reports available.</p>";

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Password mismatch.")]
    PasswordMismatch,
    #[error("This email is already registered.")]
    EmailExists,
    #[error("Registration failed. Please try again.")]
    RegistrationFailed(String),
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("User data not found. Please contact support.")]
    ProfileMissing,
    #[error("Login failed. Please try again.")]
    LoginFailed(String),
    #[error("storage: {0}")]
    Storage(#[from] RepositoryError),
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub profile: PatientProfile,
    pub history: Vec<ReportRecord>,
}

/// Concatenates report links the way the history panel shows them.
pub fn render_history(records: &[ReportRecord]) -> String {
    if records.is_empty() {
        return NO_REPORTS_HTML.to_string();
    }
    records
        .iter()
        .map(|r| format!("{}<br><hr>", r.download_link))
        .collect()
}

pub struct AccountService {
    auth: Arc<dyn AuthProvider>,
    patients: Arc<dyn PatientRepository>,
}

impl AccountService {
    pub fn new(auth: Arc<dyn AuthProvider>, patients: Arc<dyn PatientRepository>) -> Self {
        Self { auth, patients }
    }

    #[instrument(skip(self, password, verify_password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        verify_password: &str,
    ) -> Result<PatientProfile, AccountError> {
        if password != verify_password {
            return Err(AccountError::PasswordMismatch);
        }

        let account = self
            .auth
            .sign_up(email, password)
            .await
            .map_err(|e| match e {
                AuthError::EmailExists => AccountError::EmailExists,
                other => AccountError::RegistrationFailed(other.to_string()),
            })?;

        let profile = PatientProfile::new(name, email);
        self.patients.save_profile(&profile).await?;

        tracing::info!(
            user = %profile.key(),
            provider_id = %account.local_id,
            "Patient registered"
        );
        Ok(profile)
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AccountError> {
        let account = self
            .auth
            .sign_in(email, password)
            .await
            .map_err(|e| match e {
                AuthError::InvalidCredentials => AccountError::InvalidCredentials,
                other => AccountError::LoginFailed(other.to_string()),
            })?;

        let key = UserKey::from_email(email);
        let profile = self
            .patients
            .get_profile(&key)
            .await?
            .ok_or(AccountError::ProfileMissing)?;

        let history = self.report_history(email).await?;

        tracing::info!(
            user = %key,
            provider_id = %account.local_id,
            reports = history.len(),
            "Patient logged in"
        );
        Ok(LoginOutcome { profile, history })
    }

    pub async fn report_history(&self, email: &str) -> Result<Vec<ReportRecord>, AccountError> {
        let key = UserKey::from_email(email);
        Ok(self
            .patients
            .list_reports(&key, Some(MAX_RETAINED_REPORTS))
            .await?)
    }
}
