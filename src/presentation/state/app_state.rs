use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::AttachmentStore;
use crate::application::services::{
    AccountService, Collaborators, DiagnosisService, FollowUpService, InputNormalizer,
    PipelineModels, QueryPresenter, ReportService,
};

use super::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub normalizer: Arc<InputNormalizer>,
    pub presenter: Arc<QueryPresenter>,
    pub diagnosis: Arc<DiagnosisService>,
    pub followup: Arc<FollowUpService>,
    pub reports: Arc<ReportService>,
    pub accounts: Arc<AccountService>,
    pub attachments: Arc<dyn AttachmentStore>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(collaborators: &Collaborators, models: &PipelineModels) -> Self {
        Self {
            normalizer: Arc::new(InputNormalizer::new(collaborators, models)),
            presenter: Arc::new(QueryPresenter::new(collaborators)),
            diagnosis: Arc::new(DiagnosisService::new(collaborators, models)),
            followup: Arc::new(FollowUpService::new(collaborators, models)),
            reports: Arc::new(ReportService::new(collaborators, models)),
            accounts: Arc::new(AccountService::new(
                Arc::clone(&collaborators.auth),
                Arc::clone(&collaborators.patients),
            )),
            attachments: Arc::clone(&collaborators.attachments),
            sessions: Arc::new(SessionStore::default()),
        }
    }

    pub fn with_session_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.sessions = Arc::new(SessionStore::new(idle_timeout));
        self
    }
}
