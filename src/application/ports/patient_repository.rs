use async_trait::async_trait;

use crate::domain::{PatientProfile, ReportRecord, UserKey};

use super::RepositoryError;

#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn save_profile(&self, profile: &PatientProfile) -> Result<(), RepositoryError>;

    async fn get_profile(&self, key: &UserKey) -> Result<Option<PatientProfile>, RepositoryError>;

    /// Inserts or replaces the record with the same `report_id`.
    async fn save_report(&self, key: &UserKey, record: &ReportRecord)
    -> Result<(), RepositoryError>;

    /// Records newest first; `limit` of `None` lists everything.
    async fn list_reports(
        &self,
        key: &UserKey,
        limit: Option<usize>,
    ) -> Result<Vec<ReportRecord>, RepositoryError>;

    async fn delete_report(&self, key: &UserKey, report_id: &str) -> Result<(), RepositoryError>;
}
