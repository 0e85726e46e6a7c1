use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{PatientRepository, RepositoryError};
use crate::domain::{PatientProfile, ReportRecord, UserKey};

/// Process-local store used when no database is configured.
#[derive(Default)]
pub struct InMemoryPatientRepository {
    profiles: RwLock<HashMap<UserKey, PatientProfile>>,
    reports: RwLock<HashMap<UserKey, Vec<ReportRecord>>>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn save_profile(&self, profile: &PatientProfile) -> Result<(), RepositoryError> {
        self.profiles
            .write()
            .await
            .insert(profile.key(), profile.clone());
        Ok(())
    }

    async fn get_profile(&self, key: &UserKey) -> Result<Option<PatientProfile>, RepositoryError> {
        Ok(self.profiles.read().await.get(key).cloned())
    }

    async fn save_report(
        &self,
        key: &UserKey,
        record: &ReportRecord,
    ) -> Result<(), RepositoryError> {
        let mut reports = self.reports.write().await;
        let records = reports.entry(key.clone()).or_default();
        records.retain(|r| r.report_id != record.report_id);
        records.push(record.clone());
        Ok(())
    }

    async fn list_reports(
        &self,
        key: &UserKey,
        limit: Option<usize>,
    ) -> Result<Vec<ReportRecord>, RepositoryError> {
        let mut records = self
            .reports
            .read()
            .await
            .get(key)
            .cloned()
            .unwrap_or_default();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        Ok(records)
    }

    async fn delete_report(&self, key: &UserKey, report_id: &str) -> Result<(), RepositoryError> {
        if let Some(records) = self.reports.write().await.get_mut(key) {
            records.retain(|r| r.report_id != report_id);
        }
        Ok(())
    }
}
