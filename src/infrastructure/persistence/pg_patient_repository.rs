use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{PatientRepository, RepositoryError};
use crate::domain::{PatientProfile, ReportRecord, UserKey};

pub struct PgPatientRepository {
    pool: PgPool,
}

impl PgPatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatientRepository for PgPatientRepository {
    #[instrument(skip(self, profile), fields(user = %profile.key()))]
    async fn save_profile(&self, profile: &PatientProfile) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO patients (user_key, name, email)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_key) DO UPDATE SET name = EXCLUDED.name, email = EXCLUDED.email
            "#,
        )
        .bind(profile.key().as_str())
        .bind(&profile.name)
        .bind(&profile.email)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(user = %key))]
    async fn get_profile(&self, key: &UserKey) -> Result<Option<PatientProfile>, RepositoryError> {
        let row = sqlx::query("SELECT name, email FROM patients WHERE user_key = $1")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.map(|r| {
            Ok(PatientProfile {
                name: r
                    .try_get("name")
                    .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?,
                email: r
                    .try_get("email")
                    .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?,
            })
        })
        .transpose()
    }

    #[instrument(skip(self, record), fields(user = %key, report_id = %record.report_id))]
    async fn save_report(
        &self,
        key: &UserKey,
        record: &ReportRecord,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO patient_reports (user_key, report_id, download_link, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_key, report_id)
            DO UPDATE SET download_link = EXCLUDED.download_link, created_at = EXCLUDED.created_at
            "#,
        )
        .bind(key.as_str())
        .bind(&record.report_id)
        .bind(&record.download_link)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(user = %key))]
    async fn list_reports(
        &self,
        key: &UserKey,
        limit: Option<usize>,
    ) -> Result<Vec<ReportRecord>, RepositoryError> {
        let limit = limit.map(|l| l as i64);

        let rows = sqlx::query(
            r#"
            SELECT report_id, download_link, created_at
            FROM patient_reports
            WHERE user_key = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(key.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.into_iter()
            .map(|r| {
                let created_at: DateTime<Utc> = r
                    .try_get("created_at")
                    .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;
                Ok(ReportRecord {
                    report_id: r
                        .try_get("report_id")
                        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?,
                    download_link: r
                        .try_get("download_link")
                        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?,
                    created_at,
                })
            })
            .collect()
    }

    #[instrument(skip(self), fields(user = %key))]
    async fn delete_report(&self, key: &UserKey, report_id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM patient_reports WHERE user_key = $1 AND report_id = $2")
            .bind(key.as_str())
            .bind(report_id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}
