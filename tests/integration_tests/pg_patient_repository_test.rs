//! Needs a Docker daemon; run with `cargo test --test integration_tests -- --ignored`.

use chrono::{Duration, TimeZone, Utc};

use medvoice::application::ports::PatientRepository;
use medvoice::domain::{PatientProfile, ReportRecord, UserKey};

use crate::helpers::TestPostgres;

fn record(id: &str, minutes: i64) -> ReportRecord {
    ReportRecord {
        report_id: id.to_string(),
        download_link: format!("<a>{}</a>", id),
        created_at: Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes),
    }
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_profile_when_saved_and_read_then_round_trips_through_postgres() {
    let pg = TestPostgres::new().await;
    let profile = PatientProfile::new("Jane Doe", "jane@example.com");

    pg.patient_repository.save_profile(&profile).await.unwrap();
    let updated = PatientProfile::new("Jane M. Doe", "jane@example.com");
    pg.patient_repository.save_profile(&updated).await.unwrap();

    let stored = pg
        .patient_repository
        .get_profile(&profile.key())
        .await
        .unwrap();
    assert_eq!(stored, Some(updated));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_reports_when_listing_then_newest_first_with_limit() {
    let pg = TestPostgres::new().await;
    let key = UserKey::from_email("jane@example.com");
    pg.patient_repository
        .save_profile(&PatientProfile::new("Jane Doe", "jane@example.com"))
        .await
        .unwrap();
    for i in 0..4 {
        pg.patient_repository
            .save_report(&key, &record(&format!("Report_{}", i), i))
            .await
            .unwrap();
    }

    let limited = pg.patient_repository.list_reports(&key, Some(2)).await.unwrap();
    let all = pg.patient_repository.list_reports(&key, None).await.unwrap();

    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].report_id, "Report_3");
    assert_eq!(all.len(), 4);
    assert_eq!(all[3].report_id, "Report_0");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_existing_report_id_when_saving_then_upserts_and_delete_removes() {
    let pg = TestPostgres::new().await;
    let key = UserKey::from_email("jane@example.com");
    pg.patient_repository
        .save_profile(&PatientProfile::new("Jane Doe", "jane@example.com"))
        .await
        .unwrap();

    pg.patient_repository.save_report(&key, &record("Report_x", 0)).await.unwrap();
    let mut replacement = record("Report_x", 1);
    replacement.download_link = "<a>replaced</a>".to_string();
    pg.patient_repository.save_report(&key, &replacement).await.unwrap();

    let all = pg.patient_repository.list_reports(&key, None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].download_link, "<a>replaced</a>");

    pg.patient_repository.delete_report(&key, "Report_x").await.unwrap();
    assert!(pg.patient_repository.list_reports(&key, None).await.unwrap().is_empty());
}
