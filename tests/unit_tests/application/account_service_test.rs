use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use medvoice::application::ports::PatientRepository;
use medvoice::application::services::{
    AccountError, AccountService, NO_REPORTS_HTML, render_history,
};
use medvoice::domain::{ReportRecord, UserKey};

use crate::helpers::{StubAuth, TestRig};

fn service(rig: &TestRig) -> AccountService {
    AccountService::new(rig.auth.clone(), rig.patients.clone())
}

fn record(id: &str, minutes: i64) -> ReportRecord {
    ReportRecord {
        report_id: id.to_string(),
        download_link: format!("<a>{}</a>", id),
        created_at: Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap() + Duration::minutes(minutes),
    }
}

#[tokio::test]
async fn given_mismatched_passwords_when_registering_then_rejected_before_provider() {
    let rig = TestRig::default();

    let result = service(&rig)
        .register("Jane Doe", "jane@example.com", "secret-1", "secret-2")
        .await;

    assert!(matches!(result, Err(AccountError::PasswordMismatch)));
    assert!(rig.auth.accounts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_new_patient_when_registering_then_profile_is_stored() {
    let rig = TestRig::default();

    let profile = service(&rig)
        .register("Jane Doe", "jane@example.com", "secret", "secret")
        .await
        .unwrap();

    let stored = rig
        .patients
        .get_profile(&UserKey::from_email("jane@example.com"))
        .await
        .unwrap();
    assert_eq!(stored, Some(profile));
}

#[tokio::test]
async fn given_registered_email_when_registering_again_then_email_exists() {
    let rig = TestRig::default();
    let accounts = service(&rig);
    accounts
        .register("Jane Doe", "jane@example.com", "secret", "secret")
        .await
        .unwrap();

    let result = accounts
        .register("Jane Again", "jane@example.com", "secret", "secret")
        .await;

    assert!(matches!(result, Err(AccountError::EmailExists)));
}

#[tokio::test]
async fn given_registered_patient_when_logging_in_then_profile_and_empty_history() {
    let rig = TestRig::default();
    let accounts = service(&rig);
    accounts
        .register("Jane Doe", "jane@example.com", "secret", "secret")
        .await
        .unwrap();

    let outcome = accounts.login("jane@example.com", "secret").await.unwrap();

    assert_eq!(outcome.profile.name, "Jane Doe");
    assert!(outcome.history.is_empty());
    assert_eq!(render_history(&outcome.history), NO_REPORTS_HTML);
}

#[tokio::test]
async fn given_wrong_password_when_logging_in_then_invalid_credentials() {
    let rig = TestRig {
        auth: Arc::new(StubAuth::with_account("jane@example.com", "secret")),
        ..TestRig::default()
    };

    let result = service(&rig).login("jane@example.com", "guess").await;

    assert!(matches!(result, Err(AccountError::InvalidCredentials)));
}

#[tokio::test]
async fn given_account_without_profile_when_logging_in_then_profile_missing() {
    let rig = TestRig {
        auth: Arc::new(StubAuth::with_account("ghost@example.com", "secret")),
        ..TestRig::default()
    };

    let result = service(&rig).login("ghost@example.com", "secret").await;

    assert!(matches!(result, Err(AccountError::ProfileMissing)));
}

#[tokio::test]
async fn given_provider_outage_when_registering_or_logging_in_then_generic_failures() {
    let rig = TestRig {
        auth: Arc::new(StubAuth {
            outage: true,
            ..StubAuth::default()
        }),
        ..TestRig::default()
    };
    let accounts = service(&rig);

    let registration = accounts
        .register("Jane Doe", "jane@example.com", "secret", "secret")
        .await;
    let login = accounts.login("jane@example.com", "secret").await;

    assert!(matches!(registration, Err(AccountError::RegistrationFailed(_))));
    assert!(matches!(login, Err(AccountError::LoginFailed(_))));
}

#[tokio::test]
async fn given_seven_reports_when_reading_history_then_newest_five() {
    let rig = TestRig::default();
    let key = UserKey::from_email("jane@example.com");
    for i in 0..7 {
        rig.patients
            .save_report(&key, &record(&format!("Report_{}", i), i))
            .await
            .unwrap();
    }

    let history = service(&rig).report_history("jane@example.com").await.unwrap();

    let ids: Vec<&str> = history.iter().map(|r| r.report_id.as_str()).collect();
    assert_eq!(ids, vec!["Report_6", "Report_5", "Report_4", "Report_3", "Report_2"]);
}

#[test]
fn given_records_when_rendering_history_then_links_are_separated_by_rules() {
    let html = render_history(&[record("Report_b", 1), record("Report_a", 0)]);

    assert_eq!(html, "<a>Report_b</a><br><hr><a>Report_a</a><br><hr>");
}
