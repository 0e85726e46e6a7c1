use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tokio::sync::oneshot;

use medvoice::application::ports::{PdfRenderError, PdfRenderer, ReportPayload};
use medvoice::infrastructure::pdf::ApiTemplatePdfRenderer;

use crate::helpers::{PDF_BYTES, spawn_mock_server};

#[derive(Default, Clone)]
struct Seen {
    template_id: Option<String>,
    api_key: Option<String>,
    body: Option<Value>,
}

async fn start_mock_apitemplate_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>, Arc<Mutex<Seen>>) {
    let seen = Arc::new(Mutex::new(Seen::default()));
    let sink = seen.clone();

    let app = Router::new()
        .route(
            "/v2/create-pdf",
            post(
                move |Query(params): Query<HashMap<String, String>>,
                      headers: HeaderMap,
                      Json(body): Json<Value>| {
                    let sink = sink.clone();
                    async move {
                        *sink.lock().unwrap() = Seen {
                            template_id: params.get("template_id").cloned(),
                            api_key: headers
                                .get("x-api-key")
                                .and_then(|v| v.to_str().ok())
                                .map(String::from),
                            body: Some(body),
                        };
                        let status = StatusCode::from_u16(response_status).unwrap();
                        (status, response_body).into_response()
                    }
                },
            ),
        )
        .route("/files/report.pdf", get(|| async { PDF_BYTES.to_vec() }));

    let (base_url, shutdown_tx) = spawn_mock_server(app).await;
    (base_url, shutdown_tx, seen)
}

fn payload() -> ReportPayload {
    ReportPayload {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        date: "March 05, 2026".to_string(),
        symptoms: "<p>Headache</p>".to_string(),
        observations: "<p>Tension type</p>".to_string(),
        recommendations: "<p>Rest</p>".to_string(),
        image: String::new(),
    }
}

fn renderer(base_url: String) -> ApiTemplatePdfRenderer {
    ApiTemplatePdfRenderer::new(
        "pdf-key".to_string(),
        "db277b23f34421f2".to_string(),
        Some(base_url),
    )
}

#[tokio::test]
async fn given_payload_when_rendering_then_template_fields_are_posted_and_url_returned() {
    let (base_url, shutdown_tx, seen) = start_mock_apitemplate_server(
        200,
        r#"{"download_url": "https://files.example.test/r.pdf", "status": "success"}"#,
    )
    .await;

    let url = renderer(base_url).render(&payload()).await.unwrap();

    assert_eq!(url, "https://files.example.test/r.pdf");
    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.template_id.as_deref(), Some("db277b23f34421f2"));
    assert_eq!(seen.api_key.as_deref(), Some("pdf-key"));
    let body = seen.body.unwrap();
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["Symptoms"], "<p>Headache</p>");
    assert_eq!(body["Observations"], "<p>Tension type</p>");
    assert_eq!(body["Recommendations"], "<p>Rest</p>");
    assert_eq!(body["Image"], "");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_download_url_when_rendering_then_missing_download_url() {
    let (base_url, shutdown_tx, _) =
        start_mock_apitemplate_server(200, r#"{"status": "error"}"#).await;

    let result = renderer(base_url).render(&payload()).await;

    assert!(matches!(result, Err(PdfRenderError::MissingDownloadUrl)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rejected_key_when_rendering_then_status_and_body_are_kept() {
    let (base_url, shutdown_tx, _) =
        start_mock_apitemplate_server(401, r#"{"message": "invalid key"}"#).await;

    let result = renderer(base_url).render(&payload()).await;

    match result {
        Err(PdfRenderError::Rejected { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid key"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_download_url_when_downloading_then_returns_pdf_bytes() {
    let (base_url, shutdown_tx, _) = start_mock_apitemplate_server(200, "{}").await;

    let pdf = renderer(base_url.clone())
        .download(&format!("{}/files/report.pdf", base_url))
        .await
        .unwrap();

    assert_eq!(pdf, PDF_BYTES);
    shutdown_tx.send(()).ok();
}
