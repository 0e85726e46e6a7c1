use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tokio::sync::oneshot;

use medvoice::application::ports::{SpeechSynthesisError, SpeechSynthesizer};
use medvoice::infrastructure::audio::OpenAiSpeechSynthesizer;

use crate::helpers::{MOCK_AUDIO, spawn_mock_server};

type Captured = Arc<Mutex<Option<Value>>>;

async fn start_mock_speech_server(
    response_status: u16,
    audio: &'static [u8],
) -> (String, oneshot::Sender<()>, Captured) {
    let captured: Captured = Arc::new(Mutex::new(None));
    let sink = captured.clone();

    let app = Router::new().route(
        "/audio/speech",
        post(move |Json(request): Json<Value>| {
            let sink = sink.clone();
            async move {
                *sink.lock().unwrap() = Some(request);
                let status = StatusCode::from_u16(response_status).unwrap();
                (status, audio.to_vec()).into_response()
            }
        }),
    );

    let (base_url, shutdown_tx) = spawn_mock_server(app).await;
    (base_url, shutdown_tx, captured)
}

fn synthesizer(base_url: String) -> OpenAiSpeechSynthesizer {
    OpenAiSpeechSynthesizer::new("test-key".to_string(), Some(base_url), None, None)
}

#[tokio::test]
async fn given_text_when_synthesizing_then_returns_mp3_artifact() {
    let (base_url, shutdown_tx, captured) = start_mock_speech_server(200, MOCK_AUDIO).await;

    let audio = synthesizer(base_url)
        .synthesize("Rest and drink water.")
        .await
        .unwrap();

    assert_eq!(audio.data, MOCK_AUDIO);
    assert_eq!(audio.mime_type, "audio/mpeg");
    let request = captured.lock().unwrap().clone().unwrap();
    assert_eq!(request["model"], "playai-tts");
    assert_eq!(request["voice"], "Aaliyah-PlayAI");
    assert_eq!(request["input"], "Rest and drink water.");
    assert_eq!(request["response_format"], "mp3");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_body_when_synthesizing_then_empty_audio_error() {
    let (base_url, shutdown_tx, _) = start_mock_speech_server(200, b"").await;

    let result = synthesizer(base_url).synthesize("hello").await;

    assert!(matches!(result, Err(SpeechSynthesisError::EmptyAudio)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_synthesizing_then_api_request_failed() {
    let (base_url, shutdown_tx, _) = start_mock_speech_server(503, b"unavailable").await;

    let result = synthesizer(base_url).synthesize("hello").await;

    assert!(matches!(result, Err(SpeechSynthesisError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}
