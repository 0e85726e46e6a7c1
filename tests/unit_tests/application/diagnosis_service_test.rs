use std::sync::Arc;

use medvoice::application::services::prompts::{DIAGNOSIS_SYSTEM_PROMPT, UNCLEAR_SPEECH_MESSAGE};
use medvoice::application::services::{
    DiagnosisService, PipelineError, SERVICE_UNAVAILABLE_MESSAGE,
};
use medvoice::domain::{MessageRole, ReportImage};

use crate::helpers::{MOCK_AUDIO, ScriptedLlm, StubSpeech, TestRig};

fn service(rig: &TestRig) -> DiagnosisService {
    DiagnosisService::new(&rig.collaborators(), &TestRig::models())
}

#[tokio::test]
async fn given_description_when_diagnosing_then_response_is_spoken_and_seeds_transcript() {
    let rig = TestRig::default();

    let diagnosis = service(&rig)
        .diagnose("I have a headache", None)
        .await
        .unwrap();

    assert_eq!(diagnosis.response_text, rig.llm.analysis_reply);
    assert_eq!(diagnosis.audio.data, MOCK_AUDIO);
    assert_eq!(diagnosis.audio.mime_type, "audio/mpeg");
    assert_eq!(diagnosis.seed_transcript.len(), 1);
    let seed = &diagnosis.seed_transcript.turns()[0];
    assert_eq!(seed.role, MessageRole::Assistant);
    assert_eq!(seed.content, rig.llm.analysis_reply);

    let calls = rig.llm.analyze_calls.lock().unwrap();
    assert_eq!(calls[0].0, format!("{}I have a headache", DIAGNOSIS_SYSTEM_PROMPT));
    assert!(calls[0].1.is_none());
}

#[tokio::test]
async fn given_empty_transcription_when_diagnosing_then_unclear_speech_notice_is_analyzed() {
    let rig = TestRig::default();

    service(&rig).diagnose("  ", None).await.unwrap();

    let calls = rig.llm.analyze_calls.lock().unwrap();
    assert!(calls[0].0.ends_with(UNCLEAR_SPEECH_MESSAGE));
}

#[tokio::test]
async fn given_image_when_diagnosing_then_image_reaches_analysis() {
    let rig = TestRig::default();
    let image = ReportImage::Url("https://pollinations.ai/p/knee".to_string());

    service(&rig).diagnose("knee pain", Some(&image)).await.unwrap();

    let calls = rig.llm.analyze_calls.lock().unwrap();
    assert_eq!(calls[0].1, Some(image));
}

#[tokio::test]
async fn given_llm_outage_when_diagnosing_then_apology_message() {
    let rig = TestRig {
        llm: Arc::new(ScriptedLlm::failing()),
        ..TestRig::default()
    };

    let error = service(&rig).diagnose("fever", None).await.unwrap_err();

    assert!(matches!(
        error,
        PipelineError::ServiceUnavailable { stage: "analysis", .. }
    ));
    assert_eq!(error.user_message(), SERVICE_UNAVAILABLE_MESSAGE);
}

#[tokio::test]
async fn given_speech_outage_when_diagnosing_then_service_unavailable() {
    let rig = TestRig {
        speech: Arc::new(StubSpeech { fail: true }),
        ..TestRig::default()
    };

    let result = service(&rig).diagnose("fever", None).await;

    assert!(matches!(
        result,
        Err(PipelineError::ServiceUnavailable { stage: "speech synthesis", .. })
    ));
}
