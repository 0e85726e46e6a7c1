use std::sync::Arc;

use medvoice::application::services::{
    AUDIO_NOT_FOUND_MESSAGE, FollowUpOutcome, FollowUpService, PipelineError,
    TRANSCRIPTION_FAILED_MESSAGE, UNCLEAR_INPUT_MESSAGE,
};
use medvoice::domain::{Attachment, MessageRole, MultimodalInput, Transcript};

use crate::helpers::{ScriptedLlm, StubTranscription, TestRig};

fn service(rig: &TestRig) -> FollowUpService {
    FollowUpService::new(&rig.collaborators(), &TestRig::models())
}

fn seeded() -> Transcript {
    Transcript::seeded("It sounds like a tension headache.")
}

#[tokio::test]
async fn given_text_question_when_advancing_then_user_and_assistant_turns_are_appended() {
    let rig = TestRig::default();
    let transcript = seeded();

    let follow_up = service(&rig)
        .advance(
            &MultimodalInput::Text("Should I take ibuprofen?".to_string()),
            &transcript,
        )
        .await
        .unwrap();

    assert_eq!(follow_up.outcome, FollowUpOutcome::Answered);
    assert_eq!(follow_up.reply, rig.llm.chat_reply);
    assert_eq!(follow_up.transcript.len(), transcript.len() + 2);
    let turns = follow_up.transcript.turns();
    assert_eq!(turns[1].role, MessageRole::User);
    assert_eq!(turns[1].content, "Should I take ibuprofen?");
    assert_eq!(turns[2].role, MessageRole::Assistant);

    let chats = rig.llm.chat_calls.lock().unwrap();
    assert_eq!(chats[0].len(), 2);
    assert_eq!(chats[0][1].content, "Should I take ibuprofen?");
}

#[tokio::test]
async fn given_no_text_or_audio_when_advancing_then_transcript_is_unchanged() {
    let rig = TestRig::default();
    let transcript = seeded();
    let input = MultimodalInput::Structured {
        text: None,
        attachments: vec![Attachment::new("1/notes.pdf", "notes.pdf")],
    };

    let follow_up = service(&rig).advance(&input, &transcript).await.unwrap();

    assert_eq!(follow_up.outcome, FollowUpOutcome::Clarification);
    assert_eq!(follow_up.reply, UNCLEAR_INPUT_MESSAGE);
    assert_eq!(follow_up.transcript, transcript);
    assert!(rig.llm.chat_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_audio_question_when_advancing_then_transcription_becomes_user_turn() {
    let rig = TestRig {
        transcription: Arc::new(StubTranscription::replying("Is it contagious?")),
        ..TestRig::default()
    };
    let audio = rig.attachments.stage("question.wav", b"wav").await;
    let input = MultimodalInput::Structured {
        text: None,
        attachments: vec![audio],
    };

    let follow_up = service(&rig).advance(&input, &seeded()).await.unwrap();

    assert_eq!(follow_up.transcript.turns()[1].content, "Is it contagious?");
}

#[tokio::test]
async fn given_missing_audio_file_when_advancing_then_asks_to_retry() {
    let rig = TestRig::default();
    let input = MultimodalInput::Structured {
        text: None,
        attachments: vec![Attachment::new("gone/question.mp3", "question.mp3")],
    };

    let follow_up = service(&rig).advance(&input, &seeded()).await.unwrap();

    assert_eq!(follow_up.outcome, FollowUpOutcome::Clarification);
    assert_eq!(follow_up.reply, AUDIO_NOT_FOUND_MESSAGE);
    assert_eq!(follow_up.transcript, seeded());
}

#[tokio::test]
async fn given_transcription_failure_when_advancing_then_asks_to_retry() {
    let rig = TestRig {
        transcription: Arc::new(StubTranscription::failing()),
        ..TestRig::default()
    };
    let audio = rig.attachments.stage("question.mp3", b"mp3").await;
    let input = MultimodalInput::Structured {
        text: None,
        attachments: vec![audio],
    };

    let follow_up = service(&rig).advance(&input, &seeded()).await.unwrap();

    assert_eq!(follow_up.reply, TRANSCRIPTION_FAILED_MESSAGE);
    assert_eq!(follow_up.transcript.len(), 1);
}

#[tokio::test]
async fn given_silent_audio_when_advancing_then_unclear_input_message() {
    let rig = TestRig {
        transcription: Arc::new(StubTranscription::replying("   ")),
        ..TestRig::default()
    };
    let audio = rig.attachments.stage("silence.wav", b"wav").await;
    let input = MultimodalInput::Structured {
        text: None,
        attachments: vec![audio],
    };

    let follow_up = service(&rig).advance(&input, &seeded()).await.unwrap();

    assert_eq!(follow_up.reply, UNCLEAR_INPUT_MESSAGE);
}

#[tokio::test]
async fn given_llm_outage_when_advancing_then_service_unavailable() {
    let rig = TestRig {
        llm: Arc::new(ScriptedLlm::failing()),
        ..TestRig::default()
    };

    let result = service(&rig)
        .advance(&MultimodalInput::Text("still hurts".to_string()), &seeded())
        .await;

    assert!(matches!(
        result,
        Err(PipelineError::ServiceUnavailable { stage: "text generation", .. })
    ));
}
