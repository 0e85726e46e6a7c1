use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    language: String,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

fn mime_for(file_name: &str) -> Result<&'static str, TranscriptionError> {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".mp3") {
        Ok("audio/mpeg")
    } else if lower.ends_with(".wav") {
        Ok("audio/wav")
    } else {
        Err(TranscriptionError::UnsupportedFormat(file_name.to_string()))
    }
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.groq.com/openai/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-large-v3-turbo".to_string()),
            language: "en".to_string(),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        file_name: &str,
    ) -> Result<String, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url.trim_end_matches('/'));

        let file_part = multipart::Part::bytes(audio_data.to_vec())
            .file_name(file_name.to_string())
            .mime_str(mime_for(file_name)?)
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", self.language.clone())
            .text("response_format", "json")
            .part("file", file_part);

        tracing::debug!(model = %self.model, bytes = audio_data.len(), "Sending audio for transcription");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let transcript: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("body: {}", e)))?;

        tracing::info!(chars = transcript.text.len(), "Transcription completed");

        Ok(transcript.text.trim().to_string())
    }
}
