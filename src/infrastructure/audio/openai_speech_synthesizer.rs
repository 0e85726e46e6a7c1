use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizer};
use crate::domain::AudioArtifact;

pub struct OpenAiSpeechSynthesizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    voice: String,
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    response_format: &'a str,
}

impl OpenAiSpeechSynthesizer {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        voice: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.groq.com/openai/v1".to_string()),
            model: model.unwrap_or_else(|| "playai-tts".to_string()),
            voice: voice.unwrap_or_else(|| "Aaliyah-PlayAI".to_string()),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<AudioArtifact, SpeechSynthesisError> {
        let url = format!("{}/audio/speech", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&SpeechRequest {
                model: &self.model,
                voice: &self.voice,
                input: text,
                response_format: "mp3",
            })
            .send()
            .await
            .map_err(|e| SpeechSynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechSynthesisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechSynthesisError::ApiRequestFailed(format!("body: {}", e)))?;

        if audio.is_empty() {
            return Err(SpeechSynthesisError::EmptyAudio);
        }

        tracing::info!(bytes = audio.len(), voice = %self.voice, "Speech synthesized");
        Ok(AudioArtifact::mp3(audio.to_vec()))
    }
}
