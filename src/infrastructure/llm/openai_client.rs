use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{ConversationTurn, ReportImage};

/// Chat completions client for any OpenAI-compatible endpoint (Groq by default).
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.groq.com/openai/v1".to_string()),
        }
    }

    async fn send(&self, request: &ChatCompletionRequest<'_>) -> Result<String, LlmClientError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmClientError::InvalidResponse("no completion content".to_string()))
    }
}

fn image_url_for(image: &ReportImage) -> String {
    match image {
        ReportImage::Encoded(encoded) => encoded.to_data_uri(),
        ReportImage::Url(url) => url.clone(),
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[instrument(skip(self, prompt, image), fields(with_image = image.is_some()))]
    async fn analyze(
        &self,
        model: &str,
        prompt: &str,
        image: Option<&ReportImage>,
    ) -> Result<String, LlmClientError> {
        let mut parts = vec![ContentPart::Text {
            text: prompt.to_string(),
        }];
        if let Some(image) = image {
            parts.push(ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image_url_for(image),
                },
            });
        }

        let request = ChatCompletionRequest {
            model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: MessageContent::Parts(parts),
            }],
        };

        self.send(&request).await
    }

    #[instrument(skip(self, messages), fields(messages = messages.len()))]
    async fn chat(
        &self,
        model: &str,
        messages: &[ConversationTurn],
    ) -> Result<String, LlmClientError> {
        let request = ChatCompletionRequest {
            model,
            messages: messages
                .iter()
                .map(|turn| ChatMessage {
                    role: turn.role.as_str().to_string(),
                    content: MessageContent::Text(turn.content.clone()),
                })
                .collect(),
        };

        self.send(&request).await
    }
}
