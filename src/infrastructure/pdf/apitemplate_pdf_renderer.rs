use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::application::ports::{PdfRenderError, PdfRenderer, ReportPayload};

/// Fills an APITemplate.io PDF template with report fields.
pub struct ApiTemplatePdfRenderer {
    client: Client,
    api_key: String,
    template_id: String,
    base_url: String,
}

#[derive(Deserialize)]
struct CreatePdfResponse {
    download_url: Option<String>,
}

impl ApiTemplatePdfRenderer {
    pub fn new(api_key: String, template_id: String, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            template_id,
            base_url: base_url.unwrap_or_else(|| "https://rest.apitemplate.io".to_string()),
        }
    }
}

#[async_trait]
impl PdfRenderer for ApiTemplatePdfRenderer {
    #[instrument(skip(self, payload), fields(template_id = %self.template_id))]
    async fn render(&self, payload: &ReportPayload) -> Result<String, PdfRenderError> {
        let url = format!("{}/v2/create-pdf", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .query(&[("template_id", self.template_id.as_str())])
            .header("X-API-KEY", &self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| PdfRenderError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PdfRenderError::Rejected { status, body });
        }

        let created: CreatePdfResponse = response
            .json()
            .await
            .map_err(|e| PdfRenderError::ApiRequestFailed(format!("body: {}", e)))?;

        created
            .download_url
            .filter(|u| !u.is_empty())
            .ok_or(PdfRenderError::MissingDownloadUrl)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, PdfRenderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PdfRenderError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PdfRenderError::Rejected { status, body });
        }

        let pdf = response
            .bytes()
            .await
            .map_err(|e| PdfRenderError::ApiRequestFailed(e.to_string()))?;

        tracing::debug!(bytes = pdf.len(), "PDF downloaded");
        Ok(pdf.to_vec())
    }
}
