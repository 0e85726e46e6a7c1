use async_trait::async_trait;
use serde::Serialize;

/// Fields the PDF template is filled with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPayload {
    pub name: String,
    pub email: String,
    pub date: String,
    #[serde(rename = "Symptoms")]
    pub symptoms: String,
    #[serde(rename = "Observations")]
    pub observations: String,
    #[serde(rename = "Recommendations")]
    pub recommendations: String,
    #[serde(rename = "Image")]
    pub image: String,
}

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Renders the payload and returns the URL the PDF can be downloaded from.
    async fn render(&self, payload: &ReportPayload) -> Result<String, PdfRenderError>;

    async fn download(&self, url: &str) -> Result<Vec<u8>, PdfRenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PdfRenderError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("no download_url in response")]
    MissingDownloadUrl,
}
