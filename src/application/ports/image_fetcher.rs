use async_trait::async_trait;

#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageFetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageFetchError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("status {0}")]
    Status(u16),
}
