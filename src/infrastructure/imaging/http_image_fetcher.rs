use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{ImageFetchError, ImageFetcher};

pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageFetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageFetchError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageFetchError::Status(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageFetchError::RequestFailed(e.to_string()))?;

        tracing::debug!(bytes = bytes.len(), "Image fetched");
        Ok(bytes.to_vec())
    }
}
