use reqwest::Url;

use crate::application::ports::{ImageGenerator, ImageGeneratorError};

pub const DEFAULT_IMAGE_SIZE: u32 = 256;

/// Links to images rendered by pollinations.ai from a text prompt.
///
/// The URL is the image; nothing is requested until a client loads it.
#[derive(Debug, Clone)]
pub struct PollinationsImageGenerator {
    base_url: String,
    model: String,
    width: u32,
    height: u32,
}

impl PollinationsImageGenerator {
    pub fn new(base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| "https://pollinations.ai/p/".to_string()),
            model: model.unwrap_or_else(|| "flux".to_string()),
            width: DEFAULT_IMAGE_SIZE,
            height: DEFAULT_IMAGE_SIZE,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for PollinationsImageGenerator {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl ImageGenerator for PollinationsImageGenerator {
    fn image_url(&self, prompt: &str, seed: u32) -> Result<String, ImageGeneratorError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ImageGeneratorError::EmptyPrompt);
        }

        let mut url =
            Url::parse(&self.base_url).map_err(|e| ImageGeneratorError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| ImageGeneratorError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(prompt);

        url.query_pairs_mut()
            .append_pair("width", &self.width.to_string())
            .append_pair("height", &self.height.to_string())
            .append_pair("seed", &seed.to_string())
            .append_pair("model", &self.model)
            .append_pair("nologo", "true");

        Ok(url.to_string())
    }
}
