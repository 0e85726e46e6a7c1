/// Builds a link to an illustration rendered on demand by a hosted service.
pub trait ImageGenerator: Send + Sync {
    fn image_url(&self, prompt: &str, seed: u32) -> Result<String, ImageGeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageGeneratorError {
    #[error("empty prompt")]
    EmptyPrompt,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}
