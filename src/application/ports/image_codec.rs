use crate::domain::EncodedImage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub bytes: Vec<u8>,
}

/// Conversions between uploaded image bytes, base64 and JPEG.
pub trait ImageCodec: Send + Sync {
    fn encode(&self, bytes: &[u8]) -> Result<EncodedImage, ImageCodecError>;

    fn decode(&self, image: &EncodedImage) -> Result<DecodedImage, ImageCodecError>;

    /// Re-encodes arbitrary supported image bytes as JPEG.
    fn to_jpeg(&self, bytes: &[u8]) -> Result<Vec<u8>, ImageCodecError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageCodecError {
    #[error("empty image data")]
    Empty,
    #[error("invalid base64: {0}")]
    InvalidBase64(String),
    #[error("decoding failed: {0}")]
    DecodingFailed(String),
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
}
