use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat};

use crate::application::ports::{DecodedImage, ImageCodec, ImageCodecError};
use crate::domain::EncodedImage;

/// [`ImageCodec`] backed by the `image` crate's JPEG and PNG support.
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterImageCodec;

impl RasterImageCodec {
    pub fn new() -> Self {
        Self
    }
}

fn sniff(bytes: &[u8]) -> Result<ImageFormat, ImageCodecError> {
    if bytes.is_empty() {
        return Err(ImageCodecError::Empty);
    }
    image::guess_format(bytes).map_err(|e| ImageCodecError::DecodingFailed(e.to_string()))
}

impl ImageCodec for RasterImageCodec {
    fn encode(&self, bytes: &[u8]) -> Result<EncodedImage, ImageCodecError> {
        sniff(bytes)?;
        Ok(EncodedImage::new(STANDARD.encode(bytes)))
    }

    fn decode(&self, image: &EncodedImage) -> Result<DecodedImage, ImageCodecError> {
        let bytes = STANDARD
            .decode(image.payload().trim())
            .map_err(|e| ImageCodecError::InvalidBase64(e.to_string()))?;
        let format = sniff(&bytes)?;

        let decoded = image::load_from_memory_with_format(&bytes, format)
            .map_err(|e| ImageCodecError::DecodingFailed(e.to_string()))?;

        Ok(DecodedImage {
            width: decoded.width(),
            height: decoded.height(),
            format: format
                .to_mime_type()
                .trim_start_matches("image/")
                .to_string(),
            bytes,
        })
    }

    fn to_jpeg(&self, bytes: &[u8]) -> Result<Vec<u8>, ImageCodecError> {
        let format = sniff(bytes)?;
        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| ImageCodecError::DecodingFailed(e.to_string()))?;

        // JPEG carries no alpha channel.
        let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());

        let mut buffer = Cursor::new(Vec::new());
        rgb.write_to(&mut buffer, ImageFormat::Jpeg)
            .map_err(|e| ImageCodecError::EncodingFailed(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}
