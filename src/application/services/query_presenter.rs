use std::sync::Arc;

use crate::application::ports::ImageCodec;
use crate::domain::{CanonicalQuery, DisplayImage, PresentedQuery, ReportImage};

use super::{Collaborators, PipelineError};

/// Turns a canonical query into what is shown and what goes into the report.
pub struct QueryPresenter {
    image_codec: Arc<dyn ImageCodec>,
}

impl QueryPresenter {
    pub fn new(collaborators: &Collaborators) -> Self {
        Self {
            image_codec: Arc::clone(&collaborators.image_codec),
        }
    }

    pub fn present(&self, query: &CanonicalQuery) -> Result<PresentedQuery, PipelineError> {
        if let Some(encoded) = &query.encoded_image {
            let decoded = self
                .image_codec
                .decode(encoded)
                .map_err(|e| PipelineError::unavailable("image decoding", e))?;

            let data_uri = format!("data:image/{};base64,{}", decoded.format, encoded.payload());

            return Ok(PresentedQuery {
                display_image: Some(DisplayImage::Decoded {
                    width: decoded.width,
                    height: decoded.height,
                    format: decoded.format,
                    data_uri,
                }),
                report_image: Some(ReportImage::Encoded(encoded.clone())),
            });
        }

        Ok(PresentedQuery {
            display_image: query
                .image_reference
                .clone()
                .map(|url| DisplayImage::Url { url }),
            report_image: query.image_reference.clone().map(ReportImage::Url),
        })
    }
}
