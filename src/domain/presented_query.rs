use serde::Serialize;

use super::EncodedImage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayImage {
    Decoded {
        width: u32,
        height: u32,
        format: String,
        data_uri: String,
    },
    Url {
        url: String,
    },
}

/// Image source handed to analysis and to the report generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportImage {
    Encoded(EncodedImage),
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuery {
    pub display_image: Option<DisplayImage>,
    pub report_image: Option<ReportImage>,
}
