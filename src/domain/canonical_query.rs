use serde::Serialize;

/// Base64 (standard alphabet) rendition of an uploaded image file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn new(base64: impl Into<String>) -> Self {
        Self(base64.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Payload without any `data:image/...;base64,` prefix.
    pub fn payload(&self) -> &str {
        match self.0.strip_prefix("data:image") {
            Some(rest) => rest.split_once(',').map(|(_, data)| data).unwrap_or(rest),
            None => &self.0,
        }
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:image/jpeg;base64,{}", self.payload())
    }
}

/// One user turn reduced to text plus at most one image source.
///
/// `encoded_image` and `image_reference` are never both set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CanonicalQuery {
    pub transcribed_text: String,
    pub encoded_image: Option<EncodedImage>,
    pub image_reference: Option<String>,
}

impl CanonicalQuery {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            transcribed_text: text.into(),
            ..Self::default()
        }
    }
}
