use base64::Engine;
use base64::engine::general_purpose::STANDARD;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl AudioArtifact {
    pub fn mp3(data: Vec<u8>) -> Self {
        Self {
            data,
            mime_type: "audio/mpeg".to_string(),
        }
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.data))
    }
}
