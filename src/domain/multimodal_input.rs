use std::path::Path;

/// What kind of evidence an uploaded file carries, judged by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Audio,
    Image,
    Unsupported,
}

impl AttachmentKind {
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("mp3") | Some("wav") => AttachmentKind::Audio,
            Some("jpg") | Some("jpeg") | Some("png") => AttachmentKind::Image,
            _ => AttachmentKind::Unsupported,
        }
    }
}

/// Reference to a file staged in the attachment store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub key: String,
    pub file_name: String,
}

impl Attachment {
    pub fn new(key: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            file_name: file_name.into(),
        }
    }

    pub fn kind(&self) -> AttachmentKind {
        AttachmentKind::from_file_name(&self.file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultimodalInput {
    Text(String),
    Structured {
        text: Option<String>,
        attachments: Vec<Attachment>,
    },
}

impl MultimodalInput {
    /// Inline text, trimmed. Blank text counts as absent.
    pub fn inline_text(&self) -> Option<&str> {
        let text = match self {
            MultimodalInput::Text(text) => Some(text.as_str()),
            MultimodalInput::Structured { text, .. } => text.as_deref(),
        };
        text.map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn attachments(&self) -> &[Attachment] {
        match self {
            MultimodalInput::Text(_) => &[],
            MultimodalInput::Structured { attachments, .. } => attachments,
        }
    }

    pub fn first_audio(&self) -> Option<&Attachment> {
        self.attachments()
            .iter()
            .find(|a| a.kind() == AttachmentKind::Audio)
    }

    pub fn first_image(&self) -> Option<&Attachment> {
        self.attachments()
            .iter()
            .find(|a| a.kind() == AttachmentKind::Image)
    }
}
