mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AttachmentSettings, AuthSettings, DatabaseSettings, ImageGenerationSettings, LlmSettings,
    LoggingSettings, PdfSettings, ServerSettings, SessionSettings, Settings, SpeechSettings,
};
