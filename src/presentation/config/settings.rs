use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub speech: SpeechSettings,
    pub image_generation: ImageGenerationSettings,
    pub pdf: PdfSettings,
    pub auth: AuthSettings,
    pub database: DatabaseSettings,
    pub attachments: AttachmentSettings,
    pub sessions: SessionSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.<env>.toml` (optional) under `APP_*` variables,
    /// e.g. `APP_LLM__API_KEY` or `APP_SERVER__PORT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str().to_lowercase()))
                    .required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub analysis_model: String,
    pub image_prompt_model: String,
    pub transcription_model: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: None,
            analysis_model: "meta-llama/llama-4-maverick-17b-128e-instruct".to_string(),
            image_prompt_model: "compound-beta-mini".to_string(),
            transcription_model: "whisper-large-v3-turbo".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub model: String,
    pub voice: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            model: "playai-tts".to_string(),
            voice: "Aaliyah-PlayAI".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageGenerationSettings {
    pub base_url: String,
    pub model: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ImageGenerationSettings {
    fn default() -> Self {
        Self {
            base_url: "https://pollinations.ai/p/".to_string(),
            model: "flux".to_string(),
            width: 256,
            height: 256,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PdfSettings {
    pub api_key: String,
    pub template_id: String,
    pub base_url: Option<String>,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            template_id: "db277b23f34421f2".to_string(),
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub api_key: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Without a url, patient data lives in memory for the process lifetime.
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Sessions unused for this long are dropped.
    pub idle_timeout_minutes: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            idle_timeout_minutes: 60,
        }
    }
}

impl SessionSettings {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_minutes.max(1) * 60)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AttachmentSettings {
    pub directory: PathBuf,
    pub max_upload_mb: usize,
}

impl Default for AttachmentSettings {
    fn default() -> Self {
        Self {
            directory: std::env::temp_dir().join("medvoice-uploads"),
            max_upload_mb: 25,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,medvoice=debug,tower_http=debug".to_string(),
            json_format: false,
        }
    }
}
