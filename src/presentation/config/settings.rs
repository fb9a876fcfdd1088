use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: OpenAiSettings,
    pub upload: UploadSettings,
    pub transcode: TranscodeSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    pub base_url: String,
    pub transcription_model: String,
    pub chat_model: String,
    pub max_reply_tokens: u32,
    pub speech_model: String,
    pub voice: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscodeSettings {
    pub ffmpeg_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    /// Layered load: built-in defaults, then an optional
    /// `appsettings.{environment}.toml`, then `APP_`-prefixed environment
    /// variables (e.g. `APP_SERVER_PORT`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("openai.base_url", "https://api.openai.com/v1")?
            .set_default("openai.transcription_model", "whisper-1")?
            .set_default("openai.chat_model", "gpt-4")?
            .set_default("openai.max_reply_tokens", 200)?
            .set_default("openai.speech_model", "gpt-4o-mini-tts")?
            .set_default("openai.voice", "alloy")?
            .set_default("upload.max_file_size_mb", 25)?
            .set_default("transcode.ffmpeg_path", "ffmpeg")?
            .set_default("logging.json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("_")
                    .list_separator(" "),
            )
            .build()?;

        configuration.try_deserialize()
    }
}

/// The hosted-API credential is the one fatal precondition: without it the
/// service must halt before the upload surface exists. Pure so the rule is
/// testable without touching process state; `main` feeds it
/// `std::env::var("OPENAI_API_KEY").ok()`.
pub fn resolve_api_key(raw: Option<String>) -> Result<String, MissingCredential> {
    match raw {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(MissingCredential),
    }
}

#[derive(Debug, thiserror::Error)]
#[error("OPENAI_API_KEY is not set; refusing to start")]
pub struct MissingCredential;
