mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, MissingCredential, OpenAiSettings, ServerSettings, Settings,
    TranscodeSettings, UploadSettings, resolve_api_key,
};
