use async_trait::async_trait;

use crate::domain::{NormalizedAudio, UploadedAudio};

#[async_trait]
pub trait AudioNormalizer: Send + Sync {
    async fn normalize(&self, audio: &UploadedAudio) -> Result<NormalizedAudio, NormalizeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("transcoder invocation failed: {0}")]
    TranscoderFailed(String),
    #[error("transcoder produced no output: {0}")]
    MissingOutput(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
