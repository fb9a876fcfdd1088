use async_trait::async_trait;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("no text to synthesize")]
    EmptyText,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
