use std::sync::Arc;

use crate::application::ports::{
    AudioNormalizer, ChatClient, ChatClientError, NormalizeError, SpeechSynthesizer,
    SynthesisError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{NormalizedAudio, UploadedAudio};

/// Runs one voice exchange end to end: normalize the upload, transcribe it,
/// ask the chat model for a reply, synthesize the reply as speech. Stages run
/// strictly in order; a failing stage stops the pipeline.
pub struct ConversationService<N, T, C, S>
where
    N: AudioNormalizer,
    T: TranscriptionEngine,
    C: ChatClient,
    S: SpeechSynthesizer,
{
    normalizer: Arc<N>,
    transcription_engine: Arc<T>,
    chat_client: Arc<C>,
    synthesizer: Arc<S>,
}

impl<N, T, C, S> ConversationService<N, T, C, S>
where
    N: AudioNormalizer,
    T: TranscriptionEngine,
    C: ChatClient,
    S: SpeechSynthesizer,
{
    pub fn new(
        normalizer: Arc<N>,
        transcription_engine: Arc<T>,
        chat_client: Arc<C>,
        synthesizer: Arc<S>,
    ) -> Self {
        Self {
            normalizer,
            transcription_engine,
            chat_client,
            synthesizer,
        }
    }

    pub async fn run(&self, audio: UploadedAudio) -> Result<VoiceExchange, ConversationError> {
        let normalized = self
            .normalizer
            .normalize(&audio)
            .await
            .map_err(ConversationError::Normalize)?;

        tracing::debug!(
            format = normalized.format.extension(),
            bytes = normalized.data.len(),
            "Audio normalized"
        );

        let transcript = self
            .transcription_engine
            .transcribe(&normalized)
            .await
            .map_err(ConversationError::Transcription)?;

        let reply = self
            .chat_client
            .reply(&transcript)
            .await
            .map_err(ConversationError::Chat)?;

        let reply_audio = self
            .synthesizer
            .synthesize(&reply)
            .await
            .map_err(ConversationError::Synthesis)?;

        tracing::info!(
            transcript_chars = transcript.len(),
            reply_chars = reply.len(),
            reply_audio_bytes = reply_audio.len(),
            "Voice exchange completed"
        );

        Ok(VoiceExchange {
            audio: normalized,
            transcript,
            reply,
            reply_audio,
        })
    }
}

/// Everything one exchange produced, in pipeline order.
#[derive(Debug, Clone)]
pub struct VoiceExchange {
    pub audio: NormalizedAudio,
    pub transcript: String,
    pub reply: String,
    pub reply_audio: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    #[error("normalize: {0}")]
    Normalize(NormalizeError),
    #[error("transcription: {0}")]
    Transcription(TranscriptionError),
    #[error("chat: {0}")]
    Chat(ChatClientError),
    #[error("synthesis: {0}")]
    Synthesis(SynthesisError),
}
