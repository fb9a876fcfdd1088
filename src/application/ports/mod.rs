mod audio_normalizer;
mod chat_client;
mod speech_synthesizer;
mod transcription_engine;

pub use audio_normalizer::{AudioNormalizer, NormalizeError};
pub use chat_client::{ChatClient, ChatClientError};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
