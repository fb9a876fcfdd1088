use std::sync::Arc;

use crate::application::ports::{AudioNormalizer, ChatClient, SpeechSynthesizer, TranscriptionEngine};
use crate::application::services::ConversationService;
use crate::presentation::config::Settings;

pub struct AppState<N, T, C, S>
where
    N: AudioNormalizer,
    T: TranscriptionEngine,
    C: ChatClient,
    S: SpeechSynthesizer,
{
    pub conversation_service: Arc<ConversationService<N, T, C, S>>,
    pub settings: Settings,
}

impl<N, T, C, S> Clone for AppState<N, T, C, S>
where
    N: AudioNormalizer,
    T: TranscriptionEngine,
    C: ChatClient,
    S: SpeechSynthesizer,
{
    fn clone(&self) -> Self {
        Self {
            conversation_service: Arc::clone(&self.conversation_service),
            settings: self.settings.clone(),
        }
    }
}
