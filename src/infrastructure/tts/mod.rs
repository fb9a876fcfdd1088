mod openai_speech_client;

pub use openai_speech_client::OpenAiSpeechClient;
