mod ffmpeg_normalizer;
mod openai_whisper_engine;

pub use ffmpeg_normalizer::FfmpegNormalizer;
pub use openai_whisper_engine::OpenAiWhisperEngine;
