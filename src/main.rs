use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use voxchat::application::services::ConversationService;
use voxchat::infrastructure::audio::{FfmpegNormalizer, OpenAiWhisperEngine};
use voxchat::infrastructure::llm::OpenAiChatClient;
use voxchat::infrastructure::observability::{TracingConfig, init_tracing};
use voxchat::infrastructure::tts::OpenAiSpeechClient;
use voxchat::presentation::{AppState, Environment, Settings, create_router, resolve_api_key};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;

    // Fatal before anything listens: without the credential there is no
    // upload surface to offer.
    let api_key = resolve_api_key(std::env::var("OPENAI_API_KEY").ok())?;

    init_tracing(
        TracingConfig::new(environment.to_string(), settings.logging.json),
        settings.server.port,
    );

    let normalizer = Arc::new(FfmpegNormalizer::new(&settings.transcode.ffmpeg_path));
    let transcription_engine = Arc::new(OpenAiWhisperEngine::new(
        api_key.clone(),
        settings.openai.base_url.clone(),
        settings.openai.transcription_model.clone(),
    ));
    let chat_client = Arc::new(OpenAiChatClient::new(
        api_key.clone(),
        settings.openai.base_url.clone(),
        settings.openai.chat_model.clone(),
        settings.openai.max_reply_tokens,
    ));
    let synthesizer = Arc::new(OpenAiSpeechClient::new(
        api_key,
        settings.openai.base_url.clone(),
        settings.openai.speech_model.clone(),
        settings.openai.voice.clone(),
    ));

    let conversation_service = Arc::new(ConversationService::new(
        normalizer,
        transcription_engine,
        chat_client,
        synthesizer,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        conversation_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
