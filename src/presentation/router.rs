use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{
    AudioNormalizer, ChatClient, SpeechSynthesizer, TranscriptionEngine,
};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{converse_handler, health_handler, index_handler};
use crate::presentation::state::AppState;

pub fn create_router<N, T, C, S>(state: AppState<N, T, C, S>) -> Router
where
    N: AudioNormalizer + 'static,
    T: TranscriptionEngine + 'static,
    C: ChatClient + 'static,
    S: SpeechSynthesizer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit_bytes = state.settings.upload.max_file_size_mb * 1024 * 1024;

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route(
            "/api/v1/converse",
            post(converse_handler::<N, T, C, S>).layer(DefaultBodyLimit::max(upload_limit_bytes)),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
