use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use base64::Engine;
use serde::Serialize;

use crate::application::ports::{
    AudioNormalizer, ChatClient, SpeechSynthesizer, TranscriptionEngine,
};
use crate::domain::{AudioFormat, UploadedAudio};
use crate::infrastructure::observability::sanitize_transcript;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ConverseResponse {
    pub transcript: String,
    pub reply: String,
    pub input_audio: AudioArtifact,
    pub reply_audio: AudioArtifact,
}

#[derive(Serialize)]
pub struct AudioArtifact {
    pub media_type: &'static str,
    pub base64: String,
}

impl AudioArtifact {
    fn new(media_type: &'static str, data: &[u8]) -> Self {
        Self {
            media_type,
            base64: base64::engine::general_purpose::STANDARD.encode(data),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn converse_handler<N, T, C, S>(
    State(state): State<AppState<N, T, C, S>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    N: AudioNormalizer + 'static,
    T: TranscriptionEngine + 'static,
    C: ChatClient + 'static,
    S: SpeechSynthesizer + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Converse request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No voice file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = match field.file_name() {
        Some(name) => name.to_string(),
        None => {
            tracing::warn!("Upload without a filename");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Uploaded file has no name".to_string(),
                }),
            )
                .into_response();
        }
    };

    let extension = filename.rsplit('.').next().unwrap_or_default();
    let format = match AudioFormat::from_extension(extension) {
        Some(f) => f,
        None => {
            tracing::warn!(filename = %filename, "Unsupported upload extension");
            return (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse {
                    error: format!("Unsupported file type: .{} (use mp3, wav or opus)", extension),
                }),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(
        filename = %filename,
        format = format.extension(),
        bytes = data.len(),
        "Voice upload received"
    );

    let upload = UploadedAudio::new(format, data.to_vec());

    match state.conversation_service.run(upload).await {
        Ok(exchange) => {
            tracing::info!(
                transcript = %sanitize_transcript(&exchange.transcript),
                "Voice exchange succeeded"
            );
            (
                StatusCode::OK,
                Json(ConverseResponse {
                    input_audio: AudioArtifact::new(
                        exchange.audio.format.mime_type(),
                        &exchange.audio.data,
                    ),
                    reply_audio: AudioArtifact::new("audio/mpeg", &exchange.reply_audio),
                    transcript: exchange.transcript,
                    reply: exchange.reply,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Voice exchange failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("voice exchange failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
