use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioNormalizer, NormalizeError};
use crate::domain::{AudioFormat, NormalizedAudio, UploadedAudio};

/// Rewrites uploads the transcription API cannot ingest (opus) to WAV by
/// shelling out to ffmpeg. Everything else passes through untouched.
///
/// The upload and the transcoded output live in a per-call temporary
/// directory that is removed when the call returns, on success and on
/// every failure path.
pub struct FfmpegNormalizer {
    ffmpeg_path: PathBuf,
}

impl FfmpegNormalizer {
    pub fn new(ffmpeg_path: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }

    async fn transcode(&self, audio: &UploadedAudio) -> Result<NormalizedAudio, NormalizeError> {
        let workspace = tempfile::tempdir()?;
        let input_path = workspace
            .path()
            .join(format!("input.{}", audio.format.extension()));
        let output_path = workspace.path().join("output.wav");

        tokio::fs::write(&input_path, &audio.data).await?;

        tracing::debug!(
            transcoder = %self.ffmpeg_path.display(),
            input = %input_path.display(),
            "Transcoding upload to wav"
        );

        let output = Command::new(&self.ffmpeg_path)
            .arg("-y")
            .arg("-i")
            .arg(&input_path)
            .arg(&output_path)
            .output()
            .await
            .map_err(|e| {
                NormalizeError::TranscoderFailed(format!(
                    "failed to run {}: {}",
                    self.ffmpeg_path.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NormalizeError::TranscoderFailed(format!(
                "exit status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let data = tokio::fs::read(&output_path).await.map_err(|e| {
            NormalizeError::MissingOutput(format!("{}: {}", output_path.display(), e))
        })?;

        if data.is_empty() {
            return Err(NormalizeError::MissingOutput(format!(
                "{} is empty",
                output_path.display()
            )));
        }

        tracing::info!(bytes = data.len(), "Transcoding completed");

        Ok(NormalizedAudio::new(AudioFormat::Wav, data))
    }
}

#[async_trait]
impl AudioNormalizer for FfmpegNormalizer {
    async fn normalize(&self, audio: &UploadedAudio) -> Result<NormalizedAudio, NormalizeError> {
        if audio.format.needs_transcoding() {
            self.transcode(audio).await
        } else {
            Ok(NormalizedAudio::passthrough(audio))
        }
    }
}
