#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use voxchat::application::ports::{AudioNormalizer, NormalizeError};
use voxchat::domain::{AudioFormat, UploadedAudio};
use voxchat::infrastructure::audio::FfmpegNormalizer;

/// Stand-in transcoder: records its argv and writes fixed bytes to the
/// output path (the last argument), mimicking `ffmpeg -y -i <in> <out>`.
fn fake_transcoder(dir: &Path, body: &str) -> PathBuf {
    let script = dir.join("fake-ffmpeg");
    std::fs::write(&script, body).unwrap();
    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).unwrap();
    script
}

fn recording_transcoder(dir: &Path) -> (PathBuf, PathBuf) {
    let argv_path = dir.join("argv.txt");
    let body = format!(
        "#!/bin/sh\necho \"$@\" > {}\nprintf 'RIFFfake-wav-output' > \"$4\"\n",
        argv_path.display()
    );
    (fake_transcoder(dir, &body), argv_path)
}

#[tokio::test]
async fn given_wav_upload_when_normalized_then_bytes_pass_through_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let (script, argv_path) = recording_transcoder(dir.path());
    let normalizer = FfmpegNormalizer::new(script);

    let upload = UploadedAudio::new(AudioFormat::Wav, b"original wav bytes".to_vec());
    let normalized = normalizer.normalize(&upload).await.unwrap();

    assert_eq!(normalized.data, upload.data);
    assert_eq!(normalized.format, AudioFormat::Wav);
    assert!(!argv_path.exists(), "transcoder must not run for wav");
}

#[tokio::test]
async fn given_mp3_upload_when_normalized_then_bytes_pass_through_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let (script, argv_path) = recording_transcoder(dir.path());
    let normalizer = FfmpegNormalizer::new(script);

    let upload = UploadedAudio::new(AudioFormat::Mp3, b"original mp3 bytes".to_vec());
    let normalized = normalizer.normalize(&upload).await.unwrap();

    assert_eq!(normalized.data, upload.data);
    assert!(!argv_path.exists(), "transcoder must not run for mp3");
}

#[tokio::test]
async fn given_opus_upload_when_normalized_then_transcoder_runs_with_expected_argv() {
    let dir = tempfile::tempdir().unwrap();
    let (script, argv_path) = recording_transcoder(dir.path());
    let normalizer = FfmpegNormalizer::new(script);

    let upload = UploadedAudio::new(AudioFormat::Opus, b"opus bytes".to_vec());
    let normalized = normalizer.normalize(&upload).await.unwrap();

    assert_eq!(normalized.format, AudioFormat::Wav);
    assert_eq!(normalized.data, b"RIFFfake-wav-output");

    let argv = std::fs::read_to_string(&argv_path).unwrap();
    let args: Vec<&str> = argv.split_whitespace().collect();
    assert_eq!(args[0], "-y");
    assert_eq!(args[1], "-i");
    assert!(args[2].ends_with("input.opus"));
    assert!(args[3].ends_with("output.wav"));
}

#[tokio::test]
async fn given_transcoder_exits_nonzero_when_normalized_then_returns_hard_error() {
    let dir = tempfile::tempdir().unwrap();
    let script = fake_transcoder(dir.path(), "#!/bin/sh\necho 'codec boom' >&2\nexit 1\n");
    let normalizer = FfmpegNormalizer::new(script);

    let upload = UploadedAudio::new(AudioFormat::Opus, b"opus bytes".to_vec());
    let result = normalizer.normalize(&upload).await;

    match result {
        Err(NormalizeError::TranscoderFailed(message)) => {
            assert!(message.contains("codec boom"));
        }
        other => panic!("expected TranscoderFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn given_missing_transcoder_when_normalized_then_returns_hard_error() {
    let normalizer = FfmpegNormalizer::new("/nonexistent/path/to/ffmpeg");

    let upload = UploadedAudio::new(AudioFormat::Opus, b"opus bytes".to_vec());
    let result = normalizer.normalize(&upload).await;

    assert!(matches!(result, Err(NormalizeError::TranscoderFailed(_))));
}

#[tokio::test]
async fn given_transcoder_writes_no_output_when_normalized_then_returns_missing_output() {
    let dir = tempfile::tempdir().unwrap();
    let script = fake_transcoder(dir.path(), "#!/bin/sh\nexit 0\n");
    let normalizer = FfmpegNormalizer::new(script);

    let upload = UploadedAudio::new(AudioFormat::Opus, b"opus bytes".to_vec());
    let result = normalizer.normalize(&upload).await;

    assert!(matches!(result, Err(NormalizeError::MissingOutput(_))));
}
