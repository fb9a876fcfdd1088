use voxchat::domain::{AudioFormat, NormalizedAudio, UploadedAudio};

#[test]
fn given_allow_listed_extensions_when_parsed_then_all_resolve() {
    assert_eq!(AudioFormat::from_extension("mp3"), Some(AudioFormat::Mp3));
    assert_eq!(AudioFormat::from_extension("wav"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::from_extension("opus"), Some(AudioFormat::Opus));
}

#[test]
fn given_uppercase_extension_when_parsed_then_resolves() {
    assert_eq!(AudioFormat::from_extension("WAV"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::from_extension("Opus"), Some(AudioFormat::Opus));
}

#[test]
fn given_unknown_extension_when_parsed_then_rejected() {
    assert_eq!(AudioFormat::from_extension("ogg"), None);
    assert_eq!(AudioFormat::from_extension("m4a"), None);
    assert_eq!(AudioFormat::from_extension(""), None);
}

#[test]
fn given_all_formats_when_checking_transcoding_then_only_opus_needs_it() {
    assert!(!AudioFormat::Mp3.needs_transcoding());
    assert!(!AudioFormat::Wav.needs_transcoding());
    assert!(AudioFormat::Opus.needs_transcoding());
}

#[test]
fn given_upload_when_passthrough_then_format_and_bytes_are_preserved() {
    let upload = UploadedAudio::new(AudioFormat::Mp3, b"mp3 payload".to_vec());
    let normalized = NormalizedAudio::passthrough(&upload);

    assert_eq!(normalized.format, upload.format);
    assert_eq!(normalized.data, upload.data);
}
