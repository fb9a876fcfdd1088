/// Upload formats the service accepts. Opus is the only one the hosted
/// transcription API rejects, so it is the only one that gets transcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    Wav,
    Opus,
}

impl AudioFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            "opus" => Some(Self::Opus),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Opus => "opus",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Opus => "audio/opus",
        }
    }

    pub fn needs_transcoding(&self) -> bool {
        matches!(self, Self::Opus)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAudio {
    pub format: AudioFormat,
    pub data: Vec<u8>,
}

impl UploadedAudio {
    pub fn new(format: AudioFormat, data: Vec<u8>) -> Self {
        Self { format, data }
    }
}

/// Audio in a format the transcription service accepts. Byte-identical to
/// the upload when no transcoding was required.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAudio {
    pub format: AudioFormat,
    pub data: Vec<u8>,
}

impl NormalizedAudio {
    pub fn new(format: AudioFormat, data: Vec<u8>) -> Self {
        Self { format, data }
    }

    pub fn passthrough(audio: &UploadedAudio) -> Self {
        Self {
            format: audio.format,
            data: audio.data.clone(),
        }
    }
}
