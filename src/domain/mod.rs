mod audio;

pub use audio::{AudioFormat, NormalizedAudio, UploadedAudio};
