//! Text-to-speech request/response types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Audio container produced by the speech provider.
///
/// Only MP3 is requested today; the enum keeps the extension and the
/// provider's `response_format` value in one place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
}

impl AudioFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
        }
    }
}

/// Request to synthesize speech from text.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub model: String,
    pub voice: String,
    pub input: String,
    pub format: AudioFormat,
}

/// Synthesized audio returned by a speech provider.
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    pub audio: Vec<u8>,
    pub format: AudioFormat,
}

/// Errors from speech provider operations.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("provider returned no audio")]
    EmptyAudio,

    #[error("speech synthesis timed out after {0:?}")]
    Timeout(Duration),
}

impl SpeechError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, SpeechError::Timeout(_))
    }
}
