use std::path::PathBuf;

use thiserror::Error;

use crate::llm::LlmError;
use crate::speech::SpeechError;

/// Errors from the local audio store.
///
/// Kept apart from provider errors: these point at local misconfiguration
/// (permissions, missing volume) rather than at the upstream API.
#[derive(Debug, Error)]
pub enum AudioStoreError {
    #[error("audio store I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid audio file name: '{0}'")]
    InvalidFileName(String),
}

/// Errors from a single chat round trip.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid chat request: {0}")]
    Validation(String),

    #[error("text generation failed: {0}")]
    Llm(#[from] LlmError),

    #[error("speech synthesis failed: {0}")]
    Speech(#[from] SpeechError),

    #[error("audio store failed: {0}")]
    Store(#[from] AudioStoreError),
}

/// Errors while building the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("missing required setting: {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}
