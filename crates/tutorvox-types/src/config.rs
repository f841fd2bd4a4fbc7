//! Server configuration types for tutorvox.
//!
//! `ServerConfig` represents `tutorvox.toml` after environment overrides have
//! been applied. All fields have sensible defaults; the API key is handled
//! separately by the infra loader so it never lands in this struct.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the tutorvox server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model identifier for text generation.
    #[serde(default = "default_llm_model")]
    pub llm_model: String,

    /// Model identifier for speech synthesis.
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    /// Externally visible base URL of this server.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,

    /// Directory holding generated audio files.
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,

    /// Voice identifier passed to the speech provider.
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Sampling temperature for text generation.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Persona prompt; `None` selects the built-in English teacher.
    #[serde(default)]
    pub system_prompt: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub llm_timeout_secs: u64,

    #[serde(default = "default_timeout_secs")]
    pub tts_timeout_secs: u64,
}

/// URL path prefix under which the audio store is served.
pub const AUDIO_MOUNT_PATH: &str = "/audio";

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_tts_model() -> String {
    "gpt-4o-mini-tts".to_string()
}

fn default_public_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("audio")
}

fn default_voice() -> String {
    "marin".to_string()
}

fn default_temperature() -> f64 {
    0.8
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            llm_model: default_llm_model(),
            tts_model: default_tts_model(),
            public_base_url: default_public_base_url(),
            audio_dir: default_audio_dir(),
            voice: default_voice(),
            temperature: default_temperature(),
            system_prompt: None,
            llm_timeout_secs: default_timeout_secs(),
            tts_timeout_secs: default_timeout_secs(),
        }
    }
}
