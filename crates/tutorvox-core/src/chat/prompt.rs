//! Persona prompt and per-request chat settings.

use std::time::Duration;

use tutorvox_types::config::ServerConfig;
use tutorvox_types::speech::AudioFormat;

/// Built-in persona: a patient English teacher.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a friendly, patient, and encouraging English teacher.

Help the student practice English in a natural, relaxed, and supportive way.
Use simple explanations, real-life examples, and everyday conversations.

Gently correct mistakes by:
    - Rewriting the sentence correctly
    - Briefly explaining the correction in simple terms

Adapt your language to the student's level.
Encourage the student to continue speaking and ask follow-up questions when appropriate.
Avoid long grammar lectures unless the student asks for them.";

/// Everything the chat orchestrator needs besides its collaborators.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub system_prompt: String,
    pub temperature: f64,
    pub llm_model: String,
    pub tts_model: String,
    pub voice: String,
    pub format: AudioFormat,
    pub llm_timeout: Duration,
    pub tts_timeout: Duration,
}

impl ChatSettings {
    /// Derive chat settings from the server configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            system_prompt: config
                .system_prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            temperature: config.temperature,
            llm_model: config.llm_model.clone(),
            tts_model: config.tts_model.clone(),
            voice: config.voice.clone(),
            format: AudioFormat::Mp3,
            llm_timeout: Duration::from_secs(config.llm_timeout_secs),
            tts_timeout: Duration::from_secs(config.tts_timeout_secs),
        }
    }
}
