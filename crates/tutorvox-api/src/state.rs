//! Application state wiring the chat service together.
//!
//! `ChatService` is generic over the provider and store traits; AppState pins
//! it to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tutorvox_core::chat::prompt::ChatSettings;
use tutorvox_core::chat::service::ChatService;
use tutorvox_infra::audio::LocalAudioStore;
use tutorvox_infra::config::AppConfig;
use tutorvox_infra::llm::openai_compat::OpenAiCompatibleProvider;
use tutorvox_infra::llm::openai_compat::config::{OpenAiCompatConfig, provider_name_for};
use tutorvox_infra::speech::openai::OpenAiSpeechProvider;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteChatService =
    ChatService<OpenAiCompatibleProvider, OpenAiSpeechProvider, LocalAudioStore>;

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub audio_dir: PathBuf,
}

impl AppState {
    /// Build providers from `config`, create the audio directory, wire the service.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let server = &config.server;
        let api_key = config.require_api_key()?.clone();

        let llm = OpenAiCompatibleProvider::new(OpenAiCompatConfig {
            provider_name: provider_name_for(&server.api_base).to_string(),
            base_url: server.api_base.clone(),
            api_key: api_key.clone(),
            model: server.llm_model.clone(),
        });

        let speech = OpenAiSpeechProvider::new(
            api_key,
            server.api_base.clone(),
            Duration::from_secs(server.tts_timeout_secs),
        )?;

        let store = LocalAudioStore::new(&server.audio_dir);
        store.ensure_dir().await?;

        let chat_service = ChatService::new(llm, speech, store, ChatSettings::from_config(server));

        tracing::debug!(
            api_base = %server.api_base,
            llm_model = %server.llm_model,
            tts_model = %server.tts_model,
            audio_dir = %server.audio_dir.display(),
            "application state initialized"
        );

        Ok(Self {
            chat_service: Arc::new(chat_service),
            audio_dir: server.audio_dir.clone(),
        })
    }
}
