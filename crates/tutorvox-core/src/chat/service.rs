//! Chat service chaining text generation, speech synthesis, and audio storage.
//!
//! One request flows through three collaborators in order:
//! LLM completion -> speech synthesis -> audio store write. A failure at any
//! step aborts the request, and a file is only written once synthesis has
//! succeeded, so an error response never references audio.

use std::time::Instant;

use tracing::{Instrument, debug, info, info_span, warn};

use tutorvox_types::chat::{ChatRequest, ChatResult, ChatTurn};
use tutorvox_types::error::{AudioStoreError, ChatError};
use tutorvox_types::llm::{CompletionRequest, LlmError, Message};
use tutorvox_types::speech::{SpeechError, SpeechRequest, SpeechResponse};

use crate::audio::store::AudioStore;
use crate::audio::{audio_url_path, generate_audio_filename};
use crate::chat::prompt::ChatSettings;
use crate::llm::provider::LlmProvider;
use crate::speech::provider::SpeechProvider;

/// Build the ordered message list sent to the LLM.
///
/// System prompt first, then every history turn in its original order, then
/// the new user message last.
pub fn build_messages(
    system_prompt: &str,
    history: Vec<ChatTurn>,
    message: String,
) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message::system(system_prompt));
    messages.extend(history.into_iter().map(Message::from));
    messages.push(Message::user(message));
    messages
}

/// Orchestrates a single voice-chat round trip.
///
/// Generic over the provider and store traits so tutorvox-core never depends
/// on tutorvox-infra.
pub struct ChatService<L: LlmProvider, S: SpeechProvider, A: AudioStore> {
    llm: L,
    speech: S,
    store: A,
    settings: ChatSettings,
}

impl<L: LlmProvider, S: SpeechProvider, A: AudioStore> ChatService<L, S, A> {
    pub fn new(llm: L, speech: S, store: A, settings: ChatSettings) -> Self {
        Self {
            llm,
            speech,
            store,
            settings,
        }
    }

    /// Run one chat turn: generate a reply, voice it, and store the audio.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResult, ChatError> {
        if request.message.trim().is_empty() {
            return Err(ChatError::Validation("message must not be empty".to_string()));
        }

        let span = info_span!(
            "chat",
            gen_ai.operation.name = "chat",
            gen_ai.provider.name = self.llm.name(),
            gen_ai.request.model = %self.settings.llm_model,
            gen_ai.request.temperature = self.settings.temperature,
            history_len = request.history.len(),
        );

        async move {
            let messages =
                build_messages(&self.settings.system_prompt, request.history, request.message);

            let reply = self.generate_reply(messages).await?;
            let speech = self.synthesize(&reply).await?;

            let filename = generate_audio_filename(speech.format);
            self.store.save(&filename, &speech.audio).await?;
            info!(file = %filename, bytes = speech.audio.len(), "Stored reply audio");

            Ok(ChatResult {
                agent_text_message: reply,
                agent_audio_message: audio_url_path(&filename),
                format: speech.format,
            })
        }
        .instrument(span)
        .await
    }

    /// Delete every stored audio file and return how many were removed.
    pub async fn clear_audio(&self) -> Result<usize, AudioStoreError> {
        let removed = self.store.clear().await?;
        info!(removed, "Cleared audio store");
        Ok(removed)
    }

    async fn generate_reply(&self, messages: Vec<Message>) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: self.settings.llm_model.clone(),
            messages,
            temperature: Some(self.settings.temperature),
        };

        let start = Instant::now();
        let response = tokio::time::timeout(self.settings.llm_timeout, self.llm.complete(&request))
            .await
            .map_err(|_| LlmError::Timeout(self.settings.llm_timeout))?
            .inspect_err(|e| warn!(error = %e, "Text generation failed"))?;

        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            gen_ai.response.id = %response.id,
            gen_ai.usage.input_tokens = response.usage.input_tokens,
            gen_ai.usage.output_tokens = response.usage.output_tokens,
            "Text generation complete"
        );

        Ok(response.content)
    }

    async fn synthesize(&self, text: &str) -> Result<SpeechResponse, SpeechError> {
        let request = SpeechRequest {
            model: self.settings.tts_model.clone(),
            voice: self.settings.voice.clone(),
            input: text.to_string(),
            format: self.settings.format,
        };

        let start = Instant::now();
        let response =
            tokio::time::timeout(self.settings.tts_timeout, self.speech.synthesize(&request))
                .await
                .map_err(|_| SpeechError::Timeout(self.settings.tts_timeout))?
                .inspect_err(|e| warn!(error = %e, "Speech synthesis failed"))?;

        if response.audio.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }

        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            provider = self.speech.name(),
            voice = %self.settings.voice,
            bytes = response.audio.len(),
            "Speech synthesis complete"
        );

        Ok(response)
    }
}
