//! SpeechProvider trait definition.

use tutorvox_types::speech::{SpeechError, SpeechRequest, SpeechResponse};

/// Trait for text-to-speech backends.
///
/// Same RPITIT shape as [`crate::llm::provider::LlmProvider`]. The returned
/// audio is the complete encoded file; no streaming.
pub trait SpeechProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Synthesize `request.input` with the requested voice and format.
    fn synthesize(
        &self,
        request: &SpeechRequest,
    ) -> impl std::future::Future<Output = Result<SpeechResponse, SpeechError>> + Send;
}
