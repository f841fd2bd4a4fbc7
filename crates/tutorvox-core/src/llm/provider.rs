//! LlmProvider trait definition.
//!
//! This is the core abstraction that text-generation providers implement.

use tutorvox_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends (OpenAI, any OpenAI-compatible API).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
///
/// Implementations live in tutorvox-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
