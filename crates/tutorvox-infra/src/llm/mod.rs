//! LLM provider implementations.
//!
//! Contains the concrete [`LlmProvider`](tutorvox_core::llm::provider::LlmProvider)
//! implementation for OpenAI and any API speaking the same chat completions
//! protocol.

pub mod openai_compat;
