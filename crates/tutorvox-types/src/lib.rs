//! Shared domain types for tutorvox.
//!
//! Chat turns and results, provider-neutral LLM and speech request shapes,
//! server configuration, and the error enums shared by every layer.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod speech;
