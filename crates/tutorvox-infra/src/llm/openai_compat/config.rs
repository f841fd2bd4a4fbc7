//! Configuration for OpenAI-compatible chat providers.

use secrecy::SecretString;

/// Default base URL of the OpenAI API.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// API key for authentication.
    pub api_key: SecretString,
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,
}

/// Name a provider after its base URL so logs tell proxies apart from OpenAI.
pub fn provider_name_for(base_url: &str) -> &'static str {
    if base_url.trim_end_matches('/') == OPENAI_API_BASE {
        "openai"
    } else {
        "openai_compatible"
    }
}
