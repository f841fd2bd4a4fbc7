//! OpenAI-compatible LLM provider implementation.
//!
//! A single [`OpenAiCompatibleProvider`] serves OpenAI and any endpoint that
//! speaks the chat completions protocol, selected by base URL.
//!
//! Uses [`async_openai`] for type-safe request/response handling. The
//! client's built-in rate-limit retry is disabled: every completion is a
//! single upstream attempt, bounded by the caller's timeout.

pub mod config;

use std::time::Duration;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use backoff::ExponentialBackoff;
use secrecy::ExposeSecret;

use tutorvox_core::llm::provider::LlmProvider;
use tutorvox_types::llm::{CompletionRequest, CompletionResponse, LlmError, MessageRole, Usage};

use self::config::OpenAiCompatConfig;

/// Unified provider for any OpenAI-compatible chat completions API.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct OpenAiCompatibleProvider {
    client: Client<OpenAIConfig>,
    provider_name: String,
    model: String,
}

impl OpenAiCompatibleProvider {
    /// Create a new OpenAI-compatible provider from a configuration.
    pub fn new(config: OpenAiCompatConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret())
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config).with_backoff(single_attempt()),
            provider_name: config.provider_name,
            model: config.model,
        }
    }

    /// Build a [`CreateChatCompletionRequest`] from a generic [`CompletionRequest`].
    ///
    /// Messages are forwarded in their given order; the system prompt is
    /// expected to already be the first entry.
    fn build_request(&self, request: &CompletionRequest) -> CreateChatCompletionRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| match msg.role {
                MessageRole::System => {
                    ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                        content: ChatCompletionRequestSystemMessageContent::Text(
                            msg.content.clone(),
                        ),
                        name: None,
                    })
                }
                MessageRole::User => {
                    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(msg.content.clone()),
                        name: None,
                    })
                }
                MessageRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(ChatCompletionRequestAssistantMessage {
                        content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                            msg.content.clone(),
                        )),
                        refusal: None,
                        name: None,
                        audio: None,
                        tool_calls: None,
                        function_call: None,
                    })
                }
            })
            .collect();

        // Use the model from the request if set, otherwise fall back to config default
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        CreateChatCompletionRequest {
            model,
            messages,
            temperature: request.temperature.map(|t| t as f32),
            ..Default::default()
        }
    }
}

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let oai_request = self.build_request(request);

        let response = self
            .client
            .chat()
            .create(oai_request)
            .await
            .map_err(map_openai_error)?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(LlmError::Provider {
                message: "completion contained no text".to_string(),
            });
        }

        let usage = response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: response.id,
            content,
            model: response.model,
            usage,
        })
    }
}

/// Backoff policy that gives up after the first failure.
///
/// async-openai retries 429 and 5xx responses by default; a zero elapsed
/// budget surfaces the first error instead.
fn single_attempt() -> ExponentialBackoff {
    ExponentialBackoff {
        max_elapsed_time: Some(Duration::ZERO),
        ..Default::default()
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "invalid_api_key"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded"
                || code == "insufficient_quota"
                || error_type == "rate_limit_error"
            {
                LlmError::RateLimited {
                    retry_after_ms: None,
                }
            } else if code == "model_not_found" || error_type == "invalid_request_error" {
                LlmError::InvalidRequest(api_err.message.clone())
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => LlmError::AuthenticationFailed,
            Some(429) => LlmError::RateLimited {
                retry_after_ms: None,
            },
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use serde_json::json;
    use tutorvox_types::llm::Message;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_at(base_url: &str) -> OpenAiCompatibleProvider {
        OpenAiCompatibleProvider::new(OpenAiCompatConfig {
            provider_name: config::provider_name_for(base_url).to_string(),
            base_url: base_url.to_string(),
            api_key: SecretString::from("sk-test"),
            model: "gpt-4o-mini".to_string(),
        })
    }

    fn provider() -> OpenAiCompatibleProvider {
        provider_at(config::OPENAI_API_BASE)
    }

    fn hello_request() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![Message::system("Be a teacher"), Message::user("Hello")],
            temperature: Some(0.8),
        }
    }

    fn api_error(code: &str, error_type: &str, message: &str) -> serde_json::Value {
        json!({
            "error": {
                "message": message,
                "type": error_type,
                "param": null,
                "code": code
            }
        })
    }

    #[test]
    fn test_provider_name_follows_base_url() {
        assert_eq!(provider().name(), "openai");
        assert_eq!(
            provider_at("http://localhost:11434/v1").name(),
            "openai_compatible"
        );
    }

    #[test]
    fn test_build_request_keeps_message_order() {
        let request = CompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![
                Message::system("Be a teacher"),
                Message::user("I has a cat"),
                Message {
                    role: MessageRole::Assistant,
                    content: "I have a cat!".to_string(),
                },
                Message::user("Thanks"),
            ],
            temperature: Some(0.8),
        };

        let oai_req = provider().build_request(&request);
        assert_eq!(oai_req.model, "gpt-4o");
        assert_eq!(oai_req.messages.len(), 4);
        assert!(matches!(
            oai_req.messages[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(oai_req.messages[1], ChatCompletionRequestMessage::User(_)));
        assert!(matches!(
            oai_req.messages[2],
            ChatCompletionRequestMessage::Assistant(_)
        ));
        assert!(matches!(oai_req.messages[3], ChatCompletionRequestMessage::User(_)));
        assert_eq!(oai_req.temperature, Some(0.8));
        assert!(oai_req.max_completion_tokens.is_none());
        assert!(oai_req.stream.is_none());
    }

    #[test]
    fn test_build_request_empty_model_uses_default() {
        let request = CompletionRequest {
            model: String::new(),
            messages: vec![],
            temperature: None,
        };

        let oai_req = provider().build_request(&request);
        assert_eq!(oai_req.model, "gpt-4o-mini");
        assert!(oai_req.temperature.is_none());
    }

    #[test]
    fn test_map_openai_error_api_auth() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Incorrect API key provided".to_string(),
            r#type: Some("invalid_request_error".to_string()),
            param: None,
            code: Some("invalid_api_key".to_string()),
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[test]
    fn test_map_openai_error_quota() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "You exceeded your current quota".to_string(),
            r#type: Some("insufficient_quota".to_string()),
            param: None,
            code: Some("insufficient_quota".to_string()),
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::RateLimited { .. }));
    }

    #[test]
    fn test_map_openai_error_unknown_model() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "The model `gpt-9` does not exist".to_string(),
            r#type: Some("invalid_request_error".to_string()),
            param: None,
            code: Some("model_not_found".to_string()),
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }

    #[test]
    fn test_map_openai_error_invalid_argument() {
        use async_openai::error::OpenAIError;
        let err = map_openai_error(OpenAIError::InvalidArgument("bad arg".to_string()));
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_complete_returns_reply_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "created": 1_700_000_000,
                "model": "gpt-4o-mini",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": "Nice to meet you!" },
                    "finish_reason": "stop"
                }],
                "usage": { "prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = provider_at(&format!("{}/v1", server.uri()))
            .complete(&hello_request())
            .await
            .unwrap();
        assert_eq!(response.content, "Nice to meet you!");
        assert_eq!(response.usage.input_tokens, 20);
        assert_eq!(response.usage.output_tokens, 5);
    }

    #[tokio::test]
    async fn test_complete_rate_limit_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(api_error(
                "rate_limit_exceeded",
                "requests",
                "Rate limit reached for requests",
            )))
            .mount(&server)
            .await;

        let err = provider_at(&format!("{}/v1", server.uri()))
            .complete(&hello_request())
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::RateLimited { .. }));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_complete_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_json(api_error(
                "server_overloaded",
                "server_error",
                "The server is overloaded",
            )))
            .mount(&server)
            .await;

        let err = provider_at(&format!("{}/v1", server.uri()))
            .complete(&hello_request())
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::Provider { .. }));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }
}
