//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use tutorvox_types::error::{AudioStoreError, ChatError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat round trip errors.
    Chat(ChatError),
    /// Audio store errors outside a chat (bulk delete).
    Store(AudioStoreError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<AudioStoreError> for AppError {
    fn from(e: AudioStoreError) -> Self {
        AppError::Store(e)
    }
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Chat(ChatError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Chat(ChatError::Llm(e)) if e.is_timeout() => {
                (StatusCode::GATEWAY_TIMEOUT, "LLM_TIMEOUT")
            }
            AppError::Chat(ChatError::Llm(_)) => (StatusCode::BAD_GATEWAY, "LLM_ERROR"),
            AppError::Chat(ChatError::Speech(e)) if e.is_timeout() => {
                (StatusCode::GATEWAY_TIMEOUT, "TTS_TIMEOUT")
            }
            AppError::Chat(ChatError::Speech(_)) => (StatusCode::BAD_GATEWAY, "TTS_ERROR"),
            AppError::Chat(ChatError::Store(_)) | AppError::Store(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "AUDIO_STORE_ERROR")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match &self {
            AppError::Chat(e) => e.to_string(),
            AppError::Store(e) => e.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(code, error = %message, "request failed");
        } else {
            tracing::debug!(code, error = %message, "request rejected");
        }

        let body = json!({
            "errors": [{
                "code": code,
                "message": message,
            }],
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
