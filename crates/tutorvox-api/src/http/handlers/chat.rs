//! Voice chat endpoint.
//!
//! POST /chat
//!
//! Body: `{ "message": "...", "history": [{ "role": "user", "content": "..." }] }`.
//! Runs one text-generation + speech-synthesis round trip and returns the
//! reply text together with the URL path of the stored audio.

use axum::Json;
use axum::extract::State;

use tutorvox_types::chat::{ChatRequest, ChatResult};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /chat - generate a spoken reply.
///
/// Malformed bodies and unknown history roles are rejected by the `Json`
/// extractor before any provider is called.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResult>, AppError> {
    let result = state.chat_service.chat(body).await?;
    Ok(Json(result))
}
