//! Audio store maintenance endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::http::error::AppError;
use crate::state::AppState;

/// Response body for `DELETE /clear_audio`.
#[derive(Debug, Serialize)]
pub struct ClearAudioResponse {
    pub status: &'static str,
    pub delete_files: usize,
}

/// DELETE /clear_audio - remove every regular file from the audio store.
///
/// Subdirectories are left untouched. An empty store reports `0`.
pub async fn clear_audio(
    State(state): State<AppState>,
) -> Result<Json<ClearAudioResponse>, AppError> {
    let deleted = state.chat_service.clear_audio().await?;
    Ok(Json(ClearAudioResponse {
        status: "ok",
        delete_files: deleted,
    }))
}
