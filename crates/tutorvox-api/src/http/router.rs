//! Axum router configuration with middleware.
//!
//! Routes sit at the root: `/chat`, `/awake_server`, `/clear_audio`, plus the
//! audio store mounted read-only under `/audio`.
//! Middleware: permissive CORS, request tracing.

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tutorvox_types::config::AUDIO_MOUNT_PATH;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let audio_files = ServeDir::new(&state.audio_dir);

    Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/awake_server", get(handlers::health::awake_server))
        .route("/clear_audio", delete(handlers::audio::clear_audio))
        .nest_service(AUDIO_MOUNT_PATH, audio_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
