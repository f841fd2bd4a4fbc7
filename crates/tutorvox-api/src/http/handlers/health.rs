//! GET /awake_server - liveness probe used to wake a sleeping host.

use axum::Json;

pub async fn awake_server() -> Json<bool> {
    Json(true)
}
