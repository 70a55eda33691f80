//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::state::AppState;

/// GET /api/health
///
/// Reports process liveness and database reachability. Always returns
/// 200; a broken pool shows up in the body, not the status code.
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = match hearth_database::health_check(&state.db_pool).await {
        Ok(()) => "up",
        Err(e) => {
            tracing::warn!(error = %e, "Health check database probe failed");
            "down"
        }
    };

    Json(serde_json::json!({
        "status": "ok",
        "database": database,
    }))
}
