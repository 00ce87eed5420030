pub mod dashboard;

use crate::{db, ApiResponse, ApiResult, AppState};
use axum::{extract::State, response::Json};
use serde_json::{json, Value};

/// Build and environment information
#[utoipa::path(
    get,
    path = "/api/v1/status",
    responses((status = 200, description = "Service status")),
    tag = "Health"
)]
pub async fn api_status(State(state): State<AppState>) -> ApiResult<Value> {
    let status_data = json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "git": option_env!("GIT_HASH").unwrap_or("unknown"),
        "build_time": option_env!("BUILD_TIME").unwrap_or("unknown"),
        "service": "warehouse-api",
        "environment": state.config.environment,
    });

    Ok(Json(ApiResponse::success(status_data)))
}

/// Liveness plus database reachability
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses((status = 200, description = "Health report")),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Value> {
    let db_status = match db::check_connection(&state.db).await {
        Ok(()) => "healthy",
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            "unhealthy"
        }
    };

    let health_data = json!({
        "status": db_status,
        "checks": {
            "database": db_status,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    Ok(Json(ApiResponse::success(health_data)))
}
