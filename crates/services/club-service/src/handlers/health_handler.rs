//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub storage: StorageHealth,
}

/// Storage backend health with optional error message.
#[derive(Debug, Serialize, ToSchema)]
pub struct StorageHealth {
    pub backend: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}

/// Service banner
pub async fn index() -> &'static str {
    "Club service"
}

/// Health check endpoint - verifies database connectivity.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Storage reachable", body = HealthResponse),
        (status = 503, description = "Storage unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let storage = match &state.database {
        Some(db) => match db.ping().await {
            Ok(()) => StorageHealth {
                backend: "postgres".to_string(),
                status: "healthy".to_string(),
                error: None,
            },
            Err(e) => StorageHealth {
                backend: "postgres".to_string(),
                status: "unhealthy".to_string(),
                error: Some(e.to_string()),
            },
        },
        None => StorageHealth {
            backend: "memory".to_string(),
            status: "healthy".to_string(),
            error: None,
        },
    };

    let healthy = storage.status == "healthy";
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        storage,
    };

    if healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
