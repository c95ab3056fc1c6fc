use axum::{extract::State, http::StatusCode, Json};
use service_core::error::AppError;

use crate::dtos::HealthResponse;
use crate::startup::AppState;

/// Liveness probe. Never touches the model.
pub async fn health_check() -> Json<HealthResponse> {
    tracing::info!("Health check called");
    Json(HealthResponse::healthy())
}

/// Readiness probe: 200 once the model can serve, 503 otherwise.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.model.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Model not ready");
        AppError::ServiceUnavailable
    })?;

    Ok(StatusCode::OK)
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
