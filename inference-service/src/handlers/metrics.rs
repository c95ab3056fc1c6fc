use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::startup::AppState;

pub async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        state.metrics.render(),
    )
}
