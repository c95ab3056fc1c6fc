use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::utils::JsonBody;

use crate::dtos::{PredictRequest, PredictResponse};
use crate::services::{record_prediction, Outcome};
use crate::startup::AppState;

#[tracing::instrument(skip(state, request))]
pub async fn predict(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let input = state
        .model
        .resolve_input(request.text.as_deref())
        .to_string();

    tracing::info!(input = %input, "Received input for prediction");

    match state.model.predict(&input).await {
        Ok(prediction) => {
            record_prediction(Outcome::Success);
            Ok(Json(PredictResponse { input, prediction }))
        }
        Err(e) => {
            record_prediction(Outcome::Failure);
            tracing::error!(input = %input, error = %e, "Prediction request failed");
            Err(e.into())
        }
    }
}
