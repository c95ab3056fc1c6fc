use axum::Json;
use service_core::error::AppError;
use service_core::utils::JsonBody;

use crate::dtos::{SquareRequest, SquareResponse};
use crate::services::{record_square, square_all, Outcome};

#[tracing::instrument(skip_all)]
pub async fn square_numbers(
    JsonBody(request): JsonBody<SquareRequest>,
) -> Result<Json<SquareResponse>, AppError> {
    match square_all(&request.numbers) {
        Ok(squared) => {
            record_square(Outcome::Success, squared.len());
            tracing::info!(original = ?request.numbers, squared = ?squared, "Squared numbers");
            Ok(Json(SquareResponse {
                original: request.numbers,
                squared,
            }))
        }
        Err(e) => {
            record_square(Outcome::Failure, 0);
            tracing::error!(error = %e, "Failed to square numbers");
            Err(e.into())
        }
    }
}
