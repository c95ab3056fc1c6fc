//! Maps internal failures onto the fixed responses callers see.
//!
//! | kind               | status | detail                      |
//! |--------------------|--------|-----------------------------|
//! | `InferenceError`   | 500    | `Internal prediction error` |
//! | `ComputationError` | 500    | `Internal error`            |

use service_core::error::AppError;

use crate::services::{ComputationError, InferenceError};

pub const PREDICTION_ERROR_DETAIL: &str = "Internal prediction error";
pub const COMPUTATION_ERROR_DETAIL: &str = "Internal error";

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::internal(PREDICTION_ERROR_DETAIL, err)
    }
}

impl From<ComputationError> for AppError {
    fn from(err: ComputationError) -> Self {
        AppError::internal(COMPUTATION_ERROR_DETAIL, err)
    }
}
