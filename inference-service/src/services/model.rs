//! Model abstraction and the placeholder implementation behind `/predict`.
//!
//! `TextModel` is the seam a real backend would plug into; `PlaceholderModel`
//! only wraps its input as `predicted(<text>)`.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ModelConfig;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Inference error: {0}")]
    Failed(String),
}

#[async_trait]
pub trait TextModel: Send + Sync {
    /// Derive a prediction for `text`. Empty input is replaced by
    /// [`TextModel::default_text`].
    async fn predict(&self, text: &str) -> Result<String, InferenceError>;

    /// Input used when a caller supplies none.
    fn default_text(&self) -> &str;

    /// Whether the model can currently serve predictions.
    async fn health_check(&self) -> Result<(), InferenceError> {
        Ok(())
    }

    /// The text a prediction will actually run on.
    fn resolve_input<'a>(&'a self, text: Option<&'a str>) -> &'a str {
        match text {
            Some(t) if !t.is_empty() => t,
            _ => self.default_text(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlaceholderModel {
    default_text: String,
}

impl PlaceholderModel {
    pub fn new(config: &ModelConfig) -> Self {
        tracing::info!(model_path = %config.path, "Placeholder model initialized");
        Self {
            default_text: config.default_text.clone(),
        }
    }

    fn format_prediction(text: &str) -> Result<String, InferenceError> {
        use std::fmt::Write;

        let mut out = String::with_capacity(text.len() + "predicted()".len());
        write!(out, "predicted({})", text).map_err(|e| InferenceError::Failed(e.to_string()))?;
        Ok(out)
    }
}

#[async_trait]
impl TextModel for PlaceholderModel {
    async fn predict(&self, text: &str) -> Result<String, InferenceError> {
        let input = self.resolve_input(Some(text));

        match Self::format_prediction(input) {
            Ok(prediction) => {
                tracing::info!(prediction = %prediction, "Prediction successful");
                Ok(prediction)
            }
            Err(e) => {
                tracing::error!(error = %e, "Prediction failed");
                Err(e)
            }
        }
    }

    fn default_text(&self) -> &str {
        &self.default_text
    }
}
