//! Prometheus metrics for inference-service.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use service_core::error::AppError;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
        }
    }
}

/// Install the global Prometheus recorder on first call; later calls get the
/// same handle.
pub fn init_metrics() -> Result<PrometheusHandle, AppError> {
    METRICS_HANDLE
        .get_or_try_init(|| {
            PrometheusBuilder::new().install_recorder().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "failed to install Prometheus recorder: {}",
                    e
                ))
            })
        })
        .cloned()
}

pub fn record_prediction(outcome: Outcome) {
    counter!("predictions_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn record_square(outcome: Outcome, count: usize) {
    counter!("square_requests_total", "outcome" => outcome.as_str()).increment(1);
    if outcome == Outcome::Success {
        counter!("squared_numbers_total").increment(count as u64);
    }
}
