//! HTTP handlers for inference-service.

pub mod health;
pub mod metrics;
pub mod numbers;
pub mod predict;

pub use health::{health_check, not_found, readiness_check};
pub use metrics::metrics_endpoint;
pub use numbers::square_numbers;
pub use predict::predict;
