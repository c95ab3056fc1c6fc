#![allow(dead_code)]

use async_trait::async_trait;
use inference_service::config::{InferenceConfig, ModelConfig, ObservabilityConfig};
use inference_service::services::{InferenceError, TextModel};
use inference_service::startup::{build_router, AppState, Application};
use axum::Router;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub fn test_config(default_text: &str) -> InferenceConfig {
    InferenceConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            // Use random port for testing (port 0)
            port: 0,
            log_level: "info".to_string(),
        },
        model: ModelConfig {
            path: "tests/fixtures/model.bin".to_string(),
            default_text: default_text.to_string(),
        },
        observability: ObservabilityConfig::default(),
    }
}

/// A model that always fails, to drive the 500 paths.
pub struct BrokenModel;

#[async_trait]
impl TextModel for BrokenModel {
    async fn predict(&self, _text: &str) -> Result<String, InferenceError> {
        Err(InferenceError::Failed(
            "weights at /secret/path are corrupt".to_string(),
        ))
    }

    fn default_text(&self) -> &str {
        "Hello"
    }

    async fn health_check(&self) -> Result<(), InferenceError> {
        Err(InferenceError::Failed("weights not loaded".to_string()))
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app = Application::build(test_config("Hello"))
            .await
            .expect("Failed to build test application");
        Self::start(app).await
    }

    pub async fn spawn_with_model(model: Arc<dyn TextModel>) -> Self {
        let app = Application::with_model(test_config("Hello"), model)
            .await
            .expect("Failed to build test application");
        Self::start(app).await
    }

    async fn start(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Router wired with the given model, for in-process `oneshot` tests.
pub fn router_with_model(model: Arc<dyn TextModel>) -> Router {
    let metrics = inference_service::services::init_metrics().expect("metrics recorder");
    build_router(AppState { model, metrics })
}
