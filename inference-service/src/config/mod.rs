use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_MODEL_PATH: &str = "app/inference/model.bin";
pub const DEFAULT_TEXT: &str = "Hello";

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub model: ModelConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Where model weights would live. The placeholder model never reads it.
    pub path: String,
    /// Input used by `/predict` when the request carries no text.
    pub default_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObservabilityConfig {
    /// When set, spans are exported over OTLP in addition to stdout logging.
    pub otlp_endpoint: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_MODEL_PATH.to_string(),
            default_text: DEFAULT_TEXT.to_string(),
        }
    }
}

impl ModelConfig {
    /// Read `MODEL_PATH` and `DEFAULT_TEXT` through `lookup`, falling back to
    /// the built-in defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            path: lookup("MODEL_PATH").unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string()),
            default_text: lookup("DEFAULT_TEXT").unwrap_or_else(|| DEFAULT_TEXT.to_string()),
        }
    }
}

impl InferenceConfig {
    pub fn load() -> Result<Self, AppError> {
        // core_config::Config::load() also pulls in `.env`, so read it first.
        let common_config = core_config::Config::load()?;
        let lookup = |key: &str| env::var(key).ok();

        Ok(InferenceConfig {
            common: common_config,
            model: ModelConfig::from_lookup(lookup),
            observability: ObservabilityConfig {
                otlp_endpoint: lookup("OTLP_ENDPOINT").filter(|s| !s.is_empty()),
            },
        })
    }
}
