use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Settings shared by every service: where to listen and how loud to log.
///
/// Read from `APP_HOST`, `APP_PORT` and `APP_LOG_LEVEL`, with an optional
/// `configuration` file underneath.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::build(app_environment())
    }

    /// Build from an explicit variable map instead of the process environment.
    pub fn from_env_map(vars: HashMap<String, String>) -> Result<Self, AppError> {
        Self::build(app_environment().source(Some(vars)))
    }

    fn build(env: Environment) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(env)
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// APP_PORT -> port, APP_LOG_LEVEL -> log_level
fn app_environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn app_prefixed_variables_override_defaults() {
        let config = Config::from_env_map(vars(&[
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "9100"),
            ("APP_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9100);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn unprefixed_variables_are_ignored() {
        let config = Config::from_env_map(vars(&[("PORT", "1234"), ("HOST", "10.0.0.1")])).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn non_numeric_port_is_a_config_error() {
        let err = Config::from_env_map(vars(&[("APP_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
