//! Employee performance prediction front-end
//!
//! A thin presentation layer over a pre-trained performance model: collect
//! employee attributes, assemble a single-row record, run one prediction.

pub mod form;
pub mod model;
pub mod predict;
pub mod record;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single predicted performance rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub rating: f32,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rating)
    }
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum PerfError {
    #[error("Model file not found at: {path}. Place the trained artifact there or set data.model_path in config.toml")]
    ModelNotFound { path: String },

    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    #[error("Prediction failed: {0}")]
    Prediction(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PerfError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path prefix of the model artifact; the loader reads
    /// `<model_path>.mpk` (weights) and `<model_path>.json` (manifest).
    pub model_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: DataConfig {
                model_path: "model/perf_model".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PerfError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| PerfError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PerfError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.data.model_path, "model/perf_model");
    }

    #[test]
    fn prediction_displays_bare_value() {
        let pred = Prediction { rating: 1.0 };
        assert_eq!(pred.to_string(), "1");
    }
}
