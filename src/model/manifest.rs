//! Artifact manifest
//!
//! The manifest travels with the weight file and is the only description of
//! the artifact this application trusts: input width, hidden layout, and
//! the outputs the artifact claims to provide.

use serde::{Deserialize, Serialize};

use crate::model::perf_net::PerfNetConfig;
use crate::{PerfError, Result};

/// Metadata for a trained model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelManifest {
    /// Serialization format of the weight file
    pub format: String,
    /// Expected feature vector width
    pub input_dim: usize,
    /// Hidden layer widths
    pub hidden_dims: Vec<usize>,
    /// Outputs the artifact provides; prediction requires "rating"
    pub outputs: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl ModelManifest {
    /// The one capability this application relies on
    pub const RATING_OUTPUT: &'static str = "rating";

    /// Manifest matching the default architecture
    pub fn for_config(config: &PerfNetConfig) -> Self {
        ModelManifest {
            format: "burn-mpk".to_string(),
            input_dim: config.input_dim,
            hidden_dims: config.hidden_dims.clone(),
            outputs: vec![Self::RATING_OUTPUT.to_string()],
            description: String::new(),
        }
    }

    /// Whether the artifact declares the rating output
    pub fn has_rating_output(&self) -> bool {
        self.outputs.iter().any(|o| o == Self::RATING_OUTPUT)
    }

    pub fn net_config(&self) -> PerfNetConfig {
        PerfNetConfig {
            input_dim: self.input_dim,
            hidden_dims: self.hidden_dims.clone(),
            dropout: 0.0,
        }
    }

    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PerfError::ModelLoad(format!("cannot read manifest {}: {}", path, e)))?;
        serde_json::from_str(&content)
            .map_err(|e| PerfError::ModelLoad(format!("invalid manifest {}: {}", path, e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| PerfError::ModelLoad(format!("cannot serialize manifest: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for ModelManifest {
    fn default() -> Self {
        ModelManifest::for_config(&PerfNetConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EmployeeRecord;

    #[test]
    fn default_manifest_declares_rating_output() {
        let manifest = ModelManifest::default();
        assert!(manifest.has_rating_output());
        assert_eq!(manifest.input_dim, EmployeeRecord::FEATURE_DIM);
    }

    #[test]
    fn manifest_without_rating_output_is_detected() {
        let mut manifest = ModelManifest::default();
        manifest.outputs = vec!["attrition_prob".to_string()];
        assert!(!manifest.has_rating_output());
    }

    #[test]
    fn manifest_round_trips_through_json() {
        let manifest = ModelManifest::default();
        let json = serde_json::to_string(&manifest).unwrap();
        let parsed: ModelManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.input_dim, manifest.input_dim);
        assert_eq!(parsed.outputs, manifest.outputs);
    }

    #[test]
    fn corrupt_manifest_is_a_load_error() {
        let path = std::env::temp_dir().join("emperf_corrupt_manifest.json");
        std::fs::write(&path, "not json {").unwrap();

        let err = ModelManifest::load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, PerfError::ModelLoad(_)));

        let _ = std::fs::remove_file(&path);
    }
}
