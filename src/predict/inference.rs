//! Model inference
//!
//! One synchronous forward pass per predict action. The loaded model is
//! immutable for the lifetime of the process.

use std::path::Path;

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use log::warn;

use crate::model::{ModelManifest, PerfNet, PerfNetConfig};
use crate::predict::Scorer;
use crate::record::EmployeeRecord;
use crate::{PerfError, Prediction, Result};

/// Holds the loaded model and runs predictions against it
pub struct Predictor<B: Backend> {
    model: PerfNet<B>,
    device: B::Device,
}

impl<B: Backend> Predictor<B> {
    pub fn new(model: PerfNet<B>, device: B::Device) -> Self {
        Predictor { model, device }
    }

    /// Encode records and run one forward pass
    fn predict_records(&self, records: &[EmployeeRecord]) -> Result<Vec<Prediction>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        // Shape mismatches must surface as a prediction error, not a panic
        if self.model.input_dim() != EmployeeRecord::FEATURE_DIM {
            return Err(PerfError::Prediction(format!(
                "model expects {} features but the record has {}",
                self.model.input_dim(),
                EmployeeRecord::FEATURE_DIM,
            )));
        }

        let data: Vec<f32> = records.iter().flat_map(|r| r.to_features()).collect();
        let features = Tensor::<B, 1>::from_floats(data.as_slice(), &self.device)
            .reshape([records.len(), EmployeeRecord::FEATURE_DIM]);

        let ratings = self.model.forward(features);
        let values = ratings
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| PerfError::Prediction(format!("cannot read model output: {:?}", e)))?;

        Ok(values.into_iter().map(|rating| Prediction { rating }).collect())
    }
}

impl<B: Backend> Scorer for Predictor<B> {
    fn predict(&self, records: &[EmployeeRecord]) -> Result<Vec<Prediction>> {
        self.predict_records(records)
    }
}

/// Load the model artifact from `<model_path>.mpk` with its manifest.
///
/// One-shot startup operation, no retries:
/// - missing weight file is fatal and names the expected path,
/// - unreadable or corrupt weight/manifest data is fatal with the cause,
/// - a manifest that does not declare the rating output only logs a
///   warning and loading continues.
pub fn load_predictor<B: Backend>(device: B::Device, model_path: &str) -> Result<Predictor<B>>
where
    B::FloatElem: serde::Serialize + serde::de::DeserializeOwned,
    B::IntElem: serde::Serialize + serde::de::DeserializeOwned,
{
    let weights = format!("{}.mpk", model_path);
    if !Path::new(&weights).exists() {
        return Err(PerfError::ModelNotFound { path: weights });
    }

    let manifest_path = format!("{}.json", model_path);
    let config = if Path::new(&manifest_path).exists() {
        let manifest = ModelManifest::load(&manifest_path)?;
        if !manifest.has_rating_output() {
            warn!(
                "artifact at {} does not declare a '{}' output; predictions may fail",
                model_path,
                ModelManifest::RATING_OUTPUT
            );
        }
        manifest.net_config()
    } else {
        warn!(
            "no manifest at {}; assuming the default architecture, capability unverified",
            manifest_path
        );
        PerfNetConfig::default()
    };

    let model = PerfNet::load(&device, model_path, config)?;
    Ok(Predictor::new(model, device))
}

/// Format a prediction for display
pub fn format_prediction(pred: &Prediction) -> String {
    format!(
        r#"
┌─────────────────────────────────────────────────┐
│  Employee Performance
├─────────────────────────────────────────────────┤
│  Predicted rating:  {}
└─────────────────────────────────────────────────┘
"#,
        pred
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    fn artifact_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_artifact(dir: &std::path::Path, manifest: &ModelManifest) -> String {
        let device = Default::default();
        let model = PerfNet::<TestBackend>::new(&device, manifest.net_config());
        let path = dir.join("perf_model");
        let path = path.to_str().unwrap().to_string();
        model.save(&path).unwrap();
        manifest.save(&format!("{}.json", path)).unwrap();
        path
    }

    fn load_failure(path: &str) -> PerfError {
        match load_predictor::<TestBackend>(Default::default(), path) {
            Ok(_) => panic!("expected load to fail for {}", path),
            Err(e) => e,
        }
    }

    #[test]
    fn valid_artifact_is_ready_for_predictions() {
        let dir = artifact_dir("emperf_loader_valid");
        let path = write_artifact(&dir, &ModelManifest::default());

        let device = Default::default();
        let predictor = load_predictor::<TestBackend>(device, &path).unwrap();

        let preds = predictor.predict(&[EmployeeRecord::default()]).unwrap();
        assert_eq!(preds.len(), 1);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_weight_file_names_the_expected_path() {
        let err = load_failure("/nonexistent/perf_model");
        match err {
            PerfError::ModelNotFound { path } => {
                assert_eq!(path, "/nonexistent/perf_model.mpk")
            }
            other => panic!("expected ModelNotFound, got {:?}", other),
        }
    }

    #[test]
    fn corrupt_weight_file_is_a_load_error() {
        let dir = artifact_dir("emperf_loader_corrupt");
        let path = dir.join("perf_model");
        let path = path.to_str().unwrap();
        std::fs::write(format!("{}.mpk", path), b"garbage").unwrap();

        let err = load_failure(path);
        assert!(matches!(err, PerfError::ModelLoad(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_manifest_is_a_load_error() {
        let dir = artifact_dir("emperf_loader_bad_manifest");
        let path = write_artifact(&dir, &ModelManifest::default());
        std::fs::write(format!("{}.json", path), "{ not json").unwrap();

        let err = load_failure(&path);
        assert!(matches!(err, PerfError::ModelLoad(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn artifact_without_rating_output_still_loads() {
        let dir = artifact_dir("emperf_loader_no_rating");
        let mut manifest = ModelManifest::default();
        manifest.outputs = vec!["attrition_prob".to_string()];
        let path = write_artifact(&dir, &manifest);

        // Soft warning only: the predictor is still usable
        let device = Default::default();
        let predictor = load_predictor::<TestBackend>(device, &path).unwrap();
        let preds = predictor.predict(&[EmployeeRecord::default()]).unwrap();
        assert_eq!(preds.len(), 1);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn predictor_returns_one_prediction_per_record() {
        let device = Default::default();
        let model = PerfNet::<TestBackend>::new(&device, PerfNetConfig::default());
        let predictor = Predictor::new(model, device);

        let records = vec![EmployeeRecord::default(); 3];
        let preds = predictor.predict(&records).unwrap();
        assert_eq!(preds.len(), 3);

        // Identical rows produce identical ratings
        assert_eq!(preds[0], preds[1]);
        assert_eq!(preds[1], preds[2]);
    }

    #[test]
    fn mismatched_input_width_is_a_prediction_error() {
        let device = Default::default();
        let config = PerfNetConfig {
            input_dim: 10,
            hidden_dims: vec![8],
            dropout: 0.0,
        };
        let model = PerfNet::<TestBackend>::new(&device, config);
        let predictor = Predictor::new(model, device);

        let err = predictor.predict(&[EmployeeRecord::default()]).unwrap_err();
        assert!(matches!(err, PerfError::Prediction(_)));
    }
}
