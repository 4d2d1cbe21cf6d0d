//! Performance rating network
//!
//! Architecture: Input(26) → Hidden1(64) → ReLU → Dropout
//!                         → Hidden2(32) → ReLU → Dropout
//!                         → rating_head(1)

use burn::module::Module;
use burn::nn::{Dropout, DropoutConfig, Linear, LinearConfig};
use burn::record::{FullPrecisionSettings, Recorder};
use burn::tensor::activation::relu;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::record::EmployeeRecord;

/// Configuration for the rating network
#[derive(Debug, Clone)]
pub struct PerfNetConfig {
    /// Input dimension (one column per form field)
    pub input_dim: usize,
    /// Hidden layer dimensions (e.g., [64, 32] for two layers)
    pub hidden_dims: Vec<usize>,
    /// Dropout rate (inactive at inference)
    pub dropout: f64,
}

impl Default for PerfNetConfig {
    fn default() -> Self {
        PerfNetConfig {
            input_dim: EmployeeRecord::FEATURE_DIM,
            hidden_dims: vec![64, 32],
            dropout: 0.1,
        }
    }
}

/// A single hidden layer block: Linear → ReLU → Dropout
#[derive(Module, Debug)]
pub struct HiddenBlock<B: Backend> {
    linear: Linear<B>,
    dropout: Dropout,
}

impl<B: Backend> HiddenBlock<B> {
    pub fn new(device: &B::Device, in_dim: usize, out_dim: usize, dropout: f64) -> Self {
        HiddenBlock {
            linear: LinearConfig::new(in_dim, out_dim).init(device),
            dropout: DropoutConfig::new(dropout).init(),
        }
    }

    pub fn forward(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.linear.forward(x);
        let x = relu(x);
        self.dropout.forward(x)
    }
}

/// Feed-forward rating predictor
///
/// Output: one rating value per input row.
#[derive(Module, Debug)]
pub struct PerfNet<B: Backend> {
    hidden1: HiddenBlock<B>,
    hidden2: Option<HiddenBlock<B>>,
    rating_head: Linear<B>,
    input_dim: usize,
}

impl<B: Backend> PerfNet<B> {
    /// Create a new rating network
    pub fn new(device: &B::Device, config: PerfNetConfig) -> Self {
        let hidden1 = HiddenBlock::new(
            device,
            config.input_dim,
            config.hidden_dims.first().copied().unwrap_or(64),
            config.dropout,
        );

        let (hidden2, head_input_dim) = if config.hidden_dims.len() > 1 {
            let h2 = HiddenBlock::new(
                device,
                config.hidden_dims[0],
                config.hidden_dims[1],
                config.dropout,
            );
            (Some(h2), config.hidden_dims[1])
        } else {
            (None, config.hidden_dims.first().copied().unwrap_or(64))
        };

        PerfNet {
            hidden1,
            hidden2,
            rating_head: LinearConfig::new(head_input_dim, 1).init(device),
            input_dim: config.input_dim,
        }
    }

    /// Feature vector width this network expects
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Forward pass
    ///
    /// # Arguments
    /// * `features` - Encoded records [batch, input_dim]
    ///
    /// # Returns
    /// Predicted ratings [batch, 1]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.hidden1.forward(features);
        let x = if let Some(h2) = &self.hidden2 {
            h2.forward(x)
        } else {
            x
        };
        self.rating_head.forward(x)
    }

    /// Save model weights to `<path>.mpk`
    pub fn save(&self, path: &str) -> crate::Result<()>
    where
        B::FloatElem: serde::Serialize + serde::de::DeserializeOwned,
        B::IntElem: serde::Serialize + serde::de::DeserializeOwned,
    {
        let recorder = burn::record::NamedMpkFileRecorder::<FullPrecisionSettings>::new();
        recorder
            .record(self.clone().into_record(), path.into())
            .map_err(|e| crate::PerfError::ModelLoad(e.to_string()))
    }

    /// Load model weights from `<path>.mpk`
    pub fn load(device: &B::Device, path: &str, config: PerfNetConfig) -> crate::Result<Self>
    where
        B::FloatElem: serde::Serialize + serde::de::DeserializeOwned,
        B::IntElem: serde::Serialize + serde::de::DeserializeOwned,
    {
        let recorder = burn::record::NamedMpkFileRecorder::<FullPrecisionSettings>::new();
        let record = recorder
            .load(path.into(), device)
            .map_err(|e| crate::PerfError::ModelLoad(e.to_string()))?;

        let model = Self::new(device, config);
        Ok(model.load_record(record))
    }
}
