//! The pre-trained model artifact
//!
//! Weights are a burn MessagePack file (`<path>.mpk`); a JSON manifest
//! (`<path>.json`) alongside it declares the architecture and the outputs
//! the artifact provides.

pub mod manifest;
pub mod perf_net;

pub use manifest::ModelManifest;
pub use perf_net::{PerfNet, PerfNetConfig};
