//! Prediction and inference
//!
//! Load the trained model artifact and generate predictions.

pub mod inference;

pub use inference::{format_prediction, load_predictor, Predictor};

use crate::record::EmployeeRecord;
use crate::{Prediction, Result};

/// The predict capability this application relies on: given records,
/// return one prediction per record.
pub trait Scorer {
    fn predict(&self, records: &[EmployeeRecord]) -> Result<Vec<Prediction>>;
}
