//! Real gesture classifier deserialized from a model artifact
//!
//! The artifact is a JSON blob of linear classifier parameters exported from
//! training: one weight row and bias per gesture class. Inference is argmax
//! of `w·x + b` over classes.

use crate::error::{LoadError, PredictionError};
use crate::feature::FEATURE_LEN;
use crate::predictor::Predictor;
use serde::{Deserialize, Serialize};

/// Linear multi-class gesture classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureModel {
    /// Gesture class labels, index-aligned with `weights` and `bias`
    labels: Vec<String>,

    /// One weight row per class, each [`FEATURE_LEN`] wide
    weights: Vec<Vec<f64>>,

    /// One bias term per class
    bias: Vec<f64>,
}

impl GestureModel {
    /// Parse a model artifact and verify its dimensions.
    pub fn from_json(artifact: &str) -> Result<Self, LoadError> {
        let model: Self = serde_json::from_str(artifact)?;
        model.check_schema()?;
        Ok(model)
    }

    fn check_schema(&self) -> Result<(), LoadError> {
        if self.labels.is_empty() {
            return Err(LoadError::Schema("artifact defines no classes".into()));
        }
        if self.weights.len() != self.labels.len() || self.bias.len() != self.labels.len() {
            return Err(LoadError::Schema(format!(
                "class count mismatch: {} labels, {} weight rows, {} bias terms",
                self.labels.len(),
                self.weights.len(),
                self.bias.len()
            )));
        }
        for (i, row) in self.weights.iter().enumerate() {
            if row.len() != FEATURE_LEN {
                return Err(LoadError::Schema(format!(
                    "weight row {} has {} values, expected {}",
                    i,
                    row.len(),
                    FEATURE_LEN
                )));
            }
        }
        Ok(())
    }

    /// Number of gesture classes
    pub fn class_count(&self) -> usize {
        self.labels.len()
    }

    fn score_row(&self, row: &[f64]) -> Result<&str, PredictionError> {
        if row.len() != FEATURE_LEN {
            return Err(PredictionError::internal(format!(
                "expected {} features, got {}",
                FEATURE_LEN,
                row.len()
            )));
        }

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (class, (weights, bias)) in self.weights.iter().zip(&self.bias).enumerate() {
            let score: f64 = weights.iter().zip(row).map(|(w, x)| w * x).sum::<f64>() + bias;
            if score > best_score {
                best = class;
                best_score = score;
            }
        }

        Ok(&self.labels[best])
    }
}

impl Predictor for GestureModel {
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<String>, PredictionError> {
        batch
            .iter()
            .map(|row| self.score_row(row).map(str::to_string))
            .collect()
    }

    fn name(&self) -> &str {
        "gesture-linear"
    }
}
