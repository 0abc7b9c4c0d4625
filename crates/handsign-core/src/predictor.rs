//! Predictor capability and the constant-label fallback
//!
//! A single predictor handle is created at startup and shared read-only for
//! the life of the process. Call sites hold `Arc<dyn Predictor>` and never
//! need to know whether the real model or the fallback is behind it.

use crate::error::PredictionError;

/// Label returned by the fallback predictor when none is configured
pub const DEFAULT_FALLBACK_LABEL: &str = "A";

/// Opaque classification capability.
///
/// Implementations must be safe for concurrent read-only invocation; the
/// handle is never mutated after initialization.
pub trait Predictor: Send + Sync {
    /// Classify a batch of feature rows, one label per row
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<String>, PredictionError>;

    /// Get the predictor name (for health reporting and logs)
    fn name(&self) -> &str;

    /// Whether this is the constant-label fallback
    fn is_fallback(&self) -> bool {
        false
    }
}

/// Predictor substituted when no real model can be loaded.
///
/// Returns the same constant label for every input row so the service stays
/// available in a degraded but deterministic mode.
pub struct FallbackPredictor {
    label: String,
}

impl FallbackPredictor {
    pub fn new() -> Self {
        Self::with_label(DEFAULT_FALLBACK_LABEL)
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for FallbackPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl Predictor for FallbackPredictor {
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<String>, PredictionError> {
        Ok(vec![self.label.clone(); batch.len()])
    }

    fn name(&self) -> &str {
        "fallback"
    }

    fn is_fallback(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::FEATURE_LEN;

    #[test]
    fn fallback_predicts_constant_label_for_every_row() {
        let predictor = FallbackPredictor::new();
        let batch = vec![vec![0.0; FEATURE_LEN], vec![1.5; FEATURE_LEN]];
        let labels = predictor.predict(&batch).unwrap();
        assert_eq!(labels, vec!["A", "A"]);
    }

    #[test]
    fn fallback_label_is_configurable() {
        let predictor = FallbackPredictor::with_label("idle");
        let labels = predictor.predict(&[vec![0.0; FEATURE_LEN]]).unwrap();
        assert_eq!(labels, vec!["idle"]);
        assert!(predictor.is_fallback());
    }
}
