//! Prediction dispatch
//!
//! Takes a shape-validated feature vector, coerces it to numbers, runs one
//! inference call, and maps every predictor-internal failure to a uniform
//! error so nothing raw propagates to the transport layer.

use crate::error::PredictionError;
use crate::feature::FeatureVector;
use crate::predictor::Predictor;

/// Run one prediction for a validated feature vector.
pub fn predict_label(
    vector: FeatureVector,
    predictor: &dyn Predictor,
) -> Result<String, PredictionError> {
    let row = coerce(&vector)?;

    // Single-row batch; no batching across requests.
    let batch = vec![row];
    let labels = predictor
        .predict(&batch)
        .map_err(|e| PredictionError::internal(e.to_string()))?;

    labels
        .into_iter()
        .next()
        .ok_or_else(|| PredictionError::internal("predictor returned no rows"))
}

/// Coerce every element to a finite f64, reporting the first bad index.
fn coerce(vector: &FeatureVector) -> Result<Vec<f64>, PredictionError> {
    vector
        .raw()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .as_f64()
                .filter(|f| f.is_finite())
                .ok_or(PredictionError::Coercion { index })
        })
        .collect()
}
