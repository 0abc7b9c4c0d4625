//! Feature vector contract and request validation
//!
//! A hand pose is 21 landmarks with 3 coordinates each, flattened into a
//! 63-value vector. Validation checks shape only; numeric coercion is done
//! later by the dispatcher so a length error always reports before a type
//! error.

use crate::error::ValidationError;
use serde_json::Value;

/// Number of hand landmarks in a pose
pub const LANDMARK_COUNT: usize = 21;

/// Coordinates per landmark (x, y, z)
pub const COORDS_PER_LANDMARK: usize = 3;

/// Total feature vector length
pub const FEATURE_LEN: usize = LANDMARK_COUNT * COORDS_PER_LANDMARK;

/// A shape-validated feature vector.
///
/// Elements are still raw JSON values; only the length invariant
/// (exactly [`FEATURE_LEN`]) is guaranteed here.
#[derive(Debug, Clone)]
pub struct FeatureVector(Vec<Value>);

impl FeatureVector {
    /// Validate a raw landmarks payload into a [`FeatureVector`].
    ///
    /// `None` means the request carried no landmarks field at all.
    pub fn validate(landmarks: Option<Vec<Value>>) -> Result<Self, ValidationError> {
        let landmarks = landmarks.ok_or(ValidationError::MissingLandmarks)?;

        if landmarks.len() != FEATURE_LEN {
            return Err(ValidationError::WrongLength {
                expected: FEATURE_LEN,
                actual: landmarks.len(),
            });
        }

        Ok(Self(landmarks))
    }

    /// Raw, uncoerced elements
    pub fn raw(&self) -> &[Value] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numbers(n: usize) -> Vec<Value> {
        (0..n).map(|i| json!(i as f64 * 0.1)).collect()
    }

    #[test]
    fn missing_landmarks_is_rejected() {
        let err = FeatureVector::validate(None).unwrap_err();
        assert_eq!(err, ValidationError::MissingLandmarks);
        assert_eq!(err.to_string(), "No landmarks provided");
    }

    #[test]
    fn wrong_length_reports_actual_count() {
        let err = FeatureVector::validate(Some(numbers(10))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongLength {
                expected: 63,
                actual: 10
            }
        );
        assert_eq!(err.to_string(), "Expected 63 values, got 10");
    }

    #[test]
    fn empty_vector_is_wrong_length_not_missing() {
        let err = FeatureVector::validate(Some(vec![])).unwrap_err();
        assert_eq!(err.to_string(), "Expected 63 values, got 0");
    }

    #[test]
    fn exact_length_passes() {
        let vector = FeatureVector::validate(Some(numbers(FEATURE_LEN))).unwrap();
        assert_eq!(vector.raw().len(), FEATURE_LEN);
    }

    #[test]
    fn non_numeric_elements_pass_shape_validation() {
        // Type coercion is deferred to the dispatcher.
        let mut values = numbers(FEATURE_LEN - 1);
        values.push(json!("x"));
        assert!(FeatureVector::validate(Some(values)).is_ok());
    }
}
