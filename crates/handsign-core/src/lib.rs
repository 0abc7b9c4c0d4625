//! Handsign Core
//!
//! Model lifecycle and prediction-validation pipeline for the Handsign
//! gesture inference service.
//!
//! This crate provides:
//! - Artifact resolution (local load, remote fetch-on-demand)
//! - Predictor loading with a safe constant-label fallback
//! - Request validation against the fixed 63-value feature contract
//! - Prediction dispatch (coercion, batching, error mapping)

pub mod dispatch;
pub mod error;
pub mod feature;
pub mod fetch;
pub mod loader;
pub mod model;
pub mod predictor;

pub use dispatch::predict_label;
pub use error::{FetchError, LoadError, PredictionError, ValidationError};
pub use feature::{FeatureVector, COORDS_PER_LANDMARK, FEATURE_LEN, LANDMARK_COUNT};
pub use fetch::ensure_artifact_present;
pub use loader::{load_predictor, load_predictor_with_fallback};
pub use model::GestureModel;
pub use predictor::{FallbackPredictor, Predictor, DEFAULT_FALLBACK_LABEL};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dispatch::predict_label;
    pub use crate::error::{FetchError, LoadError, PredictionError, ValidationError};
    pub use crate::feature::{FeatureVector, FEATURE_LEN};
    pub use crate::fetch::ensure_artifact_present;
    pub use crate::loader::{load_predictor, load_predictor_with_fallback};
    pub use crate::predictor::{FallbackPredictor, Predictor};
}
