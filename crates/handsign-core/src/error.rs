//! Error types for the Handsign model pipeline
//!
//! Each stage of the pipeline owns its error taxonomy: fetch errors and load
//! errors are startup-scoped, validation and prediction errors are
//! request-scoped and never affect process-wide state.

/// Errors raised while acquiring the model artifact from its remote source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection or protocol failure talking to the model source
    #[error("request to model source failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Remote returned a non-success status
    #[error("model source returned status {0}")]
    Status(reqwest::StatusCode),

    /// Filesystem failure while writing the artifact
    #[error("io error while writing artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while deserializing the model artifact.
///
/// These never escape the loader; any `LoadError` is logged and replaced by
/// the fallback predictor.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Artifact parsed but its dimensions are inconsistent
    #[error("artifact schema error: {0}")]
    Schema(String),
}

/// Request validation failures, surfaced to callers as client errors.
///
/// The `Display` output is the exact message returned over the wire.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No landmarks provided")]
    MissingLandmarks,

    #[error("Expected {expected} values, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Prediction failures, surfaced to callers as server errors.
///
/// The wire message for any variant is the fixed string "Prediction failed";
/// variant detail goes to logs only.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    /// An element of the feature vector was not a finite number
    #[error("non-numeric value at index {index}")]
    Coercion { index: usize },

    /// The predictor itself failed (shape mismatch, empty result, ...)
    #[error("prediction failed: {0}")]
    Internal(String),
}

impl PredictionError {
    /// Create a new internal prediction error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
