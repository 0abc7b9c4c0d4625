//! Model loading with fallback substitution
//!
//! Loading never fails outward: initialization always ends with a usable
//! predictor. If the artifact is missing, unparseable, or dimensionally
//! wrong, the condition is logged and the constant-label fallback takes its
//! place for the rest of the process lifetime.

use crate::error::LoadError;
use crate::model::GestureModel;
use crate::predictor::{FallbackPredictor, Predictor, DEFAULT_FALLBACK_LABEL};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Load the model artifact at `path`, falling back to the constant "A"
/// predictor on any failure.
pub fn load_predictor(path: impl AsRef<Path>) -> Arc<dyn Predictor> {
    load_predictor_with_fallback(path, DEFAULT_FALLBACK_LABEL)
}

/// Like [`load_predictor`] but with a configurable fallback label.
pub fn load_predictor_with_fallback(
    path: impl AsRef<Path>,
    fallback_label: impl Into<String>,
) -> Arc<dyn Predictor> {
    let path = path.as_ref();

    match try_load(path) {
        Ok(model) => {
            info!(
                path = %path.display(),
                classes = model.class_count(),
                "loaded gesture model"
            );
            Arc::new(model)
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "could not load gesture model, using fallback predictor"
            );
            Arc::new(FallbackPredictor::with_label(fallback_label))
        }
    }
}

fn try_load(path: &Path) -> Result<GestureModel, LoadError> {
    let artifact = std::fs::read_to_string(path)?;
    GestureModel::from_json(&artifact)
}
