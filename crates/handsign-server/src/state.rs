//! Shared application state

use handsign_core::Predictor;
use std::sync::Arc;

/// Process-wide state handed to every request handler.
///
/// The predictor is resolved once at startup and never mutated afterwards,
/// so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn Predictor>,
}

impl AppState {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }
}
