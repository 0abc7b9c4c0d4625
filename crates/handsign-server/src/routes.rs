//! HTTP routes and handlers

use crate::state::AppState;
use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use handsign_core::{predict_label, FeatureVector};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{debug, error};

/// Build the router for the inference endpoint.
pub fn create_router(state: AppState) -> Router {
    // CORS defaults to local origins; override only for explicit deployments.
    let allow_any_origin = std::env::var("HANDSIGN_ALLOW_ANY_ORIGIN")
        .ok()
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    let cors = if allow_any_origin {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list([
                HeaderValue::from_static("http://localhost:5000"),
                HeaderValue::from_static("http://127.0.0.1:5000"),
            ]))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/health", get(health))
        .route("/predict", post(predict))
        .layer(cors)
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "model": state.predictor.name(),
        "fallback": state.predictor.is_fallback(),
    }))
}

/// Prediction request body.
///
/// `landmarks` stays `Option` so a body without the field reaches the
/// validator instead of being rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    landmarks: Option<Vec<serde_json::Value>>,
}

async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> impl IntoResponse {
    let vector = match FeatureVector::validate(req.landmarks) {
        Ok(vector) => vector,
        Err(e) => {
            debug!(error = %e, "rejected landmarks payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            );
        }
    };

    match predict_label(vector, state.predictor.as_ref()) {
        Ok(label) => (StatusCode::OK, Json(json!({ "prediction": label }))),
        Err(e) => {
            // Detail goes to logs; the caller gets a fixed message.
            error!(error = %e, "prediction failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Prediction failed" })),
            )
        }
    }
}
