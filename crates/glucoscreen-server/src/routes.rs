//! HTTP routes and handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use glucoscreen_core::FeatureVector;
use serde::Serialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    // Screening requests come straight from browser clients; the surface
    // is open to any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .fallback(fallback)
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Render Prometheus metrics from the recorder handle
async fn metrics(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

/// Screening response: a label and its fixed advisory message
#[derive(Debug, Serialize)]
struct PredictResponse {
    prediction: &'static str,
    message: &'static str,
}

/// Main prediction handler
async fn predict(
    State(state): State<AppState>,
    Json(features): Json<FeatureVector>,
) -> Result<Json<PredictResponse>, AppError> {
    metrics::counter!("glucoscreen_requests_total").increment(1);
    debug!("Received screening request: {:?}", features);

    let assessment = state.predictor.assess(&features).await?;

    metrics::histogram!("glucoscreen_inference_latency_us").record(assessment.latency_us as f64);
    metrics::counter!("glucoscreen_predictions_total", "label" => assessment.label.label())
        .increment(1);
    info!(
        label = assessment.label.label(),
        probability = assessment.probability as f64,
        latency_us = assessment.latency_us,
        "Screening request complete"
    );

    Ok(Json(PredictResponse {
        prediction: assessment.label.label(),
        message: assessment.label.advisory(),
    }))
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Error handling
#[derive(Debug)]
pub enum AppError {
    InvalidRequest(String),
    InternalError(String),
}

impl From<glucoscreen_core::Error> for AppError {
    fn from(err: glucoscreen_core::Error) -> Self {
        match err {
            glucoscreen_core::Error::Serialization(e) => AppError::InvalidRequest(e.to_string()),
            other => AppError::InternalError(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        metrics::counter!("glucoscreen_errors_total").increment(1);

        let body = json!({
            "error": {
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}
