//! Shared application state

use glucoscreen_model::{ArtifactSource, DiabetesPredictor, RiskClassifier};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tracing::info;

use crate::config::ServerConfig;

/// Application state shared across all requests.
///
/// Both artifacts are loaded once here and never mutated afterwards, so
/// handlers share them by reference without locking.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// Loaded scaler + classifier pair
    pub predictor: Arc<dyn RiskClassifier>,

    /// Prometheus metrics handle for rendering
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    /// Load the artifacts named by the configuration and build state.
    ///
    /// Called before the listener binds; any artifact fault aborts startup.
    pub fn new(config: ServerConfig, metrics_handle: PrometheusHandle) -> anyhow::Result<Self> {
        info!("Loading scaler from: {}", config.scaler_path);
        info!("Loading classifier weights from: {}", config.model_path);

        let predictor = DiabetesPredictor::load(
            &ArtifactSource::local(&config.model_path),
            &ArtifactSource::local(&config.scaler_path),
            config.device,
        )?;
        info!("Classifier '{}' ready", predictor.name());

        Ok(Self::with_predictor(config, Arc::new(predictor), metrics_handle))
    }

    /// Build state around an already-constructed classifier
    pub fn with_predictor(
        config: ServerConfig,
        predictor: Arc<dyn RiskClassifier>,
        metrics_handle: PrometheusHandle,
    ) -> Self {
        Self {
            config: Arc::new(config),
            predictor,
            metrics_handle,
        }
    }
}
