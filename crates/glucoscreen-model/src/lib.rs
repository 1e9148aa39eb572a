//! GlucoScreen Model
//!
//! Artifact loading and inference for the diabetes risk classifier.
//!
//! This crate provides:
//! - The [`StandardScaler`] feature normalization artifact
//! - The [`RiskNet`] Candle network matching the training pipeline's export
//! - Artifact source resolution (local path or Hugging Face Hub)
//! - The [`RiskClassifier`] trait and its [`DiabetesPredictor`] implementation
//!
//! Inference runs on CPU by default with no shared mutable state; a loaded
//! predictor can be shared across request handlers behind an `Arc`.

pub mod loader;
pub mod network;
pub mod predictor;
pub mod scaler;

pub use loader::{load_weights, ArtifactSource, DeviceType};
pub use network::RiskNet;
pub use predictor::{DiabetesPredictor, RiskAssessment, RiskClassifier};
pub use scaler::StandardScaler;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::loader::{ArtifactSource, DeviceType};
    pub use crate::predictor::{DiabetesPredictor, RiskAssessment, RiskClassifier};
    pub use crate::scaler::StandardScaler;
}
