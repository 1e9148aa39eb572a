//! Risk assessment over the loaded artifacts

use crate::loader::{self, ArtifactSource, DeviceType};
use crate::network::RiskNet;
use crate::scaler::StandardScaler;
use async_trait::async_trait;
use candle_core::{Device, Tensor};
use glucoscreen_core::{Error, FeatureVector, Result, RiskLabel, FEATURE_COUNT};
use std::time::Instant;

/// Trait for risk classifiers.
///
/// Keeps the serving glue decoupled from the concrete inference runtime:
/// callers see `features in, assessment out` and nothing else.
#[async_trait]
pub trait RiskClassifier: Send + Sync {
    /// Assess one feature vector
    async fn assess(&self, features: &FeatureVector) -> Result<RiskAssessment>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of one assessment
#[derive(Debug, Clone)]
pub struct RiskAssessment {
    /// Binary outcome label
    pub label: RiskLabel,

    /// Positive-class probability (0.0-1.0)
    pub probability: f32,

    /// Latency in microseconds
    pub latency_us: u64,
}

/// Scaler + network pair serving the trained diabetes model.
///
/// Immutable after construction; shared across requests behind an `Arc`
/// without locking.
pub struct DiabetesPredictor {
    name: String,
    scaler: StandardScaler,
    net: RiskNet,
    device: Device,
}

impl DiabetesPredictor {
    /// Assemble a predictor from already-loaded parts
    pub fn new(scaler: StandardScaler, net: RiskNet, device: Device) -> Self {
        Self {
            name: "diabetes-risk".to_string(),
            scaler,
            net,
            device,
        }
    }

    /// Load both artifacts and assemble a predictor.
    ///
    /// Any failure here is a startup failure; nothing is retried.
    pub fn load(
        model: &ArtifactSource,
        scaler: &ArtifactSource,
        device_type: DeviceType,
    ) -> Result<Self> {
        let device = device_type.create_device()?;
        let scaler = StandardScaler::from_file(scaler.resolve()?)?;
        let vb = loader::load_weights(model, &device)?;
        let net = RiskNet::new(vb)?;
        Ok(Self::new(scaler, net, device))
    }

    /// Run one forward pass and read back the scalar probability
    fn infer(&self, scaled: [f32; FEATURE_COUNT]) -> Result<f32> {
        // Input layout is (batch, channels, features).
        let input = Tensor::from_slice(&scaled, (1, 1, FEATURE_COUNT), &self.device)
            .map_err(|e| Error::inference(format!("Failed to build input tensor: {}", e)))?;

        let output = self.net.forward(&input)?;
        let probabilities = output
            .flatten_all()
            .and_then(|t| t.to_vec1::<f32>())
            .map_err(|e| Error::inference(format!("Failed to read model output: {}", e)))?;

        probabilities
            .first()
            .copied()
            .ok_or_else(|| Error::inference("model produced no output"))
    }
}

#[async_trait]
impl RiskClassifier for DiabetesPredictor {
    async fn assess(&self, features: &FeatureVector) -> Result<RiskAssessment> {
        let start = Instant::now();

        let scaled = self.scaler.transform(features);
        let probability = self.infer(scaled)?;

        Ok(RiskAssessment {
            label: RiskLabel::from_probability(probability),
            probability,
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
