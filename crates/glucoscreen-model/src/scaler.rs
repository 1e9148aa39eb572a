//! Pre-fitted feature scaling artifact

use glucoscreen_core::{Error, FeatureVector, Result, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-feature affine normalization fitted by the training pipeline.
///
/// Serialized as JSON with one `center`/`scale` entry per feature in model
/// input order (scikit-learn `StandardScaler` `mean_`/`scale_` export).
/// The on-disk format is owned by the exporter; this crate only validates
/// shape on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Value subtracted from each feature before scaling
    pub center: Vec<f32>,

    /// Divisor applied to each centered feature
    pub scale: Vec<f32>,
}

impl StandardScaler {
    /// Load and validate a scaler artifact from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "Scaler file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let scaler: Self = serde_json::from_str(&content)?;
        scaler.validate()?;

        tracing::info!("Loaded scaler from {}", path.display());
        Ok(scaler)
    }

    /// Check artifact shape before first use
    pub fn validate(&self) -> Result<()> {
        if self.center.len() != FEATURE_COUNT {
            return Err(Error::artifact(format!(
                "scaler center length {} != feature count {}",
                self.center.len(),
                FEATURE_COUNT
            )));
        }
        if self.scale.len() != FEATURE_COUNT {
            return Err(Error::artifact(format!(
                "scaler scale length {} != feature count {}",
                self.scale.len(),
                FEATURE_COUNT
            )));
        }
        if self.scale.iter().any(|v| !v.is_finite() || *v == 0.0) {
            return Err(Error::artifact(
                "scaler scale entries must be finite and non-zero",
            ));
        }
        Ok(())
    }

    /// Apply `(x - center) / scale` per feature, in model input order
    pub fn transform(&self, features: &FeatureVector) -> [f32; FEATURE_COUNT] {
        let mut out = features.as_array();
        for (i, value) in out.iter_mut().enumerate() {
            *value = (*value - self.center[i]) / self.scale[i];
        }
        out
    }

    /// Identity transform, used by tests and benches
    pub fn identity() -> Self {
        Self {
            center: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_centers_and_scales_each_feature() {
        let scaler = StandardScaler {
            center: vec![1.0; FEATURE_COUNT],
            scale: vec![2.0; FEATURE_COUNT],
        };
        let features = FeatureVector::from_array([3.0; FEATURE_COUNT]);

        assert_eq!(scaler.transform(&features), [1.0; FEATURE_COUNT]);
    }

    #[test]
    fn identity_is_a_no_op() {
        let features = FeatureVector::from_array([2.0, 148.0, 72.0, 35.0, 94.0, 33.6, 0.627, 50.0]);
        assert_eq!(
            StandardScaler::identity().transform(&features),
            features.as_array()
        );
    }

    #[test]
    fn validate_rejects_wrong_lengths() {
        let scaler = StandardScaler {
            center: vec![0.0; 4],
            scale: vec![1.0; FEATURE_COUNT],
        };
        assert!(scaler.validate().is_err());

        let scaler = StandardScaler {
            center: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; 9],
        };
        assert!(scaler.validate().is_err());
    }

    #[test]
    fn validate_rejects_degenerate_scale() {
        let mut scale = vec![1.0; FEATURE_COUNT];
        scale[3] = 0.0;
        let scaler = StandardScaler {
            center: vec![0.0; FEATURE_COUNT],
            scale,
        };
        assert!(scaler.validate().is_err());

        let mut scale = vec![1.0; FEATURE_COUNT];
        scale[0] = f32::NAN;
        let scaler = StandardScaler {
            center: vec![0.0; FEATURE_COUNT],
            scale,
        };
        assert!(scaler.validate().is_err());
    }
}
