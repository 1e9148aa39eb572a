//! Server configuration

use glucoscreen_model::DeviceType;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::Cli;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Path to the serialized classifier weights
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// Path to the fitted scaler artifact
    #[serde(default = "default_scaler_path")]
    pub scaler_path: String,

    /// Inference device
    #[serde(default)]
    pub device: DeviceType,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &Cli) -> anyhow::Result<Self> {
        // Load from file when present, defaults otherwise
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(model) = &cli.model {
            config.model_path = model.clone();
        }

        if let Some(scaler) = &cli.scaler {
            config.scaler_path = scaler.clone();
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            scaler_path: default_scaler_path(),
            device: DeviceType::default(),
        }
    }
}

fn default_model_path() -> String {
    // Artifacts are read from the working directory by default, matching
    // the training pipeline's export layout.
    "diabetes_model.safetensors".to_string()
}

fn default_scaler_path() -> String {
    "scaler.json".to_string()
}
