//! Artifact source resolution and weight loading

use candle_core::{DType, Device};
use candle_nn::VarBuilder;
use glucoscreen_core::{Error, Result};
use hf_hub::{api::sync::Api, Repo, RepoType};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source location for a serialized artifact
#[derive(Debug, Clone)]
pub enum ArtifactSource {
    /// Load from local file system
    LocalPath(PathBuf),

    /// Download from Hugging Face Hub
    HuggingFace {
        repo_id: String,
        revision: Option<String>,
        filename: String,
    },
}

impl ArtifactSource {
    /// Convenience constructor for a local artifact
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::LocalPath(path.into())
    }

    /// Resolve the source to a local path, downloading if necessary
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            Self::LocalPath(path) => {
                if !path.exists() {
                    return Err(Error::config(format!(
                        "Artifact file not found: {}",
                        path.display()
                    )));
                }
                Ok(path.clone())
            }
            Self::HuggingFace {
                repo_id,
                revision,
                filename,
            } => {
                let api = Api::new().map_err(|e| {
                    Error::config(format!("Failed to initialize HF API: {}", e))
                })?;

                let repo = api.repo(Repo::with_revision(
                    repo_id.clone(),
                    RepoType::Model,
                    revision.clone().unwrap_or_else(|| "main".to_string()),
                ));

                repo.get(filename).map_err(|e| {
                    Error::config(format!("Failed to download artifact from HF: {}", e))
                })
            }
        }
    }
}

/// Device type for inference
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// CPU inference (always available)
    #[default]
    Cpu,
    /// CUDA GPU inference (if available)
    Cuda(usize),
    /// Metal (Apple Silicon)
    Metal(usize),
}

impl DeviceType {
    /// Create the Candle device for this type
    pub fn create_device(self) -> Result<Device> {
        match self {
            Self::Cpu => Ok(Device::Cpu),
            Self::Cuda(idx) => Device::new_cuda(idx)
                .map_err(|e| Error::config(format!("Failed to create CUDA device: {}", e))),
            Self::Metal(idx) => Device::new_metal(idx)
                .map_err(|e| Error::config(format!("Failed to create Metal device: {}", e))),
        }
    }
}

/// Load safetensors weights into a `VarBuilder` on the given device
pub fn load_weights(source: &ArtifactSource, device: &Device) -> Result<VarBuilder<'static>> {
    let path = source.resolve()?;

    let tensors = candle_core::safetensors::load(&path, device)
        .map_err(|e| Error::artifact(format!("Failed to load safetensors: {}", e)))?;

    tracing::info!("Loaded model weights from {}", path.display());
    Ok(VarBuilder::from_tensors(tensors, DType::F32, device))
}
