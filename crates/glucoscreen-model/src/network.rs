//! Risk classifier network definition

use candle_core::Tensor;
use candle_nn::{conv1d, linear, Conv1d, Conv1dConfig, Linear, Module, VarBuilder};
use glucoscreen_core::{Error, Result, FEATURE_COUNT};

// Channel widths fixed by the training pipeline's export.
const CONV1_CHANNELS: usize = 16;
const CONV2_CHANNELS: usize = 32;
const HIDDEN_UNITS: usize = 16;

/// 1-D convolutional binary classifier over the scaled feature vector.
///
/// Takes input of shape `(batch, 1, FEATURE_COUNT)` and produces one
/// positive-class probability per batch row.
#[derive(Debug)]
pub struct RiskNet {
    conv1: Conv1d,
    conv2: Conv1d,
    fc1: Linear,
    fc2: Linear,
}

impl RiskNet {
    /// Build the network from a variable store.
    ///
    /// Variable paths (`conv1.*`, `conv2.*`, `fc1.*`, `fc2.*`) match the
    /// names the training exporter writes into the safetensors artifact.
    pub fn new(vb: VarBuilder) -> Result<Self> {
        let cfg = Conv1dConfig {
            padding: 1,
            ..Default::default()
        };

        let conv1 = conv1d(1, CONV1_CHANNELS, 3, cfg, vb.pp("conv1"))
            .map_err(|e| Error::artifact(format!("Failed to build conv1: {e}")))?;
        let conv2 = conv1d(CONV1_CHANNELS, CONV2_CHANNELS, 3, cfg, vb.pp("conv2"))
            .map_err(|e| Error::artifact(format!("Failed to build conv2: {e}")))?;
        let fc1 = linear(CONV2_CHANNELS * FEATURE_COUNT, HIDDEN_UNITS, vb.pp("fc1"))
            .map_err(|e| Error::artifact(format!("Failed to build fc1: {e}")))?;
        let fc2 = linear(HIDDEN_UNITS, 1, vb.pp("fc2"))
            .map_err(|e| Error::artifact(format!("Failed to build fc2: {e}")))?;

        Ok(Self {
            conv1,
            conv2,
            fc1,
            fc2,
        })
    }

    /// Forward pass returning the positive-class probability per row
    pub fn forward(&self, input: &Tensor) -> Result<Tensor> {
        self.forward_inner(input)
            .map_err(|e| Error::inference(format!("forward pass failed: {e}")))
    }

    fn forward_inner(&self, input: &Tensor) -> candle_core::Result<Tensor> {
        let xs = self.conv1.forward(input)?.relu()?;
        let xs = self.conv2.forward(&xs)?.relu()?;
        let xs = xs.flatten_from(1)?;
        let xs = self.fc1.forward(&xs)?.relu()?;
        let xs = self.fc2.forward(&xs)?;
        candle_nn::ops::sigmoid(&xs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candle_core::{DType, Device};

    #[test]
    fn zero_weights_output_exactly_half() {
        let device = Device::Cpu;
        let vb = VarBuilder::zeros(DType::F32, &device);
        let net = RiskNet::new(vb).unwrap();

        let input = Tensor::zeros((1, 1, FEATURE_COUNT), DType::F32, &device).unwrap();
        let output = net.forward(&input).unwrap();
        let probabilities = output.flatten_all().unwrap().to_vec1::<f32>().unwrap();

        // sigmoid(0) is exactly 0.5
        assert_eq!(probabilities, vec![0.5]);
    }

    #[test]
    fn forward_rejects_wrong_input_rank() {
        let device = Device::Cpu;
        let vb = VarBuilder::zeros(DType::F32, &device);
        let net = RiskNet::new(vb).unwrap();

        let flat = Tensor::zeros((1, FEATURE_COUNT), DType::F32, &device).unwrap();
        assert!(net.forward(&flat).is_err());
    }
}
