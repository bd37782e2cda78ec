use candle_core::{DType, Tensor};
use candle_nn::{conv2d, Conv2d, Conv2dConfig, Module, VarBuilder, VarMap};

use crate::{device, Error, Result, Workload};

/// Shape configuration for a [`Conv2dForward`] case.
///
/// Kernels are square and applied with stride 1 and no padding, which is all
/// the profiles here need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conv2dProfile {
    pub in_channels: usize,
    pub out_channels: usize,
    pub kernel_size: usize,
    /// Input height and width; the batch dimension is always 1.
    pub height: usize,
    pub width: usize,
}

impl Conv2dProfile {
    /// The reference case: one 2x2 filter over a constant 4x4 single-channel
    /// image.
    pub const fn reference() -> Self {
        Self {
            in_channels: 1,
            out_channels: 1,
            kernel_size: 2,
            height: 4,
            width: 4,
        }
    }

    /// Two filters over a 2x2 two-channel image, the smallest case where
    /// channels actually mix.
    pub const fn multi_channel() -> Self {
        Self {
            in_channels: 2,
            out_channels: 2,
            kernel_size: 2,
            height: 2,
            width: 2,
        }
    }

    /// Reject configurations the operator could never apply.
    pub fn validate(&self) -> Result<()> {
        if self.in_channels == 0 || self.out_channels == 0 || self.kernel_size == 0 {
            return Err(Error::Profile(format!("zero-sized dimension in {self:?}")));
        }
        if self.kernel_size > self.height || self.kernel_size > self.width {
            return Err(Error::Profile(format!(
                "{k}x{k} kernel does not fit a {h}x{w} input",
                k = self.kernel_size,
                h = self.height,
                w = self.width
            )));
        }
        Ok(())
    }

    /// Shape of the forward-pass output as (batch, channels, height, width).
    pub const fn output_dims(&self) -> (usize, usize, usize, usize) {
        (
            1,
            self.out_channels,
            self.height - self.kernel_size + 1,
            self.width - self.kernel_size + 1,
        )
    }

    fn input_dims(&self) -> (usize, usize, usize, usize) {
        (1, self.in_channels, self.height, self.width)
    }
}

/// Times one forward pass of a small 2D convolution.
///
/// The operator and its constant all-ones input are built once and reused for
/// every [`run`](Workload::run); weight and bias keep whatever the backend's
/// default initializer produced.
#[derive(Debug)]
pub struct Conv2dForward {
    conv: Conv2d,
    input: Tensor,
    profile: Conv2dProfile,
}

impl Conv2dForward {
    /// Build the operator and an all-ones input for `profile`.
    pub fn new(profile: Conv2dProfile) -> Result<Self> {
        profile.validate()?;
        let device = device()?;
        let vm = VarMap::new();
        let vb = VarBuilder::from_varmap(&vm, DType::F32, &device);
        let conv = conv2d(
            profile.in_channels,
            profile.out_channels,
            profile.kernel_size,
            Conv2dConfig::default(),
            vb,
        )?;
        let input = Tensor::ones(profile.input_dims(), DType::F32, &device)?;
        Ok(Self {
            conv,
            input,
            profile,
        })
    }

    /// The convolution operator, with its initialized weight and bias.
    pub fn conv(&self) -> &Conv2d {
        &self.conv
    }

    /// The constant input fed to every forward pass.
    pub fn input(&self) -> &Tensor {
        &self.input
    }

    pub fn profile(&self) -> Conv2dProfile {
        self.profile
    }

    /// The forward pass behind [`run`](Workload::run), returning the output
    /// for inspection.
    pub fn forward(&self) -> Result<Tensor> {
        Ok(self.conv.forward(&self.input)?)
    }
}

impl Workload for Conv2dForward {
    const NAME: &'static str = "conv2d_forward";

    fn setup() -> Result<Self> {
        Self::new(Conv2dProfile::reference())
    }

    fn run(&self) -> Result<()> {
        self.forward().map(|_| ())
    }
}
