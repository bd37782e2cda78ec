use candle_core::{DType, Tensor};
use candle_nn::{linear, ops, Linear, VarBuilder, VarMap};

use crate::input::{seeded_normal, INPUT_SEED};
use crate::{device, Result, Workload};

/// Layer widths for [`MlpForward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlpProfile {
    pub input: usize,
    pub hidden: [usize; 2],
    pub output: usize,
}

impl MlpProfile {
    /// An MNIST-sized classifier stack: 784 -> 128 -> 64 -> 10.
    pub const fn reference() -> Self {
        Self {
            input: 784,
            hidden: [128, 64],
            output: 10,
        }
    }
}

/// Times one forward pass of a small dense classifier:
/// `Linear -> relu -> Linear -> sigmoid -> Linear`.
#[derive(Debug)]
pub struct MlpForward {
    fc1: Linear,
    fc2: Linear,
    fc3: Linear,
    input: Tensor,
}

impl MlpForward {
    /// Build the three layers and a seeded (1, input) batch for `profile`.
    pub fn new(profile: MlpProfile) -> Result<Self> {
        let device = device()?;
        let vm = VarMap::new();
        let vb = VarBuilder::from_varmap(&vm, DType::F32, &device);
        let fc1 = linear(profile.input, profile.hidden[0], vb.pp("fc1"))?;
        let fc2 = linear(profile.hidden[0], profile.hidden[1], vb.pp("fc2"))?;
        let fc3 = linear(profile.hidden[1], profile.output, vb.pp("fc3"))?;
        let input = seeded_normal(INPUT_SEED, (1, profile.input), &device)?;
        Ok(Self {
            fc1,
            fc2,
            fc3,
            input,
        })
    }

    /// The seeded input batch fed to every forward pass.
    pub fn input(&self) -> &Tensor {
        &self.input
    }

    pub fn layers(&self) -> [&Linear; 3] {
        [&self.fc1, &self.fc2, &self.fc3]
    }

    /// The forward pass behind [`run`](Workload::run), returning the logits
    /// for inspection.
    pub fn forward(&self) -> Result<Tensor> {
        let xs = self.input.apply(&self.fc1)?.relu()?;
        let xs = ops::sigmoid(&xs.apply(&self.fc2)?)?;
        Ok(xs.apply(&self.fc3)?)
    }
}

impl Workload for MlpForward {
    const NAME: &'static str = "mlp_forward";

    fn setup() -> Result<Self> {
        Self::new(MlpProfile::reference())
    }

    fn run(&self) -> Result<()> {
        self.forward().map(|_| ())
    }
}
