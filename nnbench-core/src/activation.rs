use candle_core::Tensor;
use candle_nn::{Activation, Module};

use crate::input::{seeded_normal, INPUT_SEED};
use crate::{device, Error, Result, Workload};

/// Times one elementwise activation over a fixed-length seeded vector.
///
/// The canonical case is ReLU; benches sweep the other activations through
/// [`new`](ActivationForward::new).
#[derive(Debug)]
pub struct ActivationForward {
    act: Activation,
    input: Tensor,
}

impl ActivationForward {
    /// Element count used by the canonical case.
    pub const DEFAULT_LEN: usize = 1024;

    pub fn new(act: Activation, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::Profile("empty activation input".to_string()));
        }
        let device = device()?;
        let input = seeded_normal(INPUT_SEED, (1, len), &device)?;
        Ok(Self { act, input })
    }

    pub fn activation(&self) -> &Activation {
        &self.act
    }

    pub fn input(&self) -> &Tensor {
        &self.input
    }

    /// The forward pass behind [`run`](Workload::run), returning the output
    /// for inspection.
    pub fn forward(&self) -> Result<Tensor> {
        Ok(self.act.forward(&self.input)?)
    }
}

impl Workload for ActivationForward {
    const NAME: &'static str = "relu_forward";

    fn setup() -> Result<Self> {
        Self::new(Activation::Relu, Self::DEFAULT_LEN)
    }

    fn run(&self) -> Result<()> {
        self.forward().map(|_| ())
    }
}
