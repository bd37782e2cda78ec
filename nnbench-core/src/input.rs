use candle_core::{Device, Shape, Tensor};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

#[cfg(feature = "half")]
use half::f16;

use crate::Result;

/// Seed shared by every workload that feeds non-constant data to its
/// operator.
pub const INPUT_SEED: u64 = 42;

/// A tensor of standard-normal values drawn from a fixed-seed generator.
///
/// Two calls with the same seed and shape produce bit-identical tensors.
pub fn seeded_normal<S: Into<Shape>>(seed: u64, shape: S, device: &Device) -> Result<Tensor> {
    let shape = shape.into();
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<f32> = (0..shape.elem_count())
        .map(|_| rng.sample(StandardNormal))
        .collect();
    Ok(Tensor::from_vec(data, shape, device)?)
}

/// [`seeded_normal`] with the values narrowed to `f16` storage.
#[cfg(feature = "half")]
pub fn seeded_normal_f16<S: Into<Shape>>(seed: u64, shape: S, device: &Device) -> Result<Tensor> {
    let shape = shape.into();
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<f16> = (0..shape.elem_count())
        .map(|_| f16::from_f32(rng.sample::<f32, _>(StandardNormal)))
        .collect();
    Ok(Tensor::from_vec(data, shape, device)?)
}
