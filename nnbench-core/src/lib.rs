//! Forward-pass latency microbenchmarks for small neural-network layers.
//!
//! Each benchmark case builds its operator and input once
//! ([`Workload::setup`]) and then exposes a cheap, repeatedly-timed forward
//! pass ([`Workload::run`]). The layers and tensors come from candle; the
//! criterion harness in `benches/` owns timing and reporting. Benchmark
//! entry points cap intra-op parallelism to a single thread first, see
//! [`limit_intra_op_threads`].

mod activation;
mod conv2d;
mod device;
mod error;
mod input;
mod mlp;
mod threads;
mod workload;

pub use activation::ActivationForward;
pub use conv2d::{Conv2dForward, Conv2dProfile};
pub use device::device;
pub use error::{Error, Result};
#[cfg(feature = "half")]
pub use input::seeded_normal_f16;
pub use input::{seeded_normal, INPUT_SEED};
pub use mlp::{MlpForward, MlpProfile};
pub use threads::{host_threads, intra_op_threads, limit_intra_op_threads};
pub use workload::Workload;

pub use candle_core::{DType, Device, Tensor};
pub use candle_nn::Activation;
