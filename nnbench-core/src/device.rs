use candle_core::utils::{cuda_is_available, metal_is_available};
use candle_core::Device;

use crate::Result;

/// Device the workloads run on: the first visible accelerator when a GPU
/// backend is compiled in, the CPU otherwise.
pub fn device() -> Result<Device> {
    if cuda_is_available() {
        Ok(Device::new_cuda(0)?)
    } else if metal_is_available() {
        Ok(Device::new_metal(0)?)
    } else {
        Ok(Device::Cpu)
    }
}
