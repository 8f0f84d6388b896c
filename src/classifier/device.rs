use candle_core::Device;
use tracing::{debug, info, warn};

use super::error::ClassifierError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accelerator {
    Metal,
    Cuda,
}

/// Accelerators compiled into this build, most preferred first.
pub const COMPILED_ACCELERATORS: &[Accelerator] = &[
    #[cfg(feature = "metal")]
    Accelerator::Metal,
    #[cfg(feature = "cuda")]
    Accelerator::Cuda,
];

impl Accelerator {
    pub fn name(&self) -> &'static str {
        match self {
            Accelerator::Metal => "metal",
            Accelerator::Cuda => "cuda",
        }
    }

    fn open(&self) -> Result<Device, ClassifierError> {
        let opened = match self {
            Accelerator::Metal => Device::new_metal(0),
            Accelerator::Cuda => Device::new_cuda(0),
        };
        opened.map_err(|e| ClassifierError::DeviceUnavailable {
            device: self.name().to_string(),
            reason: e.to_string(),
        })
    }
}

/// First accelerator that opens, else CPU. Never fails: inference always has
/// somewhere to run.
pub fn select_device() -> Device {
    select_device_from(COMPILED_ACCELERATORS)
}

pub fn select_device_from(accelerators: &[Accelerator]) -> Device {
    if accelerators.is_empty() {
        debug!("No accelerator compiled in, using CPU device");
        return Device::Cpu;
    }

    for accelerator in accelerators {
        match accelerator.open() {
            Ok(device) => {
                info!(device = accelerator.name(), "Using GPU acceleration");
                return device;
            }
            Err(e) => warn!(error = %e, "Skipping accelerator"),
        }
    }

    warn!("No accelerator available, falling back to CPU device");
    Device::Cpu
}
