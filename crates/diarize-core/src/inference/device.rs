//! Device selection for inference.

use candle_core::utils::{cuda_is_available, metal_is_available};
use candle_core::Device;
use tracing::{debug, info};

use crate::domain::{DeviceKind, DeviceRequest};
use crate::error::{DeviceError, Result};
use crate::ports::AcceleratorProbe;

/// Probes backed by the candle runtime.
///
/// MPS is candle's Metal backend; both probes report false when the
/// matching backend was not compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl AcceleratorProbe for SystemProbe {
    fn cuda_available(&self) -> bool {
        cuda_is_available()
    }

    fn mps_available(&self) -> bool {
        metal_is_available()
    }
}

/// Resolves a device request against the given accelerator probes.
///
/// `Auto` prefers MPS, then CUDA, then CPU and always succeeds. The
/// explicit accelerator modes fail when the probe reports the backend
/// absent; `Cpu` never consults the probes at all.
///
/// # Errors
///
/// Returns [`DeviceError::MpsUnavailable`] or
/// [`DeviceError::CudaUnavailable`] when an explicitly requested
/// accelerator is not present.
pub fn select_device(request: DeviceRequest, accel: &dyn AcceleratorProbe) -> Result<DeviceKind> {
    let kind = match request {
        DeviceRequest::Auto => {
            if accel.mps_available() {
                DeviceKind::Mps
            } else if accel.cuda_available() {
                DeviceKind::Cuda
            } else {
                DeviceKind::Cpu
            }
        }
        DeviceRequest::Cpu => DeviceKind::Cpu,
        DeviceRequest::Cuda => {
            if !accel.cuda_available() {
                return Err(DeviceError::CudaUnavailable);
            }
            DeviceKind::Cuda
        }
        DeviceRequest::Mps => {
            if !accel.mps_available() {
                return Err(DeviceError::MpsUnavailable);
            }
            DeviceKind::Mps
        }
    };

    info!("Using {kind} device for inference");
    Ok(kind)
}

/// Builds the concrete candle device for a resolved backend.
///
/// Accelerator devices use ordinal 0.
///
/// # Errors
///
/// Returns [`DeviceError::Backend`] if the backend fails to initialize.
pub fn open_device(kind: DeviceKind) -> Result<Device> {
    debug!("Opening {kind} device");
    match kind {
        DeviceKind::Cpu => Ok(Device::Cpu),
        DeviceKind::Cuda => {
            Device::new_cuda(0).map_err(|source| DeviceError::Backend { kind, source })
        }
        DeviceKind::Mps => {
            Device::new_metal(0).map_err(|source| DeviceError::Backend { kind, source })
        }
    }
}

/// Returns the candle device for the requested mode, probing the host.
///
/// # Errors
///
/// Returns an error if an explicitly requested accelerator is not
/// present, or if the selected backend fails to initialize.
pub fn get_device(request: DeviceRequest) -> Result<Device> {
    let kind = select_device(request, &SystemProbe)?;
    open_device(kind)
}
