//! Error types for device selection.

use thiserror::Error;

use crate::domain::DeviceKind;

/// Errors produced while selecting or opening a compute device.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// MPS was requested explicitly but no Apple-silicon GPU is present.
    #[error("MPS requested but not available")]
    MpsUnavailable,

    /// CUDA was requested explicitly but no CUDA GPU is present.
    #[error("CUDA requested but not available")]
    CudaUnavailable,

    /// A device mode string did not name a known mode.
    #[error("unknown device mode '{0}', expected one of: auto, cpu, cuda, mps")]
    UnknownMode(String),

    /// The backend reported as available but failed to initialize.
    #[error("failed to initialize {kind} backend")]
    Backend {
        /// Backend that failed to come up.
        kind: DeviceKind,
        /// Underlying candle error.
        #[source]
        source: candle_core::Error,
    },
}

pub type Result<T> = std::result::Result<T, DeviceError>;
