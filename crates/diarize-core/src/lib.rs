//! Diarize Core - Domain types and device selection
//!
//! This crate contains the core domain types and the compute-device selection
//! policy used to place diarization models on the CPU, an NVIDIA GPU via
//! CUDA, or an Apple-silicon GPU via MPS.

pub mod domain;
pub mod error;
pub mod inference;
pub mod ports;

pub use domain::{DeviceKind, DeviceRequest};
pub use error::{DeviceError, Result};
pub use inference::{get_device, open_device, select_device, SystemProbe};
pub use ports::AcceleratorProbe;
