//! Core domain types for device selection.

mod device;

pub use device::{DeviceKind, DeviceRequest};
