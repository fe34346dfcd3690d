//! ML inference plumbing built on Candle.
//!
//! Currently provides compute-device selection for model placement.

mod device;

pub use device::{get_device, open_device, select_device, SystemProbe};

// TODO: add the segmentation and speaker-embedding model wrappers
