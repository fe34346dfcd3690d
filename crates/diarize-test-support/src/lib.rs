//! Test support utilities for diarize.
//!
//! Provides mock accelerator probes so device-selection policy can be
//! tested with fixed hardware availability, without real GPU hardware
//! and without patching process-wide state.
//!
//! # Example
//!
//! ```
//! use diarize_core::ports::AcceleratorProbe;
//! use diarize_test_support::MockAcceleratorProbe;
//!
//! // Host with an Apple-silicon GPU and no CUDA.
//! let probe = MockAcceleratorProbe::new(false, true);
//! assert!(probe.mps_available());
//! assert!(!probe.cuda_available());
//! ```

mod mocks;

pub use mocks::MockAcceleratorProbe;
