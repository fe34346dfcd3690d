//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use diarize_core::ports::AcceleratorProbe;

/// Mock implementation of `AcceleratorProbe` for testing.
///
/// Reports fixed availability flags and tracks how often each probe is
/// consulted for assertions.
pub struct MockAcceleratorProbe {
    cuda: bool,
    mps: bool,
    cuda_probes: Arc<Mutex<usize>>,
    mps_probes: Arc<Mutex<usize>>,
}

impl MockAcceleratorProbe {
    /// Creates a probe with the given CUDA and MPS availability.
    #[must_use]
    pub fn new(cuda: bool, mps: bool) -> Self {
        Self {
            cuda,
            mps,
            cuda_probes: Arc::new(Mutex::new(0)),
            mps_probes: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates a probe for a host with no accelerators.
    #[must_use]
    pub fn none() -> Self {
        Self::new(false, false)
    }

    /// Creates a probe for a CUDA-only host.
    #[must_use]
    pub fn cuda_only() -> Self {
        Self::new(true, false)
    }

    /// Creates a probe for an Apple-silicon host.
    #[must_use]
    pub fn mps_only() -> Self {
        Self::new(false, true)
    }

    /// Returns how many times the CUDA probe was consulted.
    #[must_use]
    pub fn cuda_probe_count(&self) -> usize {
        *self
            .cuda_probes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns how many times the MPS probe was consulted.
    #[must_use]
    pub fn mps_probe_count(&self) -> usize {
        *self
            .mps_probes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl AcceleratorProbe for MockAcceleratorProbe {
    fn cuda_available(&self) -> bool {
        if let Ok(mut c) = self.cuda_probes.lock() {
            *c += 1;
        }
        self.cuda
    }

    fn mps_available(&self) -> bool {
        if let Ok(mut c) = self.mps_probes.lock() {
            *c += 1;
        }
        self.mps
    }
}
