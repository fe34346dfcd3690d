//! Accelerator availability port.

/// Port for querying which accelerator backends the host exposes.
///
/// The two probes are independent capabilities; selection policy treats
/// them as plain booleans and never caches the answers.
pub trait AcceleratorProbe: Send + Sync {
    /// Returns true when a CUDA-capable GPU is usable.
    fn cuda_available(&self) -> bool;

    /// Returns true when an Apple-silicon (MPS) GPU is usable.
    fn mps_available(&self) -> bool;
}
