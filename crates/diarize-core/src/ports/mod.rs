//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the domain core and the
//! runtime environment.

mod accelerator;

pub use accelerator::AcceleratorProbe;
