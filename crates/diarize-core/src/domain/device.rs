//! Device request and backend tag types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeviceError;

/// Requested compute device mode.
///
/// `Auto` picks the best accelerator present at call time and always
/// succeeds; the explicit modes demand that backend and fail when it is
/// missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceRequest {
    /// Prefer MPS, then CUDA, then CPU.
    #[default]
    Auto,
    /// CPU only.
    Cpu,
    /// NVIDIA GPU via CUDA.
    Cuda,
    /// Apple-silicon GPU via MPS.
    Mps,
}

impl DeviceRequest {
    /// Returns the canonical lowercase name of this mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Cpu => "cpu",
            Self::Cuda => "cuda",
            Self::Mps => "mps",
        }
    }
}

impl fmt::Display for DeviceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceRequest {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "cpu" => Ok(Self::Cpu),
            "cuda" => Ok(Self::Cuda),
            "mps" => Ok(Self::Mps),
            other => Err(DeviceError::UnknownMode(other.to_string())),
        }
    }
}

/// Backend tag of a selected device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    /// Host CPU.
    Cpu,
    /// NVIDIA GPU via CUDA.
    Cuda,
    /// Apple-silicon GPU via MPS.
    Mps,
}

impl DeviceKind {
    /// Returns the lowercase backend tag (`"cpu"`, `"cuda"`, `"mps"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Cuda => "cuda",
            Self::Mps => "mps",
        }
    }

    /// Returns true for the accelerator backends.
    #[must_use]
    pub fn is_accelerator(&self) -> bool {
        !matches!(self, Self::Cpu)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_is_auto() {
        assert_eq!(DeviceRequest::default(), DeviceRequest::Auto);
    }

    #[test]
    fn test_parse_canonical_modes() {
        assert_eq!("auto".parse::<DeviceRequest>().unwrap(), DeviceRequest::Auto);
        assert_eq!("cpu".parse::<DeviceRequest>().unwrap(), DeviceRequest::Cpu);
        assert_eq!("cuda".parse::<DeviceRequest>().unwrap(), DeviceRequest::Cuda);
        assert_eq!("mps".parse::<DeviceRequest>().unwrap(), DeviceRequest::Mps);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("CUDA".parse::<DeviceRequest>().unwrap(), DeviceRequest::Cuda);
        assert_eq!(" Mps ".parse::<DeviceRequest>().unwrap(), DeviceRequest::Mps);
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let err = "tpu".parse::<DeviceRequest>().unwrap_err();
        assert!(err.to_string().contains("unknown device mode"));
        assert!(err.to_string().contains("tpu"));
    }

    #[test]
    fn test_display_round_trips() {
        for request in [
            DeviceRequest::Auto,
            DeviceRequest::Cpu,
            DeviceRequest::Cuda,
            DeviceRequest::Mps,
        ] {
            let parsed: DeviceRequest = request.to_string().parse().unwrap();
            assert_eq!(parsed, request);
        }
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(DeviceKind::Cpu.as_str(), "cpu");
        assert_eq!(DeviceKind::Cuda.as_str(), "cuda");
        assert_eq!(DeviceKind::Mps.as_str(), "mps");
    }

    #[test]
    fn test_kind_accelerator_flag() {
        assert!(!DeviceKind::Cpu.is_accelerator());
        assert!(DeviceKind::Cuda.is_accelerator());
        assert!(DeviceKind::Mps.is_accelerator());
    }
}
