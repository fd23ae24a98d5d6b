//! Error type shared by the sampling, configuration, and subdivision stages.

use thiserror::Error;

use crate::geom::Triangle;

#[derive(Debug, Error)]
pub enum MosaicError {
    /// A configuration value is out of range; raised before any subdivision.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The sampling step produced no points.
    #[error("sample set is empty")]
    EmptySamples,

    /// A pixel buffer does not match the declared grid dimensions.
    #[error("pixel buffer has {actual} bytes, expected {expected} for a {width}x{height} RGB grid")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Recursion went deeper than `MosaicCfg::max_depth`.
    #[error("subdivision exceeded max depth {max_depth} at triangle {triangle} ({samples} samples)")]
    DepthExceeded {
        max_depth: usize,
        triangle: Triangle,
        samples: usize,
    },
}

impl MosaicError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MosaicError>;
