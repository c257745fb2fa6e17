//! Error taxonomy for resize operations.
//!
//! Every failure is local to a single call: nothing is retried, no shared
//! state exists to corrupt, and scoped buffers are released on every exit
//! path by ownership.

use thiserror::Error;

use crate::codec::OutputFormat;
use crate::geometry::GeometryError;

/// Convenience result type for resize operations.
pub type FitResult<T> = Result<T, FitError>;

/// Failure of a single resize call.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FitError {
    /// Input bytes are not a decodable image. Fails before any geometry
    /// computation.
    #[error("input is not a decodable image: {0}")]
    Decode(#[source] image::ImageError),

    /// A requested dimension is zero or quality is outside `0..=100`.
    /// Rejected before any canvas is allocated.
    #[error("invalid {param}: {value}")]
    InvalidDimension {
        /// Which parameter was rejected.
        param: &'static str,
        /// The offending value.
        value: u32,
    },

    /// No encoder handles the requested output format.
    #[error("no encoder registered for {0:?}")]
    EncodingUnavailable(OutputFormat),

    /// The planned canvas exceeds the pixel budget. Checked before
    /// allocation so pathological dimensions never reach the allocator.
    #[error("canvas of {width}x{height} exceeds the pixel budget")]
    ResourceExhaustion {
        /// Planned canvas width.
        width: u32,
        /// Planned canvas height.
        height: u32,
    },

    /// The encoder failed while serializing the canvas.
    #[error("encoding failed: {0}")]
    Encode(#[source] image::ImageError),
}

impl From<GeometryError> for FitError {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::ZeroSourceDimension => FitError::InvalidDimension {
                param: "source dimension",
                value: 0,
            },
            GeometryError::ZeroTargetDimension => FitError::InvalidDimension {
                param: "target dimension",
                value: 0,
            },
        }
    }
}
