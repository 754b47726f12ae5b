//! Error types for road-geometry construction.

use thiserror::Error;

/// Errors raised when a geometry descriptor is rejected at construction.
///
/// Evaluation itself is infallible: once a descriptor has been validated,
/// `get_point` and `get_bbox` return finite values on the segment domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Segment arclength extent must be strictly positive.
    #[error("geometry length must be positive, got {0}")]
    NonPositiveLength(f64),

    /// A descriptor parameter was NaN or infinite.
    #[error("geometry parameter `{name}` is not finite ({value})")]
    NonFiniteParam {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
