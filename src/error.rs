//! Error types for path sampling and tube mesh generation.

use thiserror::Error;

/// Result type for tube operations.
pub type TubeResult<T> = Result<T, TubeError>;

/// Errors raised by tube construction.
///
/// Every variant except `Io` is a configuration error: the call that
/// received the bad input fails immediately and nothing is clamped.
#[derive(Debug, Error)]
pub enum TubeError {
    /// Ring has too few vertices.
    #[error("ring needs at least {min} vertices, got {actual}")]
    InvalidRingVertexCount {
        /// Minimum accepted vertex count.
        min: usize,
        /// Requested vertex count.
        actual: usize,
    },

    /// Ring radius is zero, negative or not finite.
    #[error("invalid ring radius: {0}")]
    InvalidRadius(f32),

    /// Facing direction has zero length or is not finite.
    #[error("ring facing direction must be a non-zero finite vector")]
    DegenerateFacing,

    /// The two end caps of a cylinder differ in vertex count.
    #[error("cylinder end caps must have the same vertex count ({first} vs {second})")]
    MismatchedRingSizes {
        /// Vertex count of the first ring.
        first: usize,
        /// Vertex count of the second ring.
        second: usize,
    },

    /// Distance between emitted segments is not positive.
    #[error("segment length must be > 0, got {0}")]
    InvalidSegmentLength(f32),

    /// Segment window capacity is zero.
    #[error("segment window must hold at least 1 segment, got {0}")]
    InvalidSegmentMax(usize),

    /// Path follower speed is not positive.
    #[error("follower speed must be > 0, got {0}")]
    InvalidSpeed(f32),

    /// Noise gain is zero or not finite.
    #[error("path gain must be a finite non-zero value, got {0}")]
    InvalidGain(f32),

    /// Slope bound is negative or not finite.
    #[error("max slope must be a finite value >= 0, got {0}")]
    InvalidMaxSlope(f32),

    /// Mesh export failed.
    #[error("mesh export failed: {0}")]
    Io(#[from] std::io::Error),
}
