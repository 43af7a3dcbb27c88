//! Error types for frontline.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`FrontError`].
pub type Result<T> = std::result::Result<T, FrontError>;

/// Errors that can occur while building or refining an advancing front.
#[derive(Error, Debug)]
pub enum FrontError {
    /// A boundary loop has fewer than three vertices.
    #[error("boundary loop has only {vertices} vertices (need at least 3)")]
    DegenerateBoundary {
        /// Number of vertices in the offending loop.
        vertices: usize,
    },

    /// The seeded front is not counter-clockwise.
    ///
    /// The net signed area enclosed by the boundary loops must be positive;
    /// a non-positive area means the input geometry is wound the wrong way
    /// (or is degenerate).
    #[error("front edges are not counter-clockwise (signed area {area})")]
    InvalidOrientation {
        /// The net signed area of the edge sequence.
        area: f64,
    },

    /// The size field returned a non-positive value.
    ///
    /// Marching steps are sized by the field, so a non-positive sample
    /// would stall or reverse the march.
    #[error("size field returned {value} at ({x}, {y}); sizes must be positive")]
    NonPositiveSize {
        /// X coordinate of the sample point.
        x: f64,
        /// Y coordinate of the sample point.
        y: f64,
        /// The offending sample value.
        value: f64,
    },

    /// Sub-vertex placement produced points that do not strictly increase
    /// in arclength along the edge.
    ///
    /// This indicates a pathological size field (e.g. oscillating faster
    /// than the local spacing) or broken input geometry.
    #[error("sub-vertex {index} is not monotonically increasing in arclength")]
    NonMonotonicSpacing {
        /// Index of the first out-of-order point in the marched sequence.
        index: usize,
    },

    /// Predictor-corrector marching failed to reach the far endpoint.
    #[error("edge subdivision did not terminate after {steps} marching steps")]
    MarchDiverged {
        /// Number of steps taken before giving up.
        steps: usize,
    },
}
