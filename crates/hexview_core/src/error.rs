//! Geometry error types

use thiserror::Error;

/// Errors raised when a shape description cannot produce a valid outline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A polygon needs at least three sides
    #[error("polygon needs at least 3 sides, got {0}")]
    TooFewSides(u32),

    /// Side counts are capped so a path stays a reasonable size
    #[error("polygon may have at most {max} sides, got {sides}")]
    TooManySides { sides: u32, max: u32 },

    /// Stroke width must be finite and non-negative
    #[error("invalid stroke width: {0}")]
    InvalidStrokeWidth(f64),

    /// Corner radius must be finite and non-negative
    #[error("invalid corner radius: {0}")]
    InvalidCornerRadius(f64),

    /// Bounds must have finite, non-negative extents
    #[error("invalid bounds: {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },
}

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;
