use thiserror::Error;

/// Errors reported by ring progress configuration and setters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingProgressError {
    /// The total must be strictly positive.
    #[error("total must be greater than zero, got {0}")]
    InvalidTotal(i32),
    /// The stroke width must be finite and non-negative.
    #[error("stroke width must be a finite, non-negative pixel value, got {0}")]
    InvalidStrokeWidth(f32),
}
