//! Error types for color conversions.
//!
//! The conversion engine is pure math with no external resources, so the
//! only runtime failures are precondition violations: a quantized input
//! outside its declared range, or a pixel buffer whose dimensions do not
//! match. These surface as `Err` rather than a debug-only assertion, so a
//! release build can never propagate a silently wrong pixel value.

use thiserror::Error;

/// Color conversion error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A quantized component fell outside its declared range
    /// (e.g. luma outside [16, 235]).
    #[error("{channel} value {value} outside expected range [{min}, {max}]")]
    ValueOutOfRange {
        /// Channel name ("Y", "Cb", "Cr", ...).
        channel: &'static str,
        /// The offending value.
        value: i32,
        /// Inclusive lower bound.
        min: i32,
        /// Inclusive upper bound.
        max: i32,
    },

    /// Integer-domain gamma adjustment failed.
    #[error("gamma adjust: {0}")]
    Gamma(#[from] ycc_transfer::RangeError),

    /// Pixel buffer dimensions are invalid or inconsistent.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type for color conversions.
pub type ColorResult<T> = Result<T, ColorError>;
