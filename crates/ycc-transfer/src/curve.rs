//! Runtime transfer curve selection.
//!
//! [`TransferCurve`] tags one of the supported curves so callers can select
//! a curve per call instead of hard-wiring one of the per-curve modules.
//! It also carries the integer-domain gamma helpers used when a value lives
//! in a limited byte range such as video luma [16, 235].

use crate::piecewise::CurveCoeffs;
use crate::{apple_gamma, rec709, srgb};
use thiserror::Error;

/// A byte value fell outside its declared range.
///
/// Returned by the integer-domain gamma helpers instead of the debug-only
/// assertion an in-range caller would never hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value {value} outside expected range [{min}, {max}]")]
pub struct RangeError {
    /// The offending value.
    pub value: i32,
    /// Inclusive lower bound of the declared range.
    pub min: i32,
    /// Inclusive upper bound of the declared range.
    pub max: i32,
}

/// Named transfer curve, selected at call time.
///
/// # Example
///
/// ```rust
/// use ycc_transfer::TransferCurve;
///
/// let encoded = TransferCurve::Srgb.oetf(0.18);
/// assert!((TransferCurve::Srgb.eotf(encoded) - 0.18).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferCurve {
    /// sRGB (IEC 61966-2-1).
    Srgb,
    /// BT.709 OETF (ITU-R BT.709-6).
    #[default]
    Rec709,
    /// Apple 1.961 device gamma.
    Apple1961,
}

impl TransferCurve {
    /// Piecewise coefficients for this curve.
    #[inline]
    pub const fn coeffs(self) -> CurveCoeffs {
        match self {
            TransferCurve::Srgb => srgb::COEFFS,
            TransferCurve::Rec709 => rec709::COEFFS,
            TransferCurve::Apple1961 => apple_gamma::COEFFS,
        }
    }

    /// Decodes a gamma-encoded normalized value to linear light.
    ///
    /// Input must be pre-clamped to [0, 1].
    #[inline]
    pub fn eotf(self, v: f32) -> f32 {
        self.coeffs().eotf(v)
    }

    /// Encodes a linear normalized value to the gamma domain.
    ///
    /// Input must be pre-clamped to [0, 1].
    #[inline]
    pub fn oetf(self, l: f32) -> f32 {
        self.coeffs().oetf(l)
    }

    /// Applies the EOTF to an RGB triplet.
    #[inline]
    pub fn eotf_rgb(self, rgb: [f32; 3]) -> [f32; 3] {
        [self.eotf(rgb[0]), self.eotf(rgb[1]), self.eotf(rgb[2])]
    }

    /// Applies the OETF to an RGB triplet.
    #[inline]
    pub fn oetf_rgb(self, rgb: [f32; 3]) -> [f32; 3] {
        [self.oetf(rgb[0]), self.oetf(rgb[1]), self.oetf(rgb[2])]
    }

    /// Decodes gamma on a byte value constrained to `[minv, maxv]`.
    ///
    /// Normalizes `v` relative to the sub-range, applies the EOTF, rounds
    /// back to the nearest integer in the same sub-range. Used for
    /// range-aware gamma steps on limited-range luma/chroma planes.
    ///
    /// # Errors
    ///
    /// [`RangeError`] if `v` lies outside `[minv, maxv]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ycc_transfer::TransferCurve;
    ///
    /// let curve = TransferCurve::Rec709;
    /// assert_eq!(curve.decode_gamma(16, 16, 235).unwrap(), 16);
    /// assert_eq!(curve.decode_gamma(235, 16, 235).unwrap(), 235);
    /// ```
    pub fn decode_gamma(self, v: u8, minv: u8, maxv: u8) -> Result<u8, RangeError> {
        let norm = range_norm(v, minv, maxv)?;
        Ok(range_quantize(self.eotf(norm), minv, maxv))
    }

    /// Encodes gamma on a byte value constrained to `[minv, maxv]`.
    ///
    /// The inverse of [`TransferCurve::decode_gamma`]: applies the OETF in
    /// the normalized sub-range domain.
    ///
    /// # Errors
    ///
    /// [`RangeError`] if `v` lies outside `[minv, maxv]`.
    pub fn encode_gamma(self, v: u8, minv: u8, maxv: u8) -> Result<u8, RangeError> {
        let norm = range_norm(v, minv, maxv)?;
        Ok(range_quantize(self.oetf(norm), minv, maxv))
    }
}

/// Normalizes `v` to [0, 1] relative to `[minv, maxv]`.
fn range_norm(v: u8, minv: u8, maxv: u8) -> Result<f32, RangeError> {
    if v < minv || v > maxv {
        return Err(RangeError {
            value: v as i32,
            min: minv as i32,
            max: maxv as i32,
        });
    }
    Ok((v - minv) as f32 / (maxv - minv) as f32)
}

/// Re-quantizes a normalized value back into `[minv, maxv]` by rounding.
#[inline]
fn range_quantize(norm: f32, minv: u8, maxv: u8) -> u8 {
    (norm * (maxv - minv) as f32).round() as u8 + minv
}
