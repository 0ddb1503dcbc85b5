//! Rec.709 (BT.709) transfer function.
//!
//! The Rec.709 OETF is the camera encoding curve for HDTV. This is the
//! curve the YCbCr conversion engine applies around its matrix step when
//! producing or consuming BT.709 video range data.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! ITU-R BT.709-6

use crate::piecewise::CurveCoeffs;

/// Rec.709 piecewise coefficients.
///
/// The 0.45 exponent is the published constant; it rounds better than
/// `1/2.2`.
pub const COEFFS: CurveCoeffs = CurveCoeffs {
    encoded_break: 0.081,
    linear_break: 0.018,
    slope: 4.5,
    gamma: 1.0 / 0.45,
    offset: 0.099,
};

/// Rec.709 inverse OETF: Decodes Rec.709 encoded values to linear.
///
/// # Formula
///
/// ```text
/// if V < 0.081:
///     L = V / 4.5
/// else:
///     L = ((V + 0.099) / 1.099)^(1/0.45)
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    COEFFS.eotf(v)
}

/// Rec.709 OETF: Encodes linear to Rec.709.
///
/// # Formula
///
/// ```text
/// if L < 0.018:
///     V = 4.5 * L
/// else:
///     V = 1.099 * L^0.45 - 0.099
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    COEFFS.oetf(l)
}

/// Applies Rec.709 EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Applies Rec.709 OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let linear = eotf(v);
            let back = oetf(linear);
            assert!((v - back).abs() < 1e-4, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_linear_segment() {
        assert!((eotf(0.045) - 0.01).abs() < 1e-6);
        assert!((oetf(0.01) - 0.045).abs() < 1e-6);
    }
}
