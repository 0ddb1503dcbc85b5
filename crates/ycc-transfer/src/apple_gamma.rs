//! Apple 1.961 device gamma.
//!
//! Apple's display pipeline encodes BT.709 content with an effective gamma
//! of about 1.961 rather than the broadcast OETF. The curve is a pure power
//! function with a short linear toe and no offset term, so it does not
//! follow the `(V + a)/(1 + a)` form of sRGB/Rec.709.
//!
//! # Range
//!
//! - Input/Output: [0, 1]

use crate::piecewise::CurveCoeffs;

/// Apple 1.961 piecewise coefficients (no offset: pure power segment).
pub const COEFFS: CurveCoeffs = CurveCoeffs {
    encoded_break: 0.05583828,
    linear_break: 0.00349,
    slope: 16.0,
    gamma: 1.960938,
    offset: 0.0,
};

/// Apple 1.961 EOTF: Decodes device-encoded values to linear.
///
/// # Formula
///
/// ```text
/// if V < 0.05583828:
///     L = V / 16
/// else:
///     L = V^1.960938
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    COEFFS.eotf(v)
}

/// Apple 1.961 OETF: Encodes linear to the device curve.
///
/// # Formula
///
/// ```text
/// if L < 0.00349:
///     V = 16 * L
/// else:
///     V = L^(1/1.960938)
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    COEFFS.oetf(l)
}

/// Applies the Apple 1.961 EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Applies the Apple 1.961 OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}
