//! Pixel value types.
//!
//! Normalized float triples carry their encoding in the type: [`LinearRgb`]
//! is linear light, [`EncodedRgb`] is gamma-encoded. Composing the gamma
//! step and the matrix step in the wrong order is the principal correctness
//! risk in this engine, so a bare `[f32; 3]` with ambiguous encoding never
//! crosses a public API boundary.
//!
//! Byte-domain values ([`Ycbcr`], the `[u8; 3]` sRGB triples) are quantized
//! integer forms; [`Ycbcr`] is limited-range (luma [16, 235], chroma
//! [16, 240]) and validated before any inverse transform.

use crate::error::{ColorError, ColorResult};
use crate::ycbcr::{UV_MAX, UV_MIN, Y_MAX, Y_MIN};
use ycc_math::Vec3;
use ycc_transfer::{srgb, TransferCurve};

/// Clamps a normalized value to [0.0, 1.0].
///
/// Applied to every matrix output before integer quantization.
#[inline]
pub fn saturate(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Converts a byte in [0, 255] to a normalized float.
#[inline]
pub fn byte_norm(v: u8) -> f32 {
    v as f32 * (1.0 / 255.0)
}

/// Quantizes a normalized value to a byte by rounding to nearest.
///
/// Input must already be saturated to [0, 1].
#[inline]
pub fn norm_to_byte(v: f32) -> u8 {
    debug_assert!((0.0..=1.0).contains(&v));
    (v * 255.0).round() as u8
}

/// A linear-light RGB triple, each channel normalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    /// Red, linear.
    pub r: f32,
    /// Green, linear.
    pub g: f32,
    /// Blue, linear.
    pub b: f32,
}

impl LinearRgb {
    /// Creates a linear RGB triple.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Decodes sRGB-encoded bytes to linear light.
    ///
    /// The intermediate representation stays float; converting sRGB bytes
    /// to linear bytes would lose the dark end of the range.
    #[inline]
    pub fn from_srgb_bytes(rgb: [u8; 3]) -> Self {
        Self::new(
            srgb::eotf(byte_norm(rgb[0])),
            srgb::eotf(byte_norm(rgb[1])),
            srgb::eotf(byte_norm(rgb[2])),
        )
    }

    /// Saturates, encodes with the sRGB OETF, and quantizes to bytes.
    #[inline]
    pub fn to_srgb_bytes(self) -> [u8; 3] {
        let s = self.saturate();
        [
            norm_to_byte(srgb::oetf(s.r)),
            norm_to_byte(srgb::oetf(s.g)),
            norm_to_byte(srgb::oetf(s.b)),
        ]
    }

    /// Applies the selected OETF, producing a gamma-encoded triple.
    #[inline]
    pub fn encode(self, curve: TransferCurve) -> EncodedRgb {
        EncodedRgb::new(curve.oetf(self.r), curve.oetf(self.g), curve.oetf(self.b))
    }

    /// Clamps each channel to [0, 1].
    #[inline]
    pub fn saturate(self) -> Self {
        Self::new(saturate(self.r), saturate(self.g), saturate(self.b))
    }

    /// View as a [`Vec3`] for matrix transforms.
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// Creates from a [`Vec3`].
    #[inline]
    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// A gamma-encoded RGB triple, each channel normalized to [0, 1].
///
/// Which curve encoded it is tracked by the caller; the conversion
/// functions that produce or consume `EncodedRgb` name the curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EncodedRgb {
    /// Red, gamma-encoded.
    pub r: f32,
    /// Green, gamma-encoded.
    pub g: f32,
    /// Blue, gamma-encoded.
    pub b: f32,
}

impl EncodedRgb {
    /// Creates a gamma-encoded RGB triple.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Normalizes encoded bytes without touching gamma.
    #[inline]
    pub fn from_bytes(rgb: [u8; 3]) -> Self {
        Self::new(byte_norm(rgb[0]), byte_norm(rgb[1]), byte_norm(rgb[2]))
    }

    /// Quantizes to bytes without touching gamma.
    ///
    /// Channels must already be saturated to [0, 1].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [norm_to_byte(self.r), norm_to_byte(self.g), norm_to_byte(self.b)]
    }

    /// Applies the selected EOTF, producing a linear-light triple.
    #[inline]
    pub fn decode(self, curve: TransferCurve) -> LinearRgb {
        LinearRgb::new(curve.eotf(self.r), curve.eotf(self.g), curve.eotf(self.b))
    }

    /// Clamps each channel to [0, 1].
    #[inline]
    pub fn saturate(self) -> Self {
        Self::new(saturate(self.r), saturate(self.g), saturate(self.b))
    }

    /// View as a [`Vec3`] for matrix transforms.
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// Creates from a [`Vec3`].
    #[inline]
    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// A BT.709 limited-range YCbCr pixel.
///
/// Luma is constrained to [16, 235], chroma to [16, 240] centered at 128.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ycbcr {
    /// Luma, [16, 235].
    pub y: u8,
    /// Blue-difference chroma, [16, 240].
    pub cb: u8,
    /// Red-difference chroma, [16, 240].
    pub cr: u8,
}

impl Ycbcr {
    /// Creates a YCbCr pixel. Ranges are checked by [`Ycbcr::validate`]
    /// at conversion time, not here.
    #[inline]
    pub const fn new(y: u8, cb: u8, cr: u8) -> Self {
        Self { y, cb, cr }
    }

    /// Checks the limited-range invariants.
    ///
    /// # Errors
    ///
    /// [`ColorError::ValueOutOfRange`] naming the violating channel.
    pub fn validate(self) -> ColorResult<()> {
        range_check("Y", self.y, Y_MIN, Y_MAX)?;
        range_check("Cb", self.cb, UV_MIN, UV_MAX)?;
        range_check("Cr", self.cr, UV_MIN, UV_MAX)?;
        Ok(())
    }
}

fn range_check(channel: &'static str, value: u8, min: u8, max: u8) -> ColorResult<()> {
    if value < min || value > max {
        return Err(ColorError::ValueOutOfRange {
            channel,
            value: value as i32,
            min: min as i32,
            max: max as i32,
        });
    }
    Ok(())
}

/// A CIE 1931 XYZ triple, D65-rescaled so reference white is (1, 1, 1).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X component.
    pub x: f32,
    /// Y component (luminance).
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Xyz {
    /// Creates an XYZ triple.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A 2x2 block of sRGB-encoded byte pixels, consumed by 4:2:0 subsampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelQuad {
    /// Top-left sample (R, G, B).
    pub nw: [u8; 3],
    /// Top-right sample.
    pub ne: [u8; 3],
    /// Bottom-left sample.
    pub sw: [u8; 3],
    /// Bottom-right sample.
    pub se: [u8; 3],
}

impl PixelQuad {
    /// Creates a quad from its four corners.
    #[inline]
    pub const fn new(nw: [u8; 3], ne: [u8; 3], sw: [u8; 3], se: [u8; 3]) -> Self {
        Self { nw, ne, sw, se }
    }

    /// Corners in NW, NE, SW, SE order.
    #[inline]
    pub const fn corners(&self) -> [[u8; 3]; 4] {
        [self.nw, self.ne, self.sw, self.se]
    }
}

/// Result of subsampling a [`PixelQuad`] to 4:2:0.
///
/// Four per-corner best-fit luma values share one chroma pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadYcbcr {
    /// Luma per corner in NW, NE, SW, SE order, each in [16, 235].
    pub y: [u8; 4],
    /// Shared blue-difference chroma, [16, 240].
    pub cb: u8,
    /// Shared red-difference chroma, [16, 240].
    pub cr: u8,
}
