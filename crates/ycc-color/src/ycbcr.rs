//! BT.709 RGB <-> YCbCr conversion.
//!
//! The matrix step is exposed separately from the gamma step so callers can
//! compose either order correctly:
//!
//! - [`encoded_rgb_to_ycbcr`] / [`ycbcr_to_encoded_rgb`] — matrix only,
//!   operating on gamma-encoded triples.
//! - [`linear_rgb_to_ycbcr`] / [`ycbcr_to_linear_rgb`] — gamma + matrix,
//!   operating on linear-light triples with a selectable curve.
//! - [`srgb_to_ycbcr`] / [`ycbcr_to_srgb`] — the full display path: sRGB
//!   bytes through linear light to BT.709 video range and back.
//!
//! Display-referred content that must not pass through a linear exposure
//! point (camera-ready BT.709 treated as already encoded) goes through the
//! matrix-only primitives directly.
//!
//! # Quantization
//!
//! Luma quantizes to the limited range [16, 235] (219 steps), chroma to
//! [16, 240] (224 steps) centered at 128. The inverse validates its integer
//! inputs and saturates the matrix output to [0, 1] before any further step,
//! so out-of-gamut YCbCr combinations can never produce an out-of-range
//! RGB byte.
//!
//! # Reference
//!
//! ITU-R BT.709-6, <https://www.itu.int/dms_pubrec/itu-r/rec/bt/R-REC-BT.709-6-201506-I!!PDF-E.pdf>

use crate::error::ColorResult;
use crate::pixel::{byte_norm, norm_to_byte, EncodedRgb, LinearRgb, Ycbcr};
use ycc_math::{Mat3, Vec3};
use ycc_transfer::{srgb, TransferCurve};

/// BT.709 red luma coefficient.
pub const KR: f32 = 0.2126;
/// BT.709 green luma coefficient.
pub const KG: f32 = 0.7152;
/// BT.709 blue luma coefficient.
pub const KB: f32 = 0.0722;

/// Er scaling range: `2 * (1 - Kr)`.
pub const ER_RANGE: f32 = 1.5748;
/// Eb scaling range: `2 * (1 - Kb)`.
pub const EB_RANGE: f32 = 1.8556;

/// Minimum limited-range luma.
pub const Y_MIN: u8 = 16;
/// Maximum limited-range luma.
pub const Y_MAX: u8 = 235;
/// Minimum limited-range chroma.
pub const UV_MIN: u8 = 16;
/// Maximum limited-range chroma.
pub const UV_MAX: u8 = 240;

// Inverse-direction scale factors between full byte range and the
// limited ranges.
const Y_SCALE: f32 = 255.0 / 219.0;
const UV_SCALE: f32 = 255.0 / 224.0;

/// YCbCr -> RGB matrix, closed form from the same Kr/Kg/Kb constants.
///
/// Rows produce R, G, B from the column vector (Yn, Cbn, Crn) where Yn is
/// zeroed at 16/255 and Cbn/Crn at 128/255. Approximately:
///
/// ```text
/// 1.164   0.000   1.793
/// 1.164  -0.213  -0.533
/// 1.164   2.112   0.000
/// ```
const YCBCR_TO_RGB: Mat3 = Mat3::from_rows([
    [Y_SCALE, 0.0, UV_SCALE * ER_RANGE],
    [
        Y_SCALE,
        -UV_SCALE * EB_RANGE * (KB / KG),
        -UV_SCALE * ER_RANGE * (KR / KG),
    ],
    [Y_SCALE, UV_SCALE * EB_RANGE, 0.0],
]);

/// Matrix step: converts a gamma-encoded RGB triple to limited-range YCbCr.
///
/// No gamma is applied; the input is taken as already encoded with whatever
/// curve the caller intends (BT.709 for broadcast, or none for a
/// linear-as-encoded source). Channels must be in [0, 1]; the quantized
/// outputs are in range by construction.
pub fn encoded_rgb_to_ycbcr(rgb: EncodedRgb) -> Ycbcr {
    debug_assert!((0.0..=1.0).contains(&rgb.r));
    debug_assert!((0.0..=1.0).contains(&rgb.g));
    debug_assert!((0.0..=1.0).contains(&rgb.b));

    let ey = KR * rgb.r + KG * rgb.g + KB * rgb.b;
    let eb = (rgb.b - ey) / EB_RANGE;
    let er = (rgb.r - ey) / ER_RANGE;

    // Quantize Ey to [16, 235] (219 steps), Eb/Er to [16, 240] (224 steps,
    // centered at 128), rounding to nearest.
    let y = (ey * (Y_MAX - Y_MIN) as f32 + 16.0).round() as i32;
    let cb = (eb * (UV_MAX - UV_MIN) as f32 + 128.0).round() as i32;
    let cr = (er * (UV_MAX - UV_MIN) as f32 + 128.0).round() as i32;

    debug_assert!((Y_MIN as i32..=Y_MAX as i32).contains(&y));
    debug_assert!((UV_MIN as i32..=UV_MAX as i32).contains(&cb));
    debug_assert!((UV_MIN as i32..=UV_MAX as i32).contains(&cr));

    Ycbcr::new(y as u8, cb as u8, cr as u8)
}

/// Matrix step without range validation. Callers guarantee the pixel is
/// limited-range valid (e.g. it came from [`encoded_rgb_to_ycbcr`]).
pub(crate) fn ycbcr_decode_matrix(ycc: Ycbcr) -> EncodedRgb {
    // Normalize against the full byte range; the matrix scale factors
    // account for the limited ranges.
    let yn = (ycc.y as f32 - 16.0) * (1.0 / 255.0);
    let cbn = (ycc.cb as f32 - 128.0) * (1.0 / 255.0);
    let crn = (ycc.cr as f32 - 128.0) * (1.0 / 255.0);

    let rgb = YCBCR_TO_RGB * Vec3::new(yn, cbn, crn);

    // Saturate before anything downstream quantizes or decodes
    EncodedRgb::from_vec3(rgb.clamp01())
}

/// Matrix step: converts limited-range YCbCr to a gamma-encoded RGB triple.
///
/// The output is saturated to [0, 1]; out-of-gamut chroma combinations
/// clamp rather than escaping the range.
///
/// # Errors
///
/// [`ColorError::ValueOutOfRange`](crate::ColorError::ValueOutOfRange) if
/// any component violates its limited range.
pub fn ycbcr_to_encoded_rgb(ycc: Ycbcr) -> ColorResult<EncodedRgb> {
    ycc.validate()?;
    Ok(ycbcr_decode_matrix(ycc))
}

/// Converts linear-light RGB to YCbCr, encoding with the selected curve
/// before the matrix step.
pub fn linear_rgb_to_ycbcr(rgb: LinearRgb, curve: TransferCurve) -> Ycbcr {
    encoded_rgb_to_ycbcr(rgb.encode(curve))
}

/// Converts YCbCr to linear-light RGB, decoding with the selected curve
/// after the matrix step.
///
/// # Errors
///
/// [`ColorError::ValueOutOfRange`](crate::ColorError::ValueOutOfRange) if
/// any component violates its limited range.
pub fn ycbcr_to_linear_rgb(ycc: Ycbcr, curve: TransferCurve) -> ColorResult<LinearRgb> {
    Ok(ycbcr_to_encoded_rgb(ycc)?.decode(curve))
}

/// Converts RGB bytes to YCbCr.
///
/// Bytes are normalized to [0, 1] and treated as linear light when
/// `apply_gamma` is true (the selected OETF runs before the matrix step);
/// with `apply_gamma` false they are taken as already gamma-encoded.
///
/// # Example
///
/// ```rust
/// use ycc_color::{rgb_to_ycbcr, TransferCurve};
///
/// // Black carries no chroma
/// let ycc = rgb_to_ycbcr([0, 0, 0], TransferCurve::Rec709, true);
/// assert_eq!((ycc.y, ycc.cb, ycc.cr), (16, 128, 128));
/// ```
pub fn rgb_to_ycbcr(rgb: [u8; 3], curve: TransferCurve, apply_gamma: bool) -> Ycbcr {
    let norm = [byte_norm(rgb[0]), byte_norm(rgb[1]), byte_norm(rgb[2])];
    let encoded = if apply_gamma { curve.oetf_rgb(norm) } else { norm };
    encoded_rgb_to_ycbcr(EncodedRgb::new(encoded[0], encoded[1], encoded[2]))
}

/// Converts YCbCr to RGB bytes.
///
/// The inverse of [`rgb_to_ycbcr`]: when `apply_gamma` is true the selected
/// EOTF runs after the matrix step, returning linear-light bytes.
///
/// # Errors
///
/// [`ColorError::ValueOutOfRange`](crate::ColorError::ValueOutOfRange) if
/// any component violates its limited range.
pub fn ycbcr_to_rgb(ycc: Ycbcr, curve: TransferCurve, apply_gamma: bool) -> ColorResult<[u8; 3]> {
    let enc = ycbcr_to_encoded_rgb(ycc)?;
    let out = if apply_gamma {
        curve.eotf_rgb([enc.r, enc.g, enc.b])
    } else {
        [enc.r, enc.g, enc.b]
    };
    Ok([
        norm_to_byte(out[0]),
        norm_to_byte(out[1]),
        norm_to_byte(out[2]),
    ])
}

/// Converts sRGB bytes directly to BT.709 YCbCr.
///
/// Decodes sRGB to linear light, re-encodes with the BT.709 OETF, then runs
/// the matrix step. The intermediate stays float end to end.
pub fn srgb_to_ycbcr(rgb: [u8; 3]) -> Ycbcr {
    linear_rgb_to_ycbcr(LinearRgb::from_srgb_bytes(rgb), TransferCurve::Rec709)
}

/// Converts BT.709 YCbCr directly to sRGB bytes.
///
/// The inverse of [`srgb_to_ycbcr`]: matrix step, BT.709 decode to linear,
/// sRGB encode, quantize.
///
/// # Errors
///
/// [`ColorError::ValueOutOfRange`](crate::ColorError::ValueOutOfRange) if
/// any component violates its limited range.
pub fn ycbcr_to_srgb(ycc: Ycbcr) -> ColorResult<[u8; 3]> {
    let lin = ycbcr_to_linear_rgb(ycc, TransferCurve::Rec709)?;
    let s = lin.saturate();
    Ok([
        norm_to_byte(srgb::oetf(s.r)),
        norm_to_byte(srgb::oetf(s.g)),
        norm_to_byte(srgb::oetf(s.b)),
    ])
}
