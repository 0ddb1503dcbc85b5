//! sRGB <-> CIE 1931 XYZ conversion.
//!
//! Same structural pattern as the YCbCr engine: a fixed 3x3 matrix pair
//! sandwiched between the sRGB gamma steps, with every channel saturated to
//! [0, 1] before integer quantization. XYZ is always linear, so no gamma
//! step exists on the XYZ side.
//!
//! The forward path rescales against the D65 white point so that reference
//! white lands at exactly (1, 1, 1); the inverse undoes the rescale before
//! the matrix multiply.
//!
//! # Reference
//!
//! <http://www.color.org/srgb.pdf>

use crate::pixel::{byte_norm, norm_to_byte, saturate, LinearRgb, Xyz};
use ycc_math::{Mat3, Vec3};
use ycc_transfer::srgb;

/// Linear sRGB -> XYZ (CIE 1931, D65 primaries).
const RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);

/// XYZ -> linear sRGB, the standard published inverse.
const XYZ_TO_RGB: Mat3 = Mat3::from_rows([
    [3.2410, -1.5374, -0.4986],
    [-0.9692, 1.8760, 0.0416],
    [0.0556, -0.2040, 1.0570],
]);

/// D65 white point X component.
const WHITE_X: f32 = 0.9505;
/// D65 white point Z component.
const WHITE_Z: f32 = 1.08899;

/// Converts linear-light RGB to D65-rescaled XYZ.
///
/// Output channels are saturated to [0, 1]; reference white maps to
/// (1, 1, 1).
pub fn linear_rgb_to_xyz(rgb: LinearRgb) -> Xyz {
    let v = RGB_TO_XYZ * rgb.to_vec3();

    // Rescale in terms of the (0.9505, 1.0, 1.08899) white point
    let x = saturate(v.x * (1.0 / WHITE_X));
    let y = saturate(v.y);
    let z = saturate(v.z * (1.0 / WHITE_Z));

    Xyz::new(x, y, z)
}

/// Converts D65-rescaled XYZ to linear-light RGB.
///
/// Undoes the white point rescale, applies the inverse matrix, and
/// saturates each channel to [0, 1].
pub fn xyz_to_linear_rgb(xyz: Xyz) -> LinearRgb {
    let v = Vec3::new(xyz.x * WHITE_X, xyz.y, xyz.z * WHITE_Z);
    LinearRgb::from_vec3((XYZ_TO_RGB * v).clamp01())
}

/// Converts sRGB bytes to XYZ.
///
/// When `apply_gamma` is true the bytes are sRGB-encoded and the EOTF runs
/// first; otherwise they are taken as already linear.
///
/// # Example
///
/// ```rust
/// use ycc_color::srgb_to_xyz;
///
/// // sRGB white is the D65 white point
/// let xyz = srgb_to_xyz([255, 255, 255], true);
/// assert!((xyz.x - 1.0).abs() < 1e-3);
/// assert!((xyz.y - 1.0).abs() < 1e-3);
/// assert!((xyz.z - 1.0).abs() < 1e-3);
/// ```
pub fn srgb_to_xyz(rgb: [u8; 3], apply_gamma: bool) -> Xyz {
    let norm = [byte_norm(rgb[0]), byte_norm(rgb[1]), byte_norm(rgb[2])];
    let lin = if apply_gamma {
        srgb::eotf_rgb(norm)
    } else {
        norm
    };
    linear_rgb_to_xyz(LinearRgb::new(lin[0], lin[1], lin[2]))
}

/// Converts XYZ to sRGB bytes.
///
/// When `apply_gamma` is true the sRGB OETF runs after the matrix step;
/// otherwise linear values quantize directly.
pub fn xyz_to_srgb(xyz: Xyz, apply_gamma: bool) -> [u8; 3] {
    let lin = xyz_to_linear_rgb(xyz);
    let out = if apply_gamma {
        srgb::oetf_rgb([lin.r, lin.g, lin.b])
    } else {
        [lin.r, lin.g, lin.b]
    };
    [
        norm_to_byte(out[0]),
        norm_to_byte(out[1]),
        norm_to_byte(out[2]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_white_point() {
        let xyz = srgb_to_xyz([255, 255, 255], true);
        assert_abs_diff_eq!(xyz.x, 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(xyz.y, 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(xyz.z, 1.0, epsilon = 1e-3);

        assert_eq!(xyz_to_srgb(Xyz::new(1.0, 1.0, 1.0), true), [255, 255, 255]);
    }

    #[test]
    fn test_black() {
        let xyz = srgb_to_xyz([0, 0, 0], true);
        assert_eq!((xyz.x, xyz.y, xyz.z), (0.0, 0.0, 0.0));
        assert_eq!(xyz_to_srgb(xyz, true), [0, 0, 0]);
    }

    #[test]
    fn test_luminance_row_matches_bt709_luma() {
        // The Y row of the XYZ matrix is the BT.709 luma vector
        let xyz = srgb_to_xyz([0, 255, 0], false);
        assert_abs_diff_eq!(xyz.y, 0.7152, epsilon = 1e-4);
    }

    #[test]
    fn test_roundtrip_sampled() {
        // Published 4-digit matrices limit round-trip precision; stay
        // within 2 byte steps.
        for r in (0..=255u8).step_by(51) {
            for g in (0..=255u8).step_by(51) {
                for b in (0..=255u8).step_by(51) {
                    let xyz = srgb_to_xyz([r, g, b], true);
                    let back = xyz_to_srgb(xyz, true);
                    for (orig, got) in [r, g, b].into_iter().zip(back) {
                        assert!(
                            (orig as i32 - got as i32).abs() <= 2,
                            "({r},{g},{b}) came back as {back:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_published_inverse_matches_computed() {
        // The published XYZ->RGB constants are the (4-digit) inverse of the
        // forward matrix.
        let computed = RGB_TO_XYZ.inverse().expect("forward matrix invertible");
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (computed[i][j] - XYZ_TO_RGB[i][j]).abs() < 2e-3,
                    "element [{i}][{j}]: {} vs {}",
                    computed[i][j],
                    XYZ_TO_RGB[i][j]
                );
            }
        }
    }
}
