//! 4:2:0 chroma subsampling with per-corner luma best fit.
//!
//! Naively averaging chroma in the gamma-encoded domain introduces visible
//! color error when a 2x2 block collapses to one (Cb, Cr) pair. This module
//! averages in linear light instead, then walks each corner's luma a step
//! at a time to the value that best reconstructs that corner's original
//! color under the shared chroma.
//!
//! # Algorithm
//!
//! 1. Decode the four sRGB corners to linear light.
//! 2. Average the three linear channels independently.
//! 3. Re-encode the average to sRGB bytes and convert through the full
//!    sRGB -> YCbCr path; keep its (Cb, Cr) as the shared pair.
//! 4. For each corner, hill-climb luma from the corner's own nominal Y:
//!    decode `(Y, Cb, Cr)` to linear, score by summed absolute per-channel
//!    difference against the corner's true linear color, and keep stepping
//!    in the improving direction while the score strictly decreases.
//!
//! The search is greedy and local by design. The score as a function of Y
//! is not proven unimodal, so a global optimum is not guaranteed; the walk
//! reproduces the established behavior rather than fixing it.

use crate::pixel::{LinearRgb, PixelQuad, QuadYcbcr, Ycbcr};
use crate::ycbcr::{srgb_to_ycbcr, ycbcr_decode_matrix, Y_MAX, Y_MIN};
use ycc_transfer::TransferCurve;

/// Subsamples a 2x2 block of sRGB pixels to four luma values and one
/// shared chroma pair.
///
/// # Example
///
/// ```rust
/// use ycc_color::{subsample_quad, srgb_to_ycbcr, PixelQuad};
///
/// // Four identical pixels degenerate to the single-pixel conversion
/// let px = [200, 100, 50];
/// let quad = subsample_quad(&PixelQuad::new(px, px, px, px));
/// let single = srgb_to_ycbcr(px);
/// assert_eq!((quad.cb, quad.cr), (single.cb, single.cr));
/// assert!(quad.y.iter().all(|&y| y == quad.y[0]));
/// ```
pub fn subsample_quad(quad: &PixelQuad) -> QuadYcbcr {
    let corners = quad.corners();
    let linear = corners.map(LinearRgb::from_srgb_bytes);

    // Average each channel in linear light. Pairwise grouping keeps the
    // identical-corner case exact in f32.
    let avg = LinearRgb::from_vec3(
        ((linear[0].to_vec3() + linear[1].to_vec3())
            + (linear[2].to_vec3() + linear[3].to_vec3()))
            * 0.25,
    );

    // Shared chroma comes from the averaged color pushed through the same
    // byte-quantized path an unaveraged pixel would take.
    let shared = srgb_to_ycbcr(avg.to_srgb_bytes());

    let mut y = [0u8; 4];
    for (i, lin) in linear.iter().enumerate() {
        let nominal = srgb_to_ycbcr(corners[i]).y;
        y[i] = best_fit_luma(*lin, nominal, shared.cb, shared.cr);
    }

    QuadYcbcr {
        y,
        cb: shared.cb,
        cr: shared.cr,
    }
}

/// Summed absolute per-channel linear-RGB error of decoding
/// `(y, cb, cr)` against the target color.
fn luma_error(target: LinearRgb, y: u8, cb: u8, cr: u8) -> f32 {
    let recon = ycbcr_decode_matrix(Ycbcr::new(y, cb, cr)).decode(TransferCurve::Rec709);
    (recon.to_vec3() - target.to_vec3()).abs().sum()
}

/// Greedy 1-D search over luma in [16, 235].
///
/// Starts at `nominal`, probes both neighbors, and walks in the improving
/// direction while the error strictly decreases. If neither neighbor
/// improves, the nominal value stands. Reaching a range boundary ends the
/// walk at that boundary.
fn best_fit_luma(target: LinearRgb, nominal: u8, cb: u8, cr: u8) -> u8 {
    let mut best_y = nominal;
    let mut best_err = luma_error(target, nominal, cb, cr);

    let up = if nominal < Y_MAX {
        Some(luma_error(target, nominal + 1, cb, cr))
    } else {
        None
    };
    let down = if nominal > Y_MIN {
        Some(luma_error(target, nominal - 1, cb, cr))
    } else {
        None
    };

    // Pick the neighbor with the larger improvement; +1 wins ties.
    let step: i16 = match (up, down) {
        (Some(u), Some(d)) if u < best_err && u <= d => 1,
        (Some(u), _) if u < best_err && down.is_none() => 1,
        (_, Some(d)) if d < best_err => -1,
        _ => return nominal,
    };

    let mut y = nominal;
    loop {
        let next = (y as i16 + step) as u8;
        let err = luma_error(target, next, cb, cr);
        if err >= best_err {
            break;
        }
        best_err = err;
        best_y = next;
        y = next;
        if y == Y_MIN || y == Y_MAX {
            break;
        }
    }

    best_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::PixelQuad;

    #[test]
    fn test_identical_corners_degenerate() {
        let px = [200u8, 100, 50];
        let quad = subsample_quad(&PixelQuad::new(px, px, px, px));
        let single = srgb_to_ycbcr(px);

        assert_eq!((quad.cb, quad.cr), (single.cb, single.cr));
        // All four corners walk identically
        assert!(quad.y.iter().all(|&y| y == quad.y[0]));
        // The walk starts at the nominal luma and moves at most marginally
        assert!((quad.y[0] as i32 - single.y as i32).abs() <= 1);
    }

    #[test]
    fn test_identical_gray_corners_exact() {
        // Neutral gray carries zero chroma quantization residual, so the
        // nominal luma is already optimal and the search takes no steps.
        let px = [128u8, 128, 128];
        let quad = subsample_quad(&PixelQuad::new(px, px, px, px));
        let single = srgb_to_ycbcr(px);

        assert_eq!((quad.cb, quad.cr), (128, 128));
        assert_eq!(quad.y, [single.y; 4]);
    }

    #[test]
    fn test_output_ranges() {
        let quad = subsample_quad(&PixelQuad::new(
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 255],
        ));
        for y in quad.y {
            assert!((Y_MIN..=Y_MAX).contains(&y));
        }
        assert!((16..=240u8).contains(&quad.cb));
        assert!((16..=240u8).contains(&quad.cr));
    }

    #[test]
    fn test_boundary_luma_does_not_escape() {
        // Black and white corners start at the range boundaries
        let quad = subsample_quad(&PixelQuad::new(
            [0, 0, 0],
            [0, 0, 0],
            [255, 255, 255],
            [255, 255, 255],
        ));
        for y in quad.y {
            assert!((Y_MIN..=Y_MAX).contains(&y));
        }
    }

    #[test]
    fn test_best_fit_never_worse_than_nominal() {
        let quads = [
            PixelQuad::new([250, 10, 10], [10, 250, 10], [10, 10, 250], [128, 128, 128]),
            PixelQuad::new([200, 100, 50], [190, 110, 60], [210, 90, 40], [205, 105, 55]),
            PixelQuad::new([5, 5, 5], [250, 250, 250], [5, 250, 5], [250, 5, 250]),
        ];
        for quad in &quads {
            let out = subsample_quad(quad);
            for (corner, &best_y) in quad.corners().iter().zip(&out.y) {
                let target = LinearRgb::from_srgb_bytes(*corner);
                let nominal = srgb_to_ycbcr(*corner).y;
                let best = luma_error(target, best_y, out.cb, out.cr);
                let at_nominal = luma_error(target, nominal, out.cb, out.cr);
                assert!(
                    best <= at_nominal,
                    "search made corner {corner:?} worse: {best} > {at_nominal}"
                );
            }
        }
    }
}
