//! Frame-level conversions over packed pixel buffers.
//!
//! The scalar primitives in this crate are pure and reentrant, so whole
//! frames convert with row-striped [rayon] parallelism and no shared
//! state.
//!
//! # Pixel packing
//!
//! Input frames are packed BGRA words, `0xAARRGGBB` (red in bits 16..24,
//! green in 8..16, blue in 0..8). Converted frames pack YCbCr the same
//! way: `(X << 24) | (Cr << 16) | (Cb << 8) | Y` with an unused X byte.
//!
//! # Example
//!
//! ```rust
//! use ycc_color::frame::{convert_frame, unconvert_frame};
//!
//! let src = vec![0x00FF0000_u32; 4]; // 2x2 red
//! let ycc = convert_frame(&src, 2, 2).unwrap();
//! let back = unconvert_frame(&ycc, 2, 2).unwrap();
//! assert_eq!(back.len(), 4);
//! ```

use crate::error::{ColorError, ColorResult};
use crate::pixel::{PixelQuad, Ycbcr};
use crate::subsample::subsample_quad;
use crate::ycbcr::{srgb_to_ycbcr, ycbcr_to_srgb, Y_MAX, Y_MIN};
use rayon::prelude::*;
use ycc_transfer::TransferCurve;

/// A 4:2:0 subsampled frame: full-resolution luma plane plus one
/// interleaved chroma plane at half resolution in both axes.
///
/// Plane layout matches two-plane video buffers: `y` is `width * height`
/// bytes row-major; `cbcr` is `(width / 2) * (height / 2)` interleaved
/// (Cb, Cr) byte pairs row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YcbcrFrame {
    /// Frame width in pixels (even).
    pub width: usize,
    /// Frame height in pixels (even).
    pub height: usize,
    /// Luma plane, `width * height` bytes.
    pub y: Vec<u8>,
    /// Interleaved CbCr plane, `width * height / 2` bytes.
    pub cbcr: Vec<u8>,
}

#[inline]
fn unpack(p: u32) -> [u8; 3] {
    [(p >> 16) as u8, (p >> 8) as u8, p as u8]
}

fn check_dims(len: usize, width: usize, height: usize) -> ColorResult<()> {
    if width == 0 || height == 0 {
        return Err(ColorError::InvalidDimensions(
            "width and height must be > 0".into(),
        ));
    }
    let expected = width
        .checked_mul(height)
        .ok_or_else(|| ColorError::InvalidDimensions("frame dimensions overflow".into()))?;
    if len != expected {
        return Err(ColorError::InvalidDimensions(format!(
            "buffer holds {len} pixels, expected {width}x{height} = {expected}"
        )));
    }
    Ok(())
}

/// Converts a packed sRGB BGRA frame to packed YCbCr words, full
/// resolution (no subsampling).
///
/// Each pixel takes the precision-preserving sRGB -> linear -> BT.709 path.
///
/// # Errors
///
/// [`ColorError::InvalidDimensions`] if the buffer does not hold exactly
/// `width * height` pixels.
pub fn convert_frame(src: &[u32], width: usize, height: usize) -> ColorResult<Vec<u32>> {
    check_dims(src.len(), width, height)?;

    let mut dst = vec![0u32; src.len()];
    src.par_chunks_exact(width)
        .zip(dst.par_chunks_exact_mut(width))
        .for_each(|(src_row, dst_row)| {
            for (s, d) in src_row.iter().zip(dst_row) {
                let ycc = srgb_to_ycbcr(unpack(*s));
                *d = ((ycc.cr as u32) << 16) | ((ycc.cb as u32) << 8) | ycc.y as u32;
            }
        });
    Ok(dst)
}

/// Converts a packed YCbCr frame back to packed sRGB BGRA words.
///
/// # Errors
///
/// [`ColorError::InvalidDimensions`] for a size mismatch;
/// [`ColorError::ValueOutOfRange`] if any pixel's Y/Cb/Cr byte violates
/// its limited range.
pub fn unconvert_frame(src: &[u32], width: usize, height: usize) -> ColorResult<Vec<u32>> {
    check_dims(src.len(), width, height)?;

    let mut dst = vec![0u32; src.len()];
    src.par_chunks_exact(width)
        .zip(dst.par_chunks_exact_mut(width))
        .try_for_each(|(src_row, dst_row)| -> ColorResult<()> {
            for (s, d) in src_row.iter().zip(dst_row) {
                let ycc = Ycbcr::new(*s as u8, (*s >> 8) as u8, (*s >> 16) as u8);
                let [r, g, b] = ycbcr_to_srgb(ycc)?;
                *d = ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
            }
            Ok(())
        })?;
    Ok(dst)
}

/// Subsamples a packed sRGB BGRA frame to a 4:2:0 [`YcbcrFrame`].
///
/// Every 2x2 block goes through [`subsample_quad`], so each block's shared
/// chroma is fit in linear light and each pixel's luma is individually
/// best-fit against it.
///
/// # Errors
///
/// [`ColorError::InvalidDimensions`] if the buffer size does not match or
/// either dimension is odd.
pub fn subsample_frame(src: &[u32], width: usize, height: usize) -> ColorResult<YcbcrFrame> {
    check_dims(src.len(), width, height)?;
    if width % 2 != 0 || height % 2 != 0 {
        return Err(ColorError::InvalidDimensions(format!(
            "4:2:0 subsampling requires even dimensions, got {width}x{height}"
        )));
    }

    let mut y = vec![0u8; width * height];
    let mut cbcr = vec![0u8; width * height / 2];

    // One stripe is two luma rows plus their shared chroma row
    y.par_chunks_exact_mut(width * 2)
        .zip(cbcr.par_chunks_exact_mut(width))
        .enumerate()
        .for_each(|(pair, (y_rows, cbcr_row))| {
            let row = pair * 2;
            let (y_top, y_bot) = y_rows.split_at_mut(width);
            for col in (0..width).step_by(2) {
                let quad = PixelQuad::new(
                    unpack(src[row * width + col]),
                    unpack(src[row * width + col + 1]),
                    unpack(src[(row + 1) * width + col]),
                    unpack(src[(row + 1) * width + col + 1]),
                );
                let out = subsample_quad(&quad);

                y_top[col] = out.y[0];
                y_top[col + 1] = out.y[1];
                y_bot[col] = out.y[2];
                y_bot[col + 1] = out.y[3];

                cbcr_row[col] = out.cb;
                cbcr_row[col + 1] = out.cr;
            }
        });

    Ok(YcbcrFrame {
        width,
        height,
        y,
        cbcr,
    })
}

/// Expands a subsampled frame's luma plane into a full-range grayscale
/// image, one byte per pixel.
///
/// Undoes the transfer curve in the limited-range integer domain, then
/// rescales [16, 235] to [0, 255]. Intended for inspecting the luma plane
/// on its own.
///
/// # Errors
///
/// [`ColorError::Gamma`] if a stored luma byte violates [16, 235].
pub fn luma_plane_grayscale(frame: &YcbcrFrame, curve: TransferCurve) -> ColorResult<Vec<u8>> {
    frame
        .y
        .iter()
        .map(|&v| {
            let lin = curve.decode_gamma(v, Y_MIN, Y_MAX)?;
            Ok(((lin - Y_MIN) as f32 * (255.0 / 219.0)).round() as u8)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }

    #[test]
    fn test_convert_matches_scalar_path() {
        let src = vec![pack(200, 100, 50); 4];
        let out = convert_frame(&src, 2, 2).unwrap();
        let expected = srgb_to_ycbcr([200, 100, 50]);
        for p in out {
            assert_eq!(p as u8, expected.y);
            assert_eq!((p >> 8) as u8, expected.cb);
            assert_eq!((p >> 16) as u8, expected.cr);
        }
    }

    #[test]
    fn test_convert_unconvert_roundtrip_close() {
        let src: Vec<u32> = (0..16u32)
            .map(|i| pack((i * 16) as u8, 255 - (i * 16) as u8, 128))
            .collect();
        let ycc = convert_frame(&src, 4, 4).unwrap();
        let back = unconvert_frame(&ycc, 4, 4).unwrap();
        for (a, b) in src.iter().zip(&back) {
            let [ar, ag, ab] = unpack(*a);
            let [br, bg, bb] = unpack(*b);
            for (x, y) in [(ar, br), (ag, bg), (ab, bb)] {
                assert!((x as i32 - y as i32).abs() <= 3, "{a:#010x} vs {b:#010x}");
            }
        }
    }

    #[test]
    fn test_unconvert_rejects_bad_luma() {
        // Y = 0 violates the limited range
        let src = vec![0u32; 4];
        assert!(matches!(
            unconvert_frame(&src, 2, 2),
            Err(ColorError::ValueOutOfRange { channel: "Y", .. })
        ));
    }

    #[test]
    fn test_dimension_validation() {
        let src = vec![0u32; 4];
        assert!(convert_frame(&src, 3, 2).is_err());
        assert!(convert_frame(&src, 0, 0).is_err());
        assert!(subsample_frame(&src, 4, 1).is_err());

        let odd = vec![pack(1, 2, 3); 3 * 2];
        assert!(subsample_frame(&odd, 3, 2).is_err());
    }

    #[test]
    fn test_luma_plane_grayscale() {
        let black = subsample_frame(&[0u32; 4], 2, 2).unwrap();
        let white = subsample_frame(&[pack(255, 255, 255); 4], 2, 2).unwrap();
        assert_eq!(
            luma_plane_grayscale(&black, TransferCurve::Rec709).unwrap(),
            vec![0u8; 4]
        );
        assert_eq!(
            luma_plane_grayscale(&white, TransferCurve::Rec709).unwrap(),
            vec![255u8; 4]
        );

        let mut bad = black;
        bad.y[0] = 250;
        assert!(matches!(
            luma_plane_grayscale(&bad, TransferCurve::Rec709),
            Err(ColorError::Gamma(_))
        ));
    }

    #[test]
    fn test_subsample_flat_frame() {
        let src = vec![pack(200, 100, 50); 16];
        let frame = subsample_frame(&src, 4, 4).unwrap();
        let single = srgb_to_ycbcr([200, 100, 50]);

        assert_eq!(frame.y.len(), 16);
        assert_eq!(frame.cbcr.len(), 8);
        assert!(frame.y.iter().all(|&v| v == frame.y[0]));
        for pair in frame.cbcr.chunks(2) {
            assert_eq!(pair, [single.cb, single.cr]);
        }
    }
}
