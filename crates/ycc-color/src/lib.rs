//! # ycc-color
//!
//! Color-space conversion engine: gamma-encoded sRGB, linear RGB, BT.709
//! YCbCr, and CIE 1931 XYZ, with limited-range quantization and a best-fit
//! 4:2:0 chroma subsampler.
//!
//! # Architecture
//!
//! ```text
//!        ycc-color
//!            |
//!     +------+------+
//!     |             |
//! ycc-transfer   ycc-math
//! ```
//!
//! The gamma step ([`ycc_transfer`]) and the matrix step (this crate) are
//! separable primitives. Which one runs first depends on the direction of
//! travel, and composing them in the wrong order is the classic silent
//! color bug, so normalized triples carry their encoding in the type:
//! [`LinearRgb`] vs [`EncodedRgb`].
//!
//! # Quick Start
//!
//! ```rust
//! use ycc_color::{srgb_to_ycbcr, ycbcr_to_srgb, subsample_quad, PixelQuad};
//!
//! // One pixel, full fidelity: sRGB -> linear -> BT.709 video range
//! let ycc = srgb_to_ycbcr([200, 100, 50]);
//! let back = ycbcr_to_srgb(ycc).unwrap();
//!
//! // A 2x2 block to 4:2:0: one shared chroma pair, four best-fit lumas
//! let quad = PixelQuad::new([200, 100, 50], [201, 99, 52], [198, 102, 49], [200, 101, 50]);
//! let out = subsample_quad(&quad);
//! ```
//!
//! # Purity and concurrency
//!
//! Every function here is pure, synchronous, and reentrant: no shared
//! mutable state, no locks, no I/O. Scalar conversions are O(1); the
//! best-fit luma search is bounded by the height of the [16, 235] range.
//! The [`frame`] module layers rayon row-striping on top for whole-frame
//! work; callers embedding the scalar primitives in their own pipelines
//! need no synchronization.
//!
//! # Errors
//!
//! Out-of-range quantized inputs (luma outside [16, 235], chroma outside
//! [16, 240], mismatched buffer dimensions) return [`ColorError`]; nothing
//! is silently clamped on the way in, and release builds never assert.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod frame;
mod pixel;
pub mod subsample;
pub mod xyz;
pub mod ycbcr;

pub use error::{ColorError, ColorResult};
pub use pixel::{
    byte_norm, norm_to_byte, saturate, EncodedRgb, LinearRgb, PixelQuad, QuadYcbcr, Xyz, Ycbcr,
};
pub use subsample::subsample_quad;
pub use xyz::{linear_rgb_to_xyz, srgb_to_xyz, xyz_to_linear_rgb, xyz_to_srgb};
pub use ycbcr::{
    encoded_rgb_to_ycbcr, linear_rgb_to_ycbcr, rgb_to_ycbcr, srgb_to_ycbcr, ycbcr_to_encoded_rgb,
    ycbcr_to_linear_rgb, ycbcr_to_rgb, ycbcr_to_srgb,
};

// Re-export the component crates under short names
pub use ycc_math as math;
pub use ycc_transfer as transfer;
pub use ycc_transfer::TransferCurve;
