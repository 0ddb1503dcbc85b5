//! # ycc-transfer
//!
//! Transfer functions (OETF/EOTF) for the YCbCr conversion engine.
//!
//! Transfer functions convert between linear light values and gamma-encoded
//! values for storage, display, or transmission.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **Gamma**: The exponent in a power-law transfer function
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`srgb`] | Web, consumer displays | [0, 1] |
//! | [`rec709`] | HDTV broadcast (BT.709 OETF) | [0, 1] |
//! | [`apple_gamma`] | Apple display pipeline (gamma 1.961) | [0, 1] |
//!
//! All three curves are piecewise: a linear segment near black (avoiding the
//! unstable derivative of the power curve at zero) joined continuously to a
//! power-law segment. The coefficients live in one table-driven
//! [`piecewise::CurveCoeffs`] evaluator; the per-curve modules are thin
//! named entry points over their coefficient constants.
//!
//! # Runtime curve selection
//!
//! [`TransferCurve`] tags a curve for call-time selection, and carries the
//! integer-domain gamma helpers used for range-limited luma/chroma planes:
//!
//! ```rust
//! use ycc_transfer::TransferCurve;
//!
//! let curve = TransferCurve::Rec709;
//! let encoded = curve.oetf(0.5);
//! let linear = curve.eotf(encoded);
//! assert!((linear - 0.5).abs() < 1e-5);
//!
//! // Gamma-adjust a luma byte within the limited range [16, 235]
//! let adjusted = curve.encode_gamma(128, 16, 235).unwrap();
//! ```
//!
//! # Preconditions
//!
//! Scalar curve inputs must be pre-clamped to [0, 1]; the curves do not
//! clamp internally. Saturation is the caller's job before quantization.
//!
//! # Used By
//!
//! - `ycc-color` - RGB/YCbCr/XYZ pixel conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod apple_gamma;
mod curve;
pub mod piecewise;
pub mod rec709;
pub mod srgb;

pub use curve::{RangeError, TransferCurve};
pub use piecewise::CurveCoeffs;

// Re-export common functions
pub use apple_gamma::{eotf as apple_gamma_eotf, oetf as apple_gamma_oetf};
pub use rec709::{eotf as rec709_eotf, oetf as rec709_oetf};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
