//! Table-driven piecewise transfer function evaluator.
//!
//! Every curve in this crate has the same shape: a linear segment near zero
//! joined to a power-law segment, with intercepts matched so the two
//! segments agree at the breakpoint. One coefficient table per curve plus
//! the two generic evaluators below replaces a family of near-duplicate
//! per-curve functions.
//!
//! # Formulas
//!
//! Decode (encoded -> linear):
//!
//! ```text
//! if V <= encoded_break:
//!     L = V / slope
//! else:
//!     L = ((V + a) / (1 + a))^gamma
//! ```
//!
//! Encode (linear -> encoded):
//!
//! ```text
//! if L <= linear_break:
//!     V = L * slope
//! else:
//!     V = (1 + a) * L^(1/gamma) - a
//! ```
//!
//! With `a = 0` this degenerates to a pure power curve with a linear toe,
//! which is the form of the Apple 1.961 device curve.

/// Coefficients for one piecewise transfer function.
///
/// See the module docs for the decode/encode formulas these drive.
///
/// # Example
///
/// ```rust
/// use ycc_transfer::piecewise::CurveCoeffs;
///
/// // sRGB
/// let curve = CurveCoeffs {
///     encoded_break: 0.04045,
///     linear_break: 0.0031308,
///     slope: 12.92,
///     gamma: 2.4,
///     offset: 0.055,
/// };
/// let linear = curve.eotf(0.5);
/// assert!((curve.oetf(linear) - 0.5).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveCoeffs {
    /// Breakpoint in the encoded domain: decode inputs at or below this
    /// value take the linear segment.
    pub encoded_break: f32,
    /// Breakpoint in the linear domain: encode inputs at or below this
    /// value take the linear segment. Equals `encoded_break / slope`.
    pub linear_break: f32,
    /// Slope of the linear segment near black.
    pub slope: f32,
    /// Exponent of the power segment, expressed in decode direction
    /// (encoded -> linear raises to this power).
    pub gamma: f32,
    /// Offset `a` of the power segment. Zero for pure power curves.
    pub offset: f32,
}

impl CurveCoeffs {
    /// EOTF: decodes a gamma-encoded value to linear light.
    ///
    /// Input must be pre-clamped to [0, 1].
    #[inline]
    pub fn eotf(&self, v: f32) -> f32 {
        if v <= self.encoded_break {
            v / self.slope
        } else {
            ((v + self.offset) / (1.0 + self.offset)).powf(self.gamma)
        }
    }

    /// OETF: encodes linear light to a gamma-encoded value.
    ///
    /// Input must be pre-clamped to [0, 1].
    #[inline]
    pub fn oetf(&self, l: f32) -> f32 {
        if l <= self.linear_break {
            l * self.slope
        } else {
            (1.0 + self.offset) * l.powf(1.0 / self.gamma) - self.offset
        }
    }
}
