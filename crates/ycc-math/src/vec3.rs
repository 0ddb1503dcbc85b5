//! 3D vector type for color triplets.
//!
//! [`Vec3`] represents RGB, XYZ, or YCbCr triples during matrix transforms.
//!
//! # Usage
//!
//! ```rust
//! use ycc_math::Vec3;
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let clamped = (rgb * 2.0).clamp01();
//! assert_eq!(clamped.x, 1.0);
//! ```

use std::ops::{Add, Index, Mul, Sub};

/// A 3D vector for color triplets (RGB, XYZ, YCbCr).
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z.
///
/// # Example
///
/// ```rust
/// use ycc_math::Vec3;
///
/// let color = Vec3::splat(0.5);
/// let luminance = color.dot(Vec3::new(0.2126, 0.7152, 0.0722));
/// assert!((luminance - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ)
    pub x: f32,
    /// Y component (G for RGB, Y for XYZ)
    pub y: f32,
    /// Z component (B for RGB, Z for XYZ)
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product with another vector.
    ///
    /// ```rust
    /// use ycc_math::Vec3;
    ///
    /// let rgb = Vec3::new(1.0, 0.5, 0.25);
    /// let luma = rgb.dot(Vec3::new(0.2126, 0.7152, 0.0722));
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Clamps each component to [0, 1].
    ///
    /// This is the saturation step applied before integer quantization.
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(
            self.x.clamp(0.0, 1.0),
            self.y.clamp(0.0, 1.0),
            self.z.clamp(0.0, 1.0),
        )
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Sum of the three components.
    ///
    /// `(a - b).abs().sum()` is the L1 distance used by the subsampling
    /// best-fit search.
    #[inline]
    pub fn sum(self) -> f32 {
        self.x + self.y + self.z
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {i}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_clamp01() {
        let v = Vec3::new(-0.5, 0.5, 1.5);
        assert_eq!(v.clamp01(), Vec3::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_l1_distance() {
        let a = Vec3::new(1.0, 0.0, 0.25);
        let b = Vec3::new(0.5, 0.5, 0.0);
        assert!(((a - b).abs().sum() - 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_dot() {
        let v = Vec3::splat(1.0);
        let w = Vec3::new(0.2126, 0.7152, 0.0722);
        assert!((v.dot(w) - 1.0).abs() < 1e-6);
    }
}
