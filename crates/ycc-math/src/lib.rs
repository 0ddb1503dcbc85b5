//! # ycc-math
//!
//! Math primitives for color matrix transforms.
//!
//! This crate provides the small fixed-size linear algebra used by the
//! conversion engine:
//!
//! - [`Mat3`] - 3x3 matrices for YCbCr/XYZ color transforms
//! - [`Vec3`] - 3D vectors for RGB/XYZ/YCbCr triplets
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use ycc_math::{Mat3, Vec3};
//!
//! // sRGB to XYZ matrix
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124, 0.3576, 0.1805],
//!     [0.2126, 0.7152, 0.0722],
//!     [0.0193, 0.1192, 0.9505],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Used By
//!
//! - `ycc-color` - RGB/YCbCr/XYZ conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
