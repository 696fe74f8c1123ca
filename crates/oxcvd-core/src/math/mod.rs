//! Mathematical operations for CVD simulation
//!
//! This module provides the foundational math used throughout oxcvd:
//! - 3x3 matrix and vector operations for RGB↔XYZ↔LMS transforms
//! - Gamma and transfer function evaluation
//! - Interpolation for severity handling
//! - CIE L*a*b* conversion for perceptual comparisons

pub mod gamma;
pub mod interpolation;
pub mod lab;
pub mod matrix;

pub use gamma::{gamma22_decode, gamma22_encode, srgb_decode, srgb_encode};
pub use interpolation::{lerp, lerp_matrix};
pub use lab::lab_from_xyz;
pub use matrix::{Matrix3x3, cross, dot};
