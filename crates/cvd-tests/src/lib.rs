//! # cvd-tests
//!
//! Cross-algorithm testing support for oxcvd.
//!
//! This crate provides:
//! - Test pattern generation (full-range RGB grids, seeded random images)
//! - A reference line/parallelepiped intersector for the confusion
//!   segment interface
//!
//! The actual properties live in `tests/`:
//!
//! 1. **Colorimetry**: gamma round-trips, gamut fitting, matrix linearity
//! 2. **Simulators**: black invariance, zero-severity identity, determinism
//! 3. **AutoSelect parity**: dispatch matches the concrete algorithms
//!    bit-for-bit
//! 4. **Reference parity**: sRGB transfer function against `palette`

pub mod intersect;
pub mod patterns;

pub use intersect::SlabIntersection;
pub use patterns::{random_image, rgb_span};
