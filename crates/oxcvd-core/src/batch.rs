//! Batch pixel operations
//!
//! These functions process whole buffers of color samples at once, with
//! `multiversion` CPU dispatch on the hot loops. Samples are stored as
//! `[f32; 3]` and the arithmetic runs in f64 so repeated matrix passes do
//! not accumulate single-precision error.
//!
//! Every operation is independent per trailing-3 sample: a buffer may hold
//! a single color, a row, or a full image, the result is the same.

use crate::math::matrix::{Matrix3x3, dot};
use crate::math::{srgb_decode, srgb_encode};
use multiversion::multiversion;

/// Decode sRGB-encoded samples to linear RGB, in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb_decode_batch(data: &mut [[f32; 3]]) {
    for sample in data.iter_mut() {
        for v in sample.iter_mut() {
            *v = srgb_decode(*v as f64) as f32;
        }
    }
}

/// Encode linear RGB samples to sRGB, in place
///
/// Values are clamped to [0,1] before the gamma law is applied.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb_encode_batch(data: &mut [[f32; 3]]) {
    for sample in data.iter_mut() {
        for v in sample.iter_mut() {
            *v = srgb_encode(*v as f64) as f32;
        }
    }
}

/// Apply a 3x3 color matrix to every sample, into a fresh buffer
///
/// Each sample v becomes M × v.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn apply_matrix_batch(src: &[[f32; 3]], matrix: &Matrix3x3) -> Vec<[f32; 3]> {
    let m = &matrix.m;
    src.iter()
        .map(|sample| {
            let v = [sample[0] as f64, sample[1] as f64, sample[2] as f64];
            [
                (m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2]) as f32,
                (m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2]) as f32,
                (m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2]) as f32,
            ]
        })
        .collect()
}

/// Fit out-of-gamut linear RGB samples into [0,1] by desaturating
///
/// Per sample: the most negative channel (or 0) is subtracted from all
/// three channels, moving the color towards the neutral axis until no
/// channel is negative, then the result is clamped to [0,1]. In-gamut
/// samples are left untouched by the subtraction.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn desaturate_to_gamut_batch(data: &mut [[f32; 3]]) {
    for sample in data.iter_mut() {
        let min_val = sample[0].min(sample[1]).min(sample[2]).min(0.0);
        for v in sample.iter_mut() {
            *v = (*v - min_val).clamp(0.0, 1.0);
        }
    }
}

/// Blend a simulated buffer with the original, in place
///
/// Per channel: severity·simulated + (1 − severity)·original. At
/// severity 1 the simulated value is returned unchanged, at severity 0
/// the original.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn blend_batch(simulated: &mut [[f32; 3]], original: &[[f32; 3]], severity: f32) {
    debug_assert_eq!(simulated.len(), original.len());
    let s = severity as f64;
    for (sim, orig) in simulated.iter_mut().zip(original.iter()) {
        for c in 0..3 {
            sim[c] = (sim[c] as f64 * s + orig[c] as f64 * (1.0 - s)) as f32;
        }
    }
}

/// Convert interleaved 8-bit RGB to normalized f32 samples
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn rgb8_to_f32_batch(src: &[u8], dst: &mut [[f32; 3]]) {
    assert!(src.len() % 3 == 0);
    assert!(dst.len() >= src.len() / 3);

    for (chunk, out) in src.chunks_exact(3).zip(dst.iter_mut()) {
        out[0] = chunk[0] as f32 / 255.0;
        out[1] = chunk[1] as f32 / 255.0;
        out[2] = chunk[2] as f32 / 255.0;
    }
}

/// Convert normalized f32 samples to interleaved 8-bit RGB
///
/// Values are clamped to [0,1] and rounded.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn f32_to_rgb8_batch(src: &[[f32; 3]], dst: &mut [u8]) {
    assert!(dst.len() >= src.len() * 3);

    for (sample, chunk) in src.iter().zip(dst.chunks_exact_mut(3)) {
        chunk[0] = (sample[0].clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        chunk[1] = (sample[1].clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        chunk[2] = (sample[2].clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
    }
}

/// Per-pixel half-space projection used by the Brettel 1997 simulator
///
/// Each sample is taken to LMS once, tested against the separation plane,
/// and pushed through one of the two precomposed projection-and-return
/// matrices (linear RGB ← projected LMS). The output is a fresh buffer;
/// nothing is overwritten in place.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn project_half_spaces_batch(
    src: &[[f32; 3]],
    lms_from_rgb: &Matrix3x3,
    separation_normal: [f64; 3],
    rgb_from_lms_pos: &Matrix3x3,
    rgb_from_lms_neg: &Matrix3x3,
) -> Vec<[f32; 3]> {
    src.iter()
        .map(|sample| {
            let rgb = [sample[0] as f64, sample[1] as f64, sample[2] as f64];
            let lms = lms_from_rgb.multiply_vec(rgb);
            let projection = if dot(lms, separation_normal) < 0.0 {
                rgb_from_lms_neg
            } else {
                rgb_from_lms_pos
            };
            let out = projection.multiply_vec(lms);
            [out[0] as f32, out[1] as f32, out[2] as f32]
        })
        .collect()
}
