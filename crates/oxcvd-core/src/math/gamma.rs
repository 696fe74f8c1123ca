//! Gamma and transfer function operations
//!
//! Two transfer functions appear at the system boundary:
//! - the sRGB piecewise law (IEC 61966-2-1), used for modern displays
//! - a plain 2.2 power law, used for pre-sRGB CRT monitors

/// sRGB gamma decode (encoded → linear)
///
/// Converts sRGB-encoded value [0,1] to linear light [0,1].
/// Uses the IEC 61966-2-1 transfer function.
#[inline]
pub fn srgb_decode(encoded: f64) -> f64 {
    if encoded < 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light to an sRGB-encoded value [0,1]. The input is
/// clamped to [0,1] first, since simulated values can transiently leave
/// the gamut and a fractional power of a negative would be NaN.
#[inline]
pub fn srgb_encode(linear: f64) -> f64 {
    let linear = linear.clamp(0.0, 1.0);
    if linear < 0.0031308 {
        linear * 12.92
    } else {
        linear.powf(1.0 / 2.4) * 1.055 - 0.055
    }
}

/// Gamma 2.2 decode (encoded → linear), for old CRT monitors
#[inline]
pub fn gamma22_decode(encoded: f64) -> f64 {
    encoded.powf(2.2)
}

/// Gamma 2.2 encode (linear → encoded), clamping to [0,1] first
#[inline]
pub fn gamma22_encode(linear: f64) -> f64 {
    linear.clamp(0.0, 1.0).powf(1.0 / 2.2)
}
