//! CIE L*a*b* conversion
//!
//! Used to compare simulation outputs perceptually; not part of the
//! simulation path itself.

/// D65 white point (sRGB reference white)
pub const D65_WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

/// Convert an XYZ color to CIE L*a*b*, D65 white
///
/// XYZ is assumed normalized so the white point has Y = 1. For input from
/// the sRGB gamut, L is in [0, 100] and a/b roughly in [-128, 127].
pub fn lab_from_xyz(xyz: [f64; 3]) -> [f64; 3] {
    let fx = lab_f(xyz[0] / D65_WHITE[0]);
    let fy = lab_f(xyz[1] / D65_WHITE[1]);
    let fz = lab_f(xyz[2] / D65_WHITE[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}
