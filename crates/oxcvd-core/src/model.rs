//! LMS cone-response models
//!
//! An [`LmsModel`] bundles the conversion chain between linear RGB, CIE XYZ
//! and LMS cone-response space. It is built from two published matrices
//! (RGB primaries → XYZ, and XYZ → cone fundamentals) and derives the rest
//! once at construction.
//!
//! The named presets are configuration data: each factory returns a plain
//! `LmsModel` value and callers pick one explicitly. [`smith_pokorny_75`]
//! with the Judd-Vos corrected XYZ space is the model recommended for CVD
//! simulation; the others exist for historical or cross-tool comparison.
//!
//! [`smith_pokorny_75`]: LmsModel::smith_pokorny_75

use crate::batch;
use crate::error::{Error, Result};
use crate::math::Matrix3x3;

/// Matrix for the sRGB standard, goes to CIE XYZ 1931 (D65 white point)
///
/// From IEC 61966-2-1:1999, rebuilt from the BT.709 primaries.
pub const XYZ_FROM_LINEAR_RGB_BT709: Matrix3x3 = Matrix3x3::new([
    [0.412456, 0.3575761, 0.1804375],
    [0.212672, 0.7151522, 0.0721750],
    [0.019333, 0.1191920, 0.9503041],
]);

/// BT.709 primaries to Judd-Vos corrected XYZ
///
/// Computed by Viénot, Brettel & Mollon (1999) by transforming the sRGB
/// primaries and white point with the Vos (1978) chromaticity correction.
/// An approximation of the true spectral rebuild, but the difference was
/// evaluated as small in the original article.
pub const XYZ_JUDD_VOS_FROM_LINEAR_RGB_BT709: Matrix3x3 = Matrix3x3::new([
    [0.409568, 0.355041, 0.179167],
    [0.213389, 0.706743, 0.0798680],
    [0.0186297, 0.114620, 0.912367],
]);

/// Smith & Pokorny (1975) cone fundamentals
///
/// Meant to be applied on top of a Judd-Vos corrected XYZ space, not the
/// original CIE XYZ 1931.
pub const LMS_FROM_XYZ_JUDD_VOS_SMITH_POKORNY_75: Matrix3x3 = Matrix3x3::new([
    [0.15514, 0.54312, -0.03286],
    [-0.15514, 0.45684, 0.03286],
    [0.0, 0.0, 0.01608],
]);

/// LMS model: the six-matrix conversion bundle
///
/// Immutable once constructed; safe to share across threads and reuse for
/// any number of images.
#[derive(Debug, Clone)]
pub struct LmsModel {
    xyz_from_linear_rgb: Matrix3x3,
    lms_from_xyz: Matrix3x3,
    lms_from_linear_rgb: Matrix3x3,
    linear_rgb_from_lms: Matrix3x3,
    linear_rgb_from_xyz: Matrix3x3,
    xyz_from_lms: Matrix3x3,
    uses_judd_vos_xyz: bool,
}

impl LmsModel {
    /// Build a model from its two defining matrices
    ///
    /// Derives LMS_from_linearRGB as the product and inverts all three
    /// transforms. Fails if any matrix is singular.
    pub fn new(
        xyz_from_linear_rgb: Matrix3x3,
        lms_from_xyz: Matrix3x3,
        uses_judd_vos_xyz: bool,
    ) -> Result<Self> {
        let lms_from_linear_rgb = lms_from_xyz.multiply(&xyz_from_linear_rgb);
        let linear_rgb_from_lms = lms_from_linear_rgb
            .inverse()
            .ok_or(Error::SingularModel("LMS_from_linearRGB"))?;
        let linear_rgb_from_xyz = xyz_from_linear_rgb
            .inverse()
            .ok_or(Error::SingularModel("XYZ_from_linearRGB"))?;
        let xyz_from_lms = lms_from_xyz
            .inverse()
            .ok_or(Error::SingularModel("LMS_from_XYZ"))?;

        Ok(Self {
            xyz_from_linear_rgb,
            lms_from_xyz,
            lms_from_linear_rgb,
            linear_rgb_from_lms,
            linear_rgb_from_xyz,
            xyz_from_lms,
            uses_judd_vos_xyz,
        })
    }

    /// Smith & Pokorny (1975) cone fundamentals over Judd-Vos corrected
    /// XYZ, adapted to sRGB monitors
    ///
    /// The XYZ→LMS transform is the one used by Viénot, Brettel & Mollon
    /// (1999); the RGB→XYZ transform uses the modern sRGB primaries with
    /// the Judd-Vos correction. Recommended for CVD simulation.
    pub fn smith_pokorny_75() -> Result<Self> {
        Self::new(
            XYZ_JUDD_VOS_FROM_LINEAR_RGB_BT709,
            LMS_FROM_XYZ_JUDD_VOS_SMITH_POKORNY_75,
            true,
        )
    }

    /// Smith & Pokorny (1975) without the Judd-Vos correction
    ///
    /// Not correct: the cone fundamentals expect a Judd-Vos corrected XYZ
    /// space. Retained only for historical comparisons.
    pub fn smith_pokorny_75_uncorrected() -> Result<Self> {
        Self::new(
            XYZ_FROM_LINEAR_RGB_BT709,
            LMS_FROM_XYZ_JUDD_VOS_SMITH_POKORNY_75,
            false,
        )
    }

    /// LMS model of Vischeck, as implemented in the GIMP display filters
    ///
    /// The LMS↔RGB matrices were measured for CRT monitors with the
    /// Stockman cone fundamentals, so they are dated for modern LCD
    /// displays, but they make Vischeck reproducible as a reference.
    pub fn vischeck_gimp() -> Result<Self> {
        let lms_from_linear_rgb = Matrix3x3::new([
            [0.05059983, 0.08585369, 0.00952420],
            [0.01893033, 0.08925308, 0.01370054],
            [0.00292202, 0.00975732, 0.07145979],
        ]);
        // Vischeck ships the final RGB→LMS transform; recover LMS_from_XYZ
        // so the model exposes the same intermediate matrices as the rest.
        let linear_rgb_from_xyz = XYZ_FROM_LINEAR_RGB_BT709
            .inverse()
            .ok_or(Error::SingularModel("XYZ_from_linearRGB"))?;
        let lms_from_xyz = lms_from_linear_rgb.multiply(&linear_rgb_from_xyz);
        Self::new(XYZ_FROM_LINEAR_RGB_BT709, lms_from_xyz, false)
    }

    /// Hunt-Pointer-Estevez transform, normalized for D65
    ///
    /// Designed for chromatic adaptation rather than CVD simulation;
    /// kept for comparison purposes.
    pub fn hunt_pointer_estevez() -> Result<Self> {
        let lms_from_xyz = Matrix3x3::new([
            [0.4002, 0.7076, -0.0808],
            [-0.2263, 1.1653, 0.0457],
            [0.0, 0.0, 0.9182],
        ]);
        Self::new(XYZ_FROM_LINEAR_RGB_BT709, lms_from_xyz, false)
    }

    /// Sharpened CIECAM02 transform (MCAT02)
    ///
    /// Designed for chromatic adaptation rather than CVD simulation;
    /// kept for comparison purposes.
    pub fn ciecam02() -> Result<Self> {
        let lms_from_xyz = Matrix3x3::new([
            [0.7328, 0.4296, -0.1624],
            [-0.7036, 1.6975, 0.0061],
            [0.0030, 0.0136, 0.9834],
        ]);
        Self::new(XYZ_FROM_LINEAR_RGB_BT709, lms_from_xyz, false)
    }

    /// Stockman & Sharpe (2000) cone fundamentals
    ///
    /// The transform is defined from the CIE 2006 XYZ space, not CIE 1931,
    /// so pairing it with the sRGB matrix is an approximation. Not widely
    /// used for CVD simulation.
    pub fn stockman_sharpe_2000() -> Result<Self> {
        let lms_from_xyz = Matrix3x3::new([
            [1.94735469, -1.41445123, 0.36476327],
            [0.68990272, 0.34832189, 0.0],
            [0.0, 0.0, 1.93485343],
        ]);
        Self::new(XYZ_FROM_LINEAR_RGB_BT709, lms_from_xyz, false)
    }

    /// Whether the XYZ side of this model is Judd-Vos corrected
    #[inline]
    pub fn uses_judd_vos_xyz(&self) -> bool {
        self.uses_judd_vos_xyz
    }

    /// XYZ from linear RGB input matrix
    #[inline]
    pub fn xyz_from_linear_rgb(&self) -> &Matrix3x3 {
        &self.xyz_from_linear_rgb
    }

    /// LMS from XYZ input matrix
    #[inline]
    pub fn lms_from_xyz(&self) -> &Matrix3x3 {
        &self.lms_from_xyz
    }

    /// Derived LMS from linear RGB matrix
    #[inline]
    pub fn lms_from_linear_rgb(&self) -> &Matrix3x3 {
        &self.lms_from_linear_rgb
    }

    /// Derived linear RGB from LMS matrix
    #[inline]
    pub fn linear_rgb_from_lms(&self) -> &Matrix3x3 {
        &self.linear_rgb_from_lms
    }

    /// Derived linear RGB from XYZ matrix
    #[inline]
    pub fn linear_rgb_from_xyz(&self) -> &Matrix3x3 {
        &self.linear_rgb_from_xyz
    }

    /// Derived XYZ from LMS matrix
    #[inline]
    pub fn xyz_from_lms(&self) -> &Matrix3x3 {
        &self.xyz_from_lms
    }

    /// Convert one LMS color to an 8-bit sRGB triplet
    ///
    /// Goes to linear RGB, desaturates into gamut, gamma-encodes and
    /// quantizes. A visualization helper, not part of the simulation path.
    pub fn srgb_from_lms(&self, lms: [f64; 3]) -> [u8; 3] {
        let rgb = self.linear_rgb_from_lms.multiply_vec(lms);
        let mut samples = [[rgb[0] as f32, rgb[1] as f32, rgb[2] as f32]];
        batch::desaturate_to_gamut_batch(&mut samples);
        batch::srgb_encode_batch(&mut samples);
        let mut out = [0u8; 3];
        batch::f32_to_rgb8_batch(&samples, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn all_presets() -> Vec<LmsModel> {
        vec![
            LmsModel::smith_pokorny_75().unwrap(),
            LmsModel::smith_pokorny_75_uncorrected().unwrap(),
            LmsModel::vischeck_gimp().unwrap(),
            LmsModel::hunt_pointer_estevez().unwrap(),
            LmsModel::ciecam02().unwrap(),
            LmsModel::stockman_sharpe_2000().unwrap(),
        ]
    }

    #[test]
    fn test_presets_construct() {
        assert_eq!(all_presets().len(), 6);
    }

    #[test]
    fn test_derived_inverses() {
        for model in all_presets() {
            let id = Matrix3x3::identity();
            assert!(
                model
                    .lms_from_linear_rgb()
                    .multiply(model.linear_rgb_from_lms())
                    .approx_eq(&id, 1e-6)
            );
            assert!(
                model
                    .xyz_from_linear_rgb()
                    .multiply(model.linear_rgb_from_xyz())
                    .approx_eq(&id, 1e-6)
            );
            assert!(
                model
                    .lms_from_xyz()
                    .multiply(model.xyz_from_lms())
                    .approx_eq(&id, 1e-6)
            );
        }
    }

    #[test]
    fn test_product_matrix() {
        let model = LmsModel::smith_pokorny_75().unwrap();
        let product = model
            .lms_from_xyz()
            .multiply(model.xyz_from_linear_rgb());
        assert!(product.approx_eq(model.lms_from_linear_rgb(), EPSILON));
    }

    #[test]
    fn test_judd_vos_flag() {
        assert!(LmsModel::smith_pokorny_75().unwrap().uses_judd_vos_xyz());
        assert!(
            !LmsModel::smith_pokorny_75_uncorrected()
                .unwrap()
                .uses_judd_vos_xyz()
        );
        assert!(!LmsModel::vischeck_gimp().unwrap().uses_judd_vos_xyz());
    }

    #[test]
    fn test_singular_input_rejected() {
        let singular = Matrix3x3::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]);
        let result = LmsModel::new(singular, LMS_FROM_XYZ_JUDD_VOS_SMITH_POKORNY_75, false);
        assert!(matches!(result, Err(Error::SingularModel(_))));
    }

    #[test]
    fn test_srgb_from_lms_black_and_white() {
        let model = LmsModel::smith_pokorny_75().unwrap();
        assert_eq!(model.srgb_from_lms([0.0, 0.0, 0.0]), [0, 0, 0]);

        let white_lms = model.lms_from_linear_rgb().multiply_vec([1.0, 1.0, 1.0]);
        assert_eq!(model.srgb_from_lms(white_lms), [255, 255, 255]);
    }
}
