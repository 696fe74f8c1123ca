//! Brettel, Viénot & Mollon (1997) dichromacy simulation
//!
//! "Computerized simulation of color appearance for dichromats."
//!
//! More faithful than the 1999 single-projection variant: LMS space is
//! split into two half-spaces by a plane through the neutral axis and the
//! confusion axis, and each half projects onto its own wing plane. The
//! per-pixel half-space test makes this a piecewise-linear map, not a
//! single matrix. It is the reference algorithm for tritanopia.

use crate::batch;
use crate::error::Result;
use crate::geometry::{confusion_axis, plane_projection_matrix};
use crate::image::LinearImage;
use crate::math::Matrix3x3;
use crate::math::matrix::{cross, dot};
use crate::model::LmsModel;
use crate::types::Deficiency;

// CIE 1931 2° standard observer tristimulus values at the anchor
// wavelengths. Saved as literals to avoid a colorimetry dependency;
// 475nm/575nm anchor the protan and deutan wings, 485nm/660nm the
// tritan wings.
const XYZ_475: [f64; 3] = [0.1421, 0.1126, 1.0419];
const XYZ_575: [f64; 3] = [0.8425, 0.9154, 0.0018];
const XYZ_485: [f64; 3] = [0.05795, 0.1693, 0.6162];
const XYZ_660: [f64; 3] = [0.1649, 0.0610, 0.0000];

// The equal-energy white point. By construction of CIE XYZ it has
// X = Y = Z; the normalization only picks a point along the diagonal,
// 0.8 keeps it close to sRGB white.
const XYZ_E: [f64; 3] = [0.8, 0.8, 0.8];

/// The two projection matrices and separation plane for one deficiency
///
/// `rgb_from_lms_pos` applies on the positive side of the separation
/// plane, `rgb_from_lms_neg` on the negative side. Both are precomposed
/// with the return trip to linear RGB.
#[derive(Debug, Clone)]
pub(crate) struct HalfPlaneProjection {
    pub separation_normal: [f64; 3],
    pub rgb_from_lms_pos: Matrix3x3,
    pub rgb_from_lms_neg: Matrix3x3,
}

/// The Brettel 1997 two-plane simulator
#[derive(Debug, Clone)]
pub struct Brettel1997 {
    model: LmsModel,
}

impl Brettel1997 {
    /// Create a simulator over the given LMS model
    pub fn new(model: LmsModel) -> Self {
        Self { model }
    }

    /// Create a simulator over the recommended Smith & Pokorny model
    pub fn with_default_model() -> Result<Self> {
        Ok(Self::new(LmsModel::smith_pokorny_75()?))
    }

    /// The LMS model in use
    pub fn model(&self) -> &LmsModel {
        &self.model
    }

    /// Build the per-call projection data for one deficiency
    ///
    /// Both wing planes contain the neutral (equal-energy white)
    /// direction; each additionally contains one spectral anchor. The
    /// wings are swapped if needed so the first one always sits on the
    /// positive side of the separation plane, keeping the result
    /// independent of how the model matrices were assembled.
    pub(crate) fn projection(&self, deficiency: Deficiency) -> Result<HalfPlaneProjection> {
        let lms_from_xyz = self.model.lms_from_xyz();
        let lms_e = lms_from_xyz.multiply_vec(XYZ_E);

        let (wing_a, wing_b) = match deficiency {
            Deficiency::Protan | Deficiency::Deutan => (
                lms_from_xyz.multiply_vec(XYZ_475),
                lms_from_xyz.multiply_vec(XYZ_575),
            ),
            Deficiency::Tritan => (
                lms_from_xyz.multiply_vec(XYZ_485),
                lms_from_xyz.multiply_vec(XYZ_660),
            ),
        };

        let separation_normal = cross(lms_e, confusion_axis(deficiency));

        let (mut n1, mut n2) = (cross(lms_e, wing_a), cross(lms_e, wing_b));
        if dot(separation_normal, wing_a) < 0.0 {
            std::mem::swap(&mut n1, &mut n2);
        }

        let h1 = plane_projection_matrix(n1, deficiency)?;
        let h2 = plane_projection_matrix(n2, deficiency)?;
        let back = self.model.linear_rgb_from_lms();

        Ok(HalfPlaneProjection {
            separation_normal,
            rgb_from_lms_pos: back.multiply(&h1),
            rgb_from_lms_neg: back.multiply(&h2),
        })
    }

    /// Simulate complete dichromacy over a linear RGB image
    ///
    /// The projection data is computed once per call; only the half-space
    /// test runs per pixel. The result is written to a fresh buffer.
    pub(crate) fn simulate_dichromacy(
        &self,
        image: &LinearImage,
        deficiency: Deficiency,
    ) -> Result<LinearImage> {
        let projection = self.projection(deficiency)?;
        let samples = batch::project_half_spaces_batch(
            image.samples(),
            self.model.lms_from_linear_rgb(),
            projection.separation_normal,
            &projection.rgb_from_lms_pos,
            &projection.rgb_from_lms_neg,
        );
        Ok(image.with_samples(samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lms_of(simulator: &Brettel1997, rgb: [f64; 3]) -> [f64; 3] {
        simulator.model().lms_from_linear_rgb().multiply_vec(rgb)
    }

    #[test]
    fn test_projection_builds_for_all_deficiencies() {
        let simulator = Brettel1997::with_default_model().unwrap();
        for d in Deficiency::ALL {
            assert!(simulator.projection(d).is_ok());
        }
    }

    #[test]
    fn test_neutral_axis_is_preserved() {
        // The equal-energy direction lies on both wing planes, so greys
        // along it survive the projection on either side
        let simulator = Brettel1997::with_default_model().unwrap();
        for d in Deficiency::ALL {
            let p = simulator.projection(d).unwrap();
            let lms_e = simulator.model().lms_from_xyz().multiply_vec(XYZ_E);
            let rgb_e = simulator.model().linear_rgb_from_xyz().multiply_vec(XYZ_E);
            for (matrix, side) in [(&p.rgb_from_lms_pos, "pos"), (&p.rgb_from_lms_neg, "neg")] {
                let out = matrix.multiply_vec(lms_e);
                for c in 0..3 {
                    assert!(
                        (out[c] - rgb_e[c]).abs() < 1e-9,
                        "neutral moved on {} side of {}: {:?} vs {:?}",
                        side,
                        d,
                        out,
                        rgb_e
                    );
                }
            }
        }
    }

    #[test]
    fn test_wing_ordering_is_canonical() {
        // Wing 1 must land on the positive side of the separation plane
        let simulator = Brettel1997::with_default_model().unwrap();
        for d in Deficiency::ALL {
            let p = simulator.projection(d).unwrap();
            let lms_from_xyz = simulator.model().lms_from_xyz();
            let (xyz_a, xyz_b) = match d {
                Deficiency::Protan | Deficiency::Deutan => (XYZ_475, XYZ_575),
                Deficiency::Tritan => (XYZ_485, XYZ_660),
            };
            let wings = [
                lms_from_xyz.multiply_vec(xyz_a),
                lms_from_xyz.multiply_vec(xyz_b),
            ];
            // Exactly one wing on each side
            let sides: Vec<bool> = wings
                .iter()
                .map(|w| dot(p.separation_normal, *w) >= 0.0)
                .collect();
            assert_ne!(sides[0], sides[1], "wings on the same side for {}", d);
            // The positive-side wing is fixed by its own projection plane
            let positive_wing = if sides[0] { wings[0] } else { wings[1] };
            let out = p.rgb_from_lms_pos.multiply_vec(positive_wing);
            let direct = simulator
                .model()
                .linear_rgb_from_lms()
                .multiply_vec(positive_wing);
            for c in 0..3 {
                assert!((out[c] - direct[c]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_black_maps_to_black() {
        let simulator = Brettel1997::with_default_model().unwrap();
        let image = LinearImage::from_samples(1, 1, vec![[0.0, 0.0, 0.0]]).unwrap();
        for d in Deficiency::ALL {
            let out = simulator.simulate_dichromacy(&image, d).unwrap();
            assert_eq!(out.samples()[0], [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_equal_energy_white_is_fixed() {
        // The equal-energy direction lies on both wing planes, so its RGB
        // rendition survives the full simulation. Note sRGB greys are NOT
        // on that axis (D65 vs E white) and do shift slightly.
        let simulator = Brettel1997::with_default_model().unwrap();
        let rgb_e = simulator.model().linear_rgb_from_xyz().multiply_vec(XYZ_E);
        let sample = [rgb_e[0] as f32, rgb_e[1] as f32, rgb_e[2] as f32];
        let image = LinearImage::from_samples(1, 1, vec![sample]).unwrap();
        for d in Deficiency::ALL {
            let out = simulator.simulate_dichromacy(&image, d).unwrap();
            for c in 0..3 {
                assert!(
                    (out.samples()[0][c] - sample[c]).abs() < 1e-4,
                    "equal-energy white drifted under {}: {:?}",
                    d,
                    out.samples()[0]
                );
            }
        }
    }

    #[test]
    fn test_half_space_test_picks_sides() {
        // Saturated blue and yellow fall on opposite sides of the
        // protan separation plane
        let simulator = Brettel1997::with_default_model().unwrap();
        let p = simulator.projection(Deficiency::Protan).unwrap();
        let blue = dot(lms_of(&simulator, [0.0, 0.0, 1.0]), p.separation_normal);
        let yellow = dot(lms_of(&simulator, [1.0, 1.0, 0.0]), p.separation_normal);
        assert!(
            blue * yellow < 0.0,
            "blue ({}) and yellow ({}) on the same side",
            blue,
            yellow
        );
    }
}
