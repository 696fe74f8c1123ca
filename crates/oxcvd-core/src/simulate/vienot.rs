//! Viénot, Brettel & Mollon (1999) dichromacy simulation
//!
//! "Digital video colourmaps for checking the legibility of displays by
//! dichromats."
//!
//! The whole transform collapses to a single 3x3 matrix in linear RGB,
//! which makes it the cheapest of the geometry-based algorithms.
//! Recommended for protanopia and deuteranopia; not accurate for
//! tritanopia, where Brettel 1997 should be preferred.

use crate::batch;
use crate::error::Result;
use crate::geometry::plane_projection_matrix;
use crate::image::LinearImage;
use crate::math::Matrix3x3;
use crate::math::matrix::cross;
use crate::model::LmsModel;
use crate::types::Deficiency;

/// The Viénot 1999 single-projection simulator
#[derive(Debug, Clone)]
pub struct Vienot1999 {
    model: LmsModel,
}

impl Vienot1999 {
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

    /// The constant full-dichromacy matrix in linear RGB
    ///
    /// T = linearRGB_from_LMS · P(n, d) · LMS_from_linearRGB, where the
    /// projection plane holds the LMS directions of two colors a dichromat
    /// sees normally: blue and yellow for protan/deutan. For tritan the
    /// algorithm is not theoretically valid; the cyan/red substitution
    /// keeps the behavior defined for completeness.
    pub fn dichromat_matrix(&self, deficiency: Deficiency) -> Result<Matrix3x3> {
        let lms_from_rgb = self.model.lms_from_linear_rgb();

        let normal = match deficiency {
            Deficiency::Protan | Deficiency::Deutan => {
                let lms_blue = lms_from_rgb.multiply_vec([0.0, 0.0, 1.0]);
                let lms_yellow = lms_from_rgb.multiply_vec([1.0, 1.0, 0.0]);
                cross(lms_yellow, lms_blue)
            }
            Deficiency::Tritan => {
                let lms_red = lms_from_rgb.multiply_vec([1.0, 0.0, 0.0]);
                let lms_cyan = lms_from_rgb.multiply_vec([0.0, 1.0, 1.0]);
                cross(lms_cyan, lms_red)
            }
        };

        let projection = plane_projection_matrix(normal, deficiency)?;
        Ok(self
            .model
            .linear_rgb_from_lms()
            .multiply(&projection)
            .multiply(lms_from_rgb))
    }

    /// Simulate complete dichromacy over a linear RGB image
    pub(crate) fn simulate_dichromacy(
        &self,
        image: &LinearImage,
        deficiency: Deficiency,
    ) -> Result<LinearImage> {
        let matrix = self.dichromat_matrix(deficiency)?;
        let samples = batch::apply_matrix_batch(image.samples(), &matrix);
        Ok(image.with_samples(samples))
    }
}
