//! Confusion geometry in LMS space
//!
//! A dichromat collapses LMS space along the axis of the missing cone.
//! The simulators express this as projections onto planes through the
//! origin (black is on every such plane), built here from plane normals.
//!
//! The confusion-segment computation needs a line/polytope intersection;
//! that service is kept behind the [`SegmentIntersection`] trait so the
//! core carries no 3D geometry dependency.

use crate::error::{Error, Result};
use crate::math::Matrix3x3;
use crate::model::LmsModel;
use crate::types::Deficiency;

/// The LMS axis along which a dichromat confuses colors
///
/// Fixed unit vectors, independent of the color model in use.
#[inline]
pub fn confusion_axis(deficiency: Deficiency) -> [f64; 3] {
    match deficiency {
        Deficiency::Protan => [1.0, 0.0, 0.0],
        Deficiency::Deutan => [0.0, 1.0, 0.0],
        Deficiency::Tritan => [0.0, 0.0, 1.0],
    }
}

/// Build the matrix projecting LMS points onto a plane through the origin
///
/// The projection runs along the deficiency axis: the deficient coordinate
/// is eliminated by solving n·x = 0 for it, the other two pass through.
/// No origin is needed since black (0,0,0) is always on the plane.
///
/// Fails with a degenerate-geometry error when the normal has (near) no
/// component along the eliminated axis, i.e. the axis lies in the plane
/// and the projection is undefined.
pub fn plane_projection_matrix(normal: [f64; 3], deficiency: Deficiency) -> Result<Matrix3x3> {
    const MIN_COMPONENT: f64 = 1e-12;
    let n = normal;

    let (index, axis) = match deficiency {
        Deficiency::Protan => (0, 'L'),
        Deficiency::Deutan => (1, 'M'),
        Deficiency::Tritan => (2, 'S'),
    };
    if n[index].abs() < MIN_COMPONENT {
        return Err(Error::DegenerateGeometry { axis });
    }

    Ok(match deficiency {
        // Projection along the L axis
        Deficiency::Protan => Matrix3x3::new([
            [0.0, -n[1] / n[0], -n[2] / n[0]],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]),
        // Projection along the M axis
        Deficiency::Deutan => Matrix3x3::new([
            [1.0, 0.0, 0.0],
            [-n[0] / n[1], 0.0, -n[2] / n[1]],
            [0.0, 0.0, 1.0],
        ]),
        // Projection along the S axis
        Deficiency::Tritan => Matrix3x3::new([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [-n[0] / n[2], -n[1] / n[2], 0.0],
        ]),
    })
}

/// A convex polytope given as an origin and three edge vectors
///
/// The linear RGB gamut becomes such a parallelepiped in LMS space.
#[derive(Debug, Clone, Copy)]
pub struct Parallelepiped {
    /// Corner point of the polytope
    pub origin: [f64; 3],
    /// The three edge vectors spanning it
    pub edges: [[f64; 3]; 3],
}

/// A line given by a point and a direction
#[derive(Debug, Clone, Copy)]
pub struct Line {
    /// Any point on the line
    pub point: [f64; 3],
    /// Direction vector, need not be normalized
    pub direction: [f64; 3],
}

/// Line/polytope intersection service
///
/// Implementations compute the segment where a line crosses a convex
/// polytope, or report that it misses it. Provided externally; the core
/// only consumes the interface.
pub trait SegmentIntersection {
    /// Return the two endpoints of line ∩ polytope, or None if they
    /// do not intersect
    fn intersect(&self, polytope: &Parallelepiped, line: &Line) -> Option<([f64; 3], [f64; 3])>;
}

/// The RGB gamut of a color model, as a parallelepiped in LMS space
///
/// The unit RGB cube maps to the parallelepiped spanned by the LMS images
/// of the three primaries, anchored at black.
pub fn lms_gamut(model: &LmsModel) -> Parallelepiped {
    let m = model.lms_from_linear_rgb();
    Parallelepiped {
        origin: [0.0, 0.0, 0.0],
        edges: [
            m.multiply_vec([1.0, 0.0, 0.0]),
            m.multiply_vec([0.0, 1.0, 0.0]),
            m.multiply_vec([0.0, 0.0, 1.0]),
        ],
    }
}

/// Endpoints of the confusion line through an LMS color, within the gamut
///
/// The line runs parallel to the missing cone axis; the returned segment
/// is its intersection with the RGB gamut in LMS space. None if the color
/// is outside the gamut.
pub fn confusion_segment<I: SegmentIntersection>(
    lms_color: [f64; 3],
    model: &LmsModel,
    deficiency: Deficiency,
    intersector: &I,
) -> Option<([f64; 3], [f64; 3])> {
    let gamut = lms_gamut(model);
    let line = Line {
        point: lms_color,
        direction: confusion_axis(deficiency),
    };
    intersector.intersect(&gamut, &line)
}
