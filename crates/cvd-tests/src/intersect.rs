//! Reference line/parallelepiped intersector
//!
//! Implements the [`SegmentIntersection`] service with the slab method:
//! the line is expressed in the parallelepiped's edge basis, where the
//! polytope becomes the unit cube and each axis clips the line parameter
//! to an interval.

use oxcvd_core::{Line, Matrix3x3, Parallelepiped, SegmentIntersection};

/// Slab-method implementation of the intersection service
#[derive(Debug, Clone, Copy, Default)]
pub struct SlabIntersection;

impl SegmentIntersection for SlabIntersection {
    fn intersect(&self, polytope: &Parallelepiped, line: &Line) -> Option<([f64; 3], [f64; 3])> {
        // Basis matrix with the edge vectors as columns; its inverse maps
        // polytope coordinates into the unit cube
        let e = &polytope.edges;
        let basis = Matrix3x3::new([
            [e[0][0], e[1][0], e[2][0]],
            [e[0][1], e[1][1], e[2][1]],
            [e[0][2], e[1][2], e[2][2]],
        ]);
        let to_cube = basis.inverse()?;

        let relative = [
            line.point[0] - polytope.origin[0],
            line.point[1] - polytope.origin[1],
            line.point[2] - polytope.origin[2],
        ];
        let p = to_cube.multiply_vec(relative);
        let d = to_cube.multiply_vec(line.direction);

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        for axis in 0..3 {
            if d[axis].abs() < 1e-12 {
                // Line parallel to this slab: inside or no hit at all
                if !(0.0..=1.0).contains(&p[axis]) {
                    return None;
                }
                continue;
            }
            let t0 = (0.0 - p[axis]) / d[axis];
            let t1 = (1.0 - p[axis]) / d[axis];
            t_min = t_min.max(t0.min(t1));
            t_max = t_max.min(t0.max(t1));
        }
        if t_min > t_max {
            return None;
        }

        let at = |t: f64| {
            [
                line.point[0] + t * line.direction[0],
                line.point[1] + t * line.direction[1],
                line.point[2] + t * line.direction[2],
            ]
        };
        Some((at(t_min), at(t_max)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> Parallelepiped {
        Parallelepiped {
            origin: [0.0, 0.0, 0.0],
            edges: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    #[test]
    fn test_axis_line_through_cube() {
        let line = Line {
            point: [0.5, 0.5, 0.5],
            direction: [1.0, 0.0, 0.0],
        };
        let (a, b) = SlabIntersection.intersect(&unit_cube(), &line).unwrap();
        assert_eq!(a, [0.0, 0.5, 0.5]);
        assert_eq!(b, [1.0, 0.5, 0.5]);
    }

    #[test]
    fn test_line_missing_cube() {
        let line = Line {
            point: [2.0, 2.0, 0.5],
            direction: [0.0, 0.0, 1.0],
        };
        assert!(SlabIntersection.intersect(&unit_cube(), &line).is_none());
    }

    #[test]
    fn test_diagonal_line() {
        let line = Line {
            point: [0.5, 0.5, 0.5],
            direction: [1.0, 1.0, 1.0],
        };
        let (a, b) = SlabIntersection.intersect(&unit_cube(), &line).unwrap();
        for c in 0..3 {
            assert!((a[c] - 0.0).abs() < 1e-12);
            assert!((b[c] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sheared_polytope() {
        let sheared = Parallelepiped {
            origin: [1.0, 0.0, 0.0],
            edges: [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 0.0, 2.0]],
        };
        let line = Line {
            point: [2.0, 0.5, 1.0],
            direction: [0.0, 0.0, 1.0],
        };
        let (a, b) = SlabIntersection.intersect(&sheared, &line).unwrap();
        assert!((a[2] - 0.0).abs() < 1e-12);
        assert!((b[2] - 2.0).abs() < 1e-12);
    }
}
