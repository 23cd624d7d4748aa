//! Geometry primitives: perpendicular offsets and line intersections.
//!
//! These are total functions: degenerate inputs get a documented fallback
//! value instead of an error, so callers higher up never have to unwind.

use glam::DVec2;

/// Which side of a directed segment an offset falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The vector perpendicular to the segment `p1 -> p2`, scaled to `magnitude`.
///
/// For direction vector V, the right normal is (Vy, -Vx) and the left normal
/// (-Vy, Vx), each normalized then scaled. A zero-length segment yields the
/// zero vector, so shifting by it is a no-op at degenerate points.
pub fn unit_normal(p1: DVec2, p2: DVec2, magnitude: f64, side: Side) -> DVec2 {
    let v = p2 - p1;
    let normal = match side {
        Side::Right => DVec2::new(v.y, -v.x),
        Side::Left => DVec2::new(-v.y, v.x),
    };

    let len = normal.length();
    if len == 0.0 {
        return DVec2::ZERO;
    }

    normal / len * magnitude
}

/// Intersection of the two infinite lines through `(p1, p2)` and `(p3, p4)`.
///
/// Uses the determinant method on line coefficients a*x + b*y = c. Returns
/// `None` when the determinant is exactly zero (parallel or collinear lines);
/// callers supply their own fallback point.
pub fn line_intersection(p1: DVec2, p2: DVec2, p3: DVec2, p4: DVec2) -> Option<DVec2> {
    let a1 = p2.y - p1.y;
    let b1 = p1.x - p2.x;
    let c1 = a1 * p1.x + b1 * p1.y;

    let a2 = p4.y - p3.y;
    let b2 = p3.x - p4.x;
    let c2 = a2 * p3.x + b2 * p3.y;

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }

    Some(DVec2::new(
        (b2 * c1 - b1 * c2) / det,
        (a1 * c2 - a2 * c1) / det,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::dvec2;

    #[test]
    fn normals_are_opposite_with_exact_magnitude() {
        let cases = [
            (dvec2(0.0, 0.0), dvec2(1.0, 0.0)),
            (dvec2(0.0, 0.0), dvec2(0.0, 1.0)),
            (dvec2(1.0, 2.0), dvec2(4.0, -3.0)),
            (dvec2(-5.0, 0.5), dvec2(3.0, 7.0)),
        ];
        for (p1, p2) in cases {
            let right = unit_normal(p1, p2, 2.5, Side::Right);
            let left = unit_normal(p1, p2, 2.5, Side::Left);
            assert_relative_eq!(right.x, -left.x, epsilon = 1e-12);
            assert_relative_eq!(right.y, -left.y, epsilon = 1e-12);
            assert_relative_eq!(right.length(), 2.5, epsilon = 1e-12);
            assert_relative_eq!(left.length(), 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn right_normal_follows_vy_negvx_convention() {
        // Segment pointing down the page (+y): right normal (Vy, -Vx) = +x.
        let n = unit_normal(dvec2(0.0, 0.0), dvec2(0.0, 10.0), 3.0, Side::Right);
        assert_relative_eq!(n.x, 3.0);
        assert_relative_eq!(n.y, 0.0);
    }

    #[test]
    fn degenerate_segment_yields_zero_vector() {
        let p = dvec2(4.0, 4.0);
        assert_eq!(unit_normal(p, p, 9.0, Side::Left), DVec2::ZERO);
        assert_eq!(unit_normal(p, p, 9.0, Side::Right), DVec2::ZERO);
    }

    #[test]
    fn intersection_of_crossing_lines() {
        let p = line_intersection(
            dvec2(0.0, 0.0),
            dvec2(2.0, 2.0),
            dvec2(0.0, 2.0),
            dvec2(2.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 1.0);
    }

    #[test]
    fn intersection_satisfies_both_line_equations() {
        let (p1, p2) = (dvec2(-1.0, 3.0), dvec2(4.0, -2.0));
        let (p3, p4) = (dvec2(0.0, -5.0), dvec2(2.0, 6.0));
        let hit = line_intersection(p1, p2, p3, p4).unwrap();

        // a*x + b*y = c for each defining pair
        for (a, b) in [(p1, p2), (p3, p4)] {
            let ca = b.y - a.y;
            let cb = a.x - b.x;
            let cc = ca * a.x + cb * a.y;
            assert_relative_eq!(ca * hit.x + cb * hit.y, cc, epsilon = 1e-9);
        }
    }

    #[test]
    fn parallel_lines_return_none() {
        assert!(
            line_intersection(
                dvec2(0.0, 0.0),
                dvec2(1.0, 1.0),
                dvec2(0.0, 1.0),
                dvec2(1.0, 2.0),
            )
            .is_none()
        );
    }

    #[test]
    fn collinear_lines_return_none() {
        assert!(
            line_intersection(
                dvec2(0.0, 0.0),
                dvec2(1.0, 1.0),
                dvec2(2.0, 2.0),
                dvec2(3.0, 3.0),
            )
            .is_none()
        );
    }

    #[test]
    fn intersection_beyond_segment_extents() {
        // Infinite lines intersect even when the segments themselves don't.
        let p = line_intersection(
            dvec2(0.0, 0.0),
            dvec2(1.0, 0.0),
            dvec2(5.0, 1.0),
            dvec2(5.0, 2.0),
        )
        .unwrap();
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 0.0);
    }
}
