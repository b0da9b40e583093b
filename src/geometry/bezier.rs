//! Quadratic Bézier flattening by de Casteljau bisection.

use super::point::Point;
use crate::genetics::vector::VECTOR_MEDIUM;

/// Chords at or below this length are kept as straight lines
pub const MAX_CHORD: f64 = VECTOR_MEDIUM * 3.0 * 5.0;
pub const MAX_DEPTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierCurve {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl BezierCurve {
    pub fn new(start: Point, control: Point, end: Point) -> Self {
        Self { start, control, end }
    }

    /// Polyline approximation, from `start` through `end`
    pub fn expand(&self) -> Vec<Point> {
        let mut points = vec![self.start];
        expand_into(self.start, self.control, self.end, 0, &mut points);
        points
    }
}

// Appends every leaf endpoint after `start`; the caller has already pushed `start`
fn expand_into(start: Point, control: Point, end: Point, depth: usize, points: &mut Vec<Point>) {
    if depth >= MAX_DEPTH || start.distance(&end) <= MAX_CHORD {
        points.push(end);
        return;
    }

    let c1 = start.midpoint(&control);
    let c2 = control.midpoint(&end);
    let joint = c1.midpoint(&c2);

    expand_into(start, c1, joint, depth + 1, points);
    expand_into(joint, c2, end, depth + 1, points);
}

pub fn expand(start: Point, control: Point, end: Point) -> Vec<Point> {
    BezierCurve::new(start, control, end).expand()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_curve_is_its_chord() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(10.0, 0.0);
        let points = expand(start, Point::new(5.0, 50.0), end);
        assert_eq!(points, vec![start, end]);
    }

    #[test]
    fn test_degenerate_curve() {
        let p = Point::new(3.0, 3.0);
        assert_eq!(expand(p, p, p), vec![p, p]);
    }

    #[test]
    fn test_long_curve_bisects_to_max_depth() {
        let start = Point::new(0.0, 0.0);
        let control = Point::new(200.0, 400.0);
        let end = Point::new(400.0, 0.0);
        let points = expand(start, control, end);

        // Eight leaves sharing their joints
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], start);
        assert_eq!(points[8], end);
        // t = 1/2 lands on the apex of the symmetric curve
        assert_eq!(points[4], Point::new(200.0, 200.0));
        for pair in points.windows(2) {
            assert!(pair[1].x > pair[0].x);
        }
    }

    #[test]
    fn test_single_bisection() {
        let start = Point::new(0.0, 0.0);
        let control = Point::new(20.0, 0.0);
        let end = Point::new(40.0, 0.0);
        let points = expand(start, control, end);
        assert_eq!(
            points,
            vec![start, Point::new(20.0, 0.0), end]
        );
    }
}
