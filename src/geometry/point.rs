use crate::genetics::vector::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new(
            self.x + (other.x - self.x) / 2.0,
            self.y + (other.y - self.y) / 2.0,
        )
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The point reached by moving along `vector` (Stop leaves it in place)
    pub fn advance(&self, vector: Vector) -> Point {
        Point::new(self.x + vector.dx(), self.y + vector.dy())
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A sampled point with its arc-length fraction along the owning stroke
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointDistance {
    pub x: f64,
    pub y: f64,
    pub distance: f64,
}

impl PointDistance {
    pub fn new(x: f64, y: f64, distance: f64) -> Self {
        Self { x, y, distance }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Interpolate the point lying at `fraction` of the way along `points`.
///
/// `points` must be ordered by non-decreasing `distance` starting at 0 and
/// ending at 1, as produced by the HCF parser. Returns `None` for an empty
/// list.
pub fn point_between(points: &[PointDistance], fraction: f64) -> Option<Point> {
    let first = points.first()?;
    let last = points.last()?;

    if fraction <= 0.0 {
        return Some(first.point());
    }
    if fraction >= 1.0 {
        return Some(last.point());
    }

    let i = points
        .iter()
        .skip(1)
        .position(|p| p.distance >= fraction)
        .map(|i| i + 1)
        .unwrap_or(points.len() - 1);
    if i == 0 {
        return Some(first.point());
    }

    let start = &points[i - 1];
    let end = &points[i];
    let span = end.distance - start.distance;
    if span <= 0.0 {
        return Some(end.point());
    }

    let t = (fraction - start.distance) / span;
    Some(Point::new(
        start.x + (end.x - start.x) * t,
        start.y + (end.y - start.y) * t,
    ))
}
