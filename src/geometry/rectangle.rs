use super::point::Point;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds with y growing upwards (`top >= bottom`)
///
/// Only the edges are stored; width, height and center are derived. The
/// empty rectangle has inverted infinite edges so that the first union
/// replaces it outright.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::empty()
    }
}

impl Rectangle {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    pub fn empty() -> Self {
        Self {
            top: f64::NEG_INFINITY,
            left: f64::INFINITY,
            bottom: f64::INFINITY,
            right: f64::NEG_INFINITY,
        }
    }

    /// Zero-area rectangle covering a single point
    pub fn from_point(point: &Point) -> Self {
        Self::new(point.y, point.x, point.y, point.x)
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.bottom > self.top
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.right - self.left
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.top - self.bottom
        }
    }

    pub fn center(&self) -> Point {
        if self.is_empty() {
            return Point::default();
        }
        Point::new(
            self.left + self.width() / 2.0,
            self.bottom + self.height() / 2.0,
        )
    }

    pub fn union_rect(&mut self, other: &Rectangle) {
        self.top = self.top.max(other.top);
        self.left = self.left.min(other.left);
        self.bottom = self.bottom.min(other.bottom);
        self.right = self.right.max(other.right);
    }

    pub fn union_point(&mut self, point: &Point) {
        self.top = self.top.max(point.y);
        self.left = self.left.min(point.x);
        self.bottom = self.bottom.min(point.y);
        self.right = self.right.max(point.x);
    }

    /// Edges are inclusive
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.bottom && point.y <= self.top
    }

    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        !other.is_empty()
            && other.left >= self.left
            && other.right <= self.right
            && other.bottom >= self.bottom
            && other.top <= self.top
    }
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let center = self.center();
        write!(
            f,
            "top={} left={} bottom={} right={} width={} height={} center=({},{})",
            self.top,
            self.left,
            self.bottom,
            self.right,
            self.width(),
            self.height(),
            center.x,
            center.y
        )
    }
}
