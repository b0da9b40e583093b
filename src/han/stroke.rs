use crate::error::{Result, StylusError};
use crate::geometry::bezier;
use crate::geometry::{Point, PointDistance, Rectangle};
use serde::Serialize;

/// A point as written in a stroke directive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HcfPoint {
    pub point: Point,
    pub control: bool,
}

impl HcfPoint {
    pub fn plain(x: f64, y: f64) -> Self {
        Self { point: Point::new(x, y), control: false }
    }

    pub fn control(x: f64, y: f64) -> Self {
        Self { point: Point::new(x, y), control: true }
    }
}

/// One pen stroke of a reference glyph, flattened to an arc-length parameterised polyline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HcfStroke {
    pub label: String,
    pub bounds: Rectangle,
    pub length: f64,
    pub forward: Vec<PointDistance>,
    pub reverse: Vec<PointDistance>,
}

impl HcfStroke {
    /// Flatten `points` into a stroke.
    ///
    /// Consecutive plain points form straight segments; a control point
    /// between two plain points forms a quadratic Bézier.
    pub fn from_points(label: &str, points: &[HcfPoint]) -> Result<Self> {
        check_points(points)?;

        let first = points[0].point;
        let mut bounds = Rectangle::from_point(&first);
        let mut length = 0.0;
        let mut forward = vec![PointDistance::new(first.x, first.y, 0.0)];

        let mut previous = first;
        let mut i = 1;
        while i < points.len() {
            let (sampled, reached) = if points[i].control {
                let end = points[i + 1].point;
                (bezier::expand(previous, points[i].point, end), i + 1)
            } else {
                (vec![previous, points[i].point], i)
            };

            for pair in sampled.windows(2) {
                let next = pair[1];
                bounds.union_point(&next);
                length += pair[0].distance(&next);
                forward.push(PointDistance::new(next.x, next.y, length));
            }

            previous = points[reached].point;
            i = reached + 1;
        }

        if length <= 0.0 {
            return Err(StylusError::MalformedStroke(format!(
                "Stroke {} has zero length",
                label
            )));
        }

        for point in &mut forward {
            point.distance /= length;
        }
        let reverse = forward
            .iter()
            .rev()
            .map(|p| PointDistance::new(p.x, p.y, 1.0 - p.distance))
            .collect();

        Ok(Self {
            label: label.to_string(),
            bounds,
            length,
            forward,
            reverse,
        })
    }
}

fn check_points(points: &[HcfPoint]) -> Result<()> {
    if points.len() < 2 {
        return Err(StylusError::MalformedStroke(
            "A stroke needs at least two points".to_string(),
        ));
    }
    if points[0].control {
        return Err(StylusError::MalformedStroke(
            "A stroke may not begin with a control point".to_string(),
        ));
    }
    if points[points.len() - 1].control {
        return Err(StylusError::MalformedStroke(
            "A stroke may not end with a control point".to_string(),
        ));
    }
    if points.windows(2).any(|pair| pair[0].control && pair[1].control) {
        return Err(StylusError::MalformedStroke(
            "A stroke contains an improperly bounded control point".to_string(),
        ));
    }
    Ok(())
}

/// Strokes drawn as one unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HcfGroup {
    /// 0-based stroke indices
    pub strokes: Vec<usize>,
    pub bounds: Rectangle,
    pub length: f64,
    /// Member bound centers weighted by stroke length
    pub center: Point,
}

impl HcfGroup {
    /// Aggregate the strokes at `indices`; every index must be in range
    pub fn from_strokes(indices: Vec<usize>, strokes: &[HcfStroke]) -> Result<Self> {
        let mut bounds = Rectangle::empty();
        let mut length = 0.0;
        let mut x = 0.0;
        let mut y = 0.0;

        for &i in &indices {
            let stroke = strokes.get(i).ok_or_else(|| {
                StylusError::MalformedStroke(format!(
                    "Group refers to stroke {} but only {} strokes exist",
                    i + 1,
                    strokes.len()
                ))
            })?;
            let center = stroke.bounds.center();

            bounds.union_rect(&stroke.bounds);
            length += stroke.length;
            x += center.x * stroke.length;
            y += center.y * stroke.length;
        }

        if indices.is_empty() || length <= 0.0 {
            return Err(StylusError::MalformedStroke(
                "Group contains no strokes".to_string(),
            ));
        }

        Ok(Self {
            strokes: indices,
            bounds,
            length,
            center: Point::new(x / length, y / length),
        })
    }
}

/// Two strokes expected to cross
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HcfOverlap {
    /// 0-based stroke indices
    pub first: usize,
    pub second: usize,
    pub required: bool,
}
