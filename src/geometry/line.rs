use super::point::Point;
use crate::genetics::direction::Direction;

/// Slopes at or beyond this magnitude read as North/South
pub const STEEP_SLOPE: f64 = 2.414213562373095; // tan 67.5°
/// Slopes at or below this magnitude read as East/West
pub const SHALLOW_SLOPE: f64 = 0.41421356237309503; // tan 22.5°

/// A directed segment; every other quantity is derived from the endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Rise over run, signed infinity for vertical lines
    pub fn slope(&self) -> f64 {
        let dx = self.dx();
        let dy = self.dy();
        if dx == 0.0 {
            if dy < 0.0 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        } else {
            dy / dx
        }
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    /// Snap the line onto the nearest of the eight compass directions
    pub fn direction(&self) -> Direction {
        let dx = self.dx();
        let dy = self.dy();
        let north_or_south = if dy > 0.0 {
            Direction::North
        } else {
            Direction::South
        };

        if dx == 0.0 && dy == 0.0 {
            return Direction::Stop;
        }
        if dx == 0.0 {
            return north_or_south;
        }

        let slope = dy / dx;
        if slope == 0.0 {
            return if dx > 0.0 {
                Direction::East
            } else {
                Direction::West
            };
        }

        if slope > 0.0 {
            if slope >= STEEP_SLOPE {
                north_or_south
            } else if slope <= SHALLOW_SLOPE {
                if dy > 0.0 {
                    Direction::East
                } else {
                    Direction::West
                }
            } else if dy > 0.0 {
                Direction::Northeast
            } else {
                Direction::Southwest
            }
        } else if slope <= -STEEP_SLOPE {
            north_or_south
        } else if slope >= -SHALLOW_SLOPE {
            if dy > 0.0 {
                Direction::West
            } else {
                Direction::East
            }
        } else if dy > 0.0 {
            Direction::Northwest
        } else {
            Direction::Southeast
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}-{}, dir({}) len({}), slope({}))",
            self.start,
            self.end,
            self.direction(),
            self.length(),
            self.slope()
        )
    }
}
