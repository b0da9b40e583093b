pub mod bezier;
pub mod line;
pub mod point;
pub mod range;
pub mod rectangle;

pub use bezier::BezierCurve;
pub use line::Line;
pub use point::{point_between, Point, PointDistance};
pub use range::Range;
pub use rectangle::Rectangle;
