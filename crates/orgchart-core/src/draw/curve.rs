//! Cubic Bézier connectors.

use std::fmt::Write;

use crate::geometry::Point;

/// A cubic Bézier curve from `start` to `end`.
///
/// # Examples
///
/// ```
/// # use orgchart_core::{draw::CurveSegment, geometry::Point};
/// let curve = CurveSegment::new(
///     Point::new(200.0, 10.0),
///     Point::new(100.0, 10.0),
///     Point::new(100.0, 50.0),
///     Point::new(0.0, 50.0),
/// );
/// assert_eq!(curve.to_path_data(), "M200,10C100,10 100,50 0,50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    start: Point,
    control1: Point,
    control2: Point,
    end: Point,
}

impl CurveSegment {
    pub fn new(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    /// Control point attached to the start
    pub fn control1(&self) -> Point {
        self.control1
    }

    /// Control point attached to the end
    pub fn control2(&self) -> Point {
        self.control2
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// SVG path data for this curve, `M` followed by a single absolute `C`
    pub fn to_path_data(&self) -> String {
        let mut data = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            data,
            "M{},{}C{},{} {},{} {},{}",
            self.start.x(),
            self.start.y(),
            self.control1.x(),
            self.control1.y(),
            self.control2.x(),
            self.control2.y(),
            self.end.x(),
            self.end.y()
        );
        data
    }
}
