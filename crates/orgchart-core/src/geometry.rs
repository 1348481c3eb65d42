//! Geometric primitives for chart layout and drawing.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in chart space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle given by its minimum and maximum corners
//! - [`Insets`] - Per-side spacing, used for canvas margins
//!
//! # Coordinate System
//!
//! Screen coordinates follow SVG:
//!
//! ```text
//!   (0,0) ────────► +X   (tree depth grows this way)
//!     │
//!     │
//!     ▼
//!    +Y                  (siblings spread this way)
//! ```
//!
//! The layout engine itself never talks about `x` and `y`. It works in terms of
//! a *depth* axis and a *breadth* axis, and the projection onto this coordinate
//! system happens in exactly one place.

use serde::Deserialize;

/// A 2D point in chart coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Component-wise subtraction
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Width and height of an element
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Shrinks the size by the horizontal and vertical sums of `insets`.
    ///
    /// The result may be zero or negative; callers that need a drawable area
    /// must check [`Size::is_positive`].
    ///
    /// ```
    /// # use orgchart_core::geometry::{Insets, Size};
    /// let canvas = Size::new(800.0, 800.0);
    /// let margins = Insets::new(50.0, 90.0, 30.0, 90.0);
    ///
    /// let inner = canvas.sub_padding(margins);
    /// assert_eq!(inner.width(), 620.0);
    /// assert_eq!(inner.height(), 720.0);
    /// ```
    pub fn sub_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width - insets.horizontal_sum(),
            height: self.height - insets.vertical_sum(),
        }
    }

    /// Half of this size, as an offset from a center to a top-left corner
    pub fn half_extent(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns true if both dimensions are strictly greater than zero
    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Returns true when both dimensions are finite numbers
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// An axis-aligned rectangle with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds of `size` whose top-left corner is `top_left`
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Smallest bounds containing both `self` and `other`.
    ///
    /// ```
    /// # use orgchart_core::geometry::{Bounds, Point, Size};
    /// let root = Bounds::new_from_top_left(Point::new(-75.0, 72.5), Size::new(150.0, 55.0));
    /// let leaf = Bounds::new_from_top_left(Point::new(225.0, -7.5), Size::new(150.0, 55.0));
    ///
    /// let all = root.merge(&leaf);
    /// assert_eq!(all.min_x(), -75.0);
    /// assert_eq!(all.max_x(), 375.0);
    /// assert_eq!(all.min_y(), -7.5);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by `offset`
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }
}

/// Spacing on each side of an area (margins, padding).
///
/// Deserializes from a table with `top`, `right`, `bottom` and `left` keys;
/// missing keys are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates insets in CSS order: top, right, bottom, left
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same value on all four sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Offset of the inner area's origin from the outer area's origin
    pub fn origin(self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }

    /// Returns true when every side is a finite number
    pub fn is_finite(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|side| side.is_finite())
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)))
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn check_merge_covers_both(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        let merged = b1.merge(&b2);
        for b in [b1, b2] {
            prop_assert!(merged.min_x() <= b.min_x() && merged.min_y() <= b.min_y());
            prop_assert!(merged.max_x() >= b.max_x() && merged.max_y() >= b.max_y());
        }
        Ok(())
    }

    fn check_translate_keeps_size(bounds: Bounds, offset: Point) -> Result<(), TestCaseError> {
        let moved = bounds.translate(offset);
        prop_assert!((moved.width() - bounds.width()).abs() < 1e-2);
        prop_assert!((moved.height() - bounds.height()).abs() < 1e-2);
        Ok(())
    }

    proptest! {
        #[test]
        fn bounds_merge_covers_both(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_merge_covers_both(b1, b2)?;
        }

        #[test]
        fn bounds_translate_keeps_size(bounds in bounds_strategy(), offset in point_strategy()) {
            check_translate_keeps_size(bounds, offset)?;
        }
    }
}
