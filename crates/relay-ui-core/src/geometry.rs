//! Geometry types for UI layout and hit-testing.
//!
//! This module provides the geometry primitives used throughout Relay UI:
//! - [`Point`]: a 2D point with signed coordinates
//! - [`Size`]: a 2D size with unsigned dimensions
//! - [`Rect`]: a rectangle combining position and size
//! - [`Axis`]: the layout axis along which lists flow and hit-test
//!
//! All types are `Copy` and use saturating arithmetic so that geometry
//! math degrades gracefully instead of panicking.

use std::ops::{Add, Sub};

/// A 2D point with signed integer coordinates.
///
/// Points can have negative coordinates to represent positions relative
/// to a viewport or parent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// The x coordinate.
    pub x: i32,
    /// The y coordinate.
    pub y: i32,
}

impl Point {
    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a new point at the given coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point offset by the given amounts.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Returns the Manhattan distance to another point.
    #[inline]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D size with unsigned dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// The width.
    pub width: u16,
    /// The height.
    pub height: u16,
}

impl Size {
    /// A zero-sized area.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Creates a new size with the given dimensions.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns whether either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u16, u16)> for Size {
    #[inline]
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width, height)
    }
}

/// A rectangle defined by its position and size.
///
/// The rectangle is defined by an origin point (top-left corner) and a
/// size. (0, 0) is the top-left of the coordinate space, with x
/// increasing to the right and y increasing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// The x coordinate of the left edge.
    pub x: i32,
    /// The y coordinate of the top edge.
    pub y: i32,
    /// The width of the rectangle.
    pub width: u16,
    /// The height of the rectangle.
    pub height: u16,
}

impl Rect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new rectangle at the given position with the given size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a position point and size.
    #[inline]
    pub const fn from_point_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Returns the top-left corner.
    #[inline]
    pub const fn origin(self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Returns the size of the rectangle.
    #[inline]
    pub const fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the x coordinate of the left edge.
    #[inline]
    pub const fn left(self) -> i32 {
        self.x
    }

    /// Returns the x coordinate one past the right edge.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    /// Returns the y coordinate of the top edge.
    #[inline]
    pub const fn top(self) -> i32 {
        self.y
    }

    /// Returns the y coordinate one past the bottom edge.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    /// Returns the center point of the rectangle.
    #[inline]
    pub const fn center(self) -> Point {
        Point {
            x: self.x.saturating_add(self.width as i32 / 2),
            y: self.y.saturating_add(self.height as i32 / 2),
        }
    }

    /// Returns whether the given point lies within the rectangle.
    #[inline]
    pub const fn contains_point(self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Returns whether either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the rectangle moved so its origin is at the given point.
    #[inline]
    pub const fn moved_to(self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the rectangle translated by the given amounts.
    #[inline]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            width: self.width,
            height: self.height,
        }
    }
}

/// The layout axis of a list.
///
/// Sortable lists flow along one axis; hit-testing and placeholder
/// placement read positions and extents along that axis only, so the
/// drag engine is identical for vertical and horizontal lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Items stack top to bottom; positions are compared on y.
    #[default]
    Vertical,
    /// Items flow left to right; positions are compared on x.
    Horizontal,
}

impl Axis {
    /// Returns the coordinate of a point along this axis.
    #[inline]
    pub const fn pos_along(self, point: Point) -> i32 {
        match self {
            Axis::Vertical => point.y,
            Axis::Horizontal => point.x,
        }
    }

    /// Returns the coordinate of a rectangle's leading edge along this axis.
    #[inline]
    pub const fn start_along(self, rect: Rect) -> i32 {
        match self {
            Axis::Vertical => rect.top(),
            Axis::Horizontal => rect.left(),
        }
    }

    /// Returns the coordinate one past a rectangle's trailing edge along this axis.
    #[inline]
    pub const fn end_along(self, rect: Rect) -> i32 {
        match self {
            Axis::Vertical => rect.bottom(),
            Axis::Horizontal => rect.right(),
        }
    }

    /// Returns the center coordinate of a rectangle along this axis.
    #[inline]
    pub const fn center_along(self, rect: Rect) -> i32 {
        match self {
            Axis::Vertical => rect.center().y,
            Axis::Horizontal => rect.center().x,
        }
    }

    /// Returns a rectangle's extent along this axis.
    #[inline]
    pub const fn extent_along(self, rect: Rect) -> u16 {
        match self {
            Axis::Vertical => rect.height,
            Axis::Horizontal => rect.width,
        }
    }

    /// Returns a point at the given coordinate along this axis, with the
    /// cross-axis coordinate taken from `cross`.
    #[inline]
    pub const fn point_at(self, along: i32, cross: i32) -> Point {
        match self {
            Axis::Vertical => Point { x: cross, y: along },
            Axis::Horizontal => Point { x: along, y: cross },
        }
    }

    /// Returns the cross-axis coordinate of a point.
    #[inline]
    pub const fn cross_of(self, point: Point) -> i32 {
        match self {
            Axis::Vertical => point.x,
            Axis::Horizontal => point.y,
        }
    }
}
