//! Geometric primitives: Point, Size, Rect, Insets.
//!
//! All coordinates are in screen space: X grows to the right and Y grows
//! downward. Polar helpers take angles in mathematical convention
//! (counter-clockwise from the positive X axis) and do the Y flip themselves.

use crate::angle::Angle;
use serde::{Deserialize, Serialize};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Cartesian offset of a polar coordinate, with Y pointing up.
    #[must_use]
    pub fn from_polar(radius: f32, angle: Angle) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self::new(radius * cos, radius * sin)
    }

    /// Screen position at `radius` and `angle` around `center`.
    ///
    /// The vertical term is subtracted so that positive angles turn
    /// counter-clockwise on a Y-down surface.
    #[must_use]
    pub fn polar_to_screen(center: Self, radius: f32, angle: Angle) -> Self {
        let offset = Self::from_polar(radius, angle);
        Self::new(center.x + offset.x, center.y - offset.y)
    }

    /// Calculate Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square size.
    #[must_use]
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Radius of the circle inscribed in a square of the larger side.
    ///
    /// Used as the bounding-circle proxy of a child: `max(w, h) / 2`.
    #[must_use]
    pub fn effective_radius(&self) -> f32 {
        self.width.max(self.height) / 2.0
    }

    /// Half of the smaller side; the radius of the largest inscribed circle.
    #[must_use]
    pub fn inner_radius(&self) -> f32 {
        self.width.min(self.height) / 2.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Padding around a content box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    /// Left inset
    pub left: f32,
    /// Top inset
    pub top: f32,
    /// Right inset
    pub right: f32,
    /// Bottom inset
    pub bottom: f32,
}

impl Insets {
    /// Create insets with individual values.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on every side.
    #[must_use]
    pub const fn uniform(amount: f32) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    /// Sum of left and right.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from size at origin.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Rectangle of `size` whose center sits on `center`.
    #[must_use]
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// Get the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink by padding. Width and height never go negative.
    #[must_use]
    pub fn inset_by(&self, insets: Insets) -> Self {
        Self::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.horizontal()).max(0.0),
            (self.height - insets.vertical()).max(0.0),
        )
    }
}
