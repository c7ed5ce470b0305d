//! Layout parameters for a single pass.

use crate::child::ChildId;
use crate::error::LayoutError;
use circlet_core::Angle;
use serde::{Deserialize, Serialize};

/// How the placement radius is derived.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusMode {
    /// Largest child's bounding circle stays inside the display area.
    #[default]
    FitsLargestChild,
    /// Smallest child fits exactly; larger children may overflow.
    FitsSmallestChild,
    /// Explicit radius in pixels.
    Fixed(f32),
}

impl RadiusMode {
    /// Preset code for [`RadiusMode::FitsSmallestChild`].
    pub const FITS_SMALLEST_CHILD: i32 = 0;
    /// Preset code for [`RadiusMode::FitsLargestChild`].
    pub const FITS_LARGEST_CHILD: i32 = 1;

    /// Decode a preset code as used by attribute sources.
    pub fn from_preset(code: i32) -> Result<Self, LayoutError> {
        match code {
            Self::FITS_SMALLEST_CHILD => Ok(Self::FitsSmallestChild),
            Self::FITS_LARGEST_CHILD => Ok(Self::FitsLargestChild),
            other => Err(LayoutError::InvalidRadiusPreset(other)),
        }
    }

    /// Validated fixed radius.
    pub fn fixed(radius: f32) -> Result<Self, LayoutError> {
        if !radius.is_finite() {
            return Err(LayoutError::NonFiniteValue {
                field: "radius",
                value: radius,
            });
        }
        if radius < 0.0 {
            return Err(LayoutError::NegativeRadius(radius));
        }
        Ok(Self::Fixed(radius))
    }
}

/// Rotation direction between consecutive children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// +1
    #[default]
    CounterClockwise,
    /// -1
    Clockwise,
}

impl Direction {
    /// Decode a signed direction code.
    pub fn from_sign(sign: i32) -> Result<Self, LayoutError> {
        match sign {
            1 => Ok(Self::CounterClockwise),
            -1 => Ok(Self::Clockwise),
            other => Err(LayoutError::InvalidDirection(other)),
        }
    }

    /// Multiplier applied to the angular increment.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }
}

/// Shape children are distributed along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Constant radius resolved from [`RadiusMode`].
    #[default]
    Circular,
    /// Per-child radius on an ellipse fitted to each child's own size.
    Oval,
}

/// Parameters for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleParams {
    /// Fixed increment between consecutive children; zero means equal split
    pub angle: Angle,
    /// Angle of the first child from the positive X axis
    pub angle_offset: Angle,
    /// Radius policy
    pub radius_mode: RadiusMode,
    /// Rotation direction
    pub direction: Direction,
    /// Child placed at the exact center
    pub center_element: Option<ChildId>,
    /// Distribution shape
    pub strategy: Strategy,
}

impl CircleParams {
    /// Default parameters: equal split, no offset, fit largest child.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fixed angular increment.
    #[must_use]
    pub const fn angle(mut self, angle: Angle) -> Self {
        self.angle = angle;
        self
    }

    /// Set the start angle.
    #[must_use]
    pub const fn angle_offset(mut self, offset: Angle) -> Self {
        self.angle_offset = offset;
        self
    }

    /// Set the radius policy.
    #[must_use]
    pub const fn radius_mode(mut self, mode: RadiusMode) -> Self {
        self.radius_mode = mode;
        self
    }

    /// Set the rotation direction.
    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Designate the center element.
    #[must_use]
    pub const fn center_element(mut self, id: ChildId) -> Self {
        self.center_element = Some(id);
        self
    }

    /// Set the distribution strategy.
    #[must_use]
    pub const fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check the numeric fields. Child membership of the center element is
    /// checked by the container, which knows the children.
    pub fn validate(&self) -> Result<(), LayoutError> {
        finite("angle", self.angle)?;
        finite("angle_offset", self.angle_offset)?;
        if let RadiusMode::Fixed(radius) = self.radius_mode {
            RadiusMode::fixed(radius)?;
        }
        Ok(())
    }
}

pub(crate) fn finite(field: &'static str, angle: Angle) -> Result<(), LayoutError> {
    if angle.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::NonFiniteValue {
            field,
            value: angle.radians(),
        })
    }
}
