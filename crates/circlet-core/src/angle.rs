//! Angles stored in radians.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::ops::{Add, AddAssign, Mul, Neg};

/// A plane angle, stored in radians.
///
/// Positive values turn counter-clockwise from the positive X axis.
/// Serialized as plain radians; use [`Angle::from_degrees`] at the edges.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f32);

impl Angle {
    /// Zero angle
    pub const ZERO: Self = Self(0.0);

    /// One full turn (2π)
    pub const FULL_TURN: Self = Self(TAU);

    /// Create from radians.
    #[must_use]
    pub const fn from_radians(radians: f32) -> Self {
        Self(radians)
    }

    /// Create from degrees.
    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        Self(degrees.to_radians())
    }

    /// Value in radians.
    #[must_use]
    pub const fn radians(self) -> f32 {
        self.0
    }

    /// Value in degrees.
    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0.to_degrees()
    }

    /// True for an exact zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// True unless NaN or infinite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Split a full turn into `slices` equal parts.
    ///
    /// Zero slices is treated as one, so the result is always finite.
    #[must_use]
    pub fn equal_split(slices: usize) -> Self {
        Self(TAU / slices.max(1) as f32)
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<f32> for Angle {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
