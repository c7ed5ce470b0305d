//! Core geometric types for the circlet circular layout engine.
//!
//! - Primitives: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Angles: [`Angle`], radians internally, degrees at the edges
//! - Measurement: [`Constraints`]

mod angle;
mod constraints;
mod geometry;

pub use angle::Angle;
pub use constraints::Constraints;
pub use geometry::{Insets, Point, Rect, Size};
