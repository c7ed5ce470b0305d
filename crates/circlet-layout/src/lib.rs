#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
//! Circular layout engine.
//!
//! Places children evenly (or at a fixed angular step) along a circle inside
//! a container's content box, optionally pinning one child at the center.
//!
//! - [`compute_layout`]: the pure pass, `display area + children + params -> placements`
//! - [`CircleParams`]: angle, offset, [`RadiusMode`], [`Direction`], center element, [`Strategy`]
//! - [`CircleLayout`]: host container with validated setters and a dirty flag
//! - [`LayoutConfig`] / [`Scene`]: YAML and JSON documents
//!
//! # Example
//!
//! ```
//! use circlet_core::Rect;
//! use circlet_layout::{compute_layout, ChildBox, CircleParams};
//!
//! let children = vec![ChildBox::new(20.0, 20.0); 4];
//! let pass = compute_layout(Rect::new(0.0, 0.0, 200.0, 200.0), &children, &CircleParams::new());
//!
//! assert_eq!(pass.geometry.radius, 90.0);
//! let first = pass.placements[0].center;
//! assert!((first.x - 190.0).abs() < 1e-3 && (first.y - 100.0).abs() < 1e-3);
//! ```

mod child;
mod config;
mod container;
mod engine;
mod error;
mod oval;
mod params;

pub use child::{ChildBox, ChildId, LayoutChild, Visibility};
pub use config::{ChildConfig, Format, LayoutConfig, RadiusPreset, Scene};
pub use container::CircleLayout;
pub use engine::{compute_layout, LayoutPass, PassGeometry, Placement};
pub use error::{ConfigError, LayoutError};
pub use oval::{ellipse_radius_at, oval_radius};
pub use params::{CircleParams, Direction, RadiusMode, Strategy};
