//! Declarative layout and scene documents.
//!
//! A [`LayoutConfig`] mirrors the container's attributes with angles in
//! degrees and named presets. A [`Scene`] adds a container size, padding and
//! children, and is what the CLI host loads.
//!
//! ```yaml
//! width: 400
//! height: 400
//! padding: { left: 8, top: 8, right: 8, bottom: 8 }
//! layout:
//!   angle_offset: 90
//!   radius_preset: fits_smallest_child
//!   direction: clockwise
//!   center_element: 1
//! children:
//!   - { id: 1, width: 80, height: 80 }
//!   - { width: 40, height: 40 }
//!   - { width: 40, height: 40, visibility: gone }
//! ```

use circlet_core::{Angle, Insets, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::child::{ChildBox, ChildId, Visibility};
use crate::container::CircleLayout;
use crate::error::ConfigError;
use crate::params::{CircleParams, Direction, RadiusMode, Strategy};

/// Named radius policy used when no fixed radius is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusPreset {
    /// See [`RadiusMode::FitsSmallestChild`]
    FitsSmallestChild,
    /// See [`RadiusMode::FitsLargestChild`]
    #[default]
    FitsLargestChild,
}

impl From<RadiusPreset> for RadiusMode {
    fn from(preset: RadiusPreset) -> Self {
        match preset {
            RadiusPreset::FitsSmallestChild => Self::FitsSmallestChild,
            RadiusPreset::FitsLargestChild => Self::FitsLargestChild,
        }
    }
}

/// Layout attributes as written in a document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Fixed increment in degrees; 0 splits the circle evenly
    pub angle: f32,
    /// Start angle in degrees
    pub angle_offset: f32,
    /// Fixed radius in pixels; 0 uses `radius_preset`
    pub radius: f32,
    /// Radius policy when `radius` is 0
    pub radius_preset: RadiusPreset,
    /// Rotation direction
    pub direction: Direction,
    /// Child placed at the center
    pub center_element: Option<ChildId>,
    /// Distribution shape
    pub strategy: Strategy,
}

impl LayoutConfig {
    /// Parse from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert to validated engine parameters.
    pub fn to_params(&self) -> Result<CircleParams, ConfigError> {
        let radius_mode = if self.radius == 0.0 {
            self.radius_preset.into()
        } else {
            RadiusMode::fixed(self.radius)?
        };
        let params = CircleParams {
            angle: Angle::from_degrees(self.angle),
            angle_offset: Angle::from_degrees(self.angle_offset),
            radius_mode,
            direction: self.direction,
            center_element: self.center_element,
            strategy: self.strategy,
        };
        params.validate()?;
        Ok(params)
    }
}

/// A child as written in a scene document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChildConfig {
    /// Optional identity
    #[serde(default)]
    pub id: Option<ChildId>,
    /// Preferred width
    pub width: f32,
    /// Preferred height
    pub height: f32,
    /// Visibility
    #[serde(default)]
    pub visibility: Visibility,
}

impl From<ChildConfig> for ChildBox {
    fn from(config: ChildConfig) -> Self {
        let mut child = Self::new(config.width, config.height).with_visibility(config.visibility);
        child.id = config.id;
        child
    }
}

/// Document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML
    Yaml,
    /// JSON
    Json,
}

impl Format {
    /// `.json` files are JSON, everything else is YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// A container with its children and layout attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Container width, padding included
    pub width: f32,
    /// Container height, padding included
    pub height: f32,
    /// Padding
    #[serde(default)]
    pub padding: Insets,
    /// Layout attributes
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Children in order
    #[serde(default)]
    pub children: Vec<ChildConfig>,
}

impl Scene {
    /// Parse a scene document.
    pub fn parse(text: &str, format: Format) -> Result<Self, ConfigError> {
        match format {
            Format::Yaml => Ok(serde_yaml_ng::from_str(text)?),
            Format::Json => Ok(serde_json::from_str(text)?),
        }
    }

    /// Build a measured container, ready for [`CircleLayout::layout`].
    pub fn build(&self) -> Result<CircleLayout, ConfigError> {
        let params = self.layout.to_params()?;
        let children = self.children.iter().copied().map(ChildBox::from).collect();
        let mut layout =
            CircleLayout::with_children(Size::new(self.width, self.height), children, params)?;
        layout.set_padding(self.padding);
        layout.measure();
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;

    #[test]
    fn test_layout_config_defaults() {
        let config = LayoutConfig::from_yaml("{}").unwrap();
        assert_eq!(config, LayoutConfig::default());
        let params = config.to_params().unwrap();
        assert_eq!(params, CircleParams::default());
    }

    #[test]
    fn test_layout_config_yaml() {
        let yaml = r"
angle: 30
angle_offset: 90
radius_preset: fits_smallest_child
direction: clockwise
center_element: 3
strategy: oval
";
        let params = LayoutConfig::from_yaml(yaml).unwrap().to_params().unwrap();
        assert!((params.angle.degrees() - 30.0).abs() < 1e-4);
        assert!((params.angle_offset.degrees() - 90.0).abs() < 1e-4);
        assert_eq!(params.radius_mode, RadiusMode::FitsSmallestChild);
        assert_eq!(params.direction, Direction::Clockwise);
        assert_eq!(params.center_element, Some(ChildId(3)));
        assert_eq!(params.strategy, Strategy::Oval);
    }

    #[test]
    fn test_layout_config_fixed_radius_wins() {
        let config = LayoutConfig::from_json(r#"{"radius": 42, "radius_preset": "fits_smallest_child"}"#)
            .unwrap();
        assert_eq!(config.to_params().unwrap().radius_mode, RadiusMode::Fixed(42.0));
    }

    #[test]
    fn test_layout_config_negative_radius() {
        let config = LayoutConfig::from_yaml("radius: -4").unwrap();
        assert!(matches!(
            config.to_params(),
            Err(ConfigError::Invalid(LayoutError::NegativeRadius(_)))
        ));
    }

    #[test]
    fn test_layout_config_unknown_names() {
        assert!(matches!(
            LayoutConfig::from_yaml("radius_preset: fits_everything"),
            Err(ConfigError::Yaml(_))
        ));
        assert!(matches!(
            LayoutConfig::from_yaml("direction: sideways"),
            Err(ConfigError::Yaml(_))
        ));
        assert!(matches!(
            LayoutConfig::from_json(r#"{"radius_override": 1}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("scene.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("scene.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("scene.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("scene")), Format::Yaml);
    }

    #[test]
    fn test_scene_build() {
        let yaml = r"
width: 220
height: 220
padding: { left: 10, top: 10, right: 10, bottom: 10 }
layout:
  center_element: 1
children:
  - { id: 1, width: 50, height: 50 }
  - { width: 20, height: 20 }
  - { width: 20, height: 20 }
  - { width: 20, height: 20, visibility: gone }
";
        let scene = Scene::parse(yaml, Format::Yaml).unwrap();
        let mut layout = scene.build().unwrap();
        let pass = layout.layout();
        assert_eq!(pass.len(), 3);
        assert_eq!(pass.geometry.outer_radius, 100.0);
        assert_eq!(pass.geometry.radius, 90.0);
        let center = pass.center_element().unwrap();
        assert_eq!(center.center.x, 110.0);
        assert_eq!(center.center.y, 110.0);
    }

    #[test]
    fn test_scene_unknown_center_element() {
        let json = r#"{"width": 100, "height": 100, "layout": {"center_element": 9}, "children": [{"width": 10, "height": 10}]}"#;
        let scene = Scene::parse(json, Format::Json).unwrap();
        assert!(matches!(
            scene.build(),
            Err(ConfigError::Invalid(LayoutError::UnknownCenterElement(ChildId(9))))
        ));
    }
}
