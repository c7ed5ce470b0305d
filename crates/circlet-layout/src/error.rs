//! Error types for circlet-layout.

use crate::child::ChildId;
use thiserror::Error;

/// A rejected parameter assignment.
///
/// Returned synchronously by setters and by config conversion. The previous
/// parameters stay in effect whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The designated center element is not a child of the container.
    #[error("center element {0} is not a child of this layout")]
    UnknownCenterElement(ChildId),

    /// Fixed radii must be non-negative.
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(f32),

    /// Radius preset code outside the known set.
    #[error("invalid radius preset {0} (expected 0 = fits smallest child, 1 = fits largest child)")]
    InvalidRadiusPreset(i32),

    /// Direction code other than +1 or -1.
    #[error("invalid direction {0} (expected 1 = counter-clockwise, -1 = clockwise)")]
    InvalidDirection(i32),

    /// NaN or infinite value for a numeric parameter.
    #[error("{field} must be finite, got {value}")]
    NonFiniteValue {
        /// Parameter name
        field: &'static str,
        /// Rejected value
        value: f32,
    },

    /// Child index out of range.
    #[error("no child at index {0}")]
    UnknownChild(usize),
}

/// Errors decoding a declarative layout or scene document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML syntax or shape error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON syntax or shape error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Decoded values failed validation.
    #[error("invalid layout: {0}")]
    Invalid(#[from] LayoutError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_display() {
        let err = LayoutError::UnknownCenterElement(ChildId(7));
        assert_eq!(err.to_string(), "center element #7 is not a child of this layout");

        let err = LayoutError::NegativeRadius(-3.0);
        assert_eq!(err.to_string(), "radius must be non-negative, got -3");

        let err = LayoutError::NonFiniteValue {
            field: "angle",
            value: f32::NAN,
        };
        assert_eq!(err.to_string(), "angle must be finite, got NaN");
    }

    #[test]
    fn test_config_error_from_layout_error() {
        let err: ConfigError = LayoutError::InvalidDirection(3).into();
        assert!(matches!(err, ConfigError::Invalid(LayoutError::InvalidDirection(3))));
        assert!(err.to_string().starts_with("invalid layout: invalid direction 3"));
    }
}
