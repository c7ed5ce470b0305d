//! Children as seen by the layout engine.

use circlet_core::Size;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-assigned identity of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildId(pub u64);

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visibility state of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Placed and drawn.
    #[default]
    Visible,
    /// Placed but not drawn; still takes its slot on the circle.
    Invisible,
    /// Neither placed nor counted.
    Gone,
}

impl Visibility {
    /// Whether the child takes part in layout.
    #[must_use]
    pub const fn is_laid_out(self) -> bool {
        !matches!(self, Self::Gone)
    }
}

/// What the engine needs to know about a child.
///
/// Children are otherwise opaque; hosts implement this on their own node
/// type or use [`ChildBox`].
pub trait LayoutChild {
    /// Identity used to match the center element.
    fn id(&self) -> Option<ChildId>;

    /// Size produced by the host's measure step.
    fn measured_size(&self) -> Size;

    /// Current visibility.
    fn visibility(&self) -> Visibility;

    /// Bounding-circle radius used for fit computations.
    fn effective_radius(&self) -> f32 {
        self.measured_size().effective_radius()
    }
}

impl<T: LayoutChild + ?Sized> LayoutChild for &T {
    fn id(&self) -> Option<ChildId> {
        (**self).id()
    }

    fn measured_size(&self) -> Size {
        (**self).measured_size()
    }

    fn visibility(&self) -> Visibility {
        (**self).visibility()
    }

    fn effective_radius(&self) -> f32 {
        (**self).effective_radius()
    }
}

/// Plain-value child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildBox {
    /// Optional identity
    pub id: Option<ChildId>,
    /// Size the child asks for before measurement
    pub preferred: Size,
    /// Size after the measure step
    measured: Option<Size>,
    /// Visibility state
    pub visibility: Visibility,
}

impl ChildBox {
    /// Create a visible, anonymous child of the given size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            id: None,
            preferred: Size::new(width, height),
            measured: None,
            visibility: Visibility::Visible,
        }
    }

    /// Set the identity.
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(ChildId(id));
        self
    }

    /// Set the visibility.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Record the measured size.
    pub fn set_measured(&mut self, size: Size) {
        self.measured = Some(size);
    }
}

impl LayoutChild for ChildBox {
    fn id(&self) -> Option<ChildId> {
        self.id
    }

    /// Falls back to the preferred size until the child is measured.
    fn measured_size(&self) -> Size {
        self.measured.unwrap_or(self.preferred)
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_default() {
        assert_eq!(Visibility::default(), Visibility::Visible);
        assert!(Visibility::Invisible.is_laid_out());
        assert!(!Visibility::Gone.is_laid_out());
    }

    #[test]
    fn test_child_box_builder() {
        let child = ChildBox::new(20.0, 40.0)
            .with_id(3)
            .with_visibility(Visibility::Invisible);
        assert_eq!(child.id(), Some(ChildId(3)));
        assert_eq!(child.visibility(), Visibility::Invisible);
        assert_eq!(child.effective_radius(), 20.0);
    }

    #[test]
    fn test_child_box_measured_overrides_preferred() {
        let mut child = ChildBox::new(200.0, 200.0);
        assert_eq!(child.measured_size(), Size::new(200.0, 200.0));
        child.set_measured(Size::new(50.0, 60.0));
        assert_eq!(child.measured_size(), Size::new(50.0, 60.0));
    }
}
