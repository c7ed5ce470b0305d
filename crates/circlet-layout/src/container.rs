//! Host-side container: owns children and parameters, re-runs the engine
//! when something layout-affecting changes.

use circlet_core::{Angle, Constraints, Insets, Rect, Size};
use tracing::debug;

use crate::child::{ChildBox, ChildId, LayoutChild, Visibility};
use crate::engine::{compute_layout, LayoutPass};
use crate::error::LayoutError;
use crate::params::{finite, CircleParams, Direction, RadiusMode, Strategy};

/// A circular container.
///
/// Setters validate before mutating. A rejected assignment returns an error
/// and leaves both the parameters and the dirty flag untouched. Accepted
/// assignments mark the container dirty; [`CircleLayout::layout`] recomputes
/// only when dirty.
#[derive(Debug, Clone, Default)]
pub struct CircleLayout {
    params: CircleParams,
    children: Vec<ChildBox>,
    padding: Insets,
    size: Size,
    needs_layout: bool,
    last_pass: Option<LayoutPass>,
    passes: u64,
}

impl CircleLayout {
    /// Empty container of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            needs_layout: true,
            ..Self::default()
        }
    }

    /// Build a container from already-validated parameters.
    ///
    /// Fails if `params` names a center element that is not among `children`.
    pub fn with_children(
        size: Size,
        children: Vec<ChildBox>,
        params: CircleParams,
    ) -> Result<Self, LayoutError> {
        params.validate()?;
        let mut layout = Self::new(size);
        layout.children = children;
        layout.set_center_element(params.center_element)?;
        layout.params = params;
        Ok(layout)
    }

    /// Current parameters.
    #[must_use]
    pub const fn params(&self) -> &CircleParams {
        &self.params
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[ChildBox] {
        &self.children
    }

    /// Container size, padding included.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Padding.
    #[must_use]
    pub const fn padding(&self) -> Insets {
        self.padding
    }

    /// Content rectangle handed to the engine.
    #[must_use]
    pub fn display_area(&self) -> Rect {
        Rect::from_size(self.size).inset_by(self.padding)
    }

    /// True when the next [`layout`](Self::layout) call will recompute.
    #[must_use]
    pub const fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Number of engine invocations so far.
    #[must_use]
    pub const fn pass_count(&self) -> u64 {
        self.passes
    }

    /// Force a recompute on the next [`layout`](Self::layout) call.
    pub fn invalidate(&mut self) {
        self.needs_layout = true;
    }

    /// Append a child and return its index.
    pub fn push_child(&mut self, child: ChildBox) -> usize {
        self.children.push(child);
        self.invalidate();
        self.children.len() - 1
    }

    /// Remove the child at `index`.
    ///
    /// Removing the center element also clears the designation.
    pub fn remove_child(&mut self, index: usize) -> Result<ChildBox, LayoutError> {
        if index >= self.children.len() {
            return Err(LayoutError::UnknownChild(index));
        }
        let removed = self.children.remove(index);
        if removed.id.is_some() && removed.id == self.params.center_element && !self.has_child(removed.id) {
            self.params.center_element = None;
        }
        self.invalidate();
        Ok(removed)
    }

    /// Change a child's visibility.
    pub fn set_child_visibility(
        &mut self,
        index: usize,
        visibility: Visibility,
    ) -> Result<(), LayoutError> {
        let child = self
            .children
            .get_mut(index)
            .ok_or(LayoutError::UnknownChild(index))?;
        if child.visibility != visibility {
            child.visibility = visibility;
            self.invalidate();
        }
        Ok(())
    }

    /// Designate (or clear) the child placed at the center.
    pub fn set_center_element(&mut self, id: Option<ChildId>) -> Result<(), LayoutError> {
        if let Some(id) = id {
            if !self.has_child(Some(id)) {
                return Err(LayoutError::UnknownCenterElement(id));
            }
        }
        self.update(|p| p.center_element = id);
        Ok(())
    }

    /// Set the fixed increment in degrees; zero restores the equal split.
    pub fn set_angle_degrees(&mut self, degrees: f32) -> Result<(), LayoutError> {
        let angle = Angle::from_degrees(degrees);
        finite("angle", angle)?;
        self.update(|p| p.angle = angle);
        Ok(())
    }

    /// Set the start angle in degrees.
    pub fn set_angle_offset_degrees(&mut self, degrees: f32) -> Result<(), LayoutError> {
        let offset = Angle::from_degrees(degrees);
        finite("angle_offset", offset)?;
        self.update(|p| p.angle_offset = offset);
        Ok(())
    }

    /// Set a fixed radius in pixels; zero defers to the preset.
    pub fn set_radius(&mut self, radius: f32) -> Result<(), LayoutError> {
        let mode = RadiusMode::fixed(radius)?;
        self.update(|p| p.radius_mode = mode);
        Ok(())
    }

    /// Set the radius policy.
    pub fn set_radius_mode(&mut self, mode: RadiusMode) -> Result<(), LayoutError> {
        if let RadiusMode::Fixed(radius) = mode {
            RadiusMode::fixed(radius)?;
        }
        self.update(|p| p.radius_mode = mode);
        Ok(())
    }

    /// Set the radius policy from a preset code (0 or 1).
    pub fn set_radius_preset(&mut self, code: i32) -> Result<(), LayoutError> {
        let mode = RadiusMode::from_preset(code)?;
        self.update(|p| p.radius_mode = mode);
        Ok(())
    }

    /// Set the direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.update(|p| p.direction = direction);
    }

    /// Set the direction from a sign code (+1 or -1).
    pub fn set_direction_sign(&mut self, sign: i32) -> Result<(), LayoutError> {
        let direction = Direction::from_sign(sign)?;
        self.set_direction(direction);
        Ok(())
    }

    /// Switch between circular and oval distribution.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.update(|p| p.strategy = strategy);
    }

    /// Change the padding.
    pub fn set_padding(&mut self, padding: Insets) {
        if self.padding != padding {
            self.padding = padding;
            self.invalidate();
        }
    }

    /// Change the container size.
    pub fn resize(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.invalidate();
        }
    }

    /// Measure every child against the content box.
    ///
    /// Children larger than the content box are clamped to it.
    pub fn measure(&mut self) {
        let constraints = Constraints::loose(self.size).deflate(self.padding);
        for child in &mut self.children {
            let measured = constraints.constrain(child.preferred);
            child.set_measured(measured);
        }
        self.invalidate();
    }

    /// Run a pass if anything changed, otherwise return the previous one.
    pub fn layout(&mut self) -> &LayoutPass {
        let pass = match self.last_pass.take() {
            Some(pass) if !self.needs_layout => pass,
            _ => {
                let pass = compute_layout(self.display_area(), &self.children, &self.params);
                self.passes += 1;
                debug!(pass = self.passes, placed = pass.len(), "container laid out");
                self.needs_layout = false;
                pass
            }
        };
        self.last_pass.insert(pass)
    }

    /// Most recent pass, without recomputing.
    #[must_use]
    pub fn last_pass(&self) -> Option<&LayoutPass> {
        self.last_pass.as_ref()
    }

    fn has_child(&self, id: Option<ChildId>) -> bool {
        self.children.iter().any(|c| c.id().is_some() && c.id() == id)
    }

    fn update(&mut self, apply: impl FnOnce(&mut CircleParams)) {
        let before = self.params;
        apply(&mut self.params);
        if self.params != before {
            self.invalidate();
        }
    }
}
