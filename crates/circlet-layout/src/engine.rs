//! Circular layout pass.
//!
//! [`compute_layout`] is a pure function of the display area, the children and
//! the parameters. Hosts call it once per pass and apply the returned
//! placements; nothing is retained between calls.

use circlet_core::{Angle, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::child::{ChildId, LayoutChild};
use crate::oval::oval_radius;
use crate::params::{CircleParams, RadiusMode, Strategy};

/// Where a single child ends up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the child in the input slice
    pub index: usize,
    /// Child identity, if any
    pub id: Option<ChildId>,
    /// Center of the child in the parent's coordinate space
    pub center: Point,
    /// Bounding rectangle derived from `center` and the measured size
    pub bounds: Rect,
    /// Polar angle on the circle; `None` for the center element
    pub angle: Option<Angle>,
}

impl Placement {
    /// True for the child placed at the center of the circle.
    #[must_use]
    pub fn is_center(&self) -> bool {
        self.angle.is_none()
    }
}

/// Values resolved during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassGeometry {
    /// Center of the display area
    pub center: Point,
    /// Half of the display area's smaller side
    pub outer_radius: f32,
    /// Angular step between consecutive children
    pub angle_increment: Angle,
    /// Placement radius; for the oval strategy, the radius at the offset angle of the first child
    pub radius: f32,
    /// Number of children distributed along the circle
    pub circular_count: usize,
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPass {
    /// Resolved geometry
    pub geometry: PassGeometry,
    /// Placements ordered by child index
    pub placements: Vec<Placement>,
}

impl LayoutPass {
    /// Number of placed children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// True when nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placement of the child at `index`, if it was placed.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.placements
            .binary_search_by_key(&index, |p| p.index)
            .ok()
            .map(|i| &self.placements[i])
    }

    /// Placement of the child with identity `id`.
    #[must_use]
    pub fn by_id(&self, id: ChildId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == Some(id))
    }

    /// Placement of the center element, if one was placed.
    #[must_use]
    pub fn center_element(&self) -> Option<&Placement> {
        self.placements.iter().find(|p| p.is_center())
    }

    /// Placements on the circle, in distribution order.
    pub fn ring(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(|p| !p.is_center())
    }
}

/// Smallest and largest effective radius over the circular set.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RadiusStats {
    min: f32,
    max: f32,
}

impl RadiusStats {
    /// Empty statistics: `max = 0`, `min = outer_radius`.
    fn empty(outer_radius: f32) -> Self {
        Self {
            min: outer_radius,
            max: 0.0,
        }
    }

    fn record(&mut self, radius: f32) {
        self.max = self.max.max(radius);
        self.min = self.min.min(radius);
    }
}

/// Resolve the constant placement radius.
///
/// A zero fixed radius means "unset" and falls back to fitting the largest
/// child.
fn resolve_radius(mode: RadiusMode, outer_radius: f32, stats: RadiusStats) -> f32 {
    match mode {
        RadiusMode::Fixed(radius) if radius != 0.0 => radius,
        RadiusMode::Fixed(_) | RadiusMode::FitsLargestChild => outer_radius - stats.max,
        RadiusMode::FitsSmallestChild => outer_radius - stats.min,
    }
}

/// Resolve the angular step: the fixed angle, or an equal split of a full turn.
fn resolve_increment(angle: Angle, count: usize) -> Angle {
    if angle.is_zero() {
        Angle::equal_split(count)
    } else {
        angle
    }
}

/// Lay out `children` inside `display_area`.
///
/// `display_area` is the container's content rectangle with padding already
/// removed. Children that are [`Gone`](crate::Visibility::Gone) are skipped.
/// The first laid-out child whose id matches `params.center_element` is
/// placed at the center and left out of the circle and of the radius
/// statistics. With no children on the circle the pass places nothing else.
pub fn compute_layout<C: LayoutChild>(
    display_area: Rect,
    children: &[C],
    params: &CircleParams,
) -> LayoutPass {
    let center = display_area.center();
    let outer_radius = display_area.size().inner_radius();

    let mut placements = Vec::with_capacity(children.len());
    let mut circular: Vec<(usize, &C)> = Vec::with_capacity(children.len());
    let mut stats = RadiusStats::empty(outer_radius);
    let mut center_placed = false;

    for (index, child) in children.iter().enumerate() {
        if !child.visibility().is_laid_out() {
            continue;
        }
        let id = child.id();
        if !center_placed && id.is_some() && id == params.center_element {
            placements.push(place(index, child, center, None));
            center_placed = true;
            continue;
        }
        stats.record(child.effective_radius());
        circular.push((index, child));
    }

    if let (Some(id), false) = (params.center_element, center_placed) {
        warn!(center_element = %id, "center element is missing or gone; nothing placed at the center");
    }

    let angle_increment = resolve_increment(params.angle, circular.len());
    let radius = resolve_radius(params.radius_mode, outer_radius, stats);
    let step = angle_increment * params.direction.sign();

    debug!(
        children = children.len(),
        circular = circular.len(),
        center_placed,
        outer_radius,
        radius,
        increment_deg = angle_increment.degrees(),
        strategy = ?params.strategy,
        "circle layout pass"
    );

    let mut current = params.angle_offset;
    let mut first_radius = None;
    for (index, child) in circular.iter().copied() {
        let r = match params.strategy {
            Strategy::Circular => radius,
            Strategy::Oval => oval_radius(child.measured_size(), outer_radius, current),
        };
        first_radius.get_or_insert(r);
        let position = Point::polar_to_screen(center, r, current);
        trace!(index, x = position.x, y = position.y, angle_deg = current.degrees(), "placed child");
        placements.push(place(index, child, position, Some(current)));
        current += step;
    }

    placements.sort_by_key(|p| p.index);

    let radius = match params.strategy {
        Strategy::Circular => radius,
        Strategy::Oval => first_radius.unwrap_or(0.0),
    };

    LayoutPass {
        geometry: PassGeometry {
            center,
            outer_radius,
            angle_increment,
            radius,
            circular_count: circular.len(),
        },
        placements,
    }
}

fn place<C: LayoutChild>(index: usize, child: &C, center: Point, angle: Option<Angle>) -> Placement {
    let size: Size = child.measured_size();
    Placement {
        index,
        id: child.id(),
        center,
        bounds: Rect::from_center(center, size),
        angle,
    }
}
