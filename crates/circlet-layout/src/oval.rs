//! Oval distribution: per-child radius on an ellipse.

use circlet_core::{Angle, Size};

/// Distance from the center of an ellipse to its edge at `angle`.
///
/// `horizontal` and `vertical` are the semi-axes along X and Y. Uses the
/// polar form `r(θ) = a·b / sqrt(b²·cos²θ + a²·sin²θ)`. A degenerate ellipse
/// (zero denominator) has radius 0.
#[must_use]
pub fn ellipse_radius_at(horizontal: f32, vertical: f32, angle: Angle) -> f32 {
    let (sin, cos) = angle.radians().sin_cos();
    let denominator =
        (vertical * vertical * cos * cos + horizontal * horizontal * sin * sin).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    horizontal * vertical / denominator
}

/// Radius for a child of `size` at `angle` inside a display area of
/// `outer_radius`.
///
/// The ellipse is the set of centers that keep the child's box inside the
/// inscribed square: `outer - w/2` across, `outer - h/2` up. Children larger
/// than the area collapse onto the center.
#[must_use]
pub fn oval_radius(size: Size, outer_radius: f32, angle: Angle) -> f32 {
    let horizontal = (outer_radius - size.width / 2.0).max(0.0);
    let vertical = (outer_radius - size.height / 2.0).max(0.0);
    ellipse_radius_at(horizontal, vertical, angle)
}
