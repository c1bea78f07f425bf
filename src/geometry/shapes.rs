use egui::{Pos2, pos2};

/// Corners of the axis-aligned rectangle spanned by a drag, in drawing order.
///
/// The first corner is always the anchor, so a zero-area drag collapses to a point
/// at the anchor rather than disappearing.
pub fn rectangle_corners(anchor: Pos2, current: Pos2) -> [Pos2; 4] {
    [
        anchor,
        pos2(current.x, anchor.y),
        current,
        pos2(anchor.x, current.y),
    ]
}

/// Radius of a circle centered at `anchor` that passes through `current`.
pub fn circle_radius(anchor: Pos2, current: Pos2) -> f32 {
    anchor.distance(current)
}

/// Vertices of the isosceles triangle drawn by the triangle tool.
///
/// One vertex sits on the anchor. The base runs horizontally through `current`,
/// with its other end mirrored across the anchor's `x`.
pub fn triangle_vertices(anchor: Pos2, current: Pos2) -> [Pos2; 3] {
    [
        anchor,
        current,
        pos2(anchor.x * 2.0 - current.x, current.y),
    ]
}
