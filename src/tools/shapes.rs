//! Rubber-band shape tools. Each one redraws from the fixed anchor to the
//! current pointer position on every frame.

use crate::geometry::{circle_radius, rectangle_corners, triangle_vertices};
use crate::state::Gesture;
use crate::stroke::StrokeStyle;
use crate::surface::{Composite, Outline, Surface};

use super::Tool;

#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleTool;

impl Tool for RectangleTool {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn render(&self, surface: &mut Surface, gesture: &mut Gesture, style: &StrokeStyle) {
        let corners = rectangle_corners(gesture.anchor(), gesture.current());
        surface.stroke(&Outline::closed(corners.to_vec()), style, Composite::SourceOver);
    }
}

/// Circle centered on the anchor, passing through the pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleTool;

impl Tool for CircleTool {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn render(&self, surface: &mut Surface, gesture: &mut Gesture, style: &StrokeStyle) {
        let outline = Outline::Circle {
            center: gesture.anchor(),
            radius: circle_radius(gesture.anchor(), gesture.current()),
        };
        surface.stroke(&outline, style, Composite::SourceOver);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleTool;

impl Tool for TriangleTool {
    fn name(&self) -> &'static str {
        "Triangle"
    }

    fn render(&self, surface: &mut Surface, gesture: &mut Gesture, style: &StrokeStyle) {
        let vertices = triangle_vertices(gesture.anchor(), gesture.current());
        surface.stroke(&Outline::closed(vertices.to_vec()), style, Composite::SourceOver);
    }
}
