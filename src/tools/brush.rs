use crate::state::Gesture;
use crate::stroke::StrokeStyle;
use crate::surface::{Composite, Surface};

use super::Tool;

/// Freehand brush: strokes the whole pointer path of the gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrushTool;

impl Tool for BrushTool {
    fn name(&self) -> &'static str {
        "Brush"
    }

    fn render(&self, surface: &mut Surface, gesture: &mut Gesture, style: &StrokeStyle) {
        let trail = gesture.trail(style.width, surface.width(), surface.height());
        surface.composite(trail, style, Composite::SourceOver);
    }
}
