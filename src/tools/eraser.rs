use crate::state::Gesture;
use crate::stroke::StrokeStyle;
use crate::surface::{Composite, Surface};

use super::Tool;

/// Freehand eraser. Follows the same path as the brush but clears pixels to
/// transparent instead of painting the stroke color.
#[derive(Debug, Clone, Copy, Default)]
pub struct EraserTool;

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        "Eraser"
    }

    fn render(&self, surface: &mut Surface, gesture: &mut Gesture, style: &StrokeStyle) {
        let trail = gesture.trail(style.width, surface.width(), surface.height());
        surface.composite(trail, style, Composite::DestinationOut);
    }
}
