use serde::{Deserialize, Serialize};

use crate::state::Gesture;
use crate::stroke::StrokeStyle;
use crate::surface::Surface;

/// Tool trait defines the interface for all drawing tools.
///
/// Tools are stateless renderers: the gesture carries the anchor, the pointer path
/// and the snapshot, and the editor restores the snapshot before calling `render`.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Draw this tool's stroke for `gesture` onto a freshly restored surface.
    ///
    /// The gesture is mutable so freehand tools can extend its cached coverage.
    fn render(&self, surface: &mut Surface, gesture: &mut Gesture, style: &StrokeStyle);
}

mod brush;
pub use brush::BrushTool;

mod eraser;
pub use eraser::EraserTool;

mod shapes;
pub use shapes::{CircleTool, RectangleTool, TriangleTool};

/// Which tool is selected. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
    Rectangle,
    Circle,
    Triangle,
}

impl ToolKind {
    /// Tools with a toggle button in the tools panel.
    pub const TOGGLES: [ToolKind; 4] = [
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Triangle,
        ToolKind::Eraser,
    ];

    /// Selection after clicking the button for `clicked`: clicking the active tool
    /// falls back to the brush.
    pub fn toggled(self, clicked: ToolKind) -> ToolKind {
        if self == clicked {
            ToolKind::Brush
        } else {
            clicked
        }
    }

    pub fn is_shape(self) -> bool {
        matches!(self, ToolKind::Rectangle | ToolKind::Circle | ToolKind::Triangle)
    }

    pub fn label(self) -> &'static str {
        ToolType::from(self).name()
    }
}

/// Enum representing all available tool types, avoiding `Box<dyn Tool>`.
#[derive(Debug, Clone)]
pub enum ToolType {
    Brush(BrushTool),
    Eraser(EraserTool),
    Rectangle(RectangleTool),
    Circle(CircleTool),
    Triangle(TriangleTool),
}

impl From<ToolKind> for ToolType {
    fn from(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Brush => ToolType::Brush(BrushTool),
            ToolKind::Eraser => ToolType::Eraser(EraserTool),
            ToolKind::Rectangle => ToolType::Rectangle(RectangleTool),
            ToolKind::Circle => ToolType::Circle(CircleTool),
            ToolKind::Triangle => ToolType::Triangle(TriangleTool),
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Brush(tool) => tool.name(),
            Self::Eraser(tool) => tool.name(),
            Self::Rectangle(tool) => tool.name(),
            Self::Circle(tool) => tool.name(),
            Self::Triangle(tool) => tool.name(),
        }
    }

    fn render(&self, surface: &mut Surface, gesture: &mut Gesture, style: &StrokeStyle) {
        match self {
            Self::Brush(tool) => tool.render(surface, gesture, style),
            Self::Eraser(tool) => tool.render(surface, gesture, style),
            Self::Rectangle(tool) => tool.render(surface, gesture, style),
            Self::Circle(tool) => tool.render(surface, gesture, style),
            Self::Triangle(tool) => tool.render(surface, gesture, style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selecting_active_shape_twice_returns_to_brush() {
        for shape in [ToolKind::Rectangle, ToolKind::Circle, ToolKind::Triangle] {
            let selected = ToolKind::Brush.toggled(shape);
            assert_eq!(selected, shape);
            assert_eq!(selected.toggled(shape), ToolKind::Brush);
        }
    }

    #[test]
    fn test_switching_between_shapes() {
        assert_eq!(ToolKind::Circle.toggled(ToolKind::Triangle), ToolKind::Triangle);
    }

    #[test]
    fn test_shapes_and_eraser_are_grouped_apart() {
        let shapes: Vec<_> = ToolKind::TOGGLES.into_iter().filter(|t| t.is_shape()).collect();
        assert_eq!(shapes, [ToolKind::Rectangle, ToolKind::Circle, ToolKind::Triangle]);
        assert!(!ToolKind::Eraser.is_shape());
        assert!(!ToolKind::Brush.is_shape());
    }

    #[test]
    fn test_labels_come_from_tools() {
        assert_eq!(ToolKind::Brush.label(), "Brush");
        assert_eq!(ToolKind::Eraser.label(), "Eraser");
        assert_eq!(ToolKind::Triangle.label(), "Triangle");
    }
}
