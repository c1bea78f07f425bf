use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::stroke::{BrushWidth, CUSTOM_COLOR_DEFAULT};
use crate::tools::ToolKind;

/// User-facing settings persisted between runs.
///
/// Pixels and images are deliberately not part of this: only the tool, style and
/// filter choices survive a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorSettings {
    pub tool: ToolKind,
    pub brush_width: BrushWidth,
    /// Chosen stroke color; `None` until the user picks one, which draws black.
    pub color: Option<Color32>,
    /// Last value of the free color picker.
    pub custom_color: Color32,
    pub filter: Filter,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::Brush,
            brush_width: BrushWidth::default(),
            color: None,
            custom_color: CUSTOM_COLOR_DEFAULT,
            filter: Filter::Grayscale,
        }
    }
}

impl EditorSettings {
    /// Color strokes are drawn with.
    pub fn stroke_color(&self) -> Color32 {
        self.color.unwrap_or(Color32::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: EditorSettings = serde_json::from_str(r#"{ "brush_width": 12 }"#).unwrap();
        assert_eq!(settings.brush_width.get(), 12);
        assert_eq!(settings.tool, ToolKind::Brush);
        assert_eq!(settings.filter, Filter::Grayscale);
        assert_eq!(settings.stroke_color(), Color32::BLACK);
    }

    #[test]
    fn test_settings_survive_serialization() {
        let settings = EditorSettings {
            tool: ToolKind::Circle,
            brush_width: BrushWidth::new(21),
            color: Some(Color32::from_rgb(1, 2, 3)),
            custom_color: Color32::from_rgb(1, 2, 3),
            filter: Filter::None,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let restored: EditorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }
}
