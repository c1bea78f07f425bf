use eframe::egui;

use crate::tools::ToolKind;

/// Toggle button for one tool in the "Shapes" list.
pub struct ToolButton {
    pub tool: ToolKind,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: ToolKind, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(ui.available_width().min(140.0), 26.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(30, 64, 175) // Dark blue when selected
            } else if response.hovered() {
                egui::Color32::from_rgb(165, 200, 250)
            } else {
                egui::Color32::from_rgb(191, 219, 254)
            };
            let text_color = if self.selected {
                egui::Color32::from_rgb(219, 234, 254)
            } else {
                egui::Color32::from_gray(55)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.label(),
                egui::FontId::proportional(15.0),
                text_color,
            );
        }

        response
    }
}
