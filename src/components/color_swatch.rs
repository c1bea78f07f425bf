use eframe::egui;

/// Small clickable color square with a gray ring.
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(20.0, 20.0), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let ring = if self.selected {
                egui::Stroke::new(3.0, egui::Color32::from_rgb(33, 150, 243))
            } else {
                egui::Stroke::new(2.0, egui::Color32::from_gray(156))
            };
            ui.painter().rect_filled(rect, 3.0, self.color);
            ui.painter().rect_stroke(rect.expand(1.0), 3.0, ring);
        }

        response
    }
}
