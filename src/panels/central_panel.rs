use eframe::egui;

use crate::app::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if !app.editor().has_image() {
            ui.centered_and_justified(|ui| {
                ui.label("Select or drop an image to start drawing");
            });
            return;
        }

        let surface_size = app.editor().surface().size();
        // Shrink to fit the panel, never enlarge.
        let available = ui.available_size();
        let scale = (available.x / surface_size.x)
            .min(available.y / surface_size.y)
            .min(1.0)
            .max(0.1);
        let display_size = surface_size * scale;

        ui.vertical_centered(|ui| {
            let (response, painter) = ui.allocate_painter(display_size, egui::Sense::drag());
            let canvas_rect = response.rect;

            for event in app.input_mut().process(&response, canvas_rect, surface_size) {
                app.editor_mut().handle_input(event);
            }

            // White backing, like the page behind a transparent canvas.
            painter.rect_filled(canvas_rect, 0.0, egui::Color32::WHITE);
            let texture = app.surface_texture(ctx);
            painter.image(
                texture,
                canvas_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            if app.editor().state().is_drawing() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
    });
}
