use eframe::egui;

use crate::app::SketchApp;

/// Formats the `image` crate can decode.
const FORMATS_HINT: &str = "Upload Image (jpg, png, gif, webp, bmp; svg is not supported)";

pub fn upload_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("upload_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.label(FORMATS_HINT);
        ui.horizontal(|ui| {
            let label = app
                .editor()
                .source()
                .map(|source| source.name().to_owned())
                .unwrap_or_else(|| "Select Image".to_owned());
            if ui.button(format!("🖼 {label}")).clicked() {
                app.open_file_dialog(ctx);
            }

            let editor = app.editor_mut();
            let caption = if editor.is_uploading() { "Uploading.." } else { "Upload" };
            if ui
                .add_enabled(editor.has_image(), egui::Button::new(caption))
                .clicked()
            {
                editor.upload();
            }
        });
        ui.add_space(4.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_handler::IMAGE_EXTENSIONS;

    #[test]
    fn test_hint_lists_only_pickable_formats() {
        for ext in ["jpg", "png", "gif", "webp", "bmp"] {
            assert!(FORMATS_HINT.contains(ext));
            assert!(IMAGE_EXTENSIONS.contains(&ext));
        }
        assert!(!IMAGE_EXTENSIONS.contains(&"svg"));
        assert!(FORMATS_HINT.contains("svg is not supported"));
    }
}
