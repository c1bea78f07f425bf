use eframe::egui;

use crate::app::SketchApp;
use crate::components::{ColorSwatch, ToolButton};
use crate::stroke::{MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH, PaletteColor};
use crate::editor::Editor;
use crate::tools::ToolKind;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            let editor = app.editor_mut();

            ui.heading("Shapes:");
            ui.add_space(4.0);
            let (shapes, others): (Vec<_>, Vec<_>) =
                ToolKind::TOGGLES.into_iter().partition(|tool| tool.is_shape());
            for tool in shapes {
                tool_toggle(ui, editor, tool);
            }
            ui.add_space(4.0);
            for tool in others {
                tool_toggle(ui, editor, tool);
            }
            ui.label(format!("Active: {}", editor.tool().label()));

            ui.separator();
            ui.heading("Brush size:");
            let mut width = editor.brush_width().get();
            if ui
                .add(egui::Slider::new(&mut width, MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH))
                .changed()
            {
                editor.set_brush_width(width);
            }

            ui.separator();
            ui.heading("Color:");
            ui.horizontal(|ui| {
                let current = editor.settings().color;
                for swatch in PaletteColor::ALL {
                    let selected = current == Some(swatch.color());
                    let response = ColorSwatch::new(swatch.color(), selected)
                        .show(ui)
                        .on_hover_text(swatch.name());
                    if response.clicked() {
                        editor.select_palette(swatch);
                    }
                }

                let mut custom = editor.settings().custom_color;
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut custom,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    editor.select_custom_color(custom);
                }
            });

            ui.separator();
            ui.vertical_centered_justified(|ui| {
                if ui.button("Clear All").clicked() {
                    editor.clear_all();
                }
                if ui.button("Save As Image").clicked() {
                    editor.save_as_image();
                }
            });

            ui.add_space(6.0);
            ui.colored_label(
                egui::Color32::from_rgb(239, 68, 68),
                "Note: black and white colour make the background grayscale, \
                 any other colour makes it colourful. Changing it redraws the image.",
            );
        });
}

fn tool_toggle(ui: &mut egui::Ui, editor: &mut Editor, tool: ToolKind) {
    let selected = editor.tool() == tool;
    if ToolButton::new(tool, selected).show(ui).clicked() {
        editor.toggle_tool(tool);
    }
    ui.add_space(2.0);
}
