use crate::editor::Editor;
use crate::file_handler::FileHandler;
use crate::input::InputHandler;
use crate::panels;
use crate::state::EditorSettings;
use crate::texture_manager::TextureManager;

/// The sketchpad application: an upload bar, a tools panel and the drawing canvas.
///
/// Only [`EditorSettings`] are persisted on shutdown; the image and the drawing are not.
pub struct SketchApp {
    editor: Editor,
    files: FileHandler,
    input: InputHandler,
    textures: TextureManager,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: EditorSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!(
            "Starting with tool {}, brush width {}",
            settings.tool.label(),
            settings.brush_width.get()
        );
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            editor: Editor::new(settings),
            files: FileHandler::new(),
            input: InputHandler::new(),
            textures: TextureManager::new(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn open_file_dialog(&mut self, ctx: &egui::Context) {
        self.files.open_dialog(ctx);
    }

    /// Texture for the current surface, re-uploaded only when it changed.
    pub fn surface_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        self.textures.texture_for(ctx, self.editor.surface())
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.editor.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(file) = self.files.poll(ctx) {
            self.editor.load_file(file);
        }

        panels::upload_panel(self, ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);

        self.files.preview_files_being_dropped(ctx);
    }
}
