use egui::{Color32, Pos2};

use crate::error::SketchResult;
use crate::export;
use crate::file_handler::PickedFile;
use crate::filter::Filter;
use crate::input::InputEvent;
use crate::loader::SourceImage;
use crate::state::{EditorSettings, EditorState, Gesture};
use crate::stroke::{BrushWidth, PaletteColor, StrokeStyle};
use crate::surface::Surface;
use crate::tools::{Tool, ToolKind, ToolType};
use crate::upload::{self, FormPayload};
use crate::util::time;

/// All state behind the editor UI: the surface, the current gesture, the selected
/// tool and style, and the background image.
///
/// Every UI event goes through one of these methods. Failures are logged and
/// otherwise ignored.
#[derive(Debug)]
pub struct Editor {
    surface: Surface,
    state: EditorState,
    settings: EditorSettings,
    source: Option<SourceImage>,
    uploading: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl Editor {
    pub fn new(settings: EditorSettings) -> Self {
        Self::with_surface(Surface::default(), settings)
    }

    pub fn with_surface(surface: Surface, settings: EditorSettings) -> Self {
        Self {
            surface,
            state: EditorState::Idle,
            settings,
            source: None,
            uploading: false,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    /// The canvas is only shown while an image is loaded.
    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn tool(&self) -> ToolKind {
        self.settings.tool
    }

    pub fn style(&self) -> StrokeStyle {
        StrokeStyle::new(self.settings.stroke_color(), self.settings.brush_width)
    }

    // Tool and style controls

    /// Click on a tool button: selects it, or returns to the brush if it was already active.
    pub fn toggle_tool(&mut self, clicked: ToolKind) {
        let tool = self.settings.tool.toggled(clicked);
        log::info!("Tool selected: {}", tool.label());
        self.settings.tool = tool;
    }

    pub fn brush_width(&self) -> BrushWidth {
        self.settings.brush_width
    }

    /// Set the stroke width; out-of-range values are clamped.
    pub fn set_brush_width(&mut self, width: u32) {
        self.settings.brush_width = BrushWidth::new(width);
    }

    /// Pick one of the fixed swatches. Also switches the background filter.
    pub fn select_palette(&mut self, swatch: PaletteColor) {
        self.settings.color = Some(swatch.color());
        self.set_filter(swatch.filter());
    }

    /// Pick a color from the free color picker. Always restores the unfiltered background.
    pub fn select_custom_color(&mut self, color: Color32) {
        self.settings.custom_color = color;
        self.settings.color = Some(color);
        self.set_filter(Filter::None);
    }

    pub fn filter(&self) -> Filter {
        self.settings.filter
    }

    /// Change the background filter, redrawing the image if it changed.
    ///
    /// The redraw starts from a blank surface, so anything drawn so far is lost.
    pub fn set_filter(&mut self, filter: Filter) {
        if self.settings.filter == filter {
            return;
        }
        log::debug!("Filter {} -> {}", self.settings.filter.label(), filter.label());
        self.settings.filter = filter;
        self.redraw_source();
    }

    // Image loading

    /// Decode a picked or dropped file and make it the background image.
    pub fn load_file(&mut self, file: PickedFile) {
        let name = file.name.clone();
        match SourceImage::decode(file) {
            Ok(source) => self.set_source(source),
            Err(err) => log::error!("Could not load {}: {}", name, err),
        }
    }

    pub fn set_source(&mut self, source: SourceImage) {
        log::info!("Loaded image {}", source.name());
        self.source = Some(source);
        self.redraw_source();
    }

    fn redraw_source(&mut self) {
        // Any preview snapshot refers to the old pixels.
        self.state = EditorState::Idle;
        match &self.source {
            Some(source) => source.render_into(&mut self.surface, self.settings.filter),
            None => self.surface.clear(),
        }
    }

    /// Drop the background image and blank the surface.
    pub fn clear_all(&mut self) {
        log::info!("Clearing surface");
        self.source = None;
        self.state = EditorState::Idle;
        self.surface.clear();
    }

    // Gestures

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos } => self.pointer_down(pos),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::PointerUp { pos } => self.pointer_up(pos),
        }
    }

    /// Start a gesture: remember the anchor and snapshot the surface. Nothing is drawn yet.
    pub fn pointer_down(&mut self, pos: Pos2) {
        let gesture = Gesture::new(pos, self.surface.snapshot());
        self.state = EditorState::Drawing { gesture };
    }

    /// Restore the snapshot, then render the active tool from the anchor to `pos`.
    pub fn pointer_move(&mut self, pos: Pos2) {
        let Some(gesture) = self.state.gesture_mut() else {
            return;
        };
        gesture.push(pos);

        let style = StrokeStyle::new(self.settings.stroke_color(), self.settings.brush_width);
        self.surface.restore(gesture.snapshot());
        ToolType::from(self.settings.tool).render(&mut self.surface, gesture, &style);
    }

    /// End the gesture. The last preview stays on the surface.
    pub fn pointer_up(&mut self, pos: Pos2) {
        let moved_since = self
            .state
            .gesture()
            .is_some_and(|gesture| gesture.current() != pos);
        if moved_since {
            self.pointer_move(pos);
        }
        if let Some(gesture) = self.state.finish() {
            log::debug!(
                "{} gesture finished with {} points",
                self.settings.tool.label(),
                gesture.path().len()
            );
        }
    }

    // Export and upload

    /// Encode the surface as JPEG, returning the timestamped file name and the bytes.
    pub fn export_jpeg(&self) -> SketchResult<(String, Vec<u8>)> {
        let bytes = export::encode_jpeg(&self.surface)?;
        Ok((export::export_file_name(time::timestamp_millis()), bytes))
    }

    /// "Save As Image": encode and hand the file to the platform.
    pub fn save_as_image(&self) {
        let result = self
            .export_jpeg()
            .and_then(|(name, bytes)| export::deliver(&name, &bytes));
        if let Err(err) = result {
            log::error!("Save failed: {}", err);
        }
    }

    /// Build the upload form for the current image and log it. Nothing is sent.
    pub fn upload(&mut self) -> Option<FormPayload> {
        self.uploading = true;
        let payload = match upload::build_upload(self.source.as_ref()) {
            Ok(payload) => {
                log::info!(
                    "Upload form ({}): {:?}, {} bytes",
                    payload.content_type(),
                    payload.parts(),
                    payload.body().len()
                );
                Some(payload)
            }
            Err(err) => {
                log::warn!("Upload skipped: {}", err);
                None
            }
        };
        self.uploading = false;
        payload
    }
}
