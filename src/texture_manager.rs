use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::surface::Surface;

/// Keeps an egui texture in sync with the drawing surface.
///
/// The surface bumps its version on every change; the texture is re-uploaded only
/// when the version differs from the one last uploaded.
#[derive(Default)]
pub struct TextureManager {
    handle: Option<TextureHandle>,
    uploaded_version: Option<u64>,
    uploads: u64,
}

impl std::fmt::Debug for TextureManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureManager")
            .field("has_texture", &self.handle.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .field("uploads", &self.uploads)
            .finish()
    }
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture showing the current surface contents, uploading if stale.
    pub fn texture_for(&mut self, ctx: &Context, surface: &Surface) -> TextureId {
        let version = surface.version();
        if let Some(handle) = &self.handle {
            if self.uploaded_version == Some(version) {
                return handle.id();
            }
        }

        let image = surface.to_color_image();
        let id = match &mut self.handle {
            Some(handle) => {
                handle.set(image, TextureOptions::LINEAR);
                handle.id()
            }
            None => {
                let handle = ctx.load_texture("drawing_surface", image, TextureOptions::LINEAR);
                let id = handle.id();
                self.handle = Some(handle);
                id
            }
        };

        self.uploaded_version = Some(version);
        self.uploads += 1;
        log::trace!("Uploaded surface texture v{}", version);
        id
    }

    /// Number of uploads so far.
    pub fn upload_count(&self) -> u64 {
        self.uploads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{BrushWidth, StrokeStyle};
    use crate::surface::{Composite, Outline};
    use egui::{Color32, pos2};

    #[test]
    fn test_unchanged_surface_is_not_reuploaded() {
        let ctx = Context::default();
        let surface = Surface::new(16, 16);
        let mut manager = TextureManager::new();

        let first = manager.texture_for(&ctx, &surface);
        let second = manager.texture_for(&ctx, &surface);

        assert_eq!(first, second);
        assert_eq!(manager.upload_count(), 1);
    }

    #[test]
    fn test_modified_surface_is_reuploaded_in_place() {
        let ctx = Context::default();
        let mut surface = Surface::new(16, 16);
        let mut manager = TextureManager::new();

        let first = manager.texture_for(&ctx, &surface);
        surface.stroke(
            &Outline::open(vec![pos2(0.0, 0.0), pos2(16.0, 16.0)]),
            &StrokeStyle::new(Color32::BLACK, BrushWidth::new(2)),
            Composite::SourceOver,
        );
        let second = manager.texture_for(&ctx, &surface);

        assert_eq!(first, second);
        assert_eq!(manager.upload_count(), 2);
    }
}
