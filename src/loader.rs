//! Turns a user-selected file into a bitmap and lays it out on the surface.

use std::sync::Arc;

use egui::vec2;
use image::RgbaImage;

use crate::error::{SketchError, SketchResult};
use crate::file_handler::PickedFile;
use crate::filter::Filter;
use crate::geometry::fit_centered;
use crate::surface::Surface;

/// A decoded image chosen by the user, together with the original file.
#[derive(Clone)]
pub struct SourceImage {
    name: String,
    mime: &'static str,
    /// Original file contents, kept for the upload form.
    bytes: Arc<[u8]>,
    bitmap: Arc<RgbaImage>,
}

impl std::fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceImage")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("bytes", &self.bytes.len())
            .field("size", &self.bitmap.dimensions())
            .finish()
    }
}

impl SourceImage {
    /// Decode the file contents with the `image` crate.
    pub fn decode(file: PickedFile) -> SketchResult<Self> {
        let format = image::guess_format(&file.bytes).map_err(SketchError::Decode)?;
        let decoded = image::load_from_memory_with_format(&file.bytes, format)
            .map_err(SketchError::Decode)?;
        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(SketchError::EmptyImage);
        }

        log::debug!(
            "Decoded {} ({:?}): {}x{}",
            file.name,
            format,
            decoded.width(),
            decoded.height()
        );

        Ok(Self {
            name: file.name,
            mime: format.to_mime_type(),
            bytes: file.bytes.into(),
            bitmap: Arc::new(decoded.to_rgba8()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bitmap(&self) -> &RgbaImage {
        &self.bitmap
    }

    /// Clear `surface` and draw this image scaled to fit and centered, through `filter`.
    pub fn render_into(&self, surface: &mut Surface, filter: Filter) {
        surface.clear();

        let (width, height) = self.bitmap.dimensions();
        let dest = fit_centered(vec2(width as f32, height as f32), surface.size());
        let filtered = filter.apply(&self.bitmap);
        surface.draw_image(&filtered, dest);

        log::debug!("Rendered {} into {:?} with filter {}", self.name, dest, filter.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_file(width: u32, height: u32, color: [u8; 4]) -> PickedFile {
        let image = RgbaImage::from_pixel(width, height, Rgba(color));
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        PickedFile {
            name: "photo.png".to_owned(),
            bytes,
        }
    }

    #[test]
    fn test_decode_png() {
        let source = SourceImage::decode(png_file(4, 2, [255, 0, 0, 255])).unwrap();
        assert_eq!(source.name(), "photo.png");
        assert_eq!(source.mime(), "image/png");
        assert_eq!(source.bitmap().dimensions(), (4, 2));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let file = PickedFile {
            name: "notes.txt".to_owned(),
            bytes: b"definitely not an image".to_vec(),
        };
        assert!(matches!(SourceImage::decode(file), Err(SketchError::Decode(_))));
    }

    #[test]
    fn test_render_centers_image() {
        let source = SourceImage::decode(png_file(10, 10, [255, 0, 0, 255])).unwrap();
        let mut surface = Surface::new(200, 100);
        source.render_into(&mut surface, Filter::None);

        // Square image in a wide surface: pillarboxed between x = 50 and x = 150.
        assert_eq!(surface.pixels().get_pixel(10, 50).0[3], 0);
        assert_eq!(surface.pixels().get_pixel(190, 50).0[3], 0);
        assert!(surface.pixels().get_pixel(100, 50).0[0] > 250);
    }

    #[test]
    fn test_render_applies_grayscale() {
        let source = SourceImage::decode(png_file(10, 10, [255, 0, 0, 255])).unwrap();
        let mut surface = Surface::new(100, 100);
        source.render_into(&mut surface, Filter::Grayscale);

        let [r, g, b, _] = surface.pixels().get_pixel(50, 50).0;
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}
