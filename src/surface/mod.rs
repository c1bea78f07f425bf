//! The raster drawing surface.
//!
//! The surface is the only retained state of the drawing: every tool flattens its
//! output straight into the pixel buffer. Rubber-band previews work by taking a
//! [`Snapshot`] when a gesture starts and restoring it before each preview frame.

mod raster;

pub use raster::{Composite, CoverageMask, Outline};

use egui::{Rect, Vec2, vec2};
use image::{RgbaImage, imageops};

use crate::stroke::StrokeStyle;

pub const CANVAS_WIDTH: u32 = 700;
pub const CANVAS_HEIGHT: u32 = 600;

/// Saved copy of the surface pixels.
#[derive(Clone, PartialEq)]
pub struct Snapshot {
    pixels: RgbaImage,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .finish()
    }
}

/// Fixed-size RGBA raster, mutated in place.
#[derive(Clone)]
pub struct Surface {
    pixels: RgbaImage,
    /// Bumped on every mutation so the texture cache knows when to re-upload.
    version: u64,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .field("version", &self.version)
            .finish()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl Surface {
    /// Create a blank, fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            version: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width() as f32, self.height() as f32)
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// True when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixels.pixels().all(|p| p.0 == [0, 0, 0, 0])
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            pixel.0 = [0, 0, 0, 0];
        }
        self.touch();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pixels: self.pixels.clone(),
        }
    }

    /// Put the pixels of `snapshot` back, discarding anything drawn since.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.pixels.dimensions() == self.pixels.dimensions() {
            self.pixels.copy_from_slice(snapshot.pixels.as_raw());
        } else {
            log::warn!(
                "Snapshot size {:?} does not match surface {:?}, replacing buffer",
                snapshot.pixels.dimensions(),
                self.pixels.dimensions()
            );
            self.pixels = snapshot.pixels.clone();
        }
        self.touch();
    }

    /// Stroke an outline with the given style and compositing mode.
    pub fn stroke(&mut self, outline: &Outline, style: &StrokeStyle, composite: Composite) {
        if raster::stroke(&mut self.pixels, outline, style, composite) {
            self.touch();
        }
    }

    /// Composite a prepared coverage mask in the style's color.
    pub fn composite(&mut self, mask: &CoverageMask, style: &StrokeStyle, composite: Composite) {
        if mask.composite(&mut self.pixels, style.color, composite) {
            self.touch();
        }
    }

    /// Scale `image` into `dest` and paint it over the surface.
    pub fn draw_image(&mut self, image: &RgbaImage, dest: Rect) {
        if !dest.is_positive() || !dest.is_finite() {
            return;
        }

        let width = dest.width().round().max(1.0) as u32;
        let height = dest.height().round().max(1.0) as u32;
        let scaled = if image.dimensions() == (width, height) {
            image.clone()
        } else {
            imageops::resize(image, width, height, imageops::FilterType::Triangle)
        };

        imageops::overlay(
            &mut self.pixels,
            &scaled,
            dest.min.x.round() as i64,
            dest.min.y.round() as i64,
        );
        self.touch();
    }

    /// Copy of the pixels in the form egui uploads as a texture.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::BrushWidth;
    use egui::{Color32, pos2};
    use image::Rgba;

    fn red_line(surface: &mut Surface) {
        let style = StrokeStyle::new(Color32::RED, BrushWidth::new(6));
        surface.stroke(
            &Outline::open(vec![pos2(10.0, 10.0), pos2(90.0, 90.0)]),
            &style,
            Composite::SourceOver,
        );
    }

    #[test]
    fn test_new_surface_is_blank() {
        let surface = Surface::default();
        assert_eq!(surface.width(), CANVAS_WIDTH);
        assert_eq!(surface.height(), CANVAS_HEIGHT);
        assert!(surface.is_blank());
    }

    #[test]
    fn test_restore_discards_later_drawing() {
        let mut surface = Surface::new(100, 100);
        let snapshot = surface.snapshot();
        red_line(&mut surface);
        assert!(!surface.is_blank());

        surface.restore(&snapshot);
        assert!(surface.is_blank());
    }

    #[test]
    fn test_version_advances_on_mutation() {
        let mut surface = Surface::new(100, 100);
        let v0 = surface.version();
        red_line(&mut surface);
        let v1 = surface.version();
        assert!(v1 > v0);
        surface.clear();
        assert!(surface.version() > v1);
    }

    #[test]
    fn test_clear_after_drawing() {
        let mut surface = Surface::new(100, 100);
        red_line(&mut surface);
        surface.clear();
        assert!(surface.is_blank());
    }

    #[test]
    fn test_draw_image_scales_into_rect() {
        let mut surface = Surface::new(100, 100);
        let image = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 255, 255]));
        surface.draw_image(&image, Rect::from_min_size(pos2(20.0, 30.0), vec2(50.0, 40.0)));

        let [r, g, b, a] = surface.pixels().get_pixel(45, 50).0;
        assert_eq!((r, g), (0, 0));
        assert!(b > 250 && a > 250);
        assert_eq!(surface.pixels().get_pixel(10, 10).0, [0, 0, 0, 0]);
        assert_eq!(surface.pixels().get_pixel(80, 50).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_composite_mask_matches_stroke() {
        let style = StrokeStyle::new(Color32::RED, BrushWidth::new(6));
        let outline = Outline::open(vec![pos2(10.0, 10.0), pos2(90.0, 90.0)]);
        let mut mask = CoverageMask::new(100, 100);
        mask.add_outline(&outline, style.width / 2.0);

        let mut composited = Surface::new(100, 100);
        composited.composite(&mask, &style, Composite::SourceOver);
        let mut stroked = Surface::new(100, 100);
        red_line(&mut stroked);
        assert_eq!(composited.pixels(), stroked.pixels());
    }

    #[test]
    fn test_color_image_matches_size() {
        let surface = Surface::new(12, 7);
        let image = surface.to_color_image();
        assert_eq!(image.size, [12, 7]);
    }
}
